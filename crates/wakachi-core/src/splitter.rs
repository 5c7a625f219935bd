use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::analyzer::{AnalysisSession, Analyzer};
use crate::error::SplitError;
use crate::morpheme::{FeatureLayout, Morpheme};
use crate::pos::PosFilter;

/// What to do with an allowed token whose feature has no canonical form field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Fail the whole call with [`SplitError::MalformedFeature`]
    #[default]
    Abort,
    /// Drop the token, log a warning and keep going
    Skip,
}

impl FromStr for MalformedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "abort" => Ok(MalformedPolicy::Abort),
            "skip" => Ok(MalformedPolicy::Skip),
            other => Err(format!("unknown malformed-feature policy: {other:?}")),
        }
    }
}

/// Splits text into the canonical forms of its content words.
///
/// Every call acquires its own analyzer session, primes it with an empty
/// analysis, walks the morphemes of `text` once in analyzer order, and keeps
/// the canonical form of each morpheme whose category is allowed. The session
/// is dropped on every return path.
pub struct Splitter<A> {
    analyzer: A,
    filter: PosFilter,
    layout: FeatureLayout,
    on_malformed: MalformedPolicy,
}

impl<A: Analyzer> Splitter<A> {
    pub fn new(analyzer: A) -> Self {
        Self {
            analyzer,
            filter: PosFilter::content_words(),
            layout: FeatureLayout::IPADIC,
            on_malformed: MalformedPolicy::Abort,
        }
    }

    pub fn with_filter(mut self, filter: PosFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_layout(mut self, layout: FeatureLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_malformed_policy(mut self, policy: MalformedPolicy) -> Self {
        self.on_malformed = policy;
        self
    }

    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    pub fn filter(&self) -> &PosFilter {
        &self.filter
    }

    /// Canonical forms of the allowed morphemes, in source order
    pub fn split(&self, text: &str) -> Result<Vec<String>, SplitError> {
        let mut forms = Vec::new();
        self.walk(text, |_, base_form| forms.push(base_form.to_string()))?;
        Ok(forms)
    }

    /// Allowed morphemes themselves, in source order
    pub fn split_morphemes(&self, text: &str) -> Result<Vec<Morpheme>, SplitError> {
        let mut kept = Vec::new();
        self.walk(text, |morpheme, _| kept.push(morpheme.clone()))?;
        Ok(kept)
    }

    fn walk<F>(&self, text: &str, mut keep: F) -> Result<(), SplitError>
    where
        F: FnMut(&Morpheme, &str),
    {
        let mut session = self.analyzer.session()?;

        // Some analyzer builds fail on their first real input unless primed
        session.analyze("")?.for_each(drop);

        let mut seen = 0;
        let mut kept = 0;

        for (position, morpheme) in session.analyze(text)?.enumerate() {
            seen += 1;

            // A feature without the category field can never match
            let Ok(category) = morpheme.category(&self.layout) else {
                continue;
            };
            if !self.filter.allows(category) {
                continue;
            }

            match morpheme.base_form(&self.layout) {
                Ok(base_form) => {
                    keep(&morpheme, base_form);
                    kept += 1;
                }
                Err(source) => match self.on_malformed {
                    MalformedPolicy::Abort => {
                        return Err(SplitError::MalformedFeature {
                            position,
                            surface: morpheme.surface.clone(),
                            feature: morpheme.feature.clone(),
                            source,
                        });
                    }
                    MalformedPolicy::Skip => {
                        tracing::warn!(
                            position,
                            surface = %morpheme.surface,
                            feature = %morpheme.feature,
                            "Skipping token with malformed feature: {}",
                            source
                        );
                    }
                },
            }
        }

        tracing::debug!(tokens = seen, kept, "Split {} bytes of text", text.len());

        Ok(())
    }
}
