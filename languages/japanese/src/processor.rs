use wakachi_config::splitter::SplitterConfig;
use wakachi_core::analyzer::Analyzer;
use wakachi_core::error::{AnalyzeError, SplitError};
use wakachi_core::language::LanguageProcessor;
use wakachi_core::morpheme::Morpheme;
use wakachi_core::preprocess::{DefaultPreprocessor, IdentityPreprocessor, Preprocessor};
use wakachi_core::splitter::Splitter;

use crate::analyzer::VibratoAnalyzer;

/// Japanese language processor
pub struct JapaneseProcessor<A = VibratoAnalyzer> {
    splitter: Splitter<A>,
    preprocessor: Box<dyn Preprocessor>,
}

impl JapaneseProcessor<VibratoAnalyzer> {
    /// Load the dictionary named in `config` and build the splitter around it
    pub fn from_config(config: &SplitterConfig) -> Result<Self, AnalyzeError> {
        let analyzer = VibratoAnalyzer::from_config(config)?;
        let splitter = Splitter::new(analyzer)
            .with_filter(config.pos_filter())
            .with_layout(config.layout())
            .with_malformed_policy(config.on_malformed);

        Ok(Self::new(splitter, config.normalize))
    }
}

impl<A: Analyzer> JapaneseProcessor<A> {
    pub fn new(splitter: Splitter<A>, normalize: bool) -> Self {
        let preprocessor: Box<dyn Preprocessor> = if normalize {
            Box::new(DefaultPreprocessor)
        } else {
            Box::new(IdentityPreprocessor)
        };

        Self {
            splitter,
            preprocessor,
        }
    }

    pub fn splitter(&self) -> &Splitter<A> {
        &self.splitter
    }

    /// Kept morphemes with their surface and raw feature
    pub fn split_morphemes(&self, text: &str) -> Result<Vec<Morpheme>, SplitError> {
        self.splitter.split_morphemes(&self.normalize(text))
    }
}

impl<A: Analyzer> LanguageProcessor for JapaneseProcessor<A> {
    fn language_code(&self) -> &str {
        "ja"
    }

    fn normalize(&self, text: &str) -> String {
        self.preprocessor.process(text)
    }

    fn split(&self, text: &str) -> Result<Vec<String>, SplitError> {
        self.splitter.split(&self.normalize(text))
    }
}
