use crate::error::AnalyzeError;
use crate::morpheme::Morpheme;

/// A morphological analysis engine.
///
/// Implementations hold whatever is immutable and shareable (the compiled
/// dictionary) and hand out a [`AnalysisSession`] per caller for the mutable
/// parse state, so one analyzer can serve many threads.
pub trait Analyzer: Send + Sync {
    type Session<'a>: AnalysisSession
    where
        Self: 'a;

    /// Acquire a fresh session. Dropping it releases the parse state.
    fn session(&self) -> Result<Self::Session<'_>, AnalyzeError>;
}

/// Mutable parse state for a single caller
pub trait AnalysisSession {
    /// Segment `text` and yield its morphemes in the order the engine
    /// produces them
    fn analyze(&mut self, text: &str) -> Result<impl Iterator<Item = Morpheme>, AnalyzeError>;
}
