/// Failures at the analyzer boundary
#[derive(Debug, thiserror::Error)]
pub enum AnalyzeError {
    #[error("Dictionary not found: {0}")]
    DictionaryNotFound(String),

    #[error("Invalid dictionary: {0}")]
    Dictionary(String),

    #[error("Analysis failed: {0}")]
    Analysis(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A feature string that does not carry the requested field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeatureError {
    #[error("missing field {index} (feature has {found} fields)")]
    MissingField { index: usize, found: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum SplitError {
    #[error("Analyzer error: {0}")]
    Analyzer(#[from] AnalyzeError),

    #[error("Malformed feature for token #{position} {surface:?} ({feature:?}): {source}")]
    MalformedFeature {
        position: usize,
        surface: String,
        feature: String,
        #[source]
        source: FeatureError,
    },
}
