use crate::error::SplitError;

/// Text processing interface for language implementations
pub trait LanguageProcessor: Send + Sync {
    /// Language identifier (ISO 639-1 code: "ja", "zh", "ko", etc.)
    fn language_code(&self) -> &str;

    /// Normalize text before analysis (Unicode normalization, whitespace, etc.)
    fn normalize(&self, text: &str) -> String;

    /// Canonical forms of the content words in `text`
    fn split(&self, text: &str) -> Result<Vec<String>, SplitError>;
}
