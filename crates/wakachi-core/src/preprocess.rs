use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor: Send + Sync {
    // Default JP preprocessor
    fn process(&self, text: &str) -> String {
        let mut text = text.trim().to_string();

        if text.is_empty() {
            return text;
        }

        // Unicode normalization (NFKC)
        text = text.nfkc().collect();

        // Line breaks split words for the analyzer
        text = text.replace(['\n', '\r'], "").trim().to_string();

        text
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Hands text to the analyzer untouched
pub struct IdentityPreprocessor;
impl Preprocessor for IdentityPreprocessor {
    fn process(&self, text: &str) -> String {
        text.to_string()
    }
}
