use serde::{Deserialize, Serialize};

use crate::error::FeatureError;

/// Where the category and the canonical form live in a feature string.
///
/// The analyzer's dictionary decides the layout of its comma-delimited
/// features, so this is a contract with the dictionary rather than with the
/// analyzer code. IPADIC (MeCab's default dictionary) reads
///
/// ```text
/// 品詞,品詞細分類1,品詞細分類2,品詞細分類3,活用型,活用形,原形,読み,発音
/// ```
///
/// which is [`FeatureLayout::IPADIC`]. A dictionary with another layout
/// (UniDic, for instance) will either fail with malformed-feature errors or
/// silently pick the wrong field unless its layout is described here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureLayout {
    pub category: usize,
    pub base_form: usize,
}

impl FeatureLayout {
    pub const IPADIC: FeatureLayout = FeatureLayout {
        category: 0,
        base_form: 6,
    };
}

impl Default for FeatureLayout {
    fn default() -> Self {
        Self::IPADIC
    }
}

/// One analyzed token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Morpheme {
    /// Text as it appears in the input
    pub surface: String,
    /// Raw comma-separated feature string from the dictionary
    pub feature: String,
}

impl Morpheme {
    pub fn new(surface: impl Into<String>, feature: impl Into<String>) -> Self {
        Self {
            surface: surface.into(),
            feature: feature.into(),
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.feature.split(',')
    }

    pub fn field(&self, index: usize) -> Result<&str, FeatureError> {
        self.fields()
            .nth(index)
            .ok_or_else(|| FeatureError::MissingField {
                index,
                found: self.fields().count(),
            })
    }

    /// Part-of-speech category
    pub fn category(&self, layout: &FeatureLayout) -> Result<&str, FeatureError> {
        self.field(layout.category)
    }

    /// Canonical (dictionary) form
    pub fn base_form(&self, layout: &FeatureLayout) -> Result<&str, FeatureError> {
        self.field(layout.base_form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipadic_fields() {
        let m = Morpheme::new("走っ", "動詞,自立,*,*,五段・ラ行,連用タ接続,走る,ハシッ,ハシッ");
        let layout = FeatureLayout::IPADIC;

        assert_eq!(m.category(&layout), Ok("動詞"));
        assert_eq!(m.base_form(&layout), Ok("走る"));
    }

    #[test]
    fn test_short_feature_is_an_error() {
        let m = Morpheme::new("猫", "名詞,一般,*");

        assert_eq!(m.category(&FeatureLayout::IPADIC), Ok("名詞"));
        assert_eq!(
            m.base_form(&FeatureLayout::IPADIC),
            Err(FeatureError::MissingField { index: 6, found: 3 })
        );
    }

    #[test]
    fn test_empty_fields_are_kept() {
        // Unknown words in some dictionaries leave trailing fields empty
        let m = Morpheme::new("ｘ", "名詞,,,,,,");

        assert_eq!(m.fields().count(), 7);
        assert_eq!(m.base_form(&FeatureLayout::IPADIC), Ok(""));
    }
}
