use std::env;

use serde::{Deserialize, Serialize};
use wakachi_core::morpheme::FeatureLayout;
use wakachi_core::pos::{CONTENT_WORDS, PosFilter};
use wakachi_core::splitter::MalformedPolicy;

fn default_dictionary_path() -> String {
    "ipadic-mecab-2_7_0/system.dic.zst".to_string()
}

fn default_allowed_pos() -> Vec<String> {
    CONTENT_WORDS.iter().map(|s| s.to_string()).collect()
}

fn default_category_field() -> usize {
    FeatureLayout::IPADIC.category
}

fn default_base_form_field() -> usize {
    FeatureLayout::IPADIC.base_form
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SplitterConfig {
    /// Compiled vibrato dictionary, optionally zstd-compressed (`.zst`)
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: String,
    /// Part-of-speech categories whose tokens are kept
    #[serde(default = "default_allowed_pos")]
    pub allowed_pos: Vec<String>,
    /// Feature field holding the category
    #[serde(default = "default_category_field")]
    pub category_field: usize,
    /// Feature field holding the canonical form
    #[serde(default = "default_base_form_field")]
    pub base_form_field: usize,
    #[serde(default)]
    pub on_malformed: MalformedPolicy,
    /// NFKC-normalize text before analysis
    #[serde(default)]
    pub normalize: bool,
    /// Treat spaces the way MeCab does
    #[serde(default)]
    pub ignore_space: bool,
    /// Longest run of same-type unknown characters grouped into one token
    #[serde(default)]
    pub max_grouping_len: Option<usize>,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            dictionary_path: default_dictionary_path(),
            allowed_pos: default_allowed_pos(),
            category_field: default_category_field(),
            base_form_field: default_base_form_field(),
            on_malformed: MalformedPolicy::default(),
            normalize: false,
            ignore_space: false,
            max_grouping_len: None,
        }
    }
}

impl SplitterConfig {
    /// Defaults overridden by `WAKACHI_*` environment variables
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| env::var(key).ok());
        config
    }

    /// Override fields from an environment lookup. Unparsable values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("WAKACHI_DICTIONARY") {
            self.dictionary_path = path;
        }

        if let Some(labels) = lookup("WAKACHI_ALLOWED_POS") {
            let labels: Vec<String> = labels
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect();
            if !labels.is_empty() {
                self.allowed_pos = labels;
            }
        }

        if let Some(policy) = lookup("WAKACHI_ON_MALFORMED").and_then(|v| v.parse().ok()) {
            self.on_malformed = policy;
        }

        if let Some(normalize) = lookup("WAKACHI_NORMALIZE").and_then(|v| v.parse().ok()) {
            self.normalize = normalize;
        }
    }

    pub fn layout(&self) -> FeatureLayout {
        FeatureLayout {
            category: self.category_field,
            base_form: self.base_form_field,
        }
    }

    pub fn pos_filter(&self) -> PosFilter {
        PosFilter::new(self.allowed_pos.iter().cloned())
    }
}
