use std::path::Path;

use vibrato::tokenizer::worker::Worker;
use vibrato::{Dictionary, Tokenizer};
use wakachi_config::splitter::SplitterConfig;
use wakachi_core::analyzer::{AnalysisSession, Analyzer};
use wakachi_core::error::AnalyzeError;
use wakachi_core::morpheme::Morpheme;

use crate::loader::DictionaryLoader;

/// MeCab-compatible analyzer backed by vibrato.
///
/// The tokenizer owns the compiled dictionary and is shared; each session
/// gets its own worker, which holds the lattice for one sentence at a time.
pub struct VibratoAnalyzer {
    tokenizer: Tokenizer,
}

impl VibratoAnalyzer {
    pub fn new(dict: Dictionary) -> Self {
        Self {
            tokenizer: Tokenizer::new(dict),
        }
    }

    pub fn with_options(
        dict: Dictionary,
        ignore_space: bool,
        max_grouping_len: Option<usize>,
    ) -> Result<Self, AnalyzeError> {
        let mut tokenizer = Tokenizer::new(dict)
            .ignore_space(ignore_space)
            .map_err(|e| AnalyzeError::Dictionary(e.to_string()))?;

        if let Some(len) = max_grouping_len {
            tokenizer = tokenizer.max_grouping_len(len);
        }

        Ok(Self { tokenizer })
    }

    pub fn from_config(config: &SplitterConfig) -> Result<Self, AnalyzeError> {
        let dict = DictionaryLoader::load_from_file(Path::new(&config.dictionary_path))?;
        Self::with_options(dict, config.ignore_space, config.max_grouping_len)
    }
}

pub struct VibratoSession<'a> {
    worker: Worker<'a>,
}

impl Analyzer for VibratoAnalyzer {
    type Session<'a> = VibratoSession<'a>;

    fn session(&self) -> Result<Self::Session<'_>, AnalyzeError> {
        Ok(VibratoSession {
            worker: self.tokenizer.new_worker(),
        })
    }
}

impl AnalysisSession for VibratoSession<'_> {
    fn analyze(&mut self, text: &str) -> Result<impl Iterator<Item = Morpheme>, AnalyzeError> {
        self.worker.reset_sentence(text);
        self.worker.tokenize();

        let worker = &self.worker;
        Ok((0..worker.num_tokens()).map(move |i| {
            let token = worker.token(i);
            Morpheme::new(token.surface(), token.feature())
        }))
    }
}

#[cfg(test)]
mod tests {
    use vibrato::SystemDictionaryBuilder;
    use wakachi_core::splitter::Splitter;

    use super::*;

    const LEXICON: &str = "\
猫,0,0,100,名詞,一般,*,*,*,*,猫,ネコ,ネコ
が,0,0,100,助詞,格助詞,一般,*,*,*,が,ガ,ガ
走る,0,0,100,動詞,自立,*,*,五段・ラ行,基本形,走る,ハシル,ハシル
。,0,0,100,記号,句点,*,*,*,*,。,。,。
";
    const MATRIX: &str = "1 1\n0 0 0\n";
    const CHAR_DEF: &str = "DEFAULT 0 1 0\n";
    const UNK_DEF: &str = "DEFAULT,0,0,1000,名詞,一般,*,*,*,*,*\n";

    /// Four-word IPADIC-shaped dictionary built in memory
    fn dictionary() -> Dictionary {
        SystemDictionaryBuilder::from_readers(
            LEXICON.as_bytes(),
            MATRIX.as_bytes(),
            CHAR_DEF.as_bytes(),
            UNK_DEF.as_bytes(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_input() {
        let splitter = Splitter::new(VibratoAnalyzer::new(dictionary()));

        assert!(splitter.split("").unwrap().is_empty());
    }

    #[test]
    fn test_split_sentence() {
        let splitter = Splitter::new(VibratoAnalyzer::new(dictionary()));

        assert_eq!(splitter.split("猫が走る。").unwrap(), vec!["猫", "走る"]);
    }

    #[test]
    fn test_raw_ipadic_features() {
        let splitter = Splitter::new(VibratoAnalyzer::new(dictionary()));

        let morphemes = splitter.split_morphemes("猫が走る。").unwrap();

        assert_eq!(
            morphemes,
            vec![
                Morpheme::new("猫", "名詞,一般,*,*,*,*,猫,ネコ,ネコ"),
                Morpheme::new("走る", "動詞,自立,*,*,五段・ラ行,基本形,走る,ハシル,ハシル"),
            ]
        );
    }

    #[test]
    fn test_session_yields_every_token() {
        let analyzer = VibratoAnalyzer::new(dictionary());
        let mut session = analyzer.session().unwrap();

        let surfaces: Vec<String> = session
            .analyze("猫が走る。")
            .unwrap()
            .map(|m| m.surface)
            .collect();

        assert_eq!(surfaces, vec!["猫", "が", "走る", "。"]);
    }

    #[test]
    fn test_with_options() {
        let analyzer = VibratoAnalyzer::with_options(dictionary(), false, Some(24)).unwrap();
        let splitter = Splitter::new(analyzer);

        assert_eq!(splitter.split("猫が走る。").unwrap(), vec!["猫", "走る"]);
        assert_eq!(splitter.split("猫が走る。").unwrap(), splitter.split("猫が走る。").unwrap());
    }
}
