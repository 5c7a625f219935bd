use wakachi_core::analyzer::{AnalysisSession, Analyzer};
use wakachi_core::error::AnalyzeError;
use wakachi_core::morpheme::Morpheme;
use wakachi_core::splitter::Splitter;
use wakachi_lang_japanese::JapaneseProcessor;

use crate::output::{OutputFormat, write_line};

/// Knows exactly one sentence: 猫が走った。
struct NekoAnalyzer;

struct NekoSession;

impl Analyzer for NekoAnalyzer {
    type Session<'a> = NekoSession;

    fn session(&self) -> Result<Self::Session<'_>, AnalyzeError> {
        Ok(NekoSession)
    }
}

impl AnalysisSession for NekoSession {
    fn analyze(&mut self, text: &str) -> Result<impl Iterator<Item = Morpheme>, AnalyzeError> {
        let morphemes = match text {
            "" => vec![],
            "猫が走った。" => vec![
                Morpheme::new("猫", "名詞,一般,*,*,*,*,猫,ネコ,ネコ"),
                Morpheme::new("が", "助詞,格助詞,一般,*,*,*,が,ガ,ガ"),
                Morpheme::new("走っ", "動詞,自立,*,*,五段・ラ行,連用タ接続,走る,ハシッ,ハシッ"),
                Morpheme::new("た", "助動詞,*,*,*,特殊・タ,基本形,た,タ,タ"),
                Morpheme::new("。", "記号,句点,*,*,*,*,。,。,。"),
            ],
            "が。" => vec![
                Morpheme::new("が", "助詞,格助詞,一般,*,*,*,が,ガ,ガ"),
                Morpheme::new("。", "記号,句点,*,*,*,*,。,。,。"),
            ],
            other => return Err(AnalyzeError::Analysis(format!("cannot segment {other:?}"))),
        };
        Ok(morphemes.into_iter())
    }
}

fn render(text: &str, format: OutputFormat) -> anyhow::Result<String> {
    let processor = JapaneseProcessor::new(Splitter::new(NekoAnalyzer), false);
    let mut out = Vec::new();
    write_line(&mut out, &processor, text, format)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_plain() {
    assert_eq!(render("猫が走った。", OutputFormat::Plain).unwrap(), "猫 走る\n");
}

#[test]
fn test_json() {
    assert_eq!(
        render("猫が走った。", OutputFormat::Json).unwrap(),
        "[\"猫\",\"走る\"]\n"
    );
}

#[test]
fn test_verbose() {
    assert_eq!(
        render("猫が走った。", OutputFormat::Verbose).unwrap(),
        "猫\t名詞,一般,*,*,*,*,猫,ネコ,ネコ\n\
         走っ\t動詞,自立,*,*,五段・ラ行,連用タ接続,走る,ハシッ,ハシッ\n\
         EOS\n"
    );
}

#[test]
fn test_no_content_words() {
    assert_eq!(render("が。", OutputFormat::Plain).unwrap(), "\n");
    assert_eq!(render("が。", OutputFormat::Json).unwrap(), "[]\n");
}

#[test]
fn test_analyzer_error_surfaces() {
    let err = render("犬が走った。", OutputFormat::Plain).unwrap_err();

    assert!(err.to_string().contains("cannot segment"));
}
