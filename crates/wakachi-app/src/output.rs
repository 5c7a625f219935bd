use std::io::Write;

use clap::ValueEnum;
use wakachi_core::analyzer::Analyzer;
use wakachi_core::language::LanguageProcessor;
use wakachi_lang_japanese::JapaneseProcessor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Canonical forms separated by spaces
    Plain,
    /// One JSON array per input line
    Json,
    /// Kept morphemes as `surface<TAB>feature`, closed by `EOS`
    Verbose,
}

/// Split one line of input and write it in `format`
pub fn write_line<A, W>(
    out: &mut W,
    processor: &JapaneseProcessor<A>,
    text: &str,
    format: OutputFormat,
) -> anyhow::Result<()>
where
    A: Analyzer,
    W: Write,
{
    match format {
        OutputFormat::Plain => {
            let forms = processor.split(text)?;
            writeln!(out, "{}", forms.join(" "))?;
        }
        OutputFormat::Json => {
            let forms = processor.split(text)?;
            writeln!(out, "{}", serde_json::to_string(&forms)?)?;
        }
        OutputFormat::Verbose => {
            for morpheme in processor.split_morphemes(text)? {
                writeln!(out, "{}\t{}", morpheme.surface, morpheme.feature)?;
            }
            writeln!(out, "EOS")?;
        }
    }

    Ok(())
}
