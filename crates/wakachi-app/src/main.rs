use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wakachi_config::LogFormat;
use wakachi_core::splitter::MalformedPolicy;
use wakachi_lang_japanese::JapaneseProcessor;

use self::output::OutputFormat;

pub mod output;
pub mod profile;

#[cfg(test)]
mod tests;

#[derive(Parser)]
#[command(name = "wakachi")]
#[command(about = "Split Japanese text into the dictionary forms of its content words", long_about = None)]
pub struct Cli {
    /// Text to split; stdin is read line by line when omitted
    pub text: Vec<String>,

    /// JSON config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Compiled vibrato dictionary (overrides the config)
    #[arg(short, long)]
    pub dictionary: Option<String>,

    /// Drop tokens with malformed features instead of failing
    #[arg(long)]
    pub skip_malformed: bool,

    /// NFKC-normalize input before analysis
    #[arg(long)]
    pub normalize: bool,

    #[arg(short, long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Log level used when RUST_LOG is unset
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = profile::load_config(cli.config.as_deref())?;
    init_tracing(&cli.log_level, config.log_format);

    if let Some(dictionary) = &cli.dictionary {
        config.splitter.dictionary_path = dictionary.clone();
    }
    if cli.skip_malformed {
        config.splitter.on_malformed = MalformedPolicy::Skip;
    }
    if cli.normalize {
        config.splitter.normalize = true;
    }

    let processor = JapaneseProcessor::from_config(&config.splitter).with_context(|| {
        format!("failed to load dictionary {}", config.splitter.dictionary_path)
    })?;
    tracing::debug!(
        "Splitter ready: {} allowed categories, {:?} on malformed features",
        processor.splitter().filter().len(),
        config.splitter.on_malformed
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.text.is_empty() {
        let text = cli.text.join(" ");
        return output::write_line(&mut out, &processor, &text, cli.format);
    }

    if atty::is(atty::Stream::Stdin) {
        anyhow::bail!("no text given; pass TEXT or pipe input on stdin");
    }

    tracing::debug!("Reading text from stdin");
    for (number, line) in io::stdin().lock().lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        output::write_line(&mut out, &processor, &line, cli.format)
            .with_context(|| format!("line {}", number + 1))?;
    }

    Ok(())
}

fn init_tracing(level: &str, format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Plain => builder.init(),
    }
}
