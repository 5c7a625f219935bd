pub mod analyzer;
pub mod loader;
pub mod processor;

pub use analyzer::{VibratoAnalyzer, VibratoSession};
pub use loader::DictionaryLoader;
pub use processor::JapaneseProcessor;
