pub mod analyzer;
pub mod error;
pub mod language;
pub mod morpheme;
pub mod pos;
pub mod preprocess;
pub mod splitter;
