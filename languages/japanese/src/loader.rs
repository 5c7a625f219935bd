use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};
use std::path::Path;

use vibrato::Dictionary;
use wakachi_core::error::AnalyzeError;

pub struct DictionaryLoader;

impl DictionaryLoader {
    /// Load a compiled vibrato dictionary; `.zst` files are decompressed on the fly
    pub fn load_from_file(path: &Path) -> Result<Dictionary, AnalyzeError> {
        tracing::info!("Loading dictionary from file: {}", path.display());

        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => AnalyzeError::DictionaryNotFound(path.display().to_string()),
            _ => AnalyzeError::Io(e),
        })?;
        let compressed = path.extension().is_some_and(|ext| ext == "zst");
        let dict = Self::load_from_reader(BufReader::new(file), compressed)?;

        tracing::info!("Loaded dictionary from {}", path.display());
        Ok(dict)
    }

    pub fn load_from_reader<R: Read>(reader: R, compressed: bool) -> Result<Dictionary, AnalyzeError> {
        let dict = if compressed {
            let decoder = zstd::stream::read::Decoder::new(reader)?;
            Dictionary::read(decoder)
        } else {
            Dictionary::read(reader)
        };

        dict.map_err(|e| AnalyzeError::Dictionary(e.to_string()))
    }
}
