use crate::error::ExternalError;
use crossnorm_core::Puzzle;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
    path::Path,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Json,
    Binary,
}

impl DocumentFormat {
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "json" => Some(DocumentFormat::Json),
            "xwb" => Some(DocumentFormat::Binary), // crossword binary
            _ => None,
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            DocumentFormat::Json => "json",
            DocumentFormat::Binary => "xwb",
        }
    }

    /// Pick the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, ExternalError> {
        let extension = path
            .extension()
            .and_then(|s| s.to_str())
            .ok_or_else(|| ExternalError::InvalidFormat {
                expected: "json or xwb".to_string(),
                actual: "no extension".to_string(),
            })?;

        Self::from_extension(extension).ok_or_else(|| ExternalError::InvalidFormat {
            expected: "json or xwb".to_string(),
            actual: extension.to_string(),
        })
    }
}

/// Reads and writes normalized puzzle documents.
pub struct PuzzleFile;

impl PuzzleFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Puzzle, ExternalError> {
        let path = path.as_ref();
        match DocumentFormat::from_path(path)? {
            DocumentFormat::Json => Self::load_json(path),
            DocumentFormat::Binary => Self::load_binary(path),
        }
    }

    pub fn save<P: AsRef<Path>>(
        puzzle: &Puzzle,
        path: P,
        format: DocumentFormat,
    ) -> Result<(), ExternalError> {
        let path = path.as_ref();
        match format {
            DocumentFormat::Json => Self::save_json(puzzle, path)?,
            DocumentFormat::Binary => Self::save_binary(puzzle, path)?,
        }
        tracing::info!(path = %path.display(), format = format.extension(), "wrote puzzle document");
        Ok(())
    }

    fn load_json(path: &Path) -> Result<Puzzle, ExternalError> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    fn save_json(puzzle: &Puzzle, path: &Path) -> Result<(), ExternalError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, puzzle)?;
        writer.flush()?;
        Ok(())
    }

    fn load_binary(path: &Path) -> Result<Puzzle, ExternalError> {
        let file = File::open(path)?;
        bincode::deserialize_from(BufReader::new(file)).map_err(|_| {
            ExternalError::InvalidFormat {
                expected: "valid binary puzzle document".to_string(),
                actual: "corrupted or invalid binary data".to_string(),
            }
        })
    }

    fn save_binary(puzzle: &Puzzle, path: &Path) -> Result<(), ExternalError> {
        let mut writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(&mut writer, puzzle)?;
        writer.flush()?;
        Ok(())
    }
}
