use crate::models::errors::SeedError;
use catalog_core::RawBook;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `.json` files are JSON, anything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

pub fn load_books(path: &Path) -> Result<Vec<RawBook>, SeedError> {
    let text = fs::read_to_string(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let books = parse_books(&text, DocumentFormat::from_path(path))?;
    info!("Loaded {} books from {}", books.len(), path.display());
    Ok(books)
}

/// Parses a document whose top level is a sequence of mappings.
pub fn parse_books(text: &str, format: DocumentFormat) -> Result<Vec<RawBook>, SeedError> {
    let document: Value = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(text)?,
        DocumentFormat::Json => serde_json::from_str(text)?,
    };

    let Value::Array(entries) = document else {
        return Err(SeedError::Document(
            "expected a top-level list of books".to_string(),
        ));
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| match entry {
            Value::Object(fields) => Ok(RawBook::new(fields)),
            _ => Err(SeedError::Document(format!(
                "entry {} is not a mapping",
                i + 1
            ))),
        })
        .collect()
}
