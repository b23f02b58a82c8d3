use crate::config::ConfigError;
use catalog_core::BatchError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Got a '{status}' when talking with the server...")]
    BackendUnavailable { status: u16 },
    #[error("Book '{title}': got a '{status}' when talking with the server: {body}")]
    UploadRejected {
        title: String,
        status: u16,
        body: String,
    },
    #[error("Something went wrong while clearing {url}: got a '{status}', check your server!")]
    ClearFailed { url: String, status: u16 },
    #[error(transparent)]
    Validation(#[from] BatchError),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed seed document: {0}")]
    Document(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to read the confirmation: {0}")]
    Prompt(#[source] std::io::Error),
}
