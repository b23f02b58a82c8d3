use thiserror::Error;

/// Reasons a seed entry is rejected before it ever reaches the backend.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("'{title}': you have to set a '{field}' for it!")]
    MissingField { title: String, field: &'static str },
    #[error("'{title}': given kind '{kind}' is not valid!")]
    InvalidKind { title: String, kind: String },
    #[error("'{title}': given status '{status}' is not valid!")]
    InvalidStatus { title: String, status: String },
    #[error("Book '{title}': no language given!")]
    MissingLanguage { title: String },
    #[error("Book '{title}': unknown languages {}", .codes.join(", "))]
    UnknownLanguage { title: String, codes: Vec<String> },
}

impl ValidationError {
    /// Title of the offending book, empty when the title itself is missing.
    pub fn title(&self) -> &str {
        match self {
            ValidationError::MissingField { title, .. }
            | ValidationError::InvalidKind { title, .. }
            | ValidationError::InvalidStatus { title, .. }
            | ValidationError::MissingLanguage { title }
            | ValidationError::UnknownLanguage { title, .. } => title,
        }
    }
}

/// First failure found while validating a whole seed document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("entry {} of the document: {source}", .index + 1)]
pub struct BatchError {
    /// Zero-based position of the entry.
    pub index: usize,
    #[source]
    pub source: ValidationError,
}
