//! Seeds a book catalog backend from a YAML or JSON document.
//!
//! Every entry is validated before anything is sent, then books are posted
//! one at a time. The first failure aborts the whole run.

pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{ConfigError, Credentials, SeedConfig};
pub use models::errors::SeedError;
pub use services::client::CatalogClient;
pub use services::loader::{load_books, parse_books, DocumentFormat};
pub use services::seed::{SeedOptions, SeedOutcome, SeedReport, Seeder};
pub use utils::prompt::{AssumeYes, Confirm, StdinConfirm};
