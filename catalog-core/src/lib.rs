//! Book catalog records: the shared kind/status tables and the validator that
//! turns loosely-typed seed entries into records the backend accepts.

pub mod models;
pub mod services;
pub mod utils;

pub use models::book::{RawBook, ValidatedBook};
pub use models::catalog::{is_known_language, Kind, Status, KNOWN_LANGUAGES};
pub use models::errors::{BatchError, ValidationError};
pub use services::validation::{validate, validate_all};
