use crate::models::book::{RawBook, ValidatedBook, CHECKED_FIELDS};
use crate::models::catalog::{is_known_language, Kind, Status};
use crate::models::errors::{BatchError, ValidationError};
use crate::utils::text::{display_value, field_text, is_blank, is_blank_value, leading_int};
use serde_json::Value;
use tracing::debug;

/// Checked in this order; only the first blank one is reported.
const MANDATORY_FIELDS: [&str; 2] = ["title", "publisher"];

pub fn validate_mandatory(book: &RawBook) -> Result<(), ValidationError> {
    for field in MANDATORY_FIELDS {
        if is_blank(book.text(field).as_deref()) {
            return Err(ValidationError::MissingField {
                title: book.title_text(),
                field,
            });
        }
    }
    Ok(())
}

/// Integer rating of the book. Anything that does not start like a number is
/// a 0; no range is enforced.
pub fn coerce_rate(book: &RawBook) -> i64 {
    match book.get("rate") {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => leading_int(s),
        _ => 0,
    }
}

pub fn resolve_kind(title: &str, raw_kind: Option<&Value>) -> Result<Kind, ValidationError> {
    let name = match raw_kind {
        _ if is_blank_value(raw_kind) => Kind::DEFAULT_NAME,
        Some(Value::String(name)) => name.as_str(),
        _ => "",
    };

    Kind::from_name(name).ok_or_else(|| ValidationError::InvalidKind {
        title: title.to_string(),
        kind: display_value(raw_kind),
    })
}

pub fn resolve_status(title: &str, raw_status: Option<&Value>) -> Result<Status, ValidationError> {
    let status = match raw_status {
        Some(Value::String(name)) => Status::from_name(name),
        _ => None,
    };

    status.ok_or_else(|| ValidationError::InvalidStatus {
        title: title.to_string(),
        status: display_value(raw_status),
    })
}

pub fn validate_language(title: &str, raw_language: Option<&Value>) -> Result<(), ValidationError> {
    let language = field_text(raw_language);
    if is_blank(language.as_deref()) {
        return Err(ValidationError::MissingLanguage {
            title: title.to_string(),
        });
    }

    let unknown: Vec<String> = language_codes(language.as_deref().unwrap_or_default())
        .into_iter()
        .filter(|code| !is_known_language(code))
        .map(str::to_string)
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::UnknownLanguage {
            title: title.to_string(),
            codes: unknown,
        })
    }
}

/// Splits a comma separated language list. Trailing empty segments are
/// dropped, inner ones are kept so that "en,,ca" is reported.
fn language_codes(list: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = list.split(',').collect();
    while segments.last().is_some_and(|s| s.is_empty()) {
        segments.pop();
    }
    segments.into_iter().map(str::trim).collect()
}

/// Validates a single seed entry. Checks run in a fixed order and stop at the
/// first failure: mandatory fields, kind, status, language.
pub fn validate(book: &RawBook) -> Result<ValidatedBook, ValidationError> {
    validate_mandatory(book)?;

    let title = book.title_text();
    let rate = coerce_rate(book);
    let kind = resolve_kind(&title, book.get("kind"))?;
    let status = resolve_status(&title, book.get("status"))?;
    validate_language(&title, book.get("language"))?;

    let publisher = book.text("publisher").unwrap_or_default();
    let language = book.text("language").unwrap_or_default();

    let mut extra = book.fields().clone();
    for field in CHECKED_FIELDS {
        extra.remove(field);
    }

    debug!("Validated '{}' ({}, {})", title, kind, status);

    Ok(ValidatedBook::new(
        title, publisher, rate, kind, status, language, extra,
    ))
}

/// Validates a whole document in order, stopping at the first bad entry.
pub fn validate_all(books: &[RawBook]) -> Result<Vec<ValidatedBook>, BatchError> {
    books
        .iter()
        .enumerate()
        .map(|(index, book)| validate(book).map_err(|source| BatchError { index, source }))
        .collect()
}
