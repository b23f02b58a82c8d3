use crate::models::catalog::{Kind, Status};
use crate::utils::text::field_text;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields the validator owns. Everything else passes through untouched.
pub const CHECKED_FIELDS: [&str; 6] = ["title", "publisher", "rate", "kind", "status", "language"];

/// A book entry exactly as it comes out of a seed document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawBook {
    fields: Map<String, Value>,
}

impl RawBook {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn text(&self, key: &str) -> Option<String> {
        field_text(self.get(key))
    }

    pub fn title_text(&self) -> String {
        self.text("title").unwrap_or_default()
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl From<Map<String, Value>> for RawBook {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

/// A book that passed validation, ready to be posted to the backend.
///
/// Serializes to the flat JSON object the `/books` endpoint expects, with
/// `kind` and `status` as ordinals and any extra fields (author, location,
/// dates, notes...) next to them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidatedBook {
    title: String,
    publisher: String,
    rate: i64,
    kind: Kind,
    status: Status,
    language: String,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl ValidatedBook {
    pub(crate) fn new(
        title: String,
        publisher: String,
        rate: i64,
        kind: Kind,
        status: Status,
        language: String,
        extra: Map<String, Value>,
    ) -> Self {
        Self {
            title,
            publisher,
            rate,
            kind,
            status,
            language,
            extra,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn publisher(&self) -> &str {
        &self.publisher
    }

    pub fn rate(&self) -> i64 {
        self.rate
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    /// Back to seed-document form, with kind and status spelled by name.
    pub fn to_raw(&self) -> RawBook {
        let mut fields = self.extra.clone();
        fields.insert("title".into(), Value::from(self.title.clone()));
        fields.insert("publisher".into(), Value::from(self.publisher.clone()));
        fields.insert("rate".into(), Value::from(self.rate));
        fields.insert("kind".into(), Value::from(self.kind.name()));
        fields.insert("status".into(), Value::from(self.status.name()));
        fields.insert("language".into(), Value::from(self.language.clone()));
        RawBook::new(fields)
    }
}
