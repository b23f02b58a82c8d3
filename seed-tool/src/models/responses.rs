use serde::Deserialize;
use serde_json::Value;

/// Entry of `GET /books`. Only the id matters when clearing the catalog.
#[derive(Debug, Deserialize)]
pub struct BookSummary {
    #[serde(default)]
    pub id: Option<Value>,
}

impl BookSummary {
    pub fn into_id(self) -> Option<String> {
        match self.id? {
            Value::Null => None,
            Value::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }
}
