use crate::error::{Result, StoreError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A movie record as stored in the backing file and served over HTTP.
///
/// Every field defaults when absent from an inbound body, so `{"name":"A"}`
/// is a valid draft. The `id` of a draft is never trusted: the store assigns
/// it on create and pins it on update.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Movie {
    pub id: i64,
    pub name: String,
    pub overview: String,
    #[serde(rename = "posterurl", alias = "posterUrl")]
    pub poster_url: String,
    pub genres: String,
}

impl Movie {
    /// Decodes a request body.
    ///
    /// Only a JSON object is a movie. Keys match field names regardless of
    /// case and a `null` value leaves the field at its default.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| StoreError::InvalidInput(e.to_string()))?;
        let Value::Object(fields) = value else {
            return Err(StoreError::InvalidInput("expected a JSON object".to_string()));
        };
        let fields: Map<String, Value> = fields
            .into_iter()
            .filter(|(_, v)| !v.is_null())
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        serde_json::from_value(Value::Object(fields))
            .map_err(|e| StoreError::InvalidInput(e.to_string()))
    }

    pub(crate) fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}
