use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a successful MSG91 response.
///
/// Holds the parsed JSON exactly as returned. Bodies that are not JSON are wrapped as
/// `{"raw_content": "<body text>"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Envelope(Value);

impl Envelope {
    /// Key used when the body could not be parsed as JSON.
    pub const RAW_CONTENT: &'static str = "raw_content";

    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Wrap a non-JSON body.
    pub fn raw(body: impl Into<String>) -> Self {
        let mut map = serde_json::Map::new();
        map.insert(Self::RAW_CONTENT.to_owned(), Value::String(body.into()));
        Self(Value::Object(map))
    }

    /// Look up a top-level field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The body text when the response was not JSON.
    ///
    /// A JSON body that happens to carry a string `raw_content` field is indistinguishable.
    pub fn raw_content(&self) -> Option<&str> {
        self.get(Self::RAW_CONTENT).and_then(Value::as_str)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Envelope> for Value {
    fn from(value: Envelope) -> Self {
        value.0
    }
}

impl PartialEq<Value> for Envelope {
    fn eq(&self, other: &Value) -> bool {
        &self.0 == other
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::Envelope;

    #[test]
    fn raw_wraps_body_text() {
        let envelope = Envelope::raw("Invalid response");
        assert_eq!(envelope, json!({ "raw_content": "Invalid response" }));
        assert_eq!(envelope.raw_content(), Some("Invalid response"));
    }

    #[test]
    fn json_envelope_exposes_fields() {
        let envelope = Envelope::new(json!({ "type": "success", "message": "abc123" }));
        assert_eq!(
            envelope.get("message").and_then(|it| it.as_str()),
            Some("abc123")
        );
        assert_eq!(envelope.raw_content(), None);
    }
}
