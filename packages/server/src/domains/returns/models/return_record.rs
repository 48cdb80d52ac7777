use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single return order as supplied by the client.
///
/// Keys are free-form; only `reason` is read by the analysis pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReturnRecord(pub Map<String, Value>);

impl ReturnRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The free-text return reason, if present as a non-empty string.
    pub fn reason(&self) -> Option<&str> {
        match self.0.get("reason") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Body shape for endpoints that take a batch of returns.
///
/// Both `{"returns": [...]}` and a bare `[...]` are accepted.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReturnsPayload {
    Wrapped { returns: Vec<ReturnRecord> },
    Bare(Vec<ReturnRecord>),
}

impl ReturnsPayload {
    pub fn into_records(self) -> Vec<ReturnRecord> {
        match self {
            ReturnsPayload::Wrapped { returns } => returns,
            ReturnsPayload::Bare(returns) => returns,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reason_requires_non_empty_string() {
        assert_eq!(
            ReturnRecord::new().with_field("reason", "too small").reason(),
            Some("too small")
        );
        assert_eq!(ReturnRecord::new().with_field("reason", "").reason(), None);
        assert_eq!(ReturnRecord::new().with_field("reason", 42).reason(), None);
        assert_eq!(ReturnRecord::new().with_field("sku", "A-1").reason(), None);
    }

    #[test]
    fn payload_accepts_both_shapes() {
        let wrapped: ReturnsPayload =
            serde_json::from_value(json!({"returns": [{"reason": "late"}]})).unwrap();
        let bare: ReturnsPayload = serde_json::from_value(json!([{"reason": "late"}])).unwrap();

        assert_eq!(wrapped.into_records(), bare.into_records());
    }

    #[test]
    fn record_keeps_unknown_keys() {
        let record: ReturnRecord =
            serde_json::from_value(json!({"sku": "SKU-1", "region": "EU"})).unwrap();

        assert_eq!(record.get("region"), Some(&json!("EU")));
        assert_eq!(serde_json::to_value(&record).unwrap()["sku"], "SKU-1");
    }
}
