use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Open-ended key/value record — whatever the caller stores.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings {
    values: serde_json::Map<String, Value>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get() {
        let mut settings = Settings::new();
        settings.set("backend_url", "http://localhost:5000");
        assert_eq!(settings.get_str("backend_url"), Some("http://localhost:5000"));
        assert_eq!(settings.get_str("missing"), None);
    }

    #[test]
    fn serializes_as_plain_object() {
        let mut settings = Settings::new();
        settings.set("strategy", "captions-first");
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(json, r#"{"strategy":"captions-first"}"#);
    }
}
