use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Outcome of matching a video's ingredients against the pantry.
///
/// Produced fresh on every analysis call and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisResult {
    #[serde(default)]
    pub dish_name: String,
    /// Label such as "high"/"medium"/"low". One backend generation
    /// emitted a bare number here, so that is accepted and stringified.
    #[serde(default, deserialize_with = "confidence_label")]
    pub confidence: String,
    #[serde(default)]
    pub have: Vec<String>,
    #[serde(default)]
    pub need_to_buy: Vec<String>,
}

impl AnalysisResult {
    /// Stand-in returned when the model produced unusable output.
    pub fn degraded() -> Self {
        Self {
            dish_name: "Unknown recipe".to_string(),
            confidence: "0".to_string(),
            have: Vec::new(),
            need_to_buy: Vec::new(),
        }
    }
}

fn confidence_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(label) => label,
        Value::Number(number) => number.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// The `/api/main` contract: a dish title plus a flat ingredient list,
/// partitioned against the pantry by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientExtraction {
    pub success: bool,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub ingredients: Vec<DetectedIngredient>,
}

impl IngredientExtraction {
    /// Stand-in returned when the model produced unusable output.
    pub fn failed() -> Self {
        Self {
            success: false,
            title: String::new(),
            ingredients: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetectedIngredient {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_string_confidence() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{"dish_name":"Carbonara","confidence":"high"}"#).unwrap();
        assert_eq!(result.confidence, "high");
        assert!(result.have.is_empty());
    }

    #[test]
    fn accepts_numeric_confidence() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{"dish_name":"Carbonara","confidence":0.8}"#).unwrap();
        assert_eq!(result.confidence, "0.8");
    }

    #[test]
    fn missing_fields_default() {
        let result: AnalysisResult = serde_json::from_str("{}").unwrap();
        assert_eq!(result, AnalysisResult::default());
    }

    #[test]
    fn degraded_result_shape() {
        let degraded = AnalysisResult::degraded();
        assert_eq!(degraded.dish_name, "Unknown recipe");
        assert_eq!(degraded.confidence, "0");
        assert!(degraded.need_to_buy.is_empty());
    }
}
