use serde_json::json;

/// JSON schema for full recipe analysis responses.
pub fn recipe_analysis_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "dish_name": { "type": "string" },
            "confidence": { "type": "string" },
            "have": {
                "type": "array",
                "items": { "type": "string" }
            },
            "need_to_buy": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["dish_name", "confidence", "have", "need_to_buy"]
    })
}

/// JSON schema for ingredient extraction responses.
pub fn ingredient_extraction_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "title": { "type": "string" },
            "ingredients": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string" }
                    },
                    "required": ["name"]
                }
            }
        },
        "required": ["title", "ingredients"]
    })
}
