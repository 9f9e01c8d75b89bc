/// Fixed vocabulary scanned against transcripts. Compound names are kept
/// specific ("olive oil", not "oil") so a hit names an actual ingredient.
pub const INGREDIENT_VOCABULARY: &[&str] = &[
    "salt",
    "black pepper",
    "olive oil",
    "garlic",
    "onion",
    "butter",
    "eggs",
    "milk",
    "rice",
    "pasta",
    "chicken",
    "beef",
    "pork",
    "shrimp",
    "tomato",
    "potato",
    "carrot",
    "celery",
    "mushroom",
    "spinach",
    "broccoli",
    "zucchini",
    "cheese",
    "cream",
    "yogurt",
    "flour",
    "sugar",
    "honey",
    "soy sauce",
    "vinegar",
    "lemon",
    "lime",
    "ginger",
    "cumin",
    "paprika",
    "oregano",
    "basil",
    "thyme",
    "rosemary",
    "cinnamon",
    "chili",
    "noodles",
    "bread",
    "beans",
    "lentils",
    "chickpeas",
    "tofu",
];

pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Bidirectional substring containment, the match rule for pantry checks.
pub fn matches_pantry_entry(detected: &str, pantry_entry: &str) -> bool {
    detected.contains(pantry_entry) || pantry_entry.contains(detected)
}

/// Splits detected ingredients into what the pantry covers and what has
/// to be bought. Detected names are normalized and deduplicated; input
/// order is preserved.
pub fn partition_ingredients(
    detected: &[String],
    pantry: &[String],
) -> (Vec<String>, Vec<String>) {
    let pantry: Vec<String> = pantry
        .iter()
        .map(|entry| normalize_name(entry))
        .filter(|entry| !entry.is_empty())
        .collect();

    let mut have = Vec::new();
    let mut need_to_buy = Vec::new();

    for name in detected {
        let name = normalize_name(name);
        if name.is_empty() || have.contains(&name) || need_to_buy.contains(&name) {
            continue;
        }
        if pantry.iter().any(|entry| matches_pantry_entry(&name, entry)) {
            have.push(name);
        } else {
            need_to_buy.push(name);
        }
    }

    (have, need_to_buy)
}

/// Naive ingredient detection: every vocabulary entry contained in the
/// transcript, case-insensitively, in vocabulary order.
pub fn scan_transcript(transcript: &str) -> Vec<String> {
    let transcript = transcript.to_lowercase();
    INGREDIENT_VOCABULARY
        .iter()
        .filter(|keyword| transcript.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}
