use serde::{Deserialize, Serialize};

/// Starter ingredients offered when no pantry has been saved yet.
pub const DEFAULT_PANTRY: &[&str] = &[
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
];

/// The user's self-declared set of available ingredients.
///
/// Persisted as an ordered list; uniqueness is enforced here, not by the
/// store. Names are trimmed and lowercased on the way in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pantry {
    items: Vec<String>,
}

impl Pantry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pantry seeded with [`DEFAULT_PANTRY`].
    pub fn seeded() -> Self {
        Self::from_items(DEFAULT_PANTRY.iter().map(|s| s.to_string()))
    }

    pub fn from_items(items: impl IntoIterator<Item = String>) -> Self {
        let mut pantry = Self::new();
        for item in items {
            pantry.insert(&item);
        }
        pantry
    }

    /// Adds an ingredient, normalizing it first. Empty input and
    /// duplicates are ignored. Returns whether the pantry changed.
    pub fn insert(&mut self, name: &str) -> bool {
        let name = normalize(name);
        if name.is_empty() || self.items.contains(&name) {
            return false;
        }
        self.items.push(name);
        true
    }

    /// Removes the ingredient if present, adds it otherwise.
    pub fn toggle(&mut self, name: &str) {
        let name = normalize(name);
        if name.is_empty() {
            return;
        }
        match self.items.iter().position(|item| *item == name) {
            Some(index) => {
                self.items.remove(index);
            }
            None => self.items.push(name),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains(&normalize(name))
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn into_items(self) -> Vec<String> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}
