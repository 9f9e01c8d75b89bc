use anyhow::Context;
use cookable_core::domain::pantry::{
    entities::{DEFAULT_PANTRY, Pantry},
    ports::PantryRepository,
};
use cookable_core::infrastructure::store::JsonPantryRepository;
use dialoguer::{Input, MultiSelect, theme::ColorfulTheme};

/// Checklist state: every row on screen plus the current selection.
/// Rendering is a pure function of this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct PantryState {
    entries: Vec<String>,
    selection: Pantry,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PantryRow {
    pub label: String,
    pub selected: bool,
}

impl PantryState {
    /// Seeds the checklist from a saved pantry, or from the default list
    /// when nothing has been saved yet. Saved custom items get their own
    /// rows after the defaults.
    pub fn seeded(saved: Pantry) -> Self {
        let selection = if saved.is_empty() {
            Pantry::seeded()
        } else {
            saved
        };

        let mut entries: Vec<String> = DEFAULT_PANTRY.iter().map(|s| s.to_string()).collect();
        for item in selection.items() {
            if !entries.contains(item) {
                entries.push(item.clone());
            }
        }

        Self { entries, selection }
    }

    pub fn rows(&self) -> Vec<PantryRow> {
        self.entries
            .iter()
            .map(|entry| PantryRow {
                label: capitalize(entry),
                selected: self.selection.contains(entry),
            })
            .collect()
    }

    pub fn toggle(&mut self, entry: &str) {
        self.selection.toggle(entry);
    }

    /// Adds a custom ingredient and selects it. Blank input is ignored.
    /// Returns whether anything changed.
    pub fn add_custom(&mut self, input: &str) -> bool {
        let name = input.trim().to_lowercase();
        if name.is_empty() {
            return false;
        }
        if !self.entries.contains(&name) {
            self.entries.push(name.clone());
        }
        self.selection.insert(&name);
        true
    }

    /// Toggles every row whose checked state differs from the selection.
    pub fn apply_checked(&mut self, checked: &[usize]) {
        let entries = self.entries.clone();
        for (index, entry) in entries.iter().enumerate() {
            let is_checked = checked.contains(&index);
            if is_checked != self.selection.contains(entry) {
                self.toggle(entry);
            }
        }
    }

    pub fn confirm(self) -> Pantry {
        self.selection
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Interactive pantry editor: checklist, custom entries, then persist.
pub async fn edit_pantry(repository: &JsonPantryRepository) -> anyhow::Result<()> {
    let saved = repository.load().await?;
    let mut state = PantryState::seeded(saved);

    loop {
        let rows = state.rows();
        let labels: Vec<&String> = rows.iter().map(|row| &row.label).collect();
        let defaults: Vec<bool> = rows.iter().map(|row| row.selected).collect();

        let checked = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt("Your pantry (space toggles, enter confirms)")
            .items(&labels)
            .defaults(&defaults)
            .interact()
            .context("pantry selection aborted")?;
        state.apply_checked(&checked);

        let custom: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Add a custom ingredient (leave blank to finish)")
            .allow_empty(true)
            .interact_text()
            .context("custom ingredient input aborted")?;

        if !state.add_custom(&custom) {
            break;
        }
    }

    let pantry = state.confirm();
    let count = pantry.len();
    repository.save(pantry).await?;
    println!("Saved {count} ingredients to your pantry.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_save_seeds_the_default_list() {
        let state = PantryState::seeded(Pantry::new());
        let rows = state.rows();
        assert_eq!(rows.len(), DEFAULT_PANTRY.len());
        assert!(rows.iter().all(|row| row.selected));
    }

    #[test]
    fn saved_pantry_wins_over_defaults() {
        let saved = Pantry::from_items(["salt".to_string(), "harissa".to_string()]);
        let state = PantryState::seeded(saved);

        let rows = state.rows();
        // Defaults are all listed, plus the custom item at the end.
        assert_eq!(rows.len(), DEFAULT_PANTRY.len() + 1);
        assert_eq!(rows.last().unwrap().label, "Harissa");
        assert!(rows.last().unwrap().selected);

        let selected: Vec<&PantryRow> = rows.iter().filter(|row| row.selected).collect();
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn rows_capitalize_labels() {
        let state = PantryState::seeded(Pantry::new());
        assert_eq!(state.rows()[0].label, "Salt");
    }

    #[test]
    fn toggle_flips_a_row() {
        let mut state = PantryState::seeded(Pantry::new());
        state.toggle("salt");
        assert!(!state.rows()[0].selected);
        state.toggle("salt");
        assert!(state.rows()[0].selected);
    }

    #[test]
    fn add_custom_trims_lowercases_and_selects() {
        let mut state = PantryState::seeded(Pantry::new());
        assert!(state.add_custom("  Za'atar "));
        let rows = state.rows();
        let last = rows.last().unwrap();
        assert_eq!(last.label, "Za'atar");
        assert!(last.selected);
        assert!(state.confirm().contains("za'atar"));
    }

    #[test]
    fn add_custom_ignores_blank_input() {
        let mut state = PantryState::seeded(Pantry::new());
        let before = state.clone();
        assert!(!state.add_custom("   "));
        assert_eq!(state, before);
    }

    #[test]
    fn apply_checked_matches_the_selection_to_the_rows() {
        let mut state = PantryState::seeded(Pantry::new());
        state.apply_checked(&[0, 2]);
        let pantry = state.confirm();
        assert_eq!(pantry.items(), ["salt", "olive oil"]);
    }
}
