//! Small accessibility affordances layered over the widgets.

use std::collections::BTreeMap;

use eframe::egui;

/// Ensure an expandable control carries an explicit expansion state,
/// collapsed by default. Seeding never overwrites an existing entry, so
/// calling this every frame is safe.
pub fn seed_expansion_state(states: &mut BTreeMap<String, bool>, id: &str) {
    if !states.contains_key(id) {
        states.insert(id.to_owned(), false);
    }
}

/// Whether a focused control was activated from the keyboard.
pub fn keyboard_activated(response: &egui::Response) -> bool {
    response.has_focus()
        && response
            .ctx
            .input(|i| i.key_pressed(egui::Key::Enter) || i.key_pressed(egui::Key::Space))
}

/// Click or keyboard activation; Enter and Space on a focused card behave
/// exactly like a click.
pub fn activated(response: &egui::Response) -> bool {
    response.clicked() || keyboard_activated(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeding_defaults_to_collapsed() {
        let mut states = BTreeMap::new();
        seed_expansion_state(&mut states, "experience::acme");
        assert_eq!(states.get("experience::acme"), Some(&false));
    }

    #[test]
    fn seeding_is_idempotent_and_preserves_user_state() {
        let mut states = BTreeMap::new();
        seed_expansion_state(&mut states, "experience::acme");
        states.insert("experience::acme".to_string(), true);
        seed_expansion_state(&mut states, "experience::acme");
        assert_eq!(states.get("experience::acme"), Some(&true));
        assert_eq!(states.len(), 1);
    }
}
