//! Application runtime state derived from persisted settings.

use std::collections::{BTreeMap, HashMap};

use crate::form::ContactForm;
use crate::reveal::RevealTracker;
use crate::scroll::SmoothScroll;
use crate::settings::AppSettings;
use crate::theme::ThemeMode;

/// Gap kept between the viewport top and a scrolled-to section heading.
const SECTION_SCROLL_MARGIN: f32 = 8.0;

/// Blocking notice shown over the page (the alert analog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Validation failure that blocked a form submission.
    Error(String),
    /// Confirmation after a successful handoff.
    Info(String),
}

/// In-memory state that drives UI rendering. The theme field is the single
/// theme marker everything else branches on.
pub struct AppState {
    theme: ThemeMode,
    /// Whether the compact navigation menu is open.
    pub nav_open: bool,
    /// Explicit expansion state for expandable controls.
    pub expanded: BTreeMap<String, bool>,
    /// One-shot reveal marks.
    pub reveal: RevealTracker,
    /// Eased scroll toward navigation targets.
    pub scroll: SmoothScroll,
    /// Content-space top edge of each section, captured during render.
    pub section_tops: HashMap<String, f32>,
    /// Contact form editor state.
    pub form: ContactForm,
    /// Pending blocking notice, if any.
    pub notice: Option<Notice>,
}

impl AppState {
    /// Build the runtime state from persisted settings.
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            theme: settings.theme,
            nav_open: false,
            expanded: BTreeMap::new(),
            reveal: RevealTracker::default(),
            scroll: SmoothScroll::default(),
            section_tops: HashMap::new(),
            form: ContactForm::default(),
            notice: None,
        }
    }

    /// Active theme.
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn set_theme(&mut self, mode: ThemeMode) {
        self.theme = mode;
    }

    /// Copy the runtime state back into settings for persistence.
    pub fn apply_to_settings(&self, settings: &mut AppSettings) {
        settings.theme = self.theme;
    }

    /// Begin an eased scroll to a section and close the compact menu. An
    /// unknown id skips the scroll; the menu closes either way.
    pub fn navigate_to(&mut self, id: &str) {
        if let Some(&top) = self.section_tops.get(id) {
            self.scroll.request(top - SECTION_SCROLL_MARGIN);
        }
        self.nav_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_state_mirrors_the_persisted_theme() {
        let settings = AppSettings {
            theme: ThemeMode::Light,
        };
        let state = AppState::from_settings(&settings);
        assert_eq!(state.theme(), ThemeMode::Light);
        assert!(state.notice.is_none());
        assert!(!state.nav_open);
    }

    #[test]
    fn theme_changes_flow_back_into_settings() {
        let mut settings = AppSettings::default();
        let mut state = AppState::from_settings(&settings);
        state.set_theme(state.theme().toggled());
        state.apply_to_settings(&mut settings);
        assert_eq!(settings.theme, ThemeMode::Light);
    }

    #[test]
    fn navigation_eases_toward_the_section_and_closes_the_menu() {
        let mut state = AppState::from_settings(&AppSettings::default());
        state.section_tops.insert("skills".to_string(), 640.0);
        state.nav_open = true;
        state.navigate_to("skills");
        assert!(state.scroll.is_active());
        assert!(!state.nav_open);
    }

    #[test]
    fn navigating_to_a_missing_section_degrades_silently() {
        let mut state = AppState::from_settings(&AppSettings::default());
        state.nav_open = true;
        state.navigate_to("nowhere");
        assert!(!state.scroll.is_active());
        assert!(!state.nav_open);
    }
}
