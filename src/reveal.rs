//! One-shot reveal marks for sections entering the viewport.

use std::collections::HashSet;

use eframe::egui;

/// Fraction of a section that must be visible before it reveals.
const VISIBILITY_THRESHOLD: f32 = 0.1;
/// Bias that keeps the reveal from firing right at the bottom edge.
const BOTTOM_MARGIN: f32 = 50.0;

/// Tracks which sections have ever been visible. A mark is permanent:
/// scrolling a section back out and in again never re-fires it.
#[derive(Debug, Default)]
pub struct RevealTracker {
    revealed: HashSet<String>,
}

impl RevealTracker {
    /// Record a visibility observation for one section. Returns whether the
    /// section is revealed; once true it stays true for the lifetime of the
    /// tracker.
    pub fn observe(&mut self, id: &str, section: egui::Rect, viewport: egui::Rect) -> bool {
        if self.revealed.contains(id) {
            return true;
        }
        if visible_fraction(section, viewport) >= VISIBILITY_THRESHOLD {
            self.revealed.insert(id.to_owned());
            return true;
        }
        false
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}

/// Visible fraction of `section` inside `viewport`, with the viewport's
/// bottom edge pulled up by the margin bias.
fn visible_fraction(section: egui::Rect, viewport: egui::Rect) -> f32 {
    let top = section.top().max(viewport.top());
    let bottom = section.bottom().min(viewport.bottom() - BOTTOM_MARGIN);
    if bottom <= top {
        return 0.0;
    }
    (bottom - top) / section.height().max(1.0)
}
