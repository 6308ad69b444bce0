//! Theme preference and the palette applied to the egui-based UI.

use eframe::egui;
use serde::{Deserialize, Serialize};

/// Visual theme options exposed by the toggle control.
#[derive(Copy, Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Light visuals.
    Light,
    /// Dark visuals (default).
    #[serde(other)]
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self {
        // An absent preference means dark.
        ThemeMode::Dark
    }
}

impl ThemeMode {
    /// The opposite mode, used by the toggle control.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    /// Glyph shown on the toggle control: the sun while dark, the moon
    /// while light, matching what pressing it switches away from.
    pub fn toggle_glyph(self) -> &'static str {
        match self {
            ThemeMode::Dark => "☀",
            ThemeMode::Light => "🌙",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
        }
    }

    /// Color table for this mode.
    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Dark => &DARK,
            ThemeMode::Light => &LIGHT,
        }
    }
}

/// Per-theme color table. Every themed surface reads from here; nothing in
/// the renderer assigns literal colors.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Page background behind the scrolling content.
    pub page_fill: egui::Color32,
    /// Navbar and footer background.
    pub panel_fill: egui::Color32,
    /// Text on the navbar and footer.
    pub panel_text: egui::Color32,
    /// Card and section background.
    pub card_fill: egui::Color32,
    /// Card border.
    pub card_stroke: egui::Color32,
    /// Body text.
    pub text: egui::Color32,
    /// Section headings.
    pub heading: egui::Color32,
    /// De-emphasized text (subtitles, footer notes).
    pub muted: egui::Color32,
    /// Hyperlinks.
    pub link: egui::Color32,
    /// Highlight color for selections and emphasis.
    pub accent: egui::Color32,
    /// Form input background.
    pub input_fill: egui::Color32,
    /// Form input border.
    pub input_stroke: egui::Color32,
    /// Table header band.
    pub table_header_fill: egui::Color32,
    /// Text on the table header band.
    pub table_header_text: egui::Color32,
}

/// Decorative "handwriting" accent. Deliberately the same in both palettes
/// so the tagline keeps its look across theme flips.
pub const HANDWRITING: egui::Color32 = egui::Color32::from_rgb(0xff, 0x8c, 0x5f);

const DARK: Palette = Palette {
    page_fill: egui::Color32::from_rgb(0x0a, 0x0a, 0x0f),
    panel_fill: egui::Color32::from_rgb(0x15, 0x15, 0x1f),
    panel_text: egui::Color32::from_rgb(0xff, 0xff, 0xff),
    card_fill: egui::Color32::from_rgb(0x17, 0x17, 0x22),
    card_stroke: egui::Color32::from_rgb(0x2b, 0x2b, 0x3c),
    text: egui::Color32::from_rgb(0xff, 0xff, 0xff),
    heading: egui::Color32::from_rgb(0xff, 0xff, 0xff),
    muted: egui::Color32::from_rgb(0x9d, 0xa3, 0xb4),
    link: egui::Color32::from_rgb(0x00, 0xd4, 0xff),
    accent: egui::Color32::from_rgb(0xff, 0x6b, 0x6b),
    input_fill: egui::Color32::from_rgb(0x12, 0x12, 0x1b),
    input_stroke: egui::Color32::from_rgb(0x3a, 0x3a, 0x50),
    table_header_fill: egui::Color32::from_rgb(0xff, 0x6b, 0x6b),
    table_header_text: egui::Color32::from_rgb(0xff, 0xff, 0xff),
};

const LIGHT: Palette = Palette {
    page_fill: egui::Color32::from_rgb(0xf5, 0xf7, 0xfa),
    panel_fill: egui::Color32::from_rgb(0x66, 0x7e, 0xea),
    panel_text: egui::Color32::from_rgb(0xff, 0xff, 0xff),
    card_fill: egui::Color32::from_rgb(0xff, 0xff, 0xff),
    card_stroke: egui::Color32::from_rgb(0xd8, 0xde, 0xe8),
    text: egui::Color32::from_rgb(0x2c, 0x3e, 0x50),
    heading: egui::Color32::from_rgb(0x2c, 0x3e, 0x50),
    muted: egui::Color32::from_rgb(0x6c, 0x7a, 0x89),
    link: egui::Color32::from_rgb(0x3b, 0x5b, 0xdb),
    accent: egui::Color32::from_rgb(0x76, 0x4b, 0xa2),
    input_fill: egui::Color32::from_rgb(0xff, 0xff, 0xff),
    input_stroke: egui::Color32::from_rgb(0xce, 0xd4, 0xda),
    table_header_fill: egui::Color32::from_rgb(0x66, 0x7e, 0xea),
    table_header_text: egui::Color32::from_rgb(0xff, 0xff, 0xff),
};

/// Apply the selected theme to the egui context.
pub fn apply(ctx: &egui::Context, mode: ThemeMode) {
    let palette = mode.palette();
    let mut visuals = match mode {
        ThemeMode::Light => egui::Visuals::light(),
        ThemeMode::Dark => egui::Visuals::dark(),
    };
    visuals.panel_fill = palette.page_fill;
    visuals.window_fill = palette.card_fill;
    visuals.window_stroke = egui::Stroke::new(1.0, palette.card_stroke);
    visuals.extreme_bg_color = palette.input_fill;
    visuals.faint_bg_color = palette.card_fill;
    visuals.hyperlink_color = palette.link;
    visuals.selection.bg_fill = palette.accent.gamma_multiply(0.4);
    visuals.widgets.noninteractive.fg_stroke.color = palette.text;
    visuals.widgets.noninteractive.bg_stroke.color = palette.card_stroke;
    visuals.widgets.inactive.fg_stroke.color = palette.text;
    visuals.widgets.inactive.bg_stroke.color = palette.input_stroke;
    visuals.widgets.hovered.fg_stroke.color = palette.heading;
    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_preference_defaults_to_dark_with_sun_glyph() {
        let mode = ThemeMode::default();
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(mode.toggle_glyph(), "☀");
        assert_eq!(ThemeMode::Light.toggle_glyph(), "🌙");
    }

    #[test]
    fn double_toggle_is_identity() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            assert_eq!(mode.toggled().toggled(), mode);
            assert_ne!(mode.toggled(), mode);
        }
    }

    #[test]
    fn serializes_as_lowercase_names() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        assert_eq!(
            serde_json::to_string(&ThemeMode::Light).unwrap(),
            "\"light\""
        );
    }

    #[test]
    fn unknown_stored_value_falls_back_to_dark() {
        let mode: ThemeMode = serde_json::from_str("\"sepia\"").unwrap();
        assert_eq!(mode, ThemeMode::Dark);
    }

    #[test]
    fn palettes_cover_both_modes_with_distinct_surfaces() {
        let dark = ThemeMode::Dark.palette();
        let light = ThemeMode::Light.palette();
        assert_ne!(dark.page_fill, light.page_fill);
        assert_ne!(dark.text, light.text);
        assert_ne!(dark.card_fill, light.card_fill);
    }
}
