//! UI theme definitions.

use egui::{Color32, Visuals};

/// Theme configuration for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Theme matching the `dark_theme` setting.
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Value stored in the `dark_theme` setting.
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => dark_visuals(),
            Theme::Light => light_visuals(),
        }
    }

    /// Icon for the theme toggle button.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Dark => "🌙",
            Theme::Light => "☀",
        }
    }
}

/// Button fills shared by both themes.
pub struct ActionColors;

impl ActionColors {
    /// Edit / add / navigation (blue)
    pub const PRIMARY: Color32 = Color32::from_rgb(59, 130, 246);
    /// Save (green)
    pub const SAVE: Color32 = Color32::from_rgb(34, 197, 94);
    /// Cancel (yellow)
    pub const CANCEL: Color32 = Color32::from_rgb(234, 179, 8);
    /// Delete (red)
    pub const DELETE: Color32 = Color32::from_rgb(239, 68, 68);
    /// Error text
    pub const ERROR_TEXT: Color32 = Color32::from_rgb(234, 67, 53);
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    pub const BACKGROUND: Color32 = Color32::from_rgb(18, 18, 24);
    pub const PANEL_BG: Color32 = Color32::from_rgb(28, 28, 36);
    pub const CARD_BG: Color32 = Color32::from_rgb(38, 38, 48);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 170);
    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 70);
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    pub const BACKGROUND: Color32 = Color32::from_rgb(250, 250, 252);
    pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
    pub const CARD_BG: Color32 = Color32::from_rgb(229, 231, 235);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(32, 32, 40);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(96, 96, 104);
    pub const BORDER: Color32 = Color32::from_rgb(218, 218, 224);
}

fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = DarkTheme::PANEL_BG;
    visuals.panel_fill = DarkTheme::PANEL_BG;
    visuals.faint_bg_color = DarkTheme::CARD_BG;
    visuals.extreme_bg_color = DarkTheme::BACKGROUND;

    visuals.widgets.noninteractive.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = DarkTheme::TEXT_SECONDARY;
    visuals.widgets.noninteractive.bg_stroke.color = DarkTheme::BORDER;

    visuals
}

fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = LightTheme::PANEL_BG;
    visuals.panel_fill = LightTheme::PANEL_BG;
    visuals.faint_bg_color = LightTheme::CARD_BG;
    visuals.extreme_bg_color = LightTheme::BACKGROUND;

    visuals.widgets.noninteractive.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = LightTheme::TEXT_SECONDARY;
    visuals.widgets.noninteractive.bg_stroke.color = LightTheme::BORDER;

    visuals
}
