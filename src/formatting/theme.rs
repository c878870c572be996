use std::collections::HashMap;
use std::sync::RwLock;

use lazy_static::lazy_static;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

/// Mode the app ships with. Switching it is a build decision, not something
/// screens toggle at runtime.
pub const DEFAULT_MODE: ThemeMode = ThemeMode::Dark;

/// Named color roles consumed by the screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Background,
    Surface,
    Text,
    Muted,
    Accent,
    Border,
}

/// One palette: role -> color. Values are fixed; nothing is computed at
/// runtime.
#[derive(Debug, Clone)]
pub struct Palette {
    mode: ThemeMode,
    colors: HashMap<ColorRole, Color>,
}

impl Palette {
    pub fn light() -> Self {
        let mut colors = HashMap::new();

        colors.insert(ColorRole::Background, Color::Rgb(255, 255, 255));
        colors.insert(ColorRole::Surface, Color::Rgb(242, 244, 245));
        colors.insert(ColorRole::Text, Color::Rgb(17, 24, 28));
        colors.insert(ColorRole::Muted, Color::Rgb(104, 112, 118));
        colors.insert(ColorRole::Accent, Color::Rgb(10, 126, 164));
        colors.insert(ColorRole::Border, Color::Rgb(225, 229, 231));

        Self {
            mode: ThemeMode::Light,
            colors,
        }
    }

    pub fn dark() -> Self {
        let mut colors = HashMap::new();

        colors.insert(ColorRole::Background, Color::Rgb(21, 23, 24));
        colors.insert(ColorRole::Surface, Color::Rgb(30, 32, 34));
        colors.insert(ColorRole::Text, Color::Rgb(236, 237, 238));
        colors.insert(ColorRole::Muted, Color::Rgb(155, 161, 166));
        colors.insert(ColorRole::Accent, Color::Rgb(10, 126, 164));
        colors.insert(ColorRole::Border, Color::Rgb(42, 45, 46));

        Self {
            mode: ThemeMode::Dark,
            colors,
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn get(&self, role: ColorRole) -> Color {
        self.colors.get(&role).copied().unwrap_or(Color::White)
    }
}

lazy_static! {
    /// Process-wide palette, fixed to DEFAULT_MODE at startup.
    static ref THEME: RwLock<Palette> = RwLock::new(Palette::for_mode(DEFAULT_MODE));
}

pub fn current_palette() -> Palette {
    THEME.read().unwrap().clone()
}

pub fn set_theme_mode(mode: ThemeMode) {
    *THEME.write().unwrap() = Palette::for_mode(mode);
}

pub fn theme_color(role: ColorRole) -> Color {
    THEME.read().unwrap().get(role)
}

/// The static style map: named styles the screens render with, assembled from
/// the current palette.
pub mod styles {
    use super::*;

    pub fn screen_container() -> Style {
        Style::default()
            .bg(theme_color(ColorRole::Background))
            .fg(theme_color(ColorRole::Text))
    }

    pub fn screen_title() -> Style {
        Style::default()
            .fg(theme_color(ColorRole::Accent))
            .add_modifier(Modifier::BOLD)
    }

    pub fn body_text() -> Style {
        Style::default().fg(theme_color(ColorRole::Text))
    }

    pub fn widget_label() -> Style {
        Style::default()
            .fg(theme_color(ColorRole::Text))
            .bg(theme_color(ColorRole::Surface))
    }

    pub fn border() -> Style {
        Style::default().fg(theme_color(ColorRole::Border))
    }

    pub fn footer() -> Style {
        Style::default().fg(theme_color(ColorRole::Muted))
    }
}
