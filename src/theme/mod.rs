use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod palette;

pub use palette::Palette;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header: Style,
    pub header_logo: Style,
    pub header_item: Style,
    pub header_active: Style,

    pub list_item: Style,
    pub list_selected: Style,
    pub list_icon: Style,
    pub dimmed: Style,
    pub highlight: Style,

    pub input_prompt: Style,
    pub input_text: Style,
    pub placeholder: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_error: Style,
    pub error_text: Style,
    pub footer: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    Dark,
    Light,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::Dark => "Dark",
            PaletteType::Light => "Light",
        }
    }

    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            PaletteType::Dark => "dark",
            PaletteType::Light => "light",
        }
    }

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &[PaletteType::Dark, PaletteType::Light]
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::Dark => Self::from_palette(&palette::DARK),
            PaletteType::Light => Self::from_palette(&palette::LIGHT),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface1),
            border_focus: Style::default().fg(p.blue),

            header: Style::default().bg(p.base).fg(p.text),
            header_logo: Style::default()
                .bg(p.mauve)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header_active: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            list_item: Style::default().fg(p.text),
            list_selected: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_icon: Style::default().fg(p.teal),
            dimmed: Style::default().fg(p.overlay).add_modifier(Modifier::DIM),
            highlight: Style::default().bg(p.surface0).add_modifier(Modifier::BOLD),

            input_prompt: Style::default().fg(p.blue).add_modifier(Modifier::BOLD),
            input_text: Style::default().fg(p.text),
            placeholder: Style::default().fg(p.overlay).add_modifier(Modifier::DIM),

            status_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.blue)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            error_text: Style::default().fg(p.red).add_modifier(Modifier::BOLD),
            footer: Style::default().bg(p.crust).fg(p.subtext),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::Dark)
    }
}
