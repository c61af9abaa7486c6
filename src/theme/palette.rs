use ratatui::style::Color;

/// Named color roles shared by every palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub base: Color,
    pub crust: Color,
    pub surface0: Color,
    pub surface1: Color,
    pub overlay: Color,
    pub text: Color,
    pub subtext: Color,
    pub blue: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
    pub mauve: Color,
    pub teal: Color,
}

pub const DARK: Palette = Palette {
    base: Color::Rgb(30, 30, 46),
    crust: Color::Rgb(17, 17, 27),
    surface0: Color::Rgb(49, 50, 68),
    surface1: Color::Rgb(69, 71, 90),
    overlay: Color::Rgb(108, 112, 134),
    text: Color::Rgb(205, 214, 244),
    subtext: Color::Rgb(166, 173, 200),
    blue: Color::Rgb(137, 180, 250),
    green: Color::Rgb(166, 227, 161),
    yellow: Color::Rgb(249, 226, 175),
    red: Color::Rgb(243, 139, 168),
    mauve: Color::Rgb(203, 166, 247),
    teal: Color::Rgb(148, 226, 213),
};

pub const LIGHT: Palette = Palette {
    base: Color::Rgb(239, 241, 245),
    crust: Color::Rgb(220, 224, 232),
    surface0: Color::Rgb(204, 208, 218),
    surface1: Color::Rgb(188, 192, 204),
    overlay: Color::Rgb(140, 143, 161),
    text: Color::Rgb(76, 79, 105),
    subtext: Color::Rgb(92, 95, 119),
    blue: Color::Rgb(30, 102, 245),
    green: Color::Rgb(64, 160, 43),
    yellow: Color::Rgb(223, 142, 29),
    red: Color::Rgb(210, 15, 57),
    mauve: Color::Rgb(136, 57, 239),
    teal: Color::Rgb(23, 146, 153),
};
