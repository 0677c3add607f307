// aura-fit-tui/src/ui/theme.rs
use aura_fit_lib::StandardColor;
use ratatui::style::{Color, Modifier, Style};

pub const MUTED: Color = Color::DarkGray;

pub fn to_color(value: StandardColor) -> Color {
    match value {
        StandardColor::Black => Color::Black,
        StandardColor::Red => Color::Red,
        StandardColor::Green => Color::Green,
        StandardColor::Yellow => Color::Yellow,
        StandardColor::Blue => Color::Blue,
        StandardColor::Magenta => Color::Magenta,
        StandardColor::Cyan => Color::Cyan,
        StandardColor::White => Color::White,
        StandardColor::DarkGrey => Color::DarkGray,
        StandardColor::LightRed => Color::LightRed,
        StandardColor::LightGreen => Color::LightGreen,
        StandardColor::LightYellow => Color::LightYellow,
        StandardColor::LightBlue => Color::LightBlue,
        StandardColor::LightMagenta => Color::LightMagenta,
        StandardColor::LightCyan => Color::LightCyan,
        StandardColor::Grey => Color::Gray,
    }
}

pub fn accent_style(accent: StandardColor) -> Style {
    Style::default().fg(to_color(accent))
}

pub fn accent_bold(accent: StandardColor) -> Style {
    accent_style(accent).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}
