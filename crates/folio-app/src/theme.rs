#![forbid(unsafe_code)]

//! Shared styles: a paper-and-ink palette mapped to terminal colors, plus
//! spacing constants for the page grid.

use ratatui::style::{Color, Modifier, Style};

/// Primary ink.
pub const PRIMARY: Color = Color::White;
/// Secondary ink for body copy.
pub const SECONDARY: Color = Color::Gray;
/// Muted ink for captions, separators, inactive controls.
pub const MUTED: Color = Color::DarkGray;
/// The highlight green behind the active nav item.
pub const ACCENT: Color = Color::Rgb(71, 221, 78);
/// Panel surface for overlays.
pub const SURFACE: Color = Color::Rgb(30, 30, 30);

/// Horizontal page margin in columns.
pub const PAGE_MARGIN: u16 = 3;
/// Terminal width below which the ToC widget is not shown at all; narrow
/// windows give the whole width to the text column.
pub const TOC_MIN_TERM_WIDTH: u16 = 100;

pub fn wordmark() -> Style {
    Style::new().fg(SECONDARY)
}

pub fn nav_active() -> Style {
    Style::new()
        .fg(Color::Black)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn nav_inactive() -> Style {
    Style::new().fg(SECONDARY)
}

pub fn hero_name() -> Style {
    Style::new().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn heading2() -> Style {
    Style::new().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn heading3() -> Style {
    Style::new().fg(PRIMARY).add_modifier(Modifier::BOLD | Modifier::ITALIC)
}

pub fn body() -> Style {
    Style::new().fg(SECONDARY)
}

pub fn caption() -> Style {
    Style::new().fg(MUTED).add_modifier(Modifier::ITALIC)
}

pub fn quote() -> Style {
    Style::new().fg(SECONDARY).add_modifier(Modifier::ITALIC)
}

pub fn chip() -> Style {
    Style::new().fg(Color::Black).bg(SECONDARY)
}

pub fn divider() -> Style {
    Style::new().fg(MUTED)
}

pub fn card_title() -> Style {
    Style::new().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn card_selected() -> Style {
    Style::new().fg(ACCENT)
}

pub fn toc_heading() -> Style {
    Style::new().fg(MUTED).add_modifier(Modifier::BOLD)
}

pub fn toc_active() -> Style {
    Style::new()
        .fg(PRIMARY)
        .bg(Color::Rgb(60, 60, 60))
        .add_modifier(Modifier::BOLD)
}

pub fn toc_inactive() -> Style {
    Style::new().fg(SECONDARY)
}

pub fn toc_bar_active() -> Style {
    Style::new().fg(PRIMARY)
}

pub fn toc_bar_inactive() -> Style {
    Style::new().fg(MUTED)
}

pub fn toc_control() -> Style {
    Style::new().fg(MUTED)
}

pub fn tooltip() -> Style {
    Style::new().fg(Color::Black).bg(Color::Gray)
}

pub fn footer() -> Style {
    Style::new().fg(MUTED)
}

pub fn footer_link() -> Style {
    Style::new().fg(SECONDARY).add_modifier(Modifier::UNDERLINED)
}

pub fn copied_feedback() -> Style {
    Style::new().fg(ACCENT)
}
