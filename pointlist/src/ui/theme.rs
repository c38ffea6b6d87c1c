//! Theme and styling constants for the TUI.

use pointlist_core::Severity;
use ratatui::style::{Color, Modifier, Style};

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Cyan;

/// Critical task color.
pub const CRITICAL: Color = Color::Red;

/// Background of a normal points tag.
pub const TAG_BG: Color = Color::Rgb(60, 60, 70);

/// Panel title color for the tasks panel.
pub const TASKS_TITLE: Color = Color::Green;

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (placeholders, help).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Heading style.
#[must_use]
pub fn heading() -> Style {
    bold().add_modifier(Modifier::UNDERLINED)
}

/// Highlighted text style (focused panel borders).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Selected row style in the task list.
#[must_use]
pub fn selected_row() -> Style {
    Style::default()
        .bg(Color::Rgb(40, 60, 80))
        .add_modifier(Modifier::BOLD)
}

/// Name style for critical tasks.
#[must_use]
pub fn critical() -> Style {
    Style::default().fg(CRITICAL).add_modifier(Modifier::BOLD)
}

/// Points tag style, by severity.
#[must_use]
pub fn points_tag(severity: Severity) -> Style {
    match severity {
        Severity::Normal => Style::default().fg(FG_PRIMARY).bg(TAG_BG),
        Severity::Critical => Style::default()
            .fg(Color::White)
            .bg(CRITICAL)
            .add_modifier(Modifier::BOLD),
    }
}

/// Style for a field being edited inline.
#[must_use]
pub fn editing() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Style for the input cursor (bright white, bold).
#[must_use]
pub fn input_cursor() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for the status bar background (dark background with white foreground).
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

/// Style for panel titles with a given color (bold).
#[must_use]
pub fn panel_title(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
