//! New-task input box rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the new-task input box.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Input && app.editing.is_none();
    let text = app.session.next_task();

    let input_line = if text.is_empty() && !is_focused {
        Line::from(Span::styled("Name", theme::dimmed()))
    } else if is_focused {
        let (before, after) = split_at_char(text, app.cursor_position);
        Line::from(vec![
            Span::styled(before, theme::normal()),
            Span::styled("█", theme::input_cursor()),
            Span::styled(after, theme::normal()),
        ])
    } else {
        Line::from(Span::styled(text, theme::normal()))
    };

    let block = Block::default()
        .title("Add task (e.g. \"eat the frog 20pts\")")
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let paragraph = Paragraph::new(input_line).block(block);

    frame.render_widget(paragraph, area);
}

/// Split `text` before the character at `cursor`.
fn split_at_char(text: &str, cursor: usize) -> (&str, &str) {
    let index = text
        .char_indices()
        .nth(cursor)
        .map_or(text.len(), |(i, _)| i);
    text.split_at(index)
}
