//! Status bar rendering.

use pointlist_core::{CRITICAL_THRESHOLD, Severity};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, EditField, PanelFocus};

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = help_text(app);

    let critical = app
        .session
        .tasks()
        .iter()
        .filter(|t| t.severity == Severity::Critical)
        .count();

    let status_line = Line::from(vec![
        Span::styled("pointlist", theme::bold()),
        Span::raw(" | "),
        Span::styled("●", theme::normal().fg(theme::CRITICAL)),
        Span::raw(format!(" {critical} critical (≥{CRITICAL_THRESHOLD}pts)")),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
    ]);

    let paragraph = Paragraph::new(status_line).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}

/// Key help for the current focus and edit state.
const fn help_text(app: &App) -> &'static str {
    match (app.editing, app.focus) {
        (Some(EditField::Points), _) => "Type points | Enter/Esc: save",
        (Some(EditField::Name), _) => "Type name | Enter/Esc: save",
        (None, PanelFocus::Input) => "Enter: add | Tab: switch panel | Esc: quit",
        (None, PanelFocus::Tasks) => {
            "↑↓/jk: select | p: points | e: name | d: remove | Tab: switch panel | Esc: quit"
        }
    }
}
