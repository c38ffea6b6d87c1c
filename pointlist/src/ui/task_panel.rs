//! Task list rendering.

use pointlist_core::{Severity, TaskView};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use super::theme;
use crate::app::{App, EditField, PanelFocus};

/// Render the task list in descending points order.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Tasks;

    let tasks = app.session.tasks();
    let items: Vec<ListItem> = tasks
        .iter()
        .map(|task| ListItem::new(task_line(app, task)))
        .collect();

    let block = Block::default()
        .title(format!("Tasks ({})", items.len()))
        .title_style(theme::panel_title(theme::TASKS_TITLE))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let list = List::new(items)
        .block(block)
        .highlight_style(if is_focused {
            theme::selected_row()
        } else {
            Style::default()
        });

    let mut state = ListState::default();
    if !app.session.is_empty() {
        state.select(Some(app.selected));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

/// Build one row: points tag, name, and any open edit drafts.
fn task_line<'a>(app: &'a App, task: &'a TaskView) -> Line<'a> {
    let editing_points = app.editing == Some(EditField::Points)
        && app.session.points_edit().is_some_and(|e| e.index == task.index);
    let editing_name = app.editing == Some(EditField::Name)
        && app.session.name_edit().is_some_and(|e| e.index == task.index);

    let points = if editing_points {
        Span::styled(format!(" {}█ ", app.edit_buffer), theme::editing())
    } else {
        Span::styled(format!(" {:>3} ", task.points), theme::points_tag(task.severity))
    };

    let name = if editing_name {
        Span::styled(format!("{}█", app.edit_buffer), theme::editing())
    } else {
        Span::styled(task.name.as_str(), name_style(task.severity))
    };

    Line::from(vec![points, Span::raw(" "), name])
}

/// Style for a task name by severity.
fn name_style(severity: Severity) -> Style {
    match severity {
        Severity::Normal => theme::normal(),
        Severity::Critical => theme::critical(),
    }
}
