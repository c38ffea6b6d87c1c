//! Terminal UI rendering.

pub mod input_panel;
pub mod status_bar;
pub mod task_panel;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Length(3), // New-task input
            Constraint::Min(3),    // Tasks
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_heading(frame, chunks[0], app);
    input_panel::render(frame, chunks[1], app);
    task_panel::render(frame, chunks[2], app);
    status_bar::render(frame, chunks[3], app);
}

/// Render the centered heading.
fn render_heading(frame: &mut Frame, area: Rect, app: &App) {
    let heading = Paragraph::new(app.title.as_str())
        .style(theme::heading())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM).border_style(theme::dimmed()));
    frame.render_widget(heading, area);
}
