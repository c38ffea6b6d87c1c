//! Integration tests for the terminal shell.
//!
//! Drives `App` with key events the way the event loop does, and renders
//! frames into a `TestBackend` to check what the user would see.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pointlist::app::{App, EditField, PanelFocus};
use pointlist::ui;
use pointlist_core::{Session, Task};
use ratatui::{Terminal, backend::TestBackend};

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn fixture() -> App {
    App::new(Session::new(
        Some("eat the frog 20pts".to_string()),
        vec![Task::new("kill bill", 6), Task::new("get shorty", 12)],
    ))
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn names(app: &App) -> Vec<String> {
    app.session.tasks().into_iter().map(|t| t.name).collect()
}

/// Render one frame and return the screen as lines of text.
fn render(app: &App) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(100, 16)).unwrap();
    terminal.draw(|frame| ui::draw(frame, app)).unwrap();
    let buffer = terminal.backend().buffer().clone();
    let width = usize::from(buffer.area.width);
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

fn screen_contains(app: &App, needle: &str) -> bool {
    render(app).iter().any(|line| line.contains(needle))
}

// ===========================================================================
// Input panel
// ===========================================================================

#[test]
fn enter_adds_prefilled_task_and_clears_input() {
    let mut app = fixture();
    assert_eq!(app.focus, PanelFocus::Input);
    press(&mut app, KeyCode::Enter);
    assert_eq!(names(&app), ["eat the frog", "get shorty", "kill bill"]);
    assert_eq!(app.session.next_task(), "");
    assert_eq!(app.cursor_position, 0);
}

#[test]
fn typed_task_is_parsed() {
    let mut app = App::default();
    type_str(&mut app, "file taxes 3pts");
    press(&mut app, KeyCode::Enter);
    let views = app.session.tasks();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].name, "file taxes");
    assert_eq!(views[0].points, 3);
}

// ===========================================================================
// Task panel
// ===========================================================================

#[test]
fn tab_switches_to_task_list() {
    let mut app = fixture();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, PanelFocus::Tasks);
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, PanelFocus::Input);
}

#[test]
fn selection_stays_in_bounds() {
    let mut app = fixture();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Up);
    assert_eq!(app.selected, 0);
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Down);
    assert_eq!(app.selected, 1);
    press(&mut app, KeyCode::Char('k'));
    assert_eq!(app.selected, 0);
}

#[test]
fn points_edit_via_keys() {
    let mut app = fixture();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('p'));
    assert_eq!(app.editing, Some(EditField::Points));
    assert_eq!(app.edit_buffer, "12");

    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    type_str(&mut app, "20");
    press(&mut app, KeyCode::Enter);

    assert!(app.editing.is_none());
    assert!(app.session.points_edit().is_none());
    let views = app.session.tasks();
    assert_eq!(views[0].name, "get shorty");
    assert_eq!(views[0].points, 20);
    assert!(screen_contains(&app, " 20 "));
}

#[test]
fn cleared_points_draft_commits_zero() {
    let mut app = fixture();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('p'));
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Esc);
    assert!(!app.should_quit);
    assert_eq!(names(&app), ["kill bill", "get shorty"]);
    assert_eq!(app.session.tasks()[1].points, 0);
}

#[test]
fn name_edit_via_keys() {
    let mut app = fixture();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.editing, Some(EditField::Name));
    type_str(&mut app, " vol. 2");
    press(&mut app, KeyCode::Tab);

    assert!(app.editing.is_none());
    assert_eq!(app.focus, PanelFocus::Input);
    assert_eq!(names(&app), ["get shorty", "kill bill vol. 2"]);
}

#[test]
fn switching_field_commits_previous_edit() {
    let mut app = fixture();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('p'));
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    type_str(&mut app, "1");
    // Enter commits the points edit; 'e' then opens a name edit.
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.editing, Some(EditField::Name));
    assert!(app.session.points_edit().is_none());
    // The list re-sorted, so index 0 is now "kill bill".
    assert_eq!(app.edit_buffer, "kill bill");
}

#[test]
fn delete_removes_selected_and_clamps() {
    let mut app = fixture();
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('d'));
    assert_eq!(names(&app), ["get shorty"]);
    assert_eq!(app.selected, 0);
    press(&mut app, KeyCode::Delete);
    assert!(app.session.is_empty());
    assert_eq!(app.selected, 0);
}

// ===========================================================================
// Rendering
// ===========================================================================

#[test]
fn renders_heading_tasks_and_input() {
    let app = fixture().with_title("TODO");
    let screen = render(&app);
    assert!(screen.iter().any(|l| l.contains("TODO")));
    assert!(screen.iter().any(|l| l.contains("eat the frog 20pts")));

    let shorty = screen.iter().position(|l| l.contains("get shorty")).unwrap();
    let bill = screen.iter().position(|l| l.contains("kill bill")).unwrap();
    assert!(shorty < bill, "higher points render first");
}

#[test]
fn status_bar_counts_critical_tasks() {
    let mut app = fixture();
    assert!(screen_contains(&app, "1 critical"));
    press(&mut app, KeyCode::Enter);
    assert!(screen_contains(&app, "2 critical"));
}

#[test]
fn placeholder_shown_when_input_empty_and_unfocused() {
    let mut app = App::default();
    press(&mut app, KeyCode::Tab);
    assert!(screen_contains(&app, "Name"));
}
