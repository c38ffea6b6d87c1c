//! Application state and event handling.
//!
//! Translates terminal key events into [`Session`] events. The session owns
//! the task list and edit slots; `App` only adds focus, cursor and
//! selection, plus the raw text of whatever field is being typed into.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pointlist_core::Session;

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// New-task input box (default).
    Input,
    /// Task list.
    Tasks,
}

/// Which task field is being edited inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    /// The points tag.
    Points,
    /// The task name.
    Name,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    /// Task list, edit sessions and new-task text.
    pub session: Session,
    /// Heading shown above the list.
    pub title: String,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Cursor position in the new-task input (character index).
    pub cursor_position: usize,
    /// Selected row in the task list (sorted index).
    pub selected: usize,
    /// Field currently being edited, if any.
    pub editing: Option<EditField>,
    /// Raw text typed into the field being edited.
    pub edit_buffer: String,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create an application around an existing session.
    #[must_use]
    pub fn new(session: Session) -> Self {
        let cursor_position = session.next_task().chars().count();
        Self {
            session,
            title: "TODO".to_string(),
            focus: PanelFocus::Input,
            cursor_position,
            selected: 0,
            editing: None,
            edit_buffer: String::new(),
            should_quit: false,
        }
    }

    /// Builder method to set the heading.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.should_quit = true;
            return;
        }

        if self.editing.is_some() {
            self.handle_edit_key(key);
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.cycle_focus();
                return;
            }
            _ => {}
        }

        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::Tasks => self.handle_tasks_key(key),
        }
    }

    /// Handle key event while a field is being edited.
    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => self.blur(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.blur();
                self.cycle_focus();
            }
            KeyCode::Char(c) => {
                self.edit_buffer.push(c);
                self.push_draft();
            }
            KeyCode::Backspace => {
                self.edit_buffer.pop();
                self.push_draft();
            }
            _ => {}
        }
    }

    /// Handle key event when input is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_task(),
            KeyCode::Char(c) => self.enter_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Left => self.move_cursor_left(),
            KeyCode::Right => self.move_cursor_right(),
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.session.next_task().chars().count(),
            _ => {}
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_tasks_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('p') => self.begin_edit(EditField::Points),
            KeyCode::Char('e') | KeyCode::Enter => self.begin_edit(EditField::Name),
            KeyCode::Char('d') | KeyCode::Delete => self.remove_selected(),
            _ => {}
        }
    }

    /// Toggle focus between the input box and the task list.
    const fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::Tasks,
            PanelFocus::Tasks => PanelFocus::Input,
        };
    }

    /// Submit the new-task input and clear it. Blank input is ignored.
    fn submit_task(&mut self) {
        if self.session.next_task().trim().is_empty() {
            return;
        }
        tracing::info!(raw = self.session.next_task(), "adding task");
        self.session.submit_next_task();
        self.session.set_next_task(String::new());
        self.cursor_position = 0;
    }

    /// Open an inline edit on the selected task.
    ///
    /// Only reachable while no edit is open; edit keys are routed to
    /// [`Self::handle_edit_key`] until the field is blurred.
    fn begin_edit(&mut self, field: EditField) {
        if self.session.is_empty() {
            return;
        }
        match field {
            EditField::Points => {
                self.session.click_points(self.selected);
                if let Some(edit) = self.session.points_edit() {
                    self.edit_buffer = edit.draft.to_string();
                    self.editing = Some(field);
                }
            }
            EditField::Name => {
                self.session.click_name(self.selected);
                if let Some(edit) = self.session.name_edit() {
                    self.edit_buffer.clone_from(&edit.draft);
                    self.editing = Some(field);
                }
            }
        }
    }

    /// Forward the edit buffer to the open session as the new draft.
    fn push_draft(&mut self) {
        match self.editing {
            Some(EditField::Points) => self.session.change_points_draft(&self.edit_buffer),
            Some(EditField::Name) => self.session.change_name_draft(&self.edit_buffer),
            None => {}
        }
    }

    /// Commit the open edit, if any.
    fn blur(&mut self) {
        match self.editing.take() {
            Some(EditField::Points) => self.session.blur_points(),
            Some(EditField::Name) => self.session.blur_name(),
            None => return,
        }
        self.edit_buffer.clear();
        self.clamp_selection();
    }

    /// Remove the selected task.
    fn remove_selected(&mut self) {
        if self.session.is_empty() {
            return;
        }
        tracing::info!(index = self.selected, "removing task");
        self.session.click_remove(self.selected);
        self.clamp_selection();
    }

    /// Keep the selection inside the list after it shrinks.
    const fn clamp_selection(&mut self) {
        let len = self.session.len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Byte offset of the cursor within the new-task text.
    fn cursor_byte_index(&self) -> usize {
        let text = self.session.next_task();
        text.char_indices()
            .nth(self.cursor_position)
            .map_or(text.len(), |(i, _)| i)
    }

    /// Insert a character at the cursor position.
    fn enter_char(&mut self, c: char) {
        let index = self.cursor_byte_index();
        let mut text = self.session.next_task().to_string();
        text.insert(index, c);
        self.session.set_next_task(text);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor.
    fn delete_char(&mut self) {
        if self.cursor_position == 0 {
            return;
        }
        self.cursor_position -= 1;
        let index = self.cursor_byte_index();
        let mut text = self.session.next_task().to_string();
        text.remove(index);
        self.session.set_next_task(text);
    }

    /// Move cursor left.
    const fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    /// Move cursor right.
    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.session.next_task().chars().count() {
            self.cursor_position += 1;
        }
    }

    /// Select the previous task.
    const fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Select the next task.
    const fn select_next(&mut self) {
        if self.selected < self.session.len().saturating_sub(1) {
            self.selected += 1;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Session::default())
    }
}
