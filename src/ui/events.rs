//! Event handling and key bindings

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use super::app::App;

/// Handle all user input events
pub fn handle_events(event: Event, app: &mut App) -> anyhow::Result<bool> {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            // Error dialog is modal: it swallows everything until dismissed
            if app.error_message.is_some() {
                return Ok(handle_error_dialog(key, app));
            }

            // Handle task creation dialog
            if app.creating_task {
                return Ok(handle_task_creation_mode(key, app));
            }

            // Handle task editing dialog
            if app.editing_task {
                return Ok(handle_task_editing_mode(key, app));
            }

            // Handle help panel - block all other shortcuts when help is open
            if app.show_help {
                return Ok(handle_help_panel(key, app));
            }

            // Handle search input mode
            if app.searching {
                return Ok(handle_search_mode(key, app));
            }

            // Handle normal navigation and actions
            return Ok(handle_normal_mode(key, app));
        }
    }
    Ok(false)
}

/// Handle events while the error dialog is open
fn handle_error_dialog(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => {
            app.error_message = None;
            true
        }
        _ => false, // Ignore other keys while the dialog is up
    }
}

/// Handle events while the task creation dialog is open
fn handle_task_creation_mode(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char(c) if !c.is_control() => {
            app.add_char_to_new_task(c);
            true
        }
        KeyCode::Backspace => {
            app.remove_char_from_new_task();
            true
        }
        KeyCode::Tab | KeyCode::Down => {
            app.cycle_new_task_focus();
            true
        }
        KeyCode::Enter => {
            app.submit_new_task();
            true
        }
        KeyCode::Esc => {
            app.cancel_task_creation();
            true
        }
        _ => false,
    }
}

/// Handle events while the task edit dialog is open
fn handle_task_editing_mode(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char(c) if !c.is_control() => {
            app.edit_task_description.push(c);
            true
        }
        KeyCode::Backspace => {
            app.edit_task_description.pop();
            true
        }
        KeyCode::Enter => {
            let text = app.edit_task_description.clone();
            app.submit_edit_response(Some(&text));
            true
        }
        KeyCode::Esc => {
            app.submit_edit_response(None);
            true
        }
        _ => false,
    }
}

/// Handle events while the help panel is open
fn handle_help_panel(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
            app.show_help = false;
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
            true
        }
        _ => false,
    }
}

/// Handle events while the search input is focused
fn handle_search_mode(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char(c) if !c.is_control() => {
            app.push_search_char(c);
            true
        }
        KeyCode::Backspace => {
            app.pop_search_char();
            true
        }
        KeyCode::Enter | KeyCode::Esc => {
            app.stop_search();
            true
        }
        _ => false,
    }
}

/// Handle normal mode navigation and actions
fn handle_normal_mode(key: crossterm::event::KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('a') => {
            app.open_task_creation();
            true
        }
        KeyCode::Char(' ') => {
            app.toggle_selected();
            true
        }
        KeyCode::Char('e') => {
            app.begin_edit_selected();
            true
        }
        KeyCode::Char('d') => {
            app.delete_selected();
            true
        }
        KeyCode::Char('D') => {
            app.delete_completed();
            true
        }
        KeyCode::Char('f') => {
            app.cycle_filter();
            true
        }
        KeyCode::Char('/') => {
            app.start_search();
            true
        }
        KeyCode::Char('t') => {
            app.toggle_theme();
            true
        }
        KeyCode::Char('?') | KeyCode::Char('h') => {
            app.show_help = true;
            true
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.next_task();
            true
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.previous_task();
            true
        }
        _ => false,
    }
}
