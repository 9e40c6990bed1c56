//! Task edit dialog component

use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Clear,
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;
use super::common::{self, shortcuts};
use crate::theme::Palette;

/// Task edit dialog component
///
/// The terminal rendition of the blocking edit prompt: pre-filled with the
/// current description, Esc cancels, Enter submits.
pub struct TaskEditDialog;

impl TaskEditDialog {
    /// Render the task edit dialog
    pub fn render(f: &mut Frame, app: &App, palette: Palette) {
        let dialog_area = LayoutManager::centered_rect_lines(60, 7, f.area());
        f.render_widget(Clear, dialog_area);

        let block = common::create_dialog_block(" Edit Task ", palette);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Description
                Constraint::Length(1), // Instructions
            ])
            .split(inner);

        let description = common::create_input_paragraph(&app.edit_task_description, "Task", true, palette);
        f.render_widget(description, rows[0]);

        let instructions = common::create_instructions_paragraph(&[
            shortcuts::ENTER_SUBMIT,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(instructions, rows[1]);
    }
}
