//! Task creation dialog component

use ratatui::{
    layout::{Constraint, Direction, Layout},
    widgets::Clear,
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;
use super::common::{self, shortcuts};
use crate::theme::Palette;
use crate::validate::TaskField;

/// Task creation dialog component
pub struct TaskCreationDialog;

impl TaskCreationDialog {
    /// Render the add-task dialog with its three input fields
    pub fn render(f: &mut Frame, app: &App, palette: Palette) {
        let dialog_area = LayoutManager::centered_rect_lines(60, 13, f.area());
        f.render_widget(Clear, dialog_area);

        let block = common::create_dialog_block(" New Task ", palette);
        let inner = block.inner(dialog_area);
        f.render_widget(block, dialog_area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Description
                Constraint::Length(3), // Due date
                Constraint::Length(3), // Due time
                Constraint::Length(1), // Instructions
            ])
            .split(inner);

        let description = common::create_input_paragraph(
            &app.new_task_description,
            "Task",
            app.new_task_focus == TaskField::Description,
            palette,
        );
        f.render_widget(description, rows[0]);

        let due_date = common::create_input_paragraph(
            &app.new_task_due_date,
            "Due date (YYYY-MM-DD)",
            app.new_task_focus == TaskField::DueDate,
            palette,
        );
        f.render_widget(due_date, rows[1]);

        let due_time = common::create_input_paragraph(
            &app.new_task_due_time,
            "Due time (HH:MM)",
            app.new_task_focus == TaskField::DueTime,
            palette,
        );
        f.render_widget(due_time, rows[2]);

        let instructions = common::create_instructions_paragraph(&[
            shortcuts::ENTER_SUBMIT,
            shortcuts::SEPARATOR,
            shortcuts::TAB_NEXT_FIELD,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);
        f.render_widget(instructions, rows[3]);
    }
}
