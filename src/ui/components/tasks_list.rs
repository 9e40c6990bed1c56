//! Tasks list component

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use super::super::app::App;
use crate::task::Task;
use crate::theme::Palette;

/// Tasks list component
pub struct TasksList;

impl TasksList {
    /// Render the list of visible tasks
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App, palette: Palette) {
        let title = format!(
            "{} Tasks — {} ({} of {})",
            app.icons.tasks_title(),
            app.filter_mode.label(),
            app.store.visible_count(),
            app.store.len()
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_alignment(Alignment::Center)
            .style(Style::default().fg(palette.foreground).bg(palette.background));

        if app.store.visible_count() == 0 {
            let empty_message = if app.store.is_empty() {
                "No tasks yet. Press 'a' to add one."
            } else {
                "No tasks match the current filter or search."
            };

            let empty_list = List::new(vec![ListItem::new(Span::styled(
                empty_message,
                Style::default().fg(palette.dimmed),
            ))])
            .block(block);

            f.render_stateful_widget(empty_list, area, &mut app.task_list_state.clone());
            return;
        }

        let items: Vec<ListItem<'_>> = app
            .store
            .visible_tasks()
            .map(|task| Self::create_task_item(task, app, palette))
            .collect();

        let tasks_list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(palette.highlight_fg)
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD),
        );

        f.render_stateful_widget(tasks_list, area, &mut app.task_list_state.clone());
    }

    /// Build one list row: checkbox, description, dimmed due label
    fn create_task_item<'a>(task: &'a Task, app: &App, palette: Palette) -> ListItem<'a> {
        let checkbox = if task.is_completed() {
            app.icons.completed()
        } else {
            app.icons.pending()
        };

        let mut description_style = Style::default().fg(palette.foreground);
        if task.is_completed() {
            description_style = description_style.add_modifier(Modifier::CROSSED_OUT);
        }

        let mut spans = vec![
            Span::raw(checkbox),
            Span::raw(" "),
            Span::styled(task.description.as_str(), description_style),
        ];

        let due_label = task.due_label();
        if !due_label.is_empty() {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(due_label, Style::default().fg(palette.dimmed)));
        }

        ListItem::new(Line::from(spans))
    }
}
