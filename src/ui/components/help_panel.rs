//! Help panel component

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::super::app::App;
use super::super::layout::LayoutManager;
use crate::theme::Palette;

/// Help panel listing all key bindings
pub struct HelpPanel;

impl HelpPanel {
    /// Render the help panel as a centered overlay
    pub fn render(f: &mut Frame, app: &App, palette: Palette) {
        let area = LayoutManager::centered_rect(60, 70, f.area());
        f.render_widget(Clear, area);

        let bindings: &[(&str, &str)] = &[
            ("a", "open the add-task dialog"),
            ("Space", "toggle selected task pending/completed"),
            ("e", "edit selected task's description"),
            ("d", "delete selected task"),
            ("D", "delete all completed tasks"),
            ("f", "cycle filter: all / pending / completed"),
            ("/", "search tasks by text"),
            ("t", "toggle light/dark theme"),
            ("j / k, arrows", "move selection"),
            ("? / h", "this help"),
            ("q / Ctrl+C", "quit"),
        ];

        let mut lines: Vec<Line> = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Key bindings",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for (key, description) in bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<14}"), Style::default().fg(palette.accent)),
                Span::styled(*description, Style::default().fg(palette.foreground)),
            ]));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Tasks are ordered earliest-due first and are not persisted across runs.",
            Style::default().fg(palette.dimmed),
        )));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Help ")
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(palette.foreground).bg(palette.background)),
            )
            .scroll((app.help_scroll_offset as u16, 0));

        f.render_widget(paragraph, area);
    }
}
