//! Error dialog component

use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::super::super::app::App;
use super::super::super::layout::LayoutManager;
use crate::theme::Palette;

/// Modal error dialog; the terminal rendition of the blocking alert.
/// Captures all input until acknowledged.
pub struct ErrorDialog;

impl ErrorDialog {
    /// Render the error dialog
    pub fn render(f: &mut Frame, app: &App, palette: Palette) {
        let Some(message) = &app.error_message else {
            return;
        };

        let dialog_area = LayoutManager::centered_rect_lines(50, 6, f.area());
        f.render_widget(Clear, dialog_area);

        let paragraph = Paragraph::new(format!("\n{} {}", app.icons.error(), message))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Error — press Enter ")
                    .title_alignment(Alignment::Center)
                    .style(Style::default().fg(Color::Red).bg(palette.background)),
            )
            .style(Style::default().fg(palette.foreground))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        f.render_widget(paragraph, dialog_area);
    }
}
