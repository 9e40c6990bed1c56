//! Status bar component

use ratatui::{
    layout::Alignment,
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::theme::Palette;

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App, palette: Palette) {
        let status_text = if app.searching {
            "typing search • Enter/Esc: done".to_string()
        } else {
            format!(
                "{} a: add • Space: toggle • e: edit • d: delete • D: purge done • f: filter • t: theme • ?: help • q: quit",
                app.theme_icon()
            )
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.dimmed).bg(palette.background));

        f.render_widget(status_bar, area);
    }
}
