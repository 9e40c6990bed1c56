//! Search bar component

use ratatui::{
    style::Style,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::super::app::App;
use crate::theme::Palette;

/// Search input component at the top of the screen
pub struct SearchBar;

impl SearchBar {
    /// Render the search bar; a block cursor marks active input mode
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, app: &App, palette: Palette) {
        let content = if app.searching {
            format!("{}█", app.search_query)
        } else if app.search_query.is_empty() {
            "Press '/' to search".to_string()
        } else {
            app.search_query.clone()
        };

        let border_color = if app.searching { palette.accent } else { palette.dimmed };

        let search_bar = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" {} Search ", app.icons.search()))
                    .style(Style::default().fg(border_color).bg(palette.background)),
            )
            .style(Style::default().fg(palette.foreground));

        f.render_widget(search_bar, area);
    }
}
