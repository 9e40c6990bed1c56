//! Shared building blocks for the modal dialogs

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::theme::Palette;

/// Creates a styled main dialog block
pub fn create_dialog_block(title: &str, palette: Palette) -> Block<'_> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(palette.accent).bg(palette.background))
}

/// Creates an input field block; the focused field gets a visual cursor
pub fn create_input_paragraph<'a>(
    input_buffer: &str,
    field_title: &str,
    focused: bool,
    palette: Palette,
) -> Paragraph<'a> {
    let input_display = if focused {
        format!("{input_buffer}█")
    } else {
        input_buffer.to_string()
    };

    let border_color = if focused { palette.accent } else { palette.dimmed };

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {field_title} "))
        .title_style(Style::default().fg(palette.foreground))
        .style(Style::default().fg(border_color));

    Paragraph::new(input_display)
        .block(input_block)
        .style(Style::default().fg(palette.foreground))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ENTER_SUBMIT: InstructionShortcut = ("Enter", Color::Green, " Submit");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const TAB_NEXT_FIELD: InstructionShortcut = ("Tab", Color::Cyan, " Next field");
}
