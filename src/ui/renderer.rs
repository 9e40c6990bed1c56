//! Main UI rendering and coordination

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use super::app::App;
use super::components::{
    dialogs::{ErrorDialog, TaskCreationDialog, TaskEditDialog},
    HelpPanel, SearchBar, StatusBar, TasksList,
};
use super::events::handle_events;
use super::layout::LayoutManager;
use crate::config::Config;
use crate::theme::FileThemeStore;

/// Run the main TUI application
pub fn run_app(config: Config) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.ui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create application state; the persisted theme applies at startup
    let theme_store = FileThemeStore::new(FileThemeStore::default_path()?);
    let mut app = App::new(&config, Box::new(theme_store));
    app.apply_filters();

    // Main application loop
    let res = run_ui(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    if config.ui.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    terminal.show_cursor()?;

    res
}

/// Main UI loop: draw, then block on the next event.
///
/// One event is processed to completion before the next is read, so every
/// operation runs without interleaved state mutation.
fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| render_ui(f, app))?;

        let _handled = handle_events(event::read()?, app)?;

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Main UI rendering function
fn render_ui(f: &mut ratatui::Frame, app: &mut App) {
    let palette = app.theme.palette();
    let chunks = LayoutManager::main_layout(f.area());

    // Render components
    SearchBar::render(f, chunks[0], app, palette);
    TasksList::render(f, chunks[1], app, palette);
    StatusBar::render(f, chunks[2], app, palette);

    // Render dialog overlays
    if app.creating_task {
        TaskCreationDialog::render(f, app, palette);
    }

    if app.editing_task {
        TaskEditDialog::render(f, app, palette);
    }

    // Error dialog goes above everything except help
    if app.error_message.is_some() {
        ErrorDialog::render(f, app, palette);
    }

    // Render help panel last to ensure it's on top of everything
    if app.show_help {
        HelpPanel::render(f, app, palette);
    }
}
