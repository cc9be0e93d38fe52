//! Terminal user interface
//!
//! This module handles all user interface components, rendering, and user interactions.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod theme;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use theme::Theme;

use crate::backend::TaskService;
use crate::controller::TaskListState;
use crate::logger::Logger;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::sync::Arc;

use self::core::EventHandler;

/// Run the main TUI application
pub async fn run_app(service: Arc<dyn TaskService>, state: TaskListState, logger: Logger) -> Result<()> {
    // Terminal initialization
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(service, state, logger);
    app.trigger_initial_load();

    let res = run_ui(&mut terminal, &mut app).await;

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
async fn run_ui(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut AppComponent) -> Result<()> {
    let mut events = EventHandler::new();

    loop {
        terminal.draw(|f| {
            let area = f.area();
            app.render(f, area);
        })?;

        let event = events.next_event().await?;
        app.handle_event(event);
        app.process_background_actions();

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
