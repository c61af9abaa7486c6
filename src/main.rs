use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use unbind_tui::app::{r#loop::run_loop, state::AppState};
use unbind_tui::config::Config;
use unbind_tui::domain::models::{EnvironmentId, ProjectId, TeamId};
use unbind_tui::infrastructure::api::HttpPlatformClient;
use unbind_tui::palette::PaletteContext;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Config and the API client are resolved BEFORE terminal setup so a
    // missing token fails with a readable error, not a raw-mode terminal.
    let config = Config::load();
    let client = std::sync::Arc::new(HttpPlatformClient::from_config(&config)?);

    let team = TeamId(config.team.clone());
    let context = match &config.project {
        Some(project) => PaletteContext::project(
            team,
            ProjectId(project.clone()),
            config.environment.clone().map(EnvironmentId),
        ),
        None => PaletteContext::team(team),
    };
    let app_state = AppState::new(&config, context);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, client).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}
