use anyhow::{Context, Result};
use ratatui::DefaultTerminal;
use std::time::Duration;

use leetstats::{
    App, Config, StatsClient,
    app::AppAction,
    event::{Event, EventHandler},
    logger, ui,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load()?;
    if let Some(path) = config.log_path() {
        logger::init_file_logger(&path)?;
    }

    let client = StatsClient::new(&config).context("Failed to create HTTP client")?;
    tracing::info!(endpoint = client.endpoint(), "starting leetstats");

    let mut terminal = ratatui::init();
    let result = run(&mut terminal, &config, client).await;
    ratatui::restore();

    result
}

async fn run(terminal: &mut DefaultTerminal, config: &Config, client: StatsClient) -> Result<()> {
    let mut app = App::new();
    let mut events = EventHandler::new(Duration::from_millis(config.tick_rate_ms.max(1)));

    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        match events.next().await? {
            Event::Key(key) => match app.handle_key(key) {
                AppAction::Quit => break,
                AppAction::Lookup(ticket) => events.spawn_lookup(client.clone(), ticket),
                AppAction::None => {}
            },
            Event::Lookup(outcome) => app.complete(outcome),
            Event::Tick => app.tick(),
            Event::Resize(_, _) => {}
        }
    }

    tracing::info!("shutting down");
    Ok(())
}
