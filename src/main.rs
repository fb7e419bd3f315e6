use factdash::adapters::ReqwestHttpClient;
use factdash::api::ApiClient;
use factdash::app::{App, AppMessage};
use factdash::config::ApiConfig;
use factdash::terminal::{setup_panic_hook, TerminalManager};
use factdash::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

/// Spinner/redraw cadence while idle.
const TICK_MS: u64 = 120;

fn init_tracing() {
    // Logging to stderr would corrupt the TUI, so logs only go to a file
    // and only when one is requested.
    let Ok(path) = std::env::var("FACTDASH_LOG") else {
        return;
    };
    let Ok(file) = File::create(&path) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();
    setup_panic_hook();

    let config = ApiConfig::from_env();
    tracing::info!(base_url = %config.base_url, "starting");

    let api = ApiClient::new(
        std::sync::Arc::new(ReqwestHttpClient::new()),
        config,
    );
    let (message_tx, mut message_rx) = mpsc::unbounded_channel::<AppMessage>();
    let mut app = App::new(api, message_tx);

    let mut term = TerminalManager::new()?;
    let mut events = EventStream::new();
    let mut tick = tokio::time::interval(Duration::from_millis(TICK_MS));

    while !app.should_quit {
        term.terminal().draw(|frame| ui::draw(frame, &app))?;

        tokio::select! {
            maybe_event = events.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "terminal event error");
                    }
                    None => break,
                }
            }
            Some(message) = message_rx.recv() => {
                app.handle_message(message);
            }
            _ = tick.tick() => {
                app.on_tick();
            }
        }
    }

    tracing::info!("exiting");
    Ok(())
}
