// demodeck - terminal demo deck
//
// Discovers a list of self-contained demo modules, shows one at a time, and
// keeps the current selection in a bookmarkable address with browser-style
// history.
//
// Architecture:
// - Registry: fetches the module list once per session
// - Coordinator: owns the active demo and sequences unload -> load
// - Location: the address (query parameter) plus its history stack
// - TUI (ratatui): title, canvas, source panel, logs; sends navigation
//   requests, applies the coordinator's UI effects
// - mpsc channels connect the TUI and the coordinator task
//
// Sessions restart in place: when the coordinator decides a module needs a
// clean environment (the reload guard), the whole stack below main() is torn
// down and rebuilt from the persisted address, which is what a page reload
// did for the original deck.

mod cli;
mod config;
mod coordinator;
mod demo;
mod download;
mod events;
mod highlight;
mod location;
mod logging;
mod registry;
mod startup;
mod tui;
mod util;

use anyhow::{Context, Result};
use clap::Parser;
use config::Config;
use coordinator::Coordinator;
use demo::{BundledLoader, Canvas};
use download::Downloads;
use events::Outcome;
use location::Location;
use logging::{DeckLogLayer, LogBuffer};
use registry::{ModuleRegistry, ModuleSource};
use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tui::app::App;

/// How one session ended, with the address it ended on.
enum SessionEnd {
    Quit(String),
    Reload(String),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    if cli::handle_command(&cli) {
        return Ok(());
    }

    // Ensure a config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // All logs go to the in-memory buffer the TUI renders; stdout would
    // garble the alternate screen. File logging is additional and optional.
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let log_buffer = LogBuffer::new();
    let default_filter = format!("demodeck={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must be kept alive for the duration of the program so file
    // logs flush on exit
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Ok(()) => {
                    let appender = tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        "demodeck.log",
                    );
                    let (non_blocking, guard) = tracing_appender::non_blocking(appender);
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(DeckLogLayer::new(log_buffer.clone()))
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                    Some(guard)
                }
                Err(e) => {
                    eprintln!(
                        "Warning: could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(DeckLogLayer::new(log_buffer.clone()))
                        .init();
                    None
                }
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(DeckLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    startup::print_startup(&config);

    // The address survives session restarts, so a reload lands back on the
    // module that demanded it - and the final address is the bookmark.
    let mut address = cli.address.clone().unwrap_or_else(|| config.address.clone());

    loop {
        match run_session(&config, &address, log_buffer.clone()).await? {
            SessionEnd::Quit(final_address) => {
                println!("bookmark: {}", final_address);
                break;
            }
            SessionEnd::Reload(final_address) => {
                tracing::info!("restarting session for a clean environment");
                address = final_address;
            }
        }
    }

    Ok(())
}

/// Build one full session (registry, coordinator, TUI) and run it until quit
/// or reload. Everything constructed here dies with the session; only the
/// address string crosses over.
async fn run_session(config: &Config, address: &str, log_buffer: LogBuffer) -> Result<SessionEnd> {
    let source = ModuleSource::parse(&config.modules);
    let registry = match ModuleRegistry::load(&source).await {
        Ok(registry) => registry,
        Err(e) => {
            // Fatal for the session: nothing can ever load without the list
            tracing::error!("failed to load module list: {}", e);
            return Err(e).context("failed to load module list");
        }
    };
    let module_count = registry.len();

    let canvas = Canvas::new();
    let location = Location::new(address);

    let (nav_tx, nav_rx) = mpsc::channel(64);
    let (effect_tx, effect_rx) = mpsc::channel(64);

    let coordinator = Coordinator::new(
        registry,
        Box::new(BundledLoader::new(canvas.clone())),
        location,
        effect_tx,
        config.reload_guard,
    );
    let coordinator_task = tokio::spawn(coordinator.run(nav_rx));

    let app = App::new(log_buffer, module_count);
    let downloads = Downloads::new(config.download_dir.clone());
    let outcome = tui::run_tui(app, effect_rx, nav_tx, canvas, downloads, config.tick_ms).await;

    // run_tui dropped the navigation sender on return; the coordinator task
    // unwinds, stops the active demo and hands the final location back
    let location = coordinator_task
        .await
        .context("coordinator task panicked")?;
    let outcome = outcome?;

    Ok(match outcome {
        Outcome::Quit => SessionEnd::Quit(location.address()),
        Outcome::Reload => SessionEnd::Reload(location.address()),
    })
}
