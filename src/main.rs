mod audio;
mod catalog;
mod config;
mod controller;
mod logging;
mod model;
mod view;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::Mutex;

use audio::RodioBackend;
use catalog::Catalog;
use config::ViewConfig;
use controller::AppController;
use model::AppModel;
use view::AppView;

/// Click-driven terminal album player
#[derive(Debug, Parser)]
#[command(name = "album-deck", version)]
struct Args {
    /// JSON album catalog. The built-in demo catalog is used when omitted.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// JSON view and playback settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the daily rotated log file
    #[arg(long, default_value = logging::DEFAULT_LOG_DIR)]
    log_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = match logging::init_logging(&args.log_dir) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Failed to initialize logging: {}", e);
            None
        }
    };

    tracing::info!("=== album-deck starting ===");

    let config = ViewConfig::load(args.config.as_deref())
        .inspect_err(|e| tracing::error!(error = ?e, "Config load failed"))?;

    let catalog = match &args.catalog {
        Some(path) => Catalog::from_json_file(path)
            .with_context(|| format!("loading catalog {}", path.display()))
            .inspect_err(|e| tracing::error!(error = ?e, "Catalog load failed"))?,
        None => {
            tracing::info!("No catalog given, using the demo catalog");
            Catalog::demo()
        }
    };
    if catalog.is_empty() {
        tracing::warn!("Catalog has no albums");
    }
    tracing::info!(
        albums = catalog.len(),
        tracks = catalog.track_total(),
        "Catalog ready"
    );

    // The stream must outlive every sink created through the backend
    let (_stream, audio_backend) = RodioBackend::open_default()
        .context("opening audio output")
        .inspect_err(|e| tracing::error!(error = ?e, "Audio init failed"))?;

    let app_model = AppModel::new(Arc::new(catalog), audio_backend, config);
    let tick = app_model.config().tick();

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let model = Arc::new(Mutex::new(app_model));
    let controller = AppController::new(model.clone());

    let res = run_app(&mut terminal, model.clone(), controller, tick).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    // Stop the sounding track before the output stream goes away
    drop(model);

    tracing::info!("album-deck shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
    tick: Duration,
) -> io::Result<()> {
    loop {
        {
            let mut model_guard = model.lock().await;

            // Auto-clear old errors (after 5 seconds)
            model_guard.auto_clear_old_errors();

            if model_guard.should_quit() {
                break;
            }

            let frame = terminal.draw(|f| {
                AppView::render(f, &model_guard.view_state());
            })?;
            // Clicks are resolved against the frame that was just drawn
            let area = frame.area;
            model_guard.set_viewport(area);
        }

        // The poll timeout is also the track-end detection period
        if event::poll(tick)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Err(e) = controller.handle_key_event(key).await {
                        tracing::warn!(error = %e, "Key handling failed");
                    }
                }
                Event::Mouse(mouse) => {
                    if let Err(e) = controller.handle_mouse_event(mouse).await {
                        tracing::warn!(error = %e, "Mouse handling failed");
                    }
                }
                _ => {}
            }
        }

        controller.poll_playback().await;
    }

    Ok(())
}
