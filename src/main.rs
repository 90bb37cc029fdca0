use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;
use std::path::PathBuf;

mod ai;
mod app;
mod chat;
mod clipboard;
mod config;
mod console;
mod conversation;
mod error;
mod lexicon;
mod logs;
mod notification;
mod settings;
#[cfg(test)]
mod test_utils;
mod theme;
mod widgets;

use ai::AiState;
use ai::worker::{WORKER_THREAD_NAME, spawn_worker};
use app::App;
use config::ConfigStore;
use lexicon::LexiconStore;

/// Companion chat client that offers three reply directions per turn
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Companion chat in the terminal: pick one of three AI reply directions per turn"
)]
struct Args {
    /// Config file (default: <config dir>/chatpick/config.json)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Lexicon of reply directions (default: <config dir>/chatpick/lexicon.json)
    #[arg(long, value_name = "PATH")]
    lexicon: Option<PathBuf>,

    /// Skip the connection warm-up request at startup
    #[arg(long)]
    no_preload: bool,
}

fn main() -> Result<()> {
    // Writes to /tmp/chatpick-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/chatpick-debug.log")
            .expect("Failed to open /tmp/chatpick-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .filter_module("reqwest", log::LevelFilter::Info)
            .filter_module("hyper_util", log::LevelFilter::Info)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== CHATPICK DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    // Stores are read before the terminal switches modes so a broken file
    // never leaves the screen half-initialized
    let (store, config_warning) =
        ConfigStore::open(args.config.unwrap_or_else(config::default_config_path));
    let (lexicon_store, lexicon_warning) =
        LexiconStore::open(args.lexicon.unwrap_or_else(config::default_lexicon_path));

    let mut app = App::new(store, lexicon_store.lexicon().clone());
    for warning in [config_warning, lexicon_warning].into_iter().flatten() {
        app.logs.push(warning.as_str());
        app.notification.show_warning(&warning);
    }

    let terminal = init_terminal()?;
    let result = run(terminal, app, !args.no_preload);
    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== CHATPICK DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Worker panics are caught on the worker thread; the UI keeps running
        if std::thread::current().name() != Some(WORKER_THREAD_NAME) {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
        }
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App, preload: bool) -> Result<()> {
    setup_ai_worker(&mut app);

    if preload {
        app.run_preload();
    }

    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

/// Set up the request worker thread and channels
fn setup_ai_worker(app: &mut App) {
    let (request_tx, request_rx) = tokio::sync::mpsc::unbounded_channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();

    match spawn_worker(request_rx, response_tx) {
        Ok(_) => app.connect_worker(AiState::connect(request_tx, response_rx)),
        Err(e) => {
            app.logs.push(format!("Failed to start request worker: {}", e));
            app.notification
                .show_error(&format!("Failed to start request worker: {}", e));
        }
    }
}
