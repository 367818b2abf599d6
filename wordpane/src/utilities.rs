use std::path::PathBuf;

use anyhow::Result;
use directories::ProjectDirs;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "wordpane.log";

fn data_dir() -> PathBuf {
    ProjectDirs::from("", "", "wordpane")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Logs go to a file since stdout belongs to the terminal UI.
pub fn initialize_logging() -> Result<()> {
    let directory = data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_file = std::fs::File::create(directory.join(LOG_FILE))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wordpane=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .init();
    Ok(())
}

/// Restores the terminal before printing the panic report, otherwise the
/// backtrace ends up garbled inside the alternate screen.
pub fn initialize_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );
        let _ = crossterm::terminal::disable_raw_mode();
        better_panic::Settings::auto()
            .most_recent_first(false)
            .lineno_suffix(true)
            .create_panic_handler()(panic_info);
    }));
}
