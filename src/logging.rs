use crate::config::Config;

/// Initialize tracing
///
/// Console output always; with `log_to_file`, logs are also written to:
/// - macOS: ~/Library/Application Support/GomokuSounds/logs/
/// - Windows: %APPDATA%/GomokuSounds/logs/
/// - Linux: ~/.config/GomokuSounds/logs/
///
/// Files rotate daily and are named gomoku-sounds.YYYY-MM-DD.log.
pub fn init_tracing(config: &Config) {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(false);

    let file_layer = if config.log_to_file {
        let log_dir = Config::app_dir().join("logs");
        match std::fs::create_dir_all(&log_dir) {
            Ok(()) => Some((
                fmt::layer()
                    .with_writer(rolling::daily(&log_dir, "gomoku-sounds.log"))
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true),
                log_dir,
            )),
            Err(e) => {
                eprintln!("Warning: Failed to create log directory: {}", e);
                None
            }
        }
    } else {
        None
    };

    let (file_layer, log_dir) = match file_layer {
        Some((layer, dir)) => (Some(layer), Some(dir)),
        None => (None, None),
    };

    // A global subscriber may already be set (tests, embedding game)
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .is_ok();

    if installed {
        if let Some(dir) = log_dir {
            tracing::info!("Log directory: {}", dir.display());
        }
    }
}
