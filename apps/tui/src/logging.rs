use crate::config::AppConfig;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Picks the filter used when `RUST_LOG` is unset or not honored.
///
/// The TUI draws on the alternate screen, so anything written to stderr while
/// it runs lands on top of the list; without a log file only errors get through.
pub fn default_directive(config: &AppConfig, interactive: bool) -> &'static str {
    match (config.debug, interactive, config.log_file.is_some()) {
        (true, false, _) | (true, true, true) => "shopping_list_tui=debug,warn",
        (false, false, _) | (false, true, true) => "warn",
        (_, true, false) => "error",
    }
}

/// Whether `RUST_LOG` may widen the filter. It can't while stderr is the
/// alternate screen.
pub fn honors_env_filter(config: &AppConfig, interactive: bool) -> bool {
    !interactive || config.log_file.is_some()
}

pub fn init_logging(config: &AppConfig, interactive: bool) -> Result<()> {
    let fallback = || EnvFilter::new(default_directive(config, interactive));
    let filter = if honors_env_filter(config, interactive) {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    };

    let result = if let Some(path) = &config.log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
    };

    result.map_err(|e| eyre!("Failed to initialize logging: {e}"))
}
