//! Log file setup.
//!
//! The terminal belongs to the animation, so logs go to a file under the
//! platform data directory. `SHAPESHIFT_LOG` takes an `EnvFilter` directive.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use color_eyre::eyre::eyre;
use shapeshift_config::Config;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "SHAPESHIFT_LOG";

/// Install the global subscriber. Does nothing when logging is disabled.
pub fn init(enabled: bool) -> color_eyre::Result<()> {
    if !enabled {
        return Ok(());
    }

    let path = Config::log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| eyre!("failed to install logger: {err}"))
}
