//! Log setup. The terminal belongs to the game while it runs, so events are
//! written to a file in the data directory instead of stderr.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const LOG_FILE: &str = "skyward.log";

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info";

/// Install a global subscriber appending to `path`.
///
/// Filtering follows `RUST_LOG` (e.g. `RUST_LOG=skyward=debug`).
pub fn init(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritable_log_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened for appending.
        assert!(init(dir.path()).is_err());
    }
}
