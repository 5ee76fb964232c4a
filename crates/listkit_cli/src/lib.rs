//! Shared wiring for the demo binaries.
//!
//! # Responsibility
//! - Start core file logging with build-mode defaults.
//! - Keep binaries runnable when logging cannot start.

use listkit_core::{default_log_dir, default_log_level, init_logging, logging_status};
use log::info;

/// Initializes logging under the default directory.
///
/// Failures are reported on stderr and otherwise ignored; the demos never
/// depend on logging. Returns the active log directory when logging is on.
pub fn init_demo_logging(program: &str) -> Option<std::path::PathBuf> {
    let log_dir = default_log_dir();
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("{program}: logging disabled: {err}");
    }

    let (level, active_dir) = logging_status()?;
    info!(
        "op=demo_logging area={program} outcome=ok level={level} log_dir={}",
        active_dir.display()
    );
    Some(active_dir)
}

#[cfg(test)]
mod tests {
    use super::init_demo_logging;
    use listkit_core::default_log_dir;

    #[test]
    fn init_demo_logging_reports_default_directory() {
        // Other processes may share the directory; only its location matters.
        if let Some(active_dir) = init_demo_logging("lib_test") {
            assert_eq!(active_dir, default_log_dir());
        }
    }
}
