use crate::cli::{actions::Action, commands, dispatch::handler, telemetry};
use anyhow::Result;
use tracing::Level;

fn verbosity(level: u8) -> Option<Level> {
    match level {
        0 => None,
        1 => Some(Level::WARN),
        2 => Some(Level::INFO),
        3 => Some(Level::DEBUG),
        _ => Some(Level::TRACE),
    }
}

/// Start the CLI
/// # Errors
/// Returns an error if telemetry cannot be initialized or the arguments are incomplete.
pub fn start() -> Result<Action> {
    let matches = commands::new().get_matches();

    let level = matches
        .get_one::<u8>(commands::logging::ARG_VERBOSITY)
        .copied()
        .unwrap_or(0);

    telemetry::init(verbosity(level))?;

    handler(&matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity() {
        assert_eq!(verbosity(0), None);
        assert_eq!(verbosity(1), Some(Level::WARN));
        assert_eq!(verbosity(2), Some(Level::INFO));
        assert_eq!(verbosity(3), Some(Level::DEBUG));
        assert_eq!(verbosity(4), Some(Level::TRACE));
        assert_eq!(verbosity(9), Some(Level::TRACE));
    }
}
