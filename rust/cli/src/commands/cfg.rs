//! Configuration command handler.
//!
//! Prints the resolved configuration with the layer each value came from.
//!
//! # Example Output
//!
//! ```json
//! {
//!   "players": {
//!     "source": "default",
//!     "value": ["Alice", "Bob", "Diana"]
//!   },
//!   "rounds": {
//!     "source": "env",
//!     "value": 5
//!   },
//!   ...
//! }
//! ```

use crate::config::{self, Overrides};
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources(&Overrides::default()) {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e.into());
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "rounds": {
            "value": config.rounds,
            "source": sources.rounds,
        },
        "strategy": {
            "value": config.strategy,
            "source": sources.strategy,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cfg_displays_json_output() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        let result = handle_cfg_command(&mut out, &mut err);
        assert!(result.is_ok(), "cfg command should succeed");

        let output = String::from_utf8(out).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&output).expect("cfg output should be valid JSON");
        for key in ["seed", "players", "rounds", "strategy"] {
            assert!(json[key].get("value").is_some(), "missing value for {}", key);
            assert!(json[key].get("source").is_some(), "missing source for {}", key);
        }
        assert!(String::from_utf8(err).unwrap().is_empty());
    }

    #[test]
    #[serial]
    fn test_cfg_writes_pretty_json() {
        let mut out = Vec::new();
        let mut err = Vec::new();

        if handle_cfg_command(&mut out, &mut err).is_ok() {
            let output = String::from_utf8(out).unwrap();
            assert!(output.contains('\n'), "output should be pretty-printed");
            assert!(output.contains("  "), "output should be indented");
        }
    }
}
