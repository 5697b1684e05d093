//! File helpers shared by commands that write round logs.

use std::path::Path;

use parlor_engine::logger::RoundLogger;

use crate::error::CliError;

/// Ensure the parent directory of a file path exists, creating it if necessary.
///
/// # Example
///
/// ```rust,no_run
/// # use parlor_cli::io_utils::ensure_parent_dir;
/// use std::path::Path;
///
/// ensure_parent_dir(Path::new("data/rounds/poker.jsonl")).unwrap();
/// ```
pub fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
    }
    Ok(())
}

/// Opens a JSONL round log at `output`, or returns `None` when no path was given.
pub fn open_round_log(output: Option<&str>) -> Result<Option<RoundLogger>, CliError> {
    let Some(output) = output else {
        return Ok(None);
    };
    let path = Path::new(output);
    ensure_parent_dir(path).map_err(CliError::InvalidInput)?;
    let logger = RoundLogger::create(path)?;
    Ok(Some(logger))
}
