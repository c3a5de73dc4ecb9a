//! JSON rendering of classification results.

use crate::{AppError, AppResult};

use std::{io::Write, panic::Location};

use error_location::ErrorLocation;

/// Writes `labels` as a single-line JSON array followed by a newline.
#[track_caller]
pub fn write_labels<W: Write>(mut writer: W, labels: &[String]) -> AppResult<()> {
    let json = serde_json::to_string(labels).map_err(|e| AppError::OutputError {
        reason: format!("Failed to serialize labels: {}", e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    writeln!(writer, "{}", json)?;
    writer.flush()?;

    Ok(())
}
