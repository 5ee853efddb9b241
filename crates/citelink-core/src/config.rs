//! Output mode configuration

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Label policy for generated links.
///
/// Chosen once per pass and passed explicitly into the formatter; the
/// engine never re-reads host settings mid-pass, so a settings change
/// during a walk takes effect on the next invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputMode {
    /// Label is the matched text exactly as found.
    #[default]
    Unaltered,
    /// Label is the bare `10.x/y` identifier.
    Normalised,
    /// Label is the work title fetched from the metadata source, falling
    /// back to the bare identifier on any resolution failure.
    ItemName,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized output mode: {0}")]
pub struct ParseOutputModeError(String);

impl FromStr for OutputMode {
    type Err = ParseOutputModeError;

    /// Accepts the host settings-panel strings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Unaltered" => Ok(OutputMode::Unaltered),
            "Normalised" => Ok(OutputMode::Normalised),
            "Item Name" => Ok(OutputMode::ItemName),
            other => Err(ParseOutputModeError(other.to_string())),
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OutputMode::Unaltered => "Unaltered",
            OutputMode::Normalised => "Normalised",
            OutputMode::ItemName => "Item Name",
        };
        write!(f, "{}", label)
    }
}
