//! Auto-update state as seen by the menu layer.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Phase of the external auto-update state machine.
///
/// The coordinator never drives transitions; it only mirrors the current
/// phase into the visibility of the update menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateState {
    /// No check in progress and nothing to report.
    Idle,
    /// An update check is in flight.
    Checking,
    /// An update is downloading.
    Downloading,
    /// An update is downloaded and ready to install.
    UpdateAvailable,
    /// The last check found no newer version.
    NoUpdateAvailable,
    /// Updates cannot run in this installation. The menu shows no update
    /// items at all in this state.
    Unsupported,
    /// The last check or download failed.
    Error,
}

impl UpdateState {
    /// Kebab-case wire name used by update notifiers.
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateState::Idle => "idle",
            UpdateState::Checking => "checking",
            UpdateState::Downloading => "downloading",
            UpdateState::UpdateAvailable => "update-available",
            UpdateState::NoUpdateAvailable => "no-update-available",
            UpdateState::Unsupported => "unsupported",
            UpdateState::Error => "error",
        }
    }
}

impl fmt::Display for UpdateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for update-state strings this crate does not recognize.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown update state '{0}'")]
pub struct ParseUpdateStateError(String);

impl FromStr for UpdateState {
    type Err = ParseUpdateStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(UpdateState::Idle),
            "checking" => Ok(UpdateState::Checking),
            "downloading" => Ok(UpdateState::Downloading),
            "update-available" => Ok(UpdateState::UpdateAvailable),
            "no-update-available" => Ok(UpdateState::NoUpdateAvailable),
            "unsupported" => Ok(UpdateState::Unsupported),
            "error" => Ok(UpdateState::Error),
            _ => Err(ParseUpdateStateError(s.to_string())),
        }
    }
}
