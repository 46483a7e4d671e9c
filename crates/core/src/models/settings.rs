use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

use super::ledger::{LedgerName, Mode};

/// Display theme. Pure presentation state: it never affects ledger data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Store keys bound to each ledger.
///
/// Defaults match the keys existing installs already hold data under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerKeys {
    pub mine: String,
    pub other_party: String,
}

impl LedgerKeys {
    pub fn new(mine: impl Into<String>, other_party: impl Into<String>) -> Self {
        Self {
            mine: mine.into(),
            other_party: other_party.into(),
        }
    }

    /// The store key for `name`.
    #[must_use]
    pub fn key_for(&self, name: LedgerName) -> &str {
        match name {
            LedgerName::Mine => &self.mine,
            LedgerName::OtherParty => &self.other_party,
        }
    }

    /// Both ledgers must live under distinct, non-empty keys, otherwise a save
    /// of one would overwrite the other.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.mine.is_empty() || self.other_party.is_empty() {
            return Err(CoreError::Config("ledger keys must not be empty".into()));
        }
        if self.mine == self.other_party {
            return Err(CoreError::Config(format!(
                "both ledgers are bound to the same key '{}'",
                self.mine
            )));
        }
        Ok(())
    }
}

impl Default for LedgerKeys {
    fn default() -> Self {
        Self {
            mine: "my_trades".to_string(),
            other_party: "father_trades".to_string(),
        }
    }
}

/// Startup configuration for the ledger controller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Store keys for the two ledgers.
    pub keys: LedgerKeys,

    /// Mode selected right after load.
    pub initial_mode: Mode,

    /// Theme selected right after load.
    pub initial_theme: Theme,
}

impl Settings {
    /// Parse settings from a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: Settings = serde_json::from_str(json)
            .map_err(|e| CoreError::Config(format!("Failed to parse settings: {e}")))?;
        settings.keys.validate()?;
        Ok(settings)
    }
}
