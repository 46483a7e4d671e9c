use serde::{Deserialize, Serialize};

use super::trade::TradeRecord;

/// The two fixed ledgers. Each is stored under its own key and never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LedgerName {
    /// The user's own trades
    Mine,
    /// Trades kept on behalf of someone else
    OtherParty,
}

impl std::fmt::Display for LedgerName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerName::Mine => write!(f, "mine"),
            LedgerName::OtherParty => write!(f, "other-party"),
        }
    }
}

/// Which ledger the controller reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    #[default]
    Mine,
    ViewingOtherParty,
}

impl Mode {
    /// The ledger this mode selects.
    #[must_use]
    pub fn ledger_name(self) -> LedgerName {
        match self {
            Mode::Mine => LedgerName::Mine,
            Mode::ViewingOtherParty => LedgerName::OtherParty,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Mode::Mine => Mode::ViewingOtherParty,
            Mode::ViewingOtherParty => Mode::Mine,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Mine => write!(f, "Mine"),
            Mode::ViewingOtherParty => write!(f, "Viewing other party"),
        }
    }
}

/// An ordered list of trades, newest first.
///
/// New records are always prepended. There is no removal, editing or reordering.
/// Serializes as a bare JSON array of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    records: Vec<TradeRecord>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from records already in newest-first order.
    pub fn from_records(records: Vec<TradeRecord>) -> Self {
        Self { records }
    }

    /// Insert a record at the front, ahead of every existing record.
    pub fn prepend(&mut self, record: TradeRecord) {
        self.records.insert(0, record);
    }

    #[must_use]
    pub fn records(&self) -> &[TradeRecord] {
        &self.records
    }

    /// The most recently added record.
    #[must_use]
    pub fn latest(&self) -> Option<&TradeRecord> {
        self.records.first()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TradeRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<TradeRecord> {
        self.records
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a TradeRecord;
    type IntoIter = std::slice::Iter<'a, TradeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
