use serde::{Deserialize, Serialize};

/// Raw form input for one trade, exactly as typed by the user.
///
/// Every field is free text; numbers are parsed later by
/// [`TradeCalculator`](crate::services::trade_calculator::TradeCalculator).
/// An empty `date` means "today".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TradeInput {
    pub date: String,
    pub asset: String,
    pub buy: String,
    pub sell: String,
    pub qty: String,
    pub notes: String,
}

impl TradeInput {
    /// Create an input with the required trade fields. Date and notes start empty.
    pub fn new(
        asset: impl Into<String>,
        buy: impl Into<String>,
        sell: impl Into<String>,
        qty: impl Into<String>,
    ) -> Self {
        Self {
            date: String::new(),
            asset: asset.into(),
            buy: buy.into(),
            sell: sell.into(),
            qty: qty.into(),
            notes: String::new(),
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// A single finalized trade in a ledger.
///
/// `profit` and `change` are derived once, when the record is created, and
/// stored as two-decimal strings. They are never recomputed from
/// `buy`/`sell`/`qty`, so records written under an older rule keep their values.
///
/// Non-finite prices or quantities are written as `null` and read back as `NaN`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Calendar date, `YYYY-MM-DD` when defaulted; user text otherwise.
    pub date: String,

    pub asset: String,

    #[serde(with = "lenient_f64")]
    pub buy: f64,

    #[serde(with = "lenient_f64")]
    pub sell: f64,

    #[serde(with = "lenient_f64")]
    pub qty: f64,

    /// `(sell - buy) * qty`, two decimals.
    pub profit: String,

    /// `((sell / buy) - 1) * 100`, two decimals. `"Infinity"`/`"NaN"` when `buy` is zero.
    pub change: String,

    #[serde(default)]
    pub notes: String,
}

impl TradeRecord {
    /// `true` if both derived fields hold finite numbers.
    #[must_use]
    pub fn has_finite_metrics(&self) -> bool {
        [&self.profit, &self.change]
            .iter()
            .all(|v| v.parse::<f64>().is_ok_and(f64::is_finite))
    }
}

/// JSON has no NaN/Infinity: emit `null` for them and accept `null` as `NaN`.
mod lenient_f64 {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_f64(*value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
    }
}
