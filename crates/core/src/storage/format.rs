use crate::errors::CoreError;
use crate::models::ledger::Ledger;

/// Encode a ledger as its stored blob: a JSON array of record objects with the
/// fields `date, asset, buy, sell, qty, profit, change, notes`.
pub fn encode_ledger(ledger: &Ledger) -> Result<String, CoreError> {
    serde_json::to_string(ledger)
        .map_err(|e| CoreError::Serialization(format!("Failed to serialize ledger: {e}")))
}

/// Decode a stored blob.
///
/// An empty blob is an empty ledger. Anything else must be a valid record
/// array; corrupt data is an error and is never treated as "no trades".
pub fn decode_ledger(blob: &str) -> Result<Ledger, CoreError> {
    if blob.is_empty() {
        return Ok(Ledger::new());
    }
    serde_json::from_str(blob)
        .map_err(|e| CoreError::Deserialization(format!("Failed to deserialize ledger: {e}")))
}
