use log::{debug, error};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::errors::CoreError;
use crate::models::ledger::{Ledger, LedgerName};
use crate::models::settings::LedgerKeys;

use super::format;
use super::traits::KeyValueStore;

/// Loads and saves the two ledgers. The only reader and writer of their keys.
///
/// Every save is a full replace of one ledger's key. Saves to the same ledger
/// hold a per-ledger lock from encoding through the store write, so each one
/// lands whole and in lock order. Saves to different ledgers never wait on
/// each other.
pub struct LedgerRepository {
    store: Arc<dyn KeyValueStore>,
    keys: LedgerKeys,
    mine_lock: Mutex<()>,
    other_party_lock: Mutex<()>,
}

impl LedgerRepository {
    /// Bind the two ledgers to `keys` in `store`. Fails if the keys collide.
    pub fn new(store: Arc<dyn KeyValueStore>, keys: LedgerKeys) -> Result<Self, CoreError> {
        keys.validate()?;
        Ok(Self {
            store,
            keys,
            mine_lock: Mutex::new(()),
            other_party_lock: Mutex::new(()),
        })
    }

    /// Repository using the default key binding.
    pub fn with_default_keys(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            store,
            keys: LedgerKeys::default(),
            mine_lock: Mutex::new(()),
            other_party_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn keys(&self) -> &LedgerKeys {
        &self.keys
    }

    /// Load both ledgers, reading the two keys concurrently.
    ///
    /// Returns `(mine, other_party)`. Fails if either read fails or either blob
    /// is corrupt.
    pub async fn load_all(&self) -> Result<(Ledger, Ledger), CoreError> {
        let (mine, other_party) = tokio::join!(
            self.load(LedgerName::Mine),
            self.load(LedgerName::OtherParty)
        );
        Ok((mine?, other_party?))
    }

    /// Load one ledger. A missing or empty value is an empty ledger.
    pub async fn load(&self, name: LedgerName) -> Result<Ledger, CoreError> {
        let key = self.keys.key_for(name);
        let blob = self
            .store
            .get(key)
            .await
            .map_err(|e| CoreError::StoreRead {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        let Some(blob) = blob else {
            debug!("No stored value for {name} ledger under '{key}', starting empty");
            return Ok(Ledger::new());
        };

        let ledger = format::decode_ledger(&blob).map_err(|e| {
            error!("Stored {name} ledger under '{key}' is corrupt: {e}");
            match e {
                CoreError::Deserialization(msg) => {
                    CoreError::Deserialization(format!("{name} ledger ('{key}'): {msg}"))
                }
                other => other,
            }
        })?;
        debug!(
            "Loaded {} records for {name} ledger from {} store",
            ledger.len(),
            self.store.name()
        );
        Ok(ledger)
    }

    /// Replace the stored value of `name` with the full contents of `ledger`.
    /// The other ledger's key is never written.
    pub async fn save(&self, name: LedgerName, ledger: &Ledger) -> Result<(), CoreError> {
        let key = self.keys.key_for(name);
        let _guard = self.lock_for(name).lock().await;

        let blob = format::encode_ledger(ledger)?;
        self.store
            .set(key, blob)
            .await
            .map_err(|e| CoreError::StoreWrite {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        debug!("Saved {} records for {name} ledger under '{key}'", ledger.len());
        Ok(())
    }

    fn lock_for(&self, name: LedgerName) -> &Mutex<()> {
        match name {
            LedgerName::Mine => &self.mine_lock,
            LedgerName::OtherParty => &self.other_party_lock,
        }
    }
}

impl std::fmt::Debug for LedgerRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerRepository")
            .field("store", &self.store.name())
            .field("keys", &self.keys)
            .finish()
    }
}
