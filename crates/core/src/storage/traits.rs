use async_trait::async_trait;

use crate::errors::CoreError;

/// Durable, string-keyed persistence for serialized ledgers.
///
/// Implementations only promise single-key atomicity: a `set` replaces the
/// whole value for one key and never touches any other key. Missing keys read
/// as `None`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Human-readable name of this store (for logs/errors).
    fn name(&self) -> &str;

    /// Read the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Replace the value stored under `key`.
    async fn set(&self, key: &str, value: String) -> Result<(), CoreError>;
}
