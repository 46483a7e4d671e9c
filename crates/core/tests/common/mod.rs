#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use trade_ledger_core::errors::CoreError;
use trade_ledger_core::services::trade_calculator::{FixedClock, TradeCalculator};
use trade_ledger_core::storage::memory::MemoryStore;
use trade_ledger_core::storage::traits::KeyValueStore;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn calculator_on(y: i32, m: u32, d: u32) -> TradeCalculator {
    TradeCalculator::new(FixedClock(date(y, m, d)))
}

// ═══════════════════════════════════════════════════════════════════
// Mock store with switchable failures
// ═══════════════════════════════════════════════════════════════════

/// Wraps a `MemoryStore` and fails reads or writes on demand.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    pub writes: AtomicUsize,
}

impl FlakyStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore for FlakyStore {
    fn name(&self) -> &str {
        "flaky"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(CoreError::FileIO("disk unavailable".into()));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(CoreError::FileIO("disk full".into()));
        }
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value).await
    }
}

// ═══════════════════════════════════════════════════════════════════
// Mock store that measures overlapping writes
// ═══════════════════════════════════════════════════════════════════

/// Sleeps inside every `set` and records the peak number of writes in flight.
#[derive(Default)]
pub struct SlowStore {
    pub inner: MemoryStore,
    in_flight: AtomicUsize,
    pub peak: AtomicUsize,
}

impl SlowStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl KeyValueStore for SlowStore {
    fn name(&self) -> &str {
        "slow"
    }

    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        let result = self.inner.set(key, value).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}
