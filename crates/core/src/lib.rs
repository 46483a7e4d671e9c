pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use log::{info, warn};

use errors::CoreError;
use models::{
    ledger::{Ledger, LedgerName, Mode},
    settings::{Settings, Theme},
    trade::{TradeInput, TradeRecord},
};
use services::trade_calculator::TradeCalculator;
use storage::repository::LedgerRepository;

/// Main entry point for the trade ledger core library.
///
/// Holds both ledgers in memory, the active [`Mode`] and the display [`Theme`].
/// The only way to get one is [`load`](Self::load), so no entry can be added
/// before both ledgers have been read from the store.
#[must_use]
pub struct LedgerStateController {
    repository: LedgerRepository,
    calculator: TradeCalculator,
    mine: Ledger,
    other_party: Ledger,
    mode: Mode,
    theme: Theme,
}

impl std::fmt::Debug for LedgerStateController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LedgerStateController")
            .field("mine", &self.mine.len())
            .field("other_party", &self.other_party.len())
            .field("mode", &self.mode)
            .field("theme", &self.theme)
            .finish()
    }
}

impl LedgerStateController {
    /// Load both ledgers and start in [`Mode::Mine`] with the light theme.
    pub async fn load(
        repository: LedgerRepository,
        calculator: TradeCalculator,
    ) -> Result<Self, CoreError> {
        let (mine, other_party) = repository.load_all().await?;
        info!(
            "Ledgers loaded: {} mine, {} other-party",
            mine.len(),
            other_party.len()
        );
        Ok(Self {
            repository,
            calculator,
            mine,
            other_party,
            mode: Mode::default(),
            theme: Theme::default(),
        })
    }

    /// Load both ledgers and apply the initial mode and theme from `settings`.
    ///
    /// The repository's key binding is used as-is; build it from
    /// `settings.keys` to store under the configured keys.
    pub async fn load_with_settings(
        repository: LedgerRepository,
        calculator: TradeCalculator,
        settings: &Settings,
    ) -> Result<Self, CoreError> {
        let mut controller = Self::load(repository, calculator).await?;
        controller.mode = settings.initial_mode;
        controller.theme = settings.initial_theme;
        Ok(controller)
    }

    // ── Mode & Theme ────────────────────────────────────────────────

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Select the active ledger. Never touches the store.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            info!("Switching mode: {} -> {}", self.mode, mode);
        }
        self.mode = mode;
    }

    pub fn toggle_mode(&mut self) -> Mode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    // ── Ledgers ─────────────────────────────────────────────────────

    /// The ledger selected by the current mode, newest first.
    #[must_use]
    pub fn current_ledger(&self) -> &Ledger {
        self.ledger(self.mode.ledger_name())
    }

    /// Either ledger, regardless of mode.
    #[must_use]
    pub fn ledger(&self, name: LedgerName) -> &Ledger {
        match name {
            LedgerName::Mine => &self.mine,
            LedgerName::OtherParty => &self.other_party,
        }
    }

    /// Finalize `input`, prepend it to the active ledger and persist that ledger.
    ///
    /// The in-memory ledger is updated before the write. If the write fails the
    /// error is returned but the record stays in memory; the next successful
    /// save of the same ledger persists it. The inactive ledger is neither
    /// modified nor re-saved.
    pub async fn add_entry(&mut self, input: &TradeInput) -> Result<&TradeRecord, CoreError> {
        let record = self.calculator.finalize(input);
        let name = self.mode.ledger_name();

        let ledger = match name {
            LedgerName::Mine => &mut self.mine,
            LedgerName::OtherParty => &mut self.other_party,
        };
        ledger.prepend(record);
        info!(
            "Added {} trade to {name} ledger ({} records)",
            input.asset,
            ledger.len()
        );

        if let Err(e) = self.repository.save(name, ledger).await {
            warn!("Entry kept in memory but {name} ledger was not persisted: {e}");
            return Err(e);
        }

        // Just prepended, so index 0 exists.
        Ok(&self.ledger(name).records()[0])
    }

    /// Write the active ledger again, e.g. after an earlier `add_entry` failed to persist.
    pub async fn persist_current(&self) -> Result<(), CoreError> {
        let name = self.mode.ledger_name();
        self.repository.save(name, self.ledger(name)).await
    }
}
