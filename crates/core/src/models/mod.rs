pub mod ledger;
pub mod settings;
pub mod trade;
