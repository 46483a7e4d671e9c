pub mod file;
pub mod format;
pub mod memory;
pub mod repository;
pub mod traits;
