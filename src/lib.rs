// Library module for hashmatch
// Re-exports modules for use in integration tests and external crates

pub mod cli;
pub mod config;
pub mod error;
pub mod hash;
pub mod intent;
pub mod output;
pub mod runner;

pub use error::HashMatchError;
