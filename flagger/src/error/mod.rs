//! Error types produced while binding and parsing flags.

mod types;

pub use types::FlagError;
