//! JsonSage Core Library
//!
//! JSON structure analysis and the expense ledger domain.

pub mod analysis;
pub mod error;
pub mod ledger;

pub use error::{SageError, SageResult};
