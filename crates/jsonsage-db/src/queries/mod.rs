//! Database query implementations.

pub mod expenses;
pub mod users;
