//! Route handlers.

pub mod analyze;
pub mod expenses;
pub mod links;
pub mod users;
