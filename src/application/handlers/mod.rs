//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations. Every
//! handler loads the session's store, applies one operation and saves it.

pub mod analysis;
pub mod export;
pub mod identification;
pub mod market;
pub mod session;
pub mod views;
