//! Domain layer containing the SIAMA data model and derived views.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `identification` - Stakeholder Identification Toolkit (SIT) records
//! - `analysis` - Stakeholder Analysis Toolkit (SAT) records and quadrants
//! - `market` - Market Analysis Toolkit (MAT) records
//! - `session` - Session-scoped store aggregate
//! - `views` - Pure view builders over a session store

pub mod analysis;
pub mod foundation;
pub mod identification;
pub mod market;
pub mod session;
pub mod views;
