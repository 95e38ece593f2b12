//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - per-session store held in process memory
//! - `export` - JSON and spreadsheet exporters
//! - `http` - REST API over the application handlers

pub mod export;
pub mod http;
pub mod memory;

pub use export::{JsonExporter, XlsxExporter};
pub use http::{api_router, AppState};
pub use memory::InMemorySessionRepository;
