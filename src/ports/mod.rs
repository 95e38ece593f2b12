//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStoreRepository` - One isolated store per session identity
//! - `StoreExporter` - Encodes a session store as JSON or a spreadsheet

mod export_service;
mod session_store_repository;

pub use export_service::{ExportError, ExportFormat, ExportedFile, StoreExporter};
pub use session_store_repository::{
    store_mutation, RepositoryError, SessionStoreRepository, StoreMutation,
};
