//! In-memory adapters.

mod in_memory_session_repository;

pub use in_memory_session_repository::InMemorySessionRepository;
