//! HTTP adapter for charts, tables and file export.

mod handlers;
mod routes;

pub use routes::view_routes;
