//! View query handlers.

mod get_session_view;

pub use get_session_view::{GetSessionViewHandler, GetSessionViewQuery, SessionView, ViewKind};
