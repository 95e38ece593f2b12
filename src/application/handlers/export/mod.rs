//! Export handlers.

mod export_session;

pub use export_session::{
    ExportSessionError, ExportSessionHandler, ExportSessionQuery, ExportSettings,
    DEFAULT_FILENAME_PREFIX,
};
