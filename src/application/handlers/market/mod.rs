//! Market analysis handlers.

mod record_market_entry;

pub use record_market_entry::{
    RecordMarketEntryCommand, RecordMarketEntryHandler, RecordMarketEntryResult,
};
