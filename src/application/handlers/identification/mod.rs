//! Stakeholder identification handlers.

mod add_actor;
mod record_stakeholder_entry;

pub use add_actor::{AddActorCommand, AddActorHandler};
pub use record_stakeholder_entry::{RecordStakeholderEntryCommand, RecordStakeholderEntryHandler};
