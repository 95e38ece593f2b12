//! HTTP adapter for the three toolkits' form submissions.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    ActorAddedResponse, AddActorRequest, ConflictRequest, RatingRequest,
    StakeholderEntryRequest, ValueMapRequest,
};
pub use routes::toolkit_routes;
