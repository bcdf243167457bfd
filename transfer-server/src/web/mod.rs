//! Web layer for the transfer recommender.
//!
//! Provides the recommendation API endpoint and serves the static
//! single-page UI.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
