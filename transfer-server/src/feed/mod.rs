//! Upstream transit feed client.
//!
//! This module provides an HTTP client for the transit provider's
//! real-time API: one rail departure board (the watched line, all
//! directions) and per-stop bus arrival boards filterable by route.
//!
//! Key characteristics of the feed:
//! - Instants are ISO 8601 datetimes with offsets; everything is
//!   converted to UTC at the boundary
//! - The provider omits fields rather than sending nulls, so the
//!   DTOs are `Option`-heavy
//! - Requests are signed with an `x-apikey` header

mod client;
mod convert;
mod error;
mod types;

pub use client::{FeedClient, FeedConfig};
pub use convert::{convert_bus_board, convert_train_board};
pub use error::FeedError;
pub use types::{BusArrival, BusBoard, TrainBoard, TrainDeparture};
