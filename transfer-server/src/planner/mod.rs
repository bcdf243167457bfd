//! Transfer recommendation core.
//!
//! This module implements the decision logic of the service: given
//! the next inbound train and the bus departures at each candidate
//! stop, find the earliest bus the rider can make at each station and
//! rank the resulting itineraries by destination arrival.
//!
//! Everything here is pure, synchronous computation over
//! already-fetched data; the feed and web layers own all I/O.

mod config;
mod itinerary;
mod normalize;
mod project;
mod rank;
mod recommend;
mod transfer;

pub use config::{PlanConfig, RouteConfig, StationOffset};
pub use itinerary::Itinerary;
pub use normalize::normalize;
pub use project::{StationArrival, project_arrivals};
pub use rank::rank_itineraries;
pub use recommend::{BusFeedKey, FeedSet, NextTrain, Recommendation, compute_recommendation};
pub use transfer::match_transfer;
