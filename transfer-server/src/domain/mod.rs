//! Domain types for the transfer recommender.
//!
//! This module contains the core domain model types that represent
//! validated transit data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod event;
mod route;
mod station;

pub use event::{NormalizedEvent, RawDeparture};
pub use route::{InvalidRoute, RouteId};
pub use station::{InvalidId, StationId, StopId};
