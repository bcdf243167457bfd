//! Itinerary assembly.
//!
//! Combines a station arrival, a matched bus and the route's fixed
//! travel time into one complete candidate journey.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{NormalizedEvent, RouteId};

/// One complete candidate journey to the destination.
///
/// Built once per successful transfer match and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    /// Name of the station where the rider alights.
    pub station_name: String,

    /// Train arrival instant at that station.
    pub train_arrival: DateTime<Utc>,

    /// Departure instant of the matched bus.
    pub bus_departure: DateTime<Utc>,

    /// Route number of the matched bus.
    pub route: RouteId,

    /// Fixed bus travel time to the destination, in minutes.
    pub travel_mins: i64,

    /// Projected arrival at the destination.
    pub destination_arrival: DateTime<Utc>,

    /// Whole minutes from the query instant to destination arrival.
    /// Advisory display value; never used for ordering.
    pub total_mins: i64,
}

impl Itinerary {
    /// Assemble an itinerary from a matched transfer.
    ///
    /// `destination_arrival` is the bus departure plus the route's
    /// travel time; `total_mins` is the span from `now` rounded to the
    /// nearest whole minute (half away from zero).
    pub fn assemble(
        station_name: &str,
        train_arrival: DateTime<Utc>,
        bus: &NormalizedEvent,
        travel_mins: i64,
        now: DateTime<Utc>,
    ) -> Self {
        let destination_arrival = bus.departs + Duration::minutes(travel_mins);
        let total_mins = round_to_minutes(destination_arrival - now);

        Self {
            station_name: station_name.to_string(),
            train_arrival,
            bus_departure: bus.departs,
            route: bus.route.clone(),
            travel_mins,
            destination_arrival,
            total_mins,
        }
    }
}

/// Round a duration to the nearest whole minute, half away from zero.
fn round_to_minutes(span: Duration) -> i64 {
    (span.num_seconds() as f64 / 60.0).round() as i64
}
