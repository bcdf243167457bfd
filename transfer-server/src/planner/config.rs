//! Static plan configuration for the transfer recommender.
//!
//! Station offsets, route travel times and stop identifiers are fixed
//! properties of the deployment. They are passed explicitly into the
//! planner rather than read from ambient globals, so tests can run the
//! core against arbitrary plans.

use chrono::Duration;

use crate::domain::{RouteId, StationId, StopId};

/// A candidate alighting station on the rail line.
#[derive(Debug, Clone)]
pub struct StationOffset {
    /// Provider identifier for the station.
    pub station: StationId,

    /// Human-readable station name.
    pub name: String,

    /// Fixed minutes from the origin station's departure to arrival
    /// here. Offsets must be non-decreasing in declaration order.
    pub offset_mins: i64,
}

impl StationOffset {
    /// Offset as a Duration.
    pub fn offset(&self) -> Duration {
        Duration::minutes(self.offset_mins)
    }
}

/// A candidate connecting bus route at one of the stations.
#[derive(Debug, Clone)]
pub struct RouteConfig {
    /// Route number of the connecting bus.
    pub route: RouteId,

    /// Station where the rider alights to catch this route.
    pub station: StationId,

    /// Bus stop queried upstream for this route's departures.
    pub stop: StopId,

    /// Fixed bus travel time from the stop to the destination.
    pub travel_mins: i64,
}

impl RouteConfig {
    /// Travel time as a Duration.
    pub fn travel_time(&self) -> Duration {
        Duration::minutes(self.travel_mins)
    }
}

/// The complete transfer plan: which train to watch, where a rider can
/// alight, and which buses connect onward.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    /// Origin station whose departure board supplies the train feed.
    pub origin: StationId,

    /// Direction identifier (terminus) the train feed is filtered to.
    pub direction: String,

    /// Minimum minutes between arriving at a station and the bus
    /// departing, to allow for the physical transfer. One buffer
    /// applies to every route.
    pub min_transfer_mins: i64,

    /// Candidate alighting stations, nearest first.
    pub stations: Vec<StationOffset>,

    /// Candidate station/route pairs, in ranking tie-break order.
    pub routes: Vec<RouteConfig>,
}

impl PlanConfig {
    /// Transfer buffer as a Duration.
    pub fn min_transfer(&self) -> Duration {
        Duration::minutes(self.min_transfer_mins)
    }

    /// Look up the configured offset entry for a station.
    pub fn station(&self, id: &StationId) -> Option<&StationOffset> {
        self.stations.iter().find(|s| &s.station == id)
    }
}

impl Default for PlanConfig {
    /// The deployed plan: an inbound rider on the Harbor line choosing
    /// between three stations and five connecting routes.
    fn default() -> Self {
        let riverside = StationId::parse("R210").unwrap();
        let elmgate = StationId::parse("R211").unwrap();
        let northcross = StationId::parse("R212").unwrap();

        Self {
            origin: StationId::parse("R209").unwrap(),
            direction: "Harborfront".to_string(),
            min_transfer_mins: 3,
            stations: vec![
                StationOffset {
                    station: riverside.clone(),
                    name: "Riverside".to_string(),
                    offset_mins: 0,
                },
                StationOffset {
                    station: elmgate.clone(),
                    name: "Elmgate".to_string(),
                    offset_mins: 3,
                },
                StationOffset {
                    station: northcross.clone(),
                    name: "Northcross".to_string(),
                    offset_mins: 6,
                },
            ],
            routes: vec![
                RouteConfig {
                    route: RouteId::parse("72").unwrap(),
                    station: riverside.clone(),
                    stop: StopId::parse("30241").unwrap(),
                    travel_mins: 18,
                },
                RouteConfig {
                    route: RouteId::parse("143").unwrap(),
                    station: elmgate.clone(),
                    stop: StopId::parse("30355").unwrap(),
                    travel_mins: 14,
                },
                RouteConfig {
                    route: RouteId::parse("208").unwrap(),
                    station: elmgate.clone(),
                    stop: StopId::parse("30355").unwrap(),
                    travel_mins: 12,
                },
                RouteConfig {
                    route: RouteId::parse("85").unwrap(),
                    station: northcross.clone(),
                    stop: StopId::parse("30412").unwrap(),
                    travel_mins: 15,
                },
                RouteConfig {
                    route: RouteId::parse("310").unwrap(),
                    station: northcross.clone(),
                    stop: StopId::parse("30412").unwrap(),
                    travel_mins: 10,
                },
            ],
        }
    }
}
