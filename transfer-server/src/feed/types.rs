//! Transit API response DTOs.
//!
//! These types map directly to the provider's JSON responses. They
//! use `Option` liberally because the provider omits fields rather
//! than sending null values in many cases.

use serde::Deserialize;

/// Response from the rail departures endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainBoard {
    /// When this response was generated (ISO 8601 datetime).
    pub generated_at: Option<String>,

    /// Station the board was requested for.
    pub station_id: Option<String>,

    /// Upcoming train departures, all directions.
    pub departures: Option<Vec<TrainDeparture>>,
}

/// One train departure on the board.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainDeparture {
    /// Line identifier (e.g. "HL1").
    pub line: Option<String>,

    /// Timetabled departure (ISO 8601 datetime).
    pub scheduled_departure: Option<String>,

    /// Live estimated departure (ISO 8601 datetime).
    pub estimated_departure: Option<String>,

    /// Direction of travel, named by its terminus.
    pub direction: Option<String>,

    /// Platform number/letter.
    pub platform: Option<String>,
}

/// Response from the bus arrivals endpoint for one stop.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusBoard {
    /// When this response was generated (ISO 8601 datetime).
    pub generated_at: Option<String>,

    /// Stop the board was requested for.
    pub stop_id: Option<String>,

    /// Upcoming bus departures at this stop.
    pub arrivals: Option<Vec<BusArrival>>,
}

/// One bus departure at a stop.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusArrival {
    /// Route number (e.g. "143").
    pub route: Option<String>,

    /// Timetabled departure (ISO 8601 datetime).
    pub scheduled_departure: Option<String>,

    /// Live estimated departure (ISO 8601 datetime).
    pub estimated_departure: Option<String>,

    /// Vehicle identifier, when the provider is tracking one.
    pub vehicle_id: Option<String>,
}
