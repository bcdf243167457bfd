//! Data transfer objects for web responses.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::planner::{Itinerary, NextTrain, Recommendation, StationArrival};

fn iso(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Response body for `GET /api/recommendation`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    /// Query instant the result was derived from (ISO 8601).
    pub timestamp: String,

    /// The next train and its projected station arrivals; absent when
    /// no upcoming service was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_train: Option<NextTrainDto>,

    /// The fastest itinerary, or null when none is feasible.
    pub recommendation: Option<ItineraryDto>,

    /// All feasible itineraries, fastest first.
    pub all_options: Vec<ItineraryDto>,

    /// Explanation when no upcoming train was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecommendationResponse {
    /// Build the response body from a computed recommendation.
    pub fn from_recommendation(result: &Recommendation) -> Self {
        let error = result
            .next_train
            .is_none()
            .then(|| "no upcoming train in the watched direction".to_string());

        Self {
            timestamp: iso(result.queried_at),
            next_train: result.next_train.as_ref().map(NextTrainDto::from_next_train),
            recommendation: result.best.as_ref().map(ItineraryDto::from_itinerary),
            all_options: result.options.iter().map(ItineraryDto::from_itinerary).collect(),
            error,
        }
    }
}

/// The chosen next train.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextTrainDto {
    /// Resolved departure from the origin station.
    pub departs: String,

    /// Projected arrival per candidate station, nearest first.
    pub arrivals: Vec<StationArrivalDto>,
}

impl NextTrainDto {
    fn from_next_train(next: &NextTrain) -> Self {
        Self {
            departs: iso(next.departs),
            arrivals: next
                .arrivals
                .iter()
                .map(StationArrivalDto::from_arrival)
                .collect(),
        }
    }
}

/// A projected train arrival at one station.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StationArrivalDto {
    /// Station identifier
    pub station: String,

    /// Station name
    pub name: String,

    /// Projected arrival instant
    pub arrival: String,
}

impl StationArrivalDto {
    fn from_arrival(arrival: &StationArrival) -> Self {
        Self {
            station: arrival.station.as_str().to_string(),
            name: arrival.name.clone(),
            arrival: iso(arrival.arrival),
        }
    }
}

/// One candidate itinerary.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItineraryDto {
    /// Station where the rider alights
    pub station: String,

    /// Train arrival at that station
    pub train_arrival: String,

    /// Departure of the matched bus
    pub bus_departure: String,

    /// Route number of the matched bus
    pub route: String,

    /// Bus travel time to the destination, minutes
    pub travel_mins: i64,

    /// Projected destination arrival
    pub destination_arrival: String,

    /// Whole minutes from the query instant to destination arrival
    pub total_mins: i64,
}

impl ItineraryDto {
    fn from_itinerary(it: &Itinerary) -> Self {
        Self {
            station: it.station_name.clone(),
            train_arrival: iso(it.train_arrival),
            bus_departure: iso(it.bus_departure),
            route: it.route.as_str().to_string(),
            travel_mins: it.travel_mins,
            destination_arrival: iso(it.destination_arrival),
            total_mins: it.total_mins,
        }
    }
}

/// Error body returned with HTTP 500 on upstream failure.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Short error category
    pub error: String,

    /// Human-readable detail
    pub message: String,
}
