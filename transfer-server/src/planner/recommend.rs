//! Recommendation driver.
//!
//! Runs the full pipeline over already-fetched feed data: normalize,
//! pick the next train, project its station arrivals, match a transfer
//! per station/route pair, assemble itineraries and rank them. Pure,
//! synchronous computation; all I/O happens before this module is
//! reached.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::domain::{NormalizedEvent, RawDeparture, RouteId, StationId};

use super::config::PlanConfig;
use super::itinerary::Itinerary;
use super::normalize::normalize;
use super::project::{StationArrival, project_arrivals};
use super::rank::rank_itineraries;
use super::transfer::match_transfer;

/// Key for one bus feed: the station the rider alights at and the
/// route the feed was fetched for.
pub type BusFeedKey = (StationId, RouteId);

/// All feed data for one query, fetched up front by the caller.
///
/// Any subset of the bus feeds may be missing or empty; only the
/// itineraries depending on them are omitted.
#[derive(Debug, Clone, Default)]
pub struct FeedSet {
    /// Train departures from the origin station, all directions.
    pub train: Vec<RawDeparture>,

    /// Bus departures per station/route pair.
    pub buses: HashMap<BusFeedKey, Vec<RawDeparture>>,
}

/// The chosen next train and its projected station arrivals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextTrain {
    /// Resolved departure instant from the origin station.
    pub departs: DateTime<Utc>,

    /// Projected arrivals at the candidate stations, nearest first.
    pub arrivals: Vec<StationArrival>,
}

/// The result of one recommendation query.
///
/// Constructed once per query and returned; nothing is persisted.
/// `next_train: None` means no upcoming service was found, which is
/// distinct from a train with no feasible itinerary (`next_train`
/// present, `options` empty).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    /// The query instant this result was derived from.
    pub queried_at: DateTime<Utc>,

    /// The next train, if one is upcoming in the watched direction.
    pub next_train: Option<NextTrain>,

    /// The fastest itinerary, if any pair produced one.
    pub best: Option<Itinerary>,

    /// All feasible itineraries, fastest first.
    pub options: Vec<Itinerary>,
}

/// Compute a recommendation from already-resolved feed data.
///
/// Deterministic given `now`, the feeds and the plan; repeated calls
/// with identical inputs yield identical results.
pub fn compute_recommendation(
    now: DateTime<Utc>,
    feeds: &FeedSet,
    plan: &PlanConfig,
) -> Recommendation {
    let Some(train) = next_train(now, &feeds.train, &plan.direction) else {
        debug!(direction = %plan.direction, "no upcoming train in watched direction");
        return Recommendation {
            queried_at: now,
            next_train: None,
            best: None,
            options: Vec::new(),
        };
    };

    let arrivals = project_arrivals(&train, &plan.stations);

    let mut itineraries = Vec::with_capacity(plan.routes.len());
    for route_cfg in &plan.routes {
        let Some(station) = arrivals.iter().find(|a| a.station == route_cfg.station) else {
            // Route references a station outside the plan; nothing to match.
            continue;
        };

        let key = (route_cfg.station.clone(), route_cfg.route.clone());
        let Some(raw) = feeds.buses.get(&key) else {
            debug!(route = %route_cfg.route, station = %route_cfg.station, "bus feed missing");
            continue;
        };

        let events: Vec<NormalizedEvent> = normalize(raw)
            .into_iter()
            .filter(|e| e.route == route_cfg.route)
            .collect();

        if let Some(bus) = match_transfer(station.arrival, plan.min_transfer(), &events) {
            itineraries.push(Itinerary::assemble(
                &station.name,
                station.arrival,
                bus,
                route_cfg.travel_mins,
                now,
            ));
        }
        // No feasible bus for this pair is an expected, silent outcome.
    }

    let options = rank_itineraries(itineraries);
    let best = options.first().cloned();

    Recommendation {
        queried_at: now,
        next_train: Some(NextTrain {
            departs: train.departs,
            arrivals,
        }),
        best,
        options,
    }
}

/// Choose the single next train: normalize the feed, keep events in
/// the watched direction, and take the earliest departure at or after
/// `now`.
fn next_train(
    now: DateTime<Utc>,
    feed: &[RawDeparture],
    direction: &str,
) -> Option<NormalizedEvent> {
    normalize(feed)
        .into_iter()
        .filter(|e| e.direction.as_deref() == Some(direction))
        .filter(|e| e.departs >= now)
        .min_by_key(|e| e.departs)
}
