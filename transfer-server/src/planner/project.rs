//! Station arrival projection.
//!
//! Given the chosen next train, derives its arrival instant at each
//! candidate alighting station from the fixed per-station offsets.
//! Choosing the train in the first place is the caller's job; this
//! stage is deterministic given that choice.

use chrono::{DateTime, Utc};

use crate::domain::{NormalizedEvent, StationId};

use super::config::StationOffset;

/// A projected arrival of the watched train at a candidate station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationArrival {
    /// Provider identifier for the station.
    pub station: StationId,

    /// Human-readable station name.
    pub name: String,

    /// Projected arrival instant: train departure plus station offset.
    pub arrival: DateTime<Utc>,
}

/// Project the train's arrival at each configured station.
///
/// Output preserves the configured station order, so with
/// non-decreasing offsets the arrival instants are non-decreasing too.
pub fn project_arrivals(train: &NormalizedEvent, stations: &[StationOffset]) -> Vec<StationArrival> {
    stations
        .iter()
        .map(|entry| StationArrival {
            station: entry.station.clone(),
            name: entry.name.clone(),
            arrival: train.departs + entry.offset(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RouteId;
    use chrono::{Duration, TimeZone};

    fn train_at(h: u32, m: u32) -> NormalizedEvent {
        NormalizedEvent {
            route: RouteId::parse("HL1").unwrap(),
            departs: Utc.with_ymd_and_hms(2025, 6, 10, h, m, 0).unwrap(),
            direction: Some("Harborfront".to_string()),
        }
    }

    fn offsets(mins: &[i64]) -> Vec<StationOffset> {
        mins.iter()
            .enumerate()
            .map(|(i, &offset_mins)| StationOffset {
                station: StationId::parse(&format!("S{i}")).unwrap(),
                name: format!("Station {i}"),
                offset_mins,
            })
            .collect()
    }

    #[test]
    fn offsets_zero_three_six() {
        let train = train_at(10, 0);
        let arrivals = project_arrivals(&train, &offsets(&[0, 3, 6]));

        assert_eq!(arrivals.len(), 3);
        assert_eq!(arrivals[0].arrival, train.departs);
        assert_eq!(arrivals[1].arrival, train.departs + Duration::minutes(3));
        assert_eq!(arrivals[2].arrival, train.departs + Duration::minutes(6));
    }

    #[test]
    fn arrivals_non_decreasing_with_offset_order() {
        let train = train_at(23, 55);
        let arrivals = project_arrivals(&train, &offsets(&[0, 3, 6]));

        for window in arrivals.windows(2) {
            assert!(window[0].arrival <= window[1].arrival);
        }
        // Crossing midnight stays ordered because instants are absolute.
        assert_eq!(
            arrivals[2].arrival,
            Utc.with_ymd_and_hms(2025, 6, 11, 0, 1, 0).unwrap()
        );
    }

    #[test]
    fn preserves_station_identity() {
        let train = train_at(9, 30);
        let arrivals = project_arrivals(&train, &offsets(&[0, 5]));

        assert_eq!(arrivals[0].station, StationId::parse("S0").unwrap());
        assert_eq!(arrivals[1].name, "Station 1");
    }

    #[test]
    fn no_stations_no_arrivals() {
        let train = train_at(10, 0);
        assert!(project_arrivals(&train, &[]).is_empty());
    }
}
