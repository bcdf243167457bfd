//! Itinerary ranking.
//!
//! Orders the candidate itineraries so the caller can present the
//! fastest first.

use super::itinerary::Itinerary;

/// Rank itineraries by destination arrival, earliest first.
///
/// The sort is stable: itineraries arriving at the same instant keep
/// their construction order (the station/route enumeration order),
/// since no further total order is defined between them. The head of
/// the returned list is the recommendation; an empty input is a
/// normal "no feasible itinerary" outcome and stays empty.
pub fn rank_itineraries(mut itineraries: Vec<Itinerary>) -> Vec<Itinerary> {
    itineraries.sort_by_key(|it| it.destination_arrival);
    itineraries
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{NormalizedEvent, RouteId};
    use chrono::{Duration, TimeZone, Utc};
    use proptest::prelude::*;

    fn itineraries_strategy() -> impl Strategy<Value = Vec<Itinerary>> {
        prop::collection::vec((0i64..1440, 5i64..30), 0..20).prop_map(|params| {
            let base = Utc.with_ymd_and_hms(2025, 6, 10, 0, 0, 0).unwrap();
            params
                .into_iter()
                .map(|(dep_mins, travel)| {
                    let bus = NormalizedEvent {
                        route: RouteId::parse("143").unwrap(),
                        departs: base + Duration::minutes(dep_mins),
                        direction: None,
                    };
                    Itinerary::assemble("Elmgate", base, &bus, travel, base)
                })
                .collect()
        })
    }

    proptest! {
        /// Output is sorted ascending by destination arrival.
        #[test]
        fn output_sorted(itineraries in itineraries_strategy()) {
            let ranked = rank_itineraries(itineraries);

            for window in ranked.windows(2) {
                prop_assert!(window[0].destination_arrival <= window[1].destination_arrival);
            }
        }

        /// Ranking is a permutation: nothing added or lost.
        #[test]
        fn preserves_elements(itineraries in itineraries_strategy()) {
            let mut before: Vec<_> = itineraries.iter().map(|it| it.destination_arrival).collect();
            let ranked = rank_itineraries(itineraries);
            let mut after: Vec<_> = ranked.iter().map(|it| it.destination_arrival).collect();

            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }

        /// The head equals the minimum for any non-empty input.
        #[test]
        fn head_is_min(itineraries in itineraries_strategy()) {
            let min = itineraries.iter().map(|it| it.destination_arrival).min();
            let ranked = rank_itineraries(itineraries);

            prop_assert_eq!(ranked.first().map(|it| it.destination_arrival), min);
        }
    }
}
