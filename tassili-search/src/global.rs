use tassili_domain::{Activity, Catalog, Destination, Flight, Hotel, Trip};

use crate::engine::substring_search;
use crate::fields;

/// Combined search hits, categorized by collection.
#[derive(Debug, Clone, Default)]
pub struct SearchResults {
    pub flights: Vec<Flight>,
    pub hotels: Vec<Hotel>,
    pub trips: Vec<Trip>,
    pub activities: Vec<Activity>,
    pub destinations: Vec<Destination>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
            && self.hotels.is_empty()
            && self.trips.is_empty()
            && self.activities.is_empty()
            && self.destinations.is_empty()
    }

    pub fn total_hits(&self) -> usize {
        self.flights.len()
            + self.hotels.len()
            + self.trips.len()
            + self.activities.len()
            + self.destinations.len()
    }
}

/// Fan a query out across all five collections with the fixed per-category
/// field sets.
///
/// An empty query returns five empty sequences: the combined search page
/// shows nothing until the user types, unlike `substring_search` which
/// passes records through. Both behaviors are intentional.
pub fn global_search(query: &str, catalog: &Catalog) -> SearchResults {
    if query.trim().is_empty() {
        return SearchResults::default();
    }

    SearchResults {
        flights: cloned(substring_search(
            &catalog.flights,
            query,
            &fields::flight_fields(),
        )),
        hotels: cloned(substring_search(
            &catalog.hotels,
            query,
            &fields::hotel_fields(),
        )),
        trips: cloned(substring_search(
            &catalog.trips,
            query,
            &fields::trip_fields(),
        )),
        activities: cloned(substring_search(
            &catalog.activities,
            query,
            &fields::activity_fields(),
        )),
        destinations: cloned(substring_search(
            &catalog.destinations,
            query,
            &fields::destination_fields(),
        )),
    }
}

fn cloned<T: Clone>(hits: Vec<&T>) -> Vec<T> {
    hits.into_iter().cloned().collect()
}
