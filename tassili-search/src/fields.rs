use tassili_domain::{Activity, Destination, Flight, Hotel, Trip};

use crate::engine::SearchField;

/// Per-category field tables for the combined search page, one accessor per
/// searchable field.

fn text(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub fn flight_fields() -> Vec<SearchField<Flight>> {
    vec![
        SearchField::new("airline", |f: &Flight| text(&f.airline)),
        SearchField::new("origin", |f: &Flight| text(&f.origin)),
        SearchField::new("destination", |f: &Flight| text(&f.destination)),
        SearchField::new("flightNumber", |f: &Flight| text(&f.flight_number)),
    ]
}

pub fn hotel_fields() -> Vec<SearchField<Hotel>> {
    vec![
        SearchField::new("name", |h: &Hotel| text(&h.name)),
        SearchField::new("city", |h: &Hotel| text(&h.city)),
        SearchField::new("country", |h: &Hotel| text(&h.country)),
        SearchField::new("description", |h: &Hotel| text(&h.description)),
    ]
}

pub fn trip_fields() -> Vec<SearchField<Trip>> {
    vec![
        SearchField::new("title", |t: &Trip| text(&t.title)),
        SearchField::new("destination", |t: &Trip| text(&t.destination)),
        SearchField::new("description", |t: &Trip| text(&t.description)),
        SearchField::new("difficulty", |t: &Trip| text(&t.difficulty)),
    ]
}

pub fn activity_fields() -> Vec<SearchField<Activity>> {
    vec![
        SearchField::new("title", |a: &Activity| text(&a.title)),
        SearchField::new("location", |a: &Activity| text(&a.location)),
        SearchField::new("category", |a: &Activity| text(&a.category)),
        SearchField::new("description", |a: &Activity| text(&a.description)),
    ]
}

pub fn destination_fields() -> Vec<SearchField<Destination>> {
    vec![
        SearchField::new("name", |d: &Destination| text(&d.name)),
        SearchField::new("country", |d: &Destination| text(&d.country)),
        SearchField::new("description", |d: &Destination| text(&d.description)),
    ]
}
