use serde::{Deserialize, Serialize};

/// Catalog item models for the five static collections.
///
/// The data files are external content, so every struct tolerates missing
/// fields instead of failing the whole collection on one sparse entry.

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Flight {
    pub id: Option<i64>,
    pub airline: String,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: Option<String>,
    pub arrival_time: Option<String>,
    pub price: f64,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hotel {
    pub id: Option<i64>,
    pub name: String,
    pub city: String,
    pub country: String,
    pub description: String,
    pub price: f64,
    pub rating: Option<f64>,
    pub amenities: Vec<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Trip {
    pub id: Option<i64>,
    pub title: String,
    pub destination: String,
    pub description: String,
    pub difficulty: String,
    pub duration_days: Option<u32>,
    pub price: f64,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Activity {
    pub id: Option<i64>,
    pub title: String,
    pub location: String,
    pub category: String,
    pub description: String,
    pub price: f64,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Destination {
    pub id: Option<i64>,
    pub name: String,
    pub country: String,
    pub description: String,
    pub image: Option<String>,
}

/// The five collections bundled for the combined search page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub flights: Vec<Flight>,
    pub hotels: Vec<Hotel>,
    pub trips: Vec<Trip>,
    pub activities: Vec<Activity>,
    pub destinations: Vec<Destination>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparse_catalog_entry_still_parses() {
        let json = r#"{"name": "Algiers", "country": "Algeria"}"#;
        let destination: Destination = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(destination.name, "Algiers");
        assert_eq!(destination.description, "");
        assert!(destination.image.is_none());
    }

    #[test]
    fn test_flight_uses_storefront_key_names() {
        let json = r#"
            {
                "id": 7,
                "airline": "Air Algerie",
                "flightNumber": "AH1006",
                "origin": "Algiers",
                "destination": "Paris",
                "price": 210.0
            }
        "#;
        let flight: Flight = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(flight.flight_number, "AH1006");
        assert_eq!(flight.price, 210.0);
    }
}
