/// Monitored-city registry.
///
/// The fixed set of cities whose air quality and weather this service
/// reports. The per-city provider calls are parameterized by these
/// coordinates; the fallback tables in `fallback::tables` are keyed by the
/// `name` field, so the two must stay in sync.

/// Metadata for a single monitored city.
pub struct City {
    pub name: &'static str,
    /// ISO-style country code used in the display layer.
    pub country: &'static str,
    /// State/region abbreviation, set for Brazilian cities only.
    pub state: Option<&'static str>,
    pub latitude: f64,
    pub longitude: f64,
}

/// All monitored cities: the five largest Brazilian metros first, then a
/// spread of world cities across continents and hemispheres.
#[rustfmt::skip]
pub static CITY_REGISTRY: &[City] = &[
    City { name: "São Paulo", country: "BR", state: Some("SP"), latitude: -23.5505, longitude: -46.6333 },
    City { name: "Rio de Janeiro", country: "BR", state: Some("RJ"), latitude: -22.9068, longitude: -43.1729 },
    City { name: "Belo Horizonte", country: "BR", state: Some("MG"), latitude: -19.9166, longitude: -43.9344 },
    City { name: "Brasília", country: "BR", state: Some("DF"), latitude: -15.8267, longitude: -47.9218 },
    City { name: "Porto Alegre", country: "BR", state: Some("RS"), latitude: -30.0346, longitude: -51.2177 },
    City { name: "New York", country: "US", state: None, latitude: 40.7128, longitude: -74.0060 },
    City { name: "London", country: "UK", state: None, latitude: 51.5074, longitude: -0.1278 },
    City { name: "Tokyo", country: "JP", state: None, latitude: 35.6895, longitude: 139.6917 },
    City { name: "Paris", country: "FR", state: None, latitude: 48.8566, longitude: 2.3522 },
    City { name: "Beijing", country: "CN", state: None, latitude: 39.9042, longitude: 116.4074 },
    City { name: "Sydney", country: "AU", state: None, latitude: -33.8688, longitude: 151.2093 },
    City { name: "Moscow", country: "RU", state: None, latitude: 55.7558, longitude: 37.6176 },
    City { name: "Mumbai", country: "IN", state: None, latitude: 19.0760, longitude: 72.8777 },
    City { name: "Cape Town", country: "ZA", state: None, latitude: -33.9249, longitude: 18.4241 },
    City { name: "Toronto", country: "CA", state: None, latitude: 43.6511, longitude: -79.3470 },
];

/// Looks up a city by name. Returns `None` if not monitored.
pub fn find_city(name: &str) -> Option<&'static City> {
    CITY_REGISTRY.iter().find(|c| c.name == name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
