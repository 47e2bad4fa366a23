/// Core data types for the space-weather monitoring service.
///
/// This module defines the shared domain model imported by all other modules.
/// It contains no I/O, only the canonical record types produced by the
/// normalizers and the fallback generator, the snapshot the aggregator hands
/// to consumers, and the error taxonomy for provider calls.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Canonical reading types
// ---------------------------------------------------------------------------

/// Planetary geomagnetic conditions for one refresh cycle.
///
/// `k_index` is the 0–9 planetary K index; its descriptive label is a pure
/// function of the value (see `scales::k_index_description`). Field angles
/// are derived from the GSM field components of the RTSW magnetometer feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagneticReading {
    pub timestamp: DateTime<Utc>,
    pub k_index: u8,
    pub field_strength_nt: f64,
    pub declination_deg: f64,
    pub inclination_deg: f64,
}

/// Solar wind conditions at the L1 monitoring point.
///
/// `xray_flux` keeps the GOES X-ray flux pre-formatted in scientific
/// notation with one fractional digit (e.g. "3.2e-6"), matching how flare
/// classes are conventionally quoted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarWindReading {
    pub timestamp: DateTime<Utc>,
    pub wind_speed_km_s: f64,
    pub proton_density_per_cm3: f64,
    pub bt_nt: f64,
    pub xray_flux: String,
}

/// Operational status of a geomagnetic observatory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    Online,
    Offline,
    Maintenance,
}

impl std::fmt::Display for StationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StationStatus::Online => write!(f, "online"),
            StationStatus::Offline => write!(f, "offline"),
            StationStatus::Maintenance => write!(f, "maintenance"),
        }
    }
}

/// One geomagnetic observatory's field measurements for the current cycle.
///
/// Identity key is `station_code` (IAGA-style short code, e.g. "BOU").
/// Invariant: the sign of `inclination_deg` matches the sign of `latitude`:
/// magnetic inclination points down in the northern hemisphere and up in the
/// southern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub station_code: String,
    pub station_name: String,
    pub country: String,
    pub network: String,
    pub latitude: f64,
    pub longitude: f64,
    pub field_strength_nt: f64,
    pub declination_deg: f64,
    pub inclination_deg: f64,
    pub horizontal_intensity_nt: f64,
    pub status: StationStatus,
    pub last_update: DateTime<Utc>,
}

/// Air quality for one monitored city. Pollutant concentrations are µg/m³.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PollutionReading {
    pub city: String,
    pub country: String,
    pub state: Option<String>,
    pub aqi: u32,
    pub pm25: f64,
    pub pm10: f64,
    pub o3: f64,
    pub no2: f64,
    pub so2: f64,
    pub co: f64,
}

/// Surface weather for one monitored city.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub city: String,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub pressure_hpa: f64,
    pub wind_speed_kmh: f64,
    pub description: String,
}

/// Severity bands for space-weather alerts, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Low,
    Moderate,
    High,
    Extreme,
}

/// A space-weather alert distilled from the NOAA notifications feed
/// (or synthesized by the fallback generator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub alert_type: String,
    pub severity: AlertSeverity,
    pub description: String,
    pub issued_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Provenance
// ---------------------------------------------------------------------------

/// A reading together with its provenance: `estimated` is `true` when the
/// value came from the fallback generator rather than a live provider.
///
/// Consumers that want to flag degraded panels read this bit; consumers that
/// don't care just take `value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sourced<T> {
    pub value: T,
    pub estimated: bool,
}

impl<T> Sourced<T> {
    /// Wraps a value obtained from a live provider.
    pub fn live(value: T) -> Self {
        Sourced { value, estimated: false }
    }

    /// Wraps a value produced by the fallback generator.
    pub fn estimated(value: T) -> Self {
        Sourced { value, estimated: true }
    }
}

// ---------------------------------------------------------------------------
// Snapshot types
// ---------------------------------------------------------------------------

/// Pollution and weather for one city, one cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityConditions {
    pub city: String,
    pub pollution: Sourced<PollutionReading>,
    pub weather: Sourced<WeatherReading>,
}

/// The planetary-scale panel: geomagnetic + solar wind + active alerts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpaceWeatherSummary {
    pub magnetic: Sourced<MagneticReading>,
    pub solar_wind: Sourced<SolarWindReading>,
    pub alerts: Sourced<Vec<Alert>>,
}

/// Recent NASA DONKI event lists over the trailing 7-day window.
///
/// Each list independently degrades to empty when its provider call fails;
/// there is no synthesized fallback for historical events.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RecentEvents {
    pub solar_flares: Vec<DonkiEvent>,
    pub cmes: Vec<DonkiEvent>,
    pub geomagnetic_storms: Vec<DonkiEvent>,
    pub energetic_particles: Vec<DonkiEvent>,
    pub high_speed_streams: Vec<DonkiEvent>,
    pub radiation_belt_enhancements: Vec<DonkiEvent>,
    pub notifications: Vec<DonkiEvent>,
}

impl RecentEvents {
    /// Total event count across all categories, for cycle summary logging.
    pub fn total(&self) -> usize {
        self.solar_flares.len()
            + self.cmes.len()
            + self.geomagnetic_storms.len()
            + self.energetic_particles.len()
            + self.high_speed_streams.len()
            + self.radiation_belt_enhancements.len()
            + self.notifications.len()
    }
}

/// Minimal shape shared by all DONKI event kinds: an identifier plus the
/// event's start/issue time and, for flares, the class (e.g. "X1.2").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonkiEvent {
    pub event_id: String,
    pub start_time: Option<String>,
    pub class_type: Option<String>,
}

/// One complete, immutable refresh result.
///
/// Rebuilt wholesale every cycle; no entity survives from the previous
/// snapshot, and the aggregator hands it out by value so consumers never
/// observe a partially merged state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub generated_at: DateTime<Utc>,
    pub space_weather: SpaceWeatherSummary,
    pub recent_events: RecentEvents,
    pub stations: Vec<StationRecord>,
    pub cities: Vec<CityConditions>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise from a single provider call.
///
/// Both variants are caught at the smallest per-entity/per-category scope and
/// converted into fallback output; neither propagates out of the aggregator.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure or non-success HTTP status from a provider.
    #[error("provider unavailable: {0}")]
    ProviderUnavailable(String),
    /// The provider responded successfully but the body does not match the
    /// expected shape (e.g. missing the top-level array).
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::ProviderUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_severity_ordering_ascends() {
        assert!(AlertSeverity::Low < AlertSeverity::Moderate);
        assert!(AlertSeverity::Moderate < AlertSeverity::High);
        assert!(AlertSeverity::High < AlertSeverity::Extreme);
    }

    #[test]
    fn test_sourced_constructors_set_provenance() {
        let live = Sourced::live(42);
        let est = Sourced::estimated(42);
        assert!(!live.estimated);
        assert!(est.estimated);
        assert_eq!(live.value, est.value);
    }

    #[test]
    fn test_station_status_display_is_lowercase() {
        assert_eq!(StationStatus::Online.to_string(), "online");
        assert_eq!(StationStatus::Offline.to_string(), "offline");
        assert_eq!(StationStatus::Maintenance.to_string(), "maintenance");
    }

    #[test]
    fn test_fetch_error_messages_name_the_failure_kind() {
        let unavailable = FetchError::ProviderUnavailable("HTTP 503".to_string());
        let malformed = FetchError::MalformedPayload("missing top-level array".to_string());
        assert!(unavailable.to_string().contains("provider unavailable"));
        assert!(malformed.to_string().contains("malformed payload"));
    }

    #[test]
    fn test_recent_events_total_sums_all_categories() {
        let ev = DonkiEvent {
            event_id: "2026-08-29T12:00:00-FLR-001".to_string(),
            start_time: Some("2026-08-29T12:00Z".to_string()),
            class_type: Some("M1.4".to_string()),
        };
        let events = RecentEvents {
            solar_flares: vec![ev.clone(), ev.clone()],
            cmes: vec![ev.clone()],
            ..Default::default()
        };
        assert_eq!(events.total(), 3);
    }
}
