/// NOAA Space Weather Prediction Center feed clients.
///
/// Wraps the SWPC public JSON feeds (no authentication): planetary K index,
/// real-time solar wind magnetometer and plasma, GOES X-ray flux, and the
/// notifications feed. Each fetch does one GET against `base_url` and fails
/// with `ProviderUnavailable` on transport errors or non-2xx status, or
/// `MalformedPayload` when the body cannot be decoded; the normalizers below
/// are pure functions over the decoded payloads.
///
/// Feed index: https://services.swpc.noaa.gov/json/
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::ingest::parse_time_tag;
use crate::model::{Alert, FetchError, MagneticReading, SolarWindReading};
use crate::scales::alert_severity;

pub const K_INDEX_PATH: &str = "/json/planetary_k_index_1m.json";
pub const MAGNETOMETER_PATH: &str = "/json/rtsw/rtsw_mag_1m.json";
pub const PLASMA_PATH: &str = "/json/rtsw/rtsw_plasma_1m.json";
pub const XRAY_PATH: &str = "/json/goes/primary/xrays-7-day.json";
pub const NOTIFICATIONS_PATH: &str = "/json/notifications.json";

/// Alerts surfaced per snapshot; the feed carries weeks of history.
const MAX_ALERTS: usize = 3;

/// Alert descriptions are truncated to this many characters for display.
const ALERT_DESCRIPTION_LEN: usize = 100;

// ============================================================================
// Feed payload structures
// ============================================================================

/// One minute-cadence planetary K index estimate.
#[derive(Debug, Clone, Deserialize)]
pub struct KIndexEntry {
    pub time_tag: String,
    #[serde(default)]
    pub k_index: f64,
    #[serde(default)]
    pub estimated: bool,
}

/// One minute-cadence RTSW magnetometer sample (GSM coordinates, nT).
#[derive(Debug, Clone, Deserialize)]
pub struct MagnetometerEntry {
    pub time_tag: String,
    #[serde(default)]
    pub bx_gsm: f64,
    #[serde(default)]
    pub by_gsm: f64,
    #[serde(default)]
    pub bz_gsm: f64,
    #[serde(default)]
    pub bt: f64,
}

/// One minute-cadence RTSW plasma sample.
#[derive(Debug, Clone, Deserialize)]
pub struct PlasmaEntry {
    pub time_tag: String,
    /// Proton density, particles/cm³.
    #[serde(default)]
    pub density: f64,
    /// Bulk speed, km/s.
    #[serde(default)]
    pub speed: f64,
    #[serde(default)]
    pub temperature: f64,
}

/// One GOES X-ray flux sample, W/m².
#[derive(Debug, Clone, Deserialize)]
pub struct XrayEntry {
    pub time_tag: String,
    #[serde(default)]
    pub flux: f64,
    #[serde(default)]
    pub energy: String,
}

/// One SWPC notification product; the feed keys are snake_case.
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationEntry {
    pub message_id: String,
    pub message_type: String,
    #[serde(default)]
    pub message_issue_time: String,
    #[serde(default)]
    pub message_body: String,
}

// ============================================================================
// Fetch functions
// ============================================================================

async fn fetch_feed<T: serde::de::DeserializeOwned>(
    client: &Client,
    base_url: &str,
    path: &str,
    feed: &str,
) -> Result<Vec<T>, FetchError> {
    let url = format!("{}{}", base_url, path);
    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::ProviderUnavailable(format!(
            "SWPC {}: HTTP {}",
            feed,
            response.status()
        )));
    }
    response
        .json()
        .await
        .map_err(|e| FetchError::MalformedPayload(format!("SWPC {}: {}", feed, e)))
}

pub async fn fetch_planetary_k_index(
    client: &Client,
    base_url: &str,
) -> Result<Vec<KIndexEntry>, FetchError> {
    fetch_feed(client, base_url, K_INDEX_PATH, "K index").await
}

pub async fn fetch_magnetometer(
    client: &Client,
    base_url: &str,
) -> Result<Vec<MagnetometerEntry>, FetchError> {
    fetch_feed(client, base_url, MAGNETOMETER_PATH, "magnetometer").await
}

pub async fn fetch_plasma(
    client: &Client,
    base_url: &str,
) -> Result<Vec<PlasmaEntry>, FetchError> {
    fetch_feed(client, base_url, PLASMA_PATH, "plasma").await
}

pub async fn fetch_xray_flux(
    client: &Client,
    base_url: &str,
) -> Result<Vec<XrayEntry>, FetchError> {
    fetch_feed(client, base_url, XRAY_PATH, "X-ray flux").await
}

pub async fn fetch_notifications(
    client: &Client,
    base_url: &str,
) -> Result<Vec<NotificationEntry>, FetchError> {
    fetch_feed(client, base_url, NOTIFICATIONS_PATH, "notifications").await
}

// ============================================================================
// Normalizers
// ============================================================================

/// Builds the canonical magnetic reading from the K index feed plus the
/// magnetometer feed. The K index feed is authoritative; magnetometer data
/// is optional and its absence defaults the field columns to 0.
///
/// Declination and inclination are derived from the GSM components of the
/// latest magnetometer sample: declination = atan2(by, bx), inclination =
/// atan2(bz, √(bx² + by²)), both in degrees.
pub fn normalize_magnetic(
    k_entries: &[KIndexEntry],
    mag_entries: Option<&[MagnetometerEntry]>,
    now: DateTime<Utc>,
) -> Result<MagneticReading, FetchError> {
    let latest_k = k_entries
        .last()
        .ok_or_else(|| FetchError::MalformedPayload("K index feed: empty array".to_string()))?;

    let k_index = latest_k.k_index.round().clamp(0.0, 9.0) as u8;
    let timestamp = parse_time_tag(&latest_k.time_tag).unwrap_or(now);

    let (field_strength_nt, declination_deg, inclination_deg) = match mag_entries.and_then(|m| m.last()) {
        Some(mag) => {
            let horizontal = (mag.bx_gsm * mag.bx_gsm + mag.by_gsm * mag.by_gsm).sqrt();
            (
                mag.bt,
                mag.by_gsm.atan2(mag.bx_gsm).to_degrees(),
                mag.bz_gsm.atan2(horizontal).to_degrees(),
            )
        }
        None => (0.0, 0.0, 0.0),
    };

    Ok(MagneticReading {
        timestamp,
        k_index,
        field_strength_nt,
        declination_deg,
        inclination_deg,
    })
}

/// Builds the canonical solar wind reading from the plasma feed, taking the
/// interplanetary Bt from the magnetometer feed and the latest GOES flux
/// when available (both default to zero per the partial-payload contract).
pub fn normalize_solar_wind(
    plasma_entries: &[PlasmaEntry],
    mag_entries: Option<&[MagnetometerEntry]>,
    xray_entries: Option<&[XrayEntry]>,
    now: DateTime<Utc>,
) -> Result<SolarWindReading, FetchError> {
    let latest = plasma_entries
        .last()
        .ok_or_else(|| FetchError::MalformedPayload("plasma feed: empty array".to_string()))?;

    let bt_nt = mag_entries.and_then(|m| m.last()).map_or(0.0, |m| m.bt);
    let xray_flux = xray_entries
        .and_then(|x| x.last())
        .map_or_else(|| "0.0e0".to_string(), |x| format_flux(x.flux));

    Ok(SolarWindReading {
        timestamp: parse_time_tag(&latest.time_tag).unwrap_or(now),
        wind_speed_km_s: latest.speed.max(0.0),
        proton_density_per_cm3: latest.density.max(0.0),
        bt_nt: bt_nt.max(0.0),
        xray_flux,
    })
}

/// Formats an X-ray flux value in scientific notation with one fractional
/// digit, the convention used to quote flare intensities.
pub fn format_flux(flux: f64) -> String {
    format!("{:.1e}", flux)
}

/// Distills the notifications feed into display alerts: the most recent
/// `MAX_ALERTS` products, severities mapped from the message type, bodies
/// truncated for panel display.
///
/// An empty feed is a valid quiet-sun state, not an error.
pub fn normalize_alerts(entries: &[NotificationEntry], now: DateTime<Utc>) -> Vec<Alert> {
    entries
        .iter()
        .take(MAX_ALERTS)
        .map(|entry| Alert {
            alert_type: entry.message_type.clone(),
            severity: alert_severity(&entry.message_type),
            description: truncate_body(&entry.message_body),
            issued_at: parse_time_tag(&entry.message_issue_time).unwrap_or(now),
        })
        .collect()
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() <= ALERT_DESCRIPTION_LEN {
        body.to_string()
    } else {
        let head: String = body.chars().take(ALERT_DESCRIPTION_LEN).collect();
        format!("{}...", head)
    }
}

// ============================================================================
// Tests
// ============================================================================
