//! Fallback generation for every entity the service reports.
//!
//! External providers are public, rate-limited, and expected to fail often;
//! this module is the terminal answer when they do. Known cities and
//! stations get curated baselines (see `tables`); unknown entities get
//! bounded-random synthetic values derived from their geography. Generation
//! cannot fail.
//!
//! # RNG injection
//! Every function takes `rng: &mut impl Rng` rather than sampling a global
//! source. Production seeds from entropy; tests pass a seeded `ChaCha8Rng`
//! and assert exact output.

pub mod tables;

use chrono::{DateTime, Datelike, Duration, Utc};
use rand::Rng;

use crate::cities::City;
use crate::ingest::swpc::format_flux;
use crate::model::{
    Alert, MagneticReading, PollutionReading, SolarWindReading, StationRecord, StationStatus,
    WeatherReading,
};
use crate::stations::Station;

// ---------------------------------------------------------------------------
// Synthesis parameters
// ---------------------------------------------------------------------------

/// Total field intensity near the magnetic equator, µT.
const LOW_LATITUDE_FIELD_UT: f64 = 23.0;

/// Total field intensity near the poles, µT.
const HIGH_LATITUDE_FIELD_UT: f64 = 62.0;

/// Noise half-width applied to synthesized field strength, µT.
const FIELD_NOISE_UT: f64 = 5.0;

/// Per-cycle jitter half-width applied to curated field baselines, µT.
const FIELD_JITTER_UT: f64 = 1.0;

/// Probability a station reports online in a given cycle; the remainder is
/// split evenly between offline and maintenance.
const ONLINE_PROBABILITY: f64 = 0.95;

// ---------------------------------------------------------------------------
// Station records
// ---------------------------------------------------------------------------

/// Produces the per-cycle record for a cataloged station: the curated
/// baseline with a small field jitter, a freshly sampled status, and an
/// update time within the trailing hour.
pub fn station_record(
    station: &Station,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> StationRecord {
    // Catalog baselines are µT-scale values carried under the nT label; they
    // pass through unconverted, jitter included.
    let field = station.field_strength_nt + rng.gen_range(-FIELD_JITTER_UT..=FIELD_JITTER_UT);
    StationRecord {
        station_code: station.code.to_string(),
        station_name: station.name.to_string(),
        country: station.country.to_string(),
        network: station.network.to_string(),
        latitude: station.latitude,
        longitude: station.longitude,
        field_strength_nt: field,
        declination_deg: station.declination_deg,
        inclination_deg: station.inclination_deg,
        horizontal_intensity_nt: horizontal_intensity(field, station.inclination_deg),
        status: sample_status(rng),
        last_update: recent_timestamp(now, rng),
    }
}

/// Synthesizes a record for a station with no curated baseline.
///
/// Field strength interpolates between the equatorial and polar reference
/// intensities by |latitude| / 90 (total intensity genuinely grows toward
/// the magnetic poles) with bounded noise on top. Inclination magnitude
/// scales the same way and its sign must match the hemisphere: down
/// (positive) in the north, up (negative) in the south.
pub fn synthetic_station_record(
    code: &str,
    name: &str,
    country: &str,
    network: &str,
    latitude: f64,
    longitude: f64,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> StationRecord {
    let lat_fraction = (latitude.abs() / 90.0).min(1.0);
    let field = LOW_LATITUDE_FIELD_UT
        + lat_fraction * (HIGH_LATITUDE_FIELD_UT - LOW_LATITUDE_FIELD_UT)
        + rng.gen_range(-FIELD_NOISE_UT..=FIELD_NOISE_UT);

    let inclination_magnitude = ((lat_fraction * 90.0) + rng.gen_range(0.0..=5.0)).min(90.0);
    let inclination = if latitude == 0.0 {
        0.0
    } else {
        inclination_magnitude.copysign(latitude)
    };

    StationRecord {
        station_code: code.to_string(),
        station_name: name.to_string(),
        country: country.to_string(),
        network: network.to_string(),
        latitude,
        longitude,
        field_strength_nt: field,
        declination_deg: rng.gen_range(-25.0..=25.0),
        inclination_deg: inclination,
        horizontal_intensity_nt: horizontal_intensity(field, inclination),
        status: sample_status(rng),
        last_update: recent_timestamp(now, rng),
    }
}

/// Horizontal component of the field: H = F·cos(I). Non-negative because
/// inclination stays within ±90°.
fn horizontal_intensity(field_strength: f64, inclination_deg: f64) -> f64 {
    field_strength * inclination_deg.to_radians().cos()
}

/// Samples a station status independently of all prior cycles: ~95% online,
/// the remainder split between offline and maintenance.
pub fn sample_status(rng: &mut impl Rng) -> StationStatus {
    let roll: f64 = rng.gen_range(0.0..1.0);
    if roll < ONLINE_PROBABILITY {
        StationStatus::Online
    } else if roll < ONLINE_PROBABILITY + (1.0 - ONLINE_PROBABILITY) / 2.0 {
        StationStatus::Offline
    } else {
        StationStatus::Maintenance
    }
}

fn recent_timestamp(now: DateTime<Utc>, rng: &mut impl Rng) -> DateTime<Utc> {
    now - Duration::seconds(rng.gen_range(0..3600))
}

// ---------------------------------------------------------------------------
// City readings
// ---------------------------------------------------------------------------

/// Estimated air quality for a city: the curated baseline when one exists,
/// otherwise bounded-random values in plausible urban ranges (AQI uniform
/// in [50, 150]).
pub fn pollution_reading(city: &City, rng: &mut impl Rng) -> PollutionReading {
    if let Some(b) = tables::find_pollution_baseline(city.name) {
        return PollutionReading {
            city: city.name.to_string(),
            country: city.country.to_string(),
            state: city.state.map(String::from),
            aqi: b.aqi,
            pm25: b.pm25,
            pm10: b.pm10,
            o3: b.o3,
            no2: b.no2,
            so2: b.so2,
            co: b.co,
        };
    }
    PollutionReading {
        city: city.name.to_string(),
        country: city.country.to_string(),
        state: city.state.map(String::from),
        aqi: rng.gen_range(50..=150),
        pm25: rng.gen_range(15.0..45.0),
        pm10: rng.gen_range(25.0..75.0),
        o3: rng.gen_range(80.0..200.0),
        no2: rng.gen_range(20.0..60.0),
        so2: rng.gen_range(5.0..25.0),
        co: rng.gen_range(3000.0..8000.0),
    }
}

/// Estimated weather for a city: the curated baseline with a small pressure
/// wobble, or seasonal estimates for unknown cities. June–September is
/// winter for the mostly-southern-hemisphere monitored set.
pub fn weather_reading(city: &City, now: DateTime<Utc>, rng: &mut impl Rng) -> WeatherReading {
    if let Some(b) = tables::find_weather_baseline(city.name) {
        return WeatherReading {
            city: city.name.to_string(),
            temperature_c: b.temperature_c,
            humidity_pct: b.humidity_pct,
            pressure_hpa: b.pressure_hpa,
            wind_speed_kmh: b.wind_speed_kmh,
            description: b.description.to_string(),
        };
    }
    let is_winter = (6..=9).contains(&now.month());
    WeatherReading {
        city: city.name.to_string(),
        temperature_c: if is_winter { 22.1 } else { 28.7 },
        humidity_pct: 62.0,
        pressure_hpa: 1013.25 + rng.gen_range(-10.0..=10.0),
        wind_speed_kmh: 8.7,
        description: if is_winter { "Céu limpo" } else { "Parcialmente nublado" }.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Space weather readings
// ---------------------------------------------------------------------------

/// Simulated planetary magnetic conditions.
pub fn magnetic_reading(now: DateTime<Utc>, rng: &mut impl Rng) -> MagneticReading {
    MagneticReading {
        timestamp: now,
        k_index: rng.gen_range(1..=9),
        field_strength_nt: rng.gen_range(20.0..120.0),
        declination_deg: rng.gen_range(-15.0..=15.0),
        inclination_deg: rng.gen_range(-60.0..=60.0),
    }
}

/// Simulated solar wind conditions in quiet-to-active ranges.
pub fn solar_wind_reading(now: DateTime<Utc>, rng: &mut impl Rng) -> SolarWindReading {
    SolarWindReading {
        timestamp: now,
        wind_speed_km_s: rng.gen_range(300.0..600.0),
        proton_density_per_cm3: rng.gen_range(1.0..21.0),
        bt_nt: rng.gen_range(1.0..21.0),
        xray_flux: format_flux(rng.gen_range(1.0..10.0) * 1e-6),
    }
}

/// Synthesizes 1–3 alerts from the canned templates, each issued within the
/// trailing 24 hours.
pub fn alerts(now: DateTime<Utc>, rng: &mut impl Rng) -> Vec<Alert> {
    let count = rng.gen_range(1..=3);
    tables::ALERT_TEMPLATES
        .iter()
        .take(count)
        .map(|t| Alert {
            alert_type: t.alert_type.to_string(),
            severity: t.severity,
            description: t.description.to_string(),
            issued_at: now - Duration::seconds(rng.gen_range(0..86_400)),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
