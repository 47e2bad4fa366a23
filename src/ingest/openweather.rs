/// OpenWeatherMap per-city clients: air pollution and current weather.
///
/// Both endpoints are parameterized by latitude/longitude and require an
/// `appid` query parameter. The free-tier "demo" placeholder is accepted in
/// configuration but rejected by the API, which lands every city on the
/// fallback path, the intended degraded mode when no key is provisioned.
///
/// API documentation: https://openweathermap.org/api
use reqwest::Client;
use serde::Deserialize;

use crate::cities::City;
use crate::model::{FetchError, PollutionReading, WeatherReading};

pub const AIR_POLLUTION_PATH: &str = "/data/2.5/air_pollution";
pub const WEATHER_PATH: &str = "/data/2.5/weather";

/// OpenWeatherMap reports a 1–5 qualitative AQI. The display layer expects a
/// US-style 0–500 scale, so the value is scaled by this factor. This is a
/// rough approximation carried over from the original data pipeline, not a
/// standards-accurate conversion between the two indices.
pub const AQI_SCALE_FACTOR: u32 = 50;

/// m/s → km/h.
const MS_TO_KMH: f64 = 3.6;

// ============================================================================
// API response structures
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct AirPollutionResponse {
    #[serde(default)]
    pub list: Vec<AirPollutionSample>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirPollutionSample {
    pub main: AirQualityIndex,
    #[serde(default)]
    pub components: PollutantComponents,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirQualityIndex {
    /// Qualitative index 1 (good) through 5 (very poor).
    pub aqi: u32,
}

/// Pollutant concentrations, µg/m³. Individual components may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PollutantComponents {
    #[serde(default)]
    pub co: f64,
    #[serde(default)]
    pub no2: f64,
    #[serde(default)]
    pub o3: f64,
    #[serde(default)]
    pub so2: f64,
    #[serde(default, rename = "pm2_5")]
    pub pm25: f64,
    #[serde(default)]
    pub pm10: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherResponse {
    pub main: WeatherMain,
    #[serde(default)]
    pub wind: Option<WeatherWind>,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherMain {
    /// °C when requested with `units=metric`.
    pub temp: f64,
    #[serde(default)]
    pub humidity: f64,
    #[serde(default)]
    pub pressure: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherWind {
    /// m/s when requested with `units=metric`.
    #[serde(default)]
    pub speed: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    #[serde(default)]
    pub description: String,
}

// ============================================================================
// Fetch functions
// ============================================================================

pub async fn fetch_air_pollution(
    client: &Client,
    base_url: &str,
    city: &City,
    api_key: &str,
) -> Result<AirPollutionResponse, FetchError> {
    let url = format!(
        "{}{}?lat={}&lon={}&appid={}",
        base_url, AIR_POLLUTION_PATH, city.latitude, city.longitude, api_key
    );
    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::ProviderUnavailable(format!(
            "air pollution for {}: HTTP {}",
            city.name,
            response.status()
        )));
    }
    response
        .json()
        .await
        .map_err(|e| FetchError::MalformedPayload(format!("air pollution for {}: {}", city.name, e)))
}

pub async fn fetch_current_weather(
    client: &Client,
    base_url: &str,
    city: &City,
    api_key: &str,
) -> Result<WeatherResponse, FetchError> {
    let url = format!(
        "{}{}?lat={}&lon={}&appid={}&units=metric&lang=pt_br",
        base_url, WEATHER_PATH, city.latitude, city.longitude, api_key
    );
    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::ProviderUnavailable(format!(
            "weather for {}: HTTP {}",
            city.name,
            response.status()
        )));
    }
    response
        .json()
        .await
        .map_err(|e| FetchError::MalformedPayload(format!("weather for {}: {}", city.name, e)))
}

// ============================================================================
// Normalizers
// ============================================================================

/// Maps an air-pollution payload into the canonical reading for `city`.
/// Fails with `MalformedPayload` when the sample list is empty; absent
/// pollutant components default to zero.
pub fn normalize_pollution(
    city: &City,
    payload: &AirPollutionResponse,
) -> Result<PollutionReading, FetchError> {
    let sample = payload.list.first().ok_or_else(|| {
        FetchError::MalformedPayload(format!("air pollution for {}: empty list", city.name))
    })?;
    let c = &sample.components;
    Ok(PollutionReading {
        city: city.name.to_string(),
        country: city.country.to_string(),
        state: city.state.map(String::from),
        aqi: sample.main.aqi * AQI_SCALE_FACTOR,
        pm25: c.pm25,
        pm10: c.pm10,
        o3: c.o3,
        no2: c.no2,
        so2: c.so2,
        co: c.co,
    })
}

/// Maps a current-weather payload into the canonical reading for `city`.
/// Wind speed arrives in m/s and is converted to km/h; a missing wind block
/// defaults to zero and a missing condition list to an empty description.
pub fn normalize_weather(city: &City, payload: &WeatherResponse) -> Result<WeatherReading, FetchError> {
    Ok(WeatherReading {
        city: city.name.to_string(),
        temperature_c: payload.main.temp,
        humidity_pct: payload.main.humidity.clamp(0.0, 100.0),
        pressure_hpa: payload.main.pressure,
        wind_speed_kmh: payload.wind.as_ref().map_or(0.0, |w| (w.speed * MS_TO_KMH).max(0.0)),
        description: payload
            .weather
            .first()
            .map_or_else(String::new, |w| w.description.clone()),
    })
}

// ============================================================================
// Tests
// ============================================================================
