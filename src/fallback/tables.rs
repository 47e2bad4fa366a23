/// Curated reference tables for fallback generation.
///
/// Point-estimates for the monitored cities, keyed by the city name used in
/// `cities::CITY_REGISTRY`. Pollution values reflect published annual
/// averages for each metro; weather values are typical seasonal conditions.
/// These are estimates for display continuity, not measurements.
use crate::model::AlertSeverity;

/// Curated air-quality baseline for one city.
pub struct PollutionBaseline {
    pub city: &'static str,
    pub aqi: u32,
    pub pm25: f64,
    pub pm10: f64,
    pub o3: f64,
    pub no2: f64,
    pub so2: f64,
    pub co: f64,
}

#[rustfmt::skip]
pub static POLLUTION_BASELINES: &[PollutionBaseline] = &[
    PollutionBaseline { city: "São Paulo", aqi: 87, pm25: 26.8, pm10: 44.3, o3: 92.1, no2: 47.5, so2: 11.2, co: 8900.0 },
    PollutionBaseline { city: "Rio de Janeiro", aqi: 73, pm25: 18.9, pm10: 32.6, o3: 78.4, no2: 34.7, so2: 8.3, co: 6700.0 },
    PollutionBaseline { city: "Belo Horizonte", aqi: 69, pm25: 17.2, pm10: 29.8, o3: 74.1, no2: 28.3, so2: 7.6, co: 5800.0 },
    PollutionBaseline { city: "Brasília", aqi: 64, pm25: 15.6, pm10: 26.4, o3: 68.9, no2: 24.1, so2: 6.8, co: 5200.0 },
    PollutionBaseline { city: "Porto Alegre", aqi: 61, pm25: 14.3, pm10: 24.7, o3: 65.2, no2: 22.8, so2: 6.1, co: 4900.0 },
    PollutionBaseline { city: "New York", aqi: 58, pm25: 12.8, pm10: 22.1, o3: 85.3, no2: 28.7, so2: 6.2, co: 4200.0 },
    PollutionBaseline { city: "London", aqi: 71, pm25: 15.4, pm10: 26.8, o3: 78.9, no2: 32.1, so2: 8.7, co: 5300.0 },
    PollutionBaseline { city: "Tokyo", aqi: 65, pm25: 14.2, pm10: 24.6, o3: 82.1, no2: 29.8, so2: 7.1, co: 4800.0 },
    PollutionBaseline { city: "Paris", aqi: 68, pm25: 16.7, pm10: 28.3, o3: 79.4, no2: 33.5, so2: 9.2, co: 5600.0 },
    PollutionBaseline { city: "Beijing", aqi: 142, pm25: 65.3, pm10: 98.7, o3: 124.8, no2: 67.2, so2: 23.1, co: 12400.0 },
    PollutionBaseline { city: "Sydney", aqi: 45, pm25: 8.7, pm10: 16.2, o3: 71.3, no2: 18.9, so2: 4.1, co: 2800.0 },
    PollutionBaseline { city: "Moscow", aqi: 76, pm25: 18.2, pm10: 31.4, o3: 86.7, no2: 36.8, so2: 12.3, co: 6200.0 },
    PollutionBaseline { city: "Mumbai", aqi: 156, pm25: 78.4, pm10: 124.6, o3: 102.3, no2: 58.7, so2: 19.8, co: 11800.0 },
    PollutionBaseline { city: "Cape Town", aqi: 52, pm25: 11.3, pm10: 19.7, o3: 74.2, no2: 21.4, so2: 5.8, co: 3400.0 },
    PollutionBaseline { city: "Toronto", aqi: 42, pm25: 9.1, pm10: 17.8, o3: 68.9, no2: 19.7, so2: 4.3, co: 3100.0 },
];

/// Curated weather baseline for one city.
pub struct WeatherBaseline {
    pub city: &'static str,
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub pressure_hpa: f64,
    pub wind_speed_kmh: f64,
    pub description: &'static str,
}

#[rustfmt::skip]
pub static WEATHER_BASELINES: &[WeatherBaseline] = &[
    WeatherBaseline { city: "São Paulo", temperature_c: 22.4, humidity_pct: 64.0, pressure_hpa: 1013.2, wind_speed_kmh: 9.1, description: "Parcialmente nublado" },
    WeatherBaseline { city: "Rio de Janeiro", temperature_c: 26.8, humidity_pct: 75.0, pressure_hpa: 1012.8, wind_speed_kmh: 12.3, description: "Ensolarado" },
    WeatherBaseline { city: "Belo Horizonte", temperature_c: 24.1, humidity_pct: 59.0, pressure_hpa: 1014.1, wind_speed_kmh: 8.7, description: "Céu limpo" },
    WeatherBaseline { city: "Brasília", temperature_c: 25.3, humidity_pct: 55.0, pressure_hpa: 1015.4, wind_speed_kmh: 7.8, description: "Ensolarado" },
    WeatherBaseline { city: "Porto Alegre", temperature_c: 20.9, humidity_pct: 67.0, pressure_hpa: 1016.2, wind_speed_kmh: 11.2, description: "Nublado" },
    WeatherBaseline { city: "New York", temperature_c: 8.2, humidity_pct: 58.0, pressure_hpa: 1018.7, wind_speed_kmh: 15.3, description: "Nublado" },
    WeatherBaseline { city: "London", temperature_c: 6.1, humidity_pct: 82.0, pressure_hpa: 1016.3, wind_speed_kmh: 18.7, description: "Chuvoso" },
    WeatherBaseline { city: "Tokyo", temperature_c: 11.4, humidity_pct: 45.0, pressure_hpa: 1021.2, wind_speed_kmh: 12.8, description: "Ensolarado" },
    WeatherBaseline { city: "Paris", temperature_c: 7.8, humidity_pct: 76.0, pressure_hpa: 1015.9, wind_speed_kmh: 14.2, description: "Parcialmente nublado" },
    WeatherBaseline { city: "Beijing", temperature_c: -2.3, humidity_pct: 38.0, pressure_hpa: 1024.8, wind_speed_kmh: 8.4, description: "Céu limpo" },
    WeatherBaseline { city: "Sydney", temperature_c: 28.7, humidity_pct: 71.0, pressure_hpa: 1012.1, wind_speed_kmh: 16.9, description: "Ensolarado" },
    WeatherBaseline { city: "Moscow", temperature_c: -8.9, humidity_pct: 87.0, pressure_hpa: 1019.4, wind_speed_kmh: 13.6, description: "Nevando" },
    WeatherBaseline { city: "Mumbai", temperature_c: 32.1, humidity_pct: 68.0, pressure_hpa: 1011.7, wind_speed_kmh: 11.3, description: "Parcialmente nublado" },
    WeatherBaseline { city: "Cape Town", temperature_c: 24.3, humidity_pct: 73.0, pressure_hpa: 1014.6, wind_speed_kmh: 19.2, description: "Ensolarado" },
    WeatherBaseline { city: "Toronto", temperature_c: -1.7, humidity_pct: 72.0, pressure_hpa: 1020.3, wind_speed_kmh: 14.8, description: "Neve leve" },
];

pub fn find_pollution_baseline(city: &str) -> Option<&'static PollutionBaseline> {
    POLLUTION_BASELINES.iter().find(|b| b.city == city)
}

pub fn find_weather_baseline(city: &str) -> Option<&'static WeatherBaseline> {
    WEATHER_BASELINES.iter().find(|b| b.city == city)
}

/// Canned alert templates for simulated snapshots, in the order they are
/// drawn from when synthesizing 1–3 alerts.
pub struct AlertTemplate {
    pub alert_type: &'static str,
    pub severity: AlertSeverity,
    pub description: &'static str,
}

pub static ALERT_TEMPLATES: &[AlertTemplate] = &[
    AlertTemplate {
        alert_type: "Tempestade Geomagnética",
        severity: AlertSeverity::Moderate,
        description: "Atividade geomagnética elevada detectada",
    },
    AlertTemplate {
        alert_type: "Radiação Solar",
        severity: AlertSeverity::Low,
        description: "Níveis normais de radiação solar",
    },
    AlertTemplate {
        alert_type: "Vento Solar",
        severity: AlertSeverity::High,
        description: "Velocidade do vento solar acima do normal",
    },
];
