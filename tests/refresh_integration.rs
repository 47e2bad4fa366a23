/// Integration tests for the snapshot refresh cycle against mock providers
///
/// These tests verify:
/// 1. Live path: all provider feeds normalize into one snapshot
/// 2. Single-entity failure: one city's pollution degrades to its curated
///    baseline while everything else stays live
/// 3. Total outage: refresh still yields a complete, fully estimated snapshot
///
/// Run with: cargo test --test refresh_integration
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use swxmon_service::cities::CITY_REGISTRY;
use swxmon_service::model::AlertSeverity;
use swxmon_service::stations::STATION_REGISTRY;
use swxmon_service::{Aggregator, Config};

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn test_config(server: &MockServer) -> Config {
    Config::default()
        .with_live_providers(true)
        .with_base_url(server.uri())
        .with_openweather_key("test-key")
        .with_timeout_secs(2)
}

async fn mount_swpc_feeds(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/json/planetary_k_index_1m.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "time_tag": "2026-08-30T11:57:00", "k_index": 2.0, "estimated": true },
            { "time_tag": "2026-08-30T11:58:00", "k_index": 4.33, "estimated": true }
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/json/rtsw/rtsw_mag_1m.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "time_tag": "2026-08-30T11:58:00", "bx_gsm": 3.0, "by_gsm": 4.0, "bz_gsm": 5.0, "bt": 7.07 }
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/json/rtsw/rtsw_plasma_1m.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "time_tag": "2026-08-30T11:58:00", "density": 4.2, "speed": 412.5, "temperature": 98000.0 }
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/json/goes/primary/xrays-7-day.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "time_tag": "2026-08-30T11:58:00", "flux": 3.2e-6, "energy": "0.1-0.8nm" }
        ])))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/json/notifications.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "message_id": "M2026-240-001",
                "message_type": "WARNING",
                "message_issue_time": "2026-08-30 10:00:00.000",
                "message_body": "Geomagnetic K-index of 5 expected"
            }
        ])))
        .mount(server)
        .await;
}

async fn mount_donki_feeds(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/DONKI/FLR"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "flrID": "2026-08-29T12:00:00-FLR-001",
                "beginTime": "2026-08-29T12:00Z",
                "classType": "M1.4"
            }
        ])))
        .mount(server)
        .await;
    for endpoint in ["/DONKI/CME", "/DONKI/GST", "/DONKI/SEP", "/DONKI/HSS", "/DONKI/RBE", "/DONKI/notifications"] {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(server)
            .await;
    }
}

async fn mount_openweather_feeds(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/data/2.5/air_pollution"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "list": [{
                "main": { "aqi": 3 },
                "components": {
                    "co": 400.5, "no2": 18.1, "o3": 75.3,
                    "so2": 5.2, "pm2_5": 12.4, "pm10": 22.0
                }
            }]
        })))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "main": { "temp": 21.3, "humidity": 58.0, "pressure": 1015.0 },
            "wind": { "speed": 2.5 },
            "weather": [{ "description": "céu limpo" }]
        })))
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// Live path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_live_refresh_normalizes_all_provider_feeds() {
    let server = MockServer::start().await;
    mount_swpc_feeds(&server).await;
    mount_donki_feeds(&server).await;
    mount_openweather_feeds(&server).await;

    let mut aggregator = Aggregator::with_seed(test_config(&server), 1);
    let snapshot = aggregator.refresh().await;

    // Magnetic: latest K entry rounds to 4; angles derive from GSM components.
    let magnetic = &snapshot.space_weather.magnetic;
    assert!(!magnetic.estimated, "K feed was live");
    assert_eq!(magnetic.value.k_index, 4);
    assert!(
        (magnetic.value.declination_deg - 53.13).abs() < 0.01,
        "declination should be atan2(4, 3), got {}",
        magnetic.value.declination_deg
    );
    assert!((magnetic.value.inclination_deg - 45.0).abs() < 0.01);
    assert!((magnetic.value.field_strength_nt - 7.07).abs() < 1e-9);

    // Solar wind: plasma values pass through; flux keeps scientific notation.
    let wind = &snapshot.space_weather.solar_wind;
    assert!(!wind.estimated);
    assert_eq!(wind.value.wind_speed_km_s, 412.5);
    assert_eq!(wind.value.proton_density_per_cm3, 4.2);
    assert_eq!(wind.value.xray_flux, "3.2e-6");

    // Alerts: one product, "WARNING" maps to moderate severity.
    let alerts = &snapshot.space_weather.alerts;
    assert!(!alerts.estimated);
    assert_eq!(alerts.value.len(), 1);
    assert_eq!(alerts.value[0].severity, AlertSeverity::Moderate);

    // Events: one flare, all other categories empty.
    assert_eq!(snapshot.recent_events.solar_flares.len(), 1);
    assert_eq!(snapshot.recent_events.solar_flares[0].class_type.as_deref(), Some("M1.4"));
    assert_eq!(snapshot.recent_events.total(), 1);

    // Cities: all live; the qualitative 1-5 index is scaled to the 0-500
    // display scale and wind m/s becomes km/h.
    assert_eq!(snapshot.cities.len(), CITY_REGISTRY.len());
    for city in &snapshot.cities {
        assert!(!city.pollution.estimated, "{} pollution should be live", city.city);
        assert!(!city.weather.estimated, "{} weather should be live", city.city);
        assert_eq!(city.pollution.value.aqi, 150);
        assert!((city.weather.value.wind_speed_kmh - 9.0).abs() < 1e-9);
        assert_eq!(city.weather.value.description, "céu limpo");
    }

    // Stations are always generated from the catalog.
    assert_eq!(snapshot.stations.len(), STATION_REGISTRY.len());
}

// ---------------------------------------------------------------------------
// Per-entity fallback
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_one_city_pollution_failure_degrades_only_that_city() {
    let server = MockServer::start().await;
    mount_swpc_feeds(&server).await;
    mount_donki_feeds(&server).await;

    // São Paulo's pollution call fails; everything else answers.
    Mock::given(method("GET"))
        .and(path("/data/2.5/air_pollution"))
        .and(query_param("lat", "-23.5505"))
        .respond_with(ResponseTemplate::new(500))
        .with_priority(1)
        .mount(&server)
        .await;
    mount_openweather_feeds(&server).await;

    let mut aggregator = Aggregator::with_seed(test_config(&server), 2);
    let snapshot = aggregator.refresh().await;

    assert_eq!(snapshot.cities.len(), CITY_REGISTRY.len());
    let sao_paulo = snapshot
        .cities
        .iter()
        .find(|c| c.city == "São Paulo")
        .expect("São Paulo should still be present");

    // Pollution fell back to the curated baseline; weather stayed live.
    assert!(sao_paulo.pollution.estimated);
    assert_eq!(sao_paulo.pollution.value.aqi, 87);
    assert_eq!(sao_paulo.pollution.value.pm25, 26.8);
    assert!(!sao_paulo.weather.estimated);
    assert_eq!(sao_paulo.weather.value.temperature_c, 21.3);

    // No other city was affected.
    for city in snapshot.cities.iter().filter(|c| c.city != "São Paulo") {
        assert!(!city.pollution.estimated, "{} pollution should be live", city.city);
        assert!(!city.weather.estimated, "{} weather should be live", city.city);
    }

    // Planetary panels were untouched by the city failure.
    assert!(!snapshot.space_weather.magnetic.estimated);
    assert!(!snapshot.space_weather.solar_wind.estimated);
}

// ---------------------------------------------------------------------------
// Total outage
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_total_provider_outage_yields_complete_estimated_snapshot() {
    // Nothing mounted: every request gets a 404.
    let server = MockServer::start().await;

    let mut aggregator = Aggregator::with_seed(test_config(&server), 3);
    let snapshot = aggregator.refresh().await;

    assert!(snapshot.space_weather.magnetic.estimated);
    assert!(snapshot.space_weather.solar_wind.estimated);
    assert!(snapshot.space_weather.alerts.estimated);
    assert!(!snapshot.space_weather.alerts.value.is_empty());
    assert!((1..=9).contains(&snapshot.space_weather.magnetic.value.k_index));

    // Event history has no synthesized fallback: categories degrade to empty.
    assert_eq!(snapshot.recent_events.total(), 0);

    assert_eq!(snapshot.stations.len(), STATION_REGISTRY.len());
    assert_eq!(snapshot.cities.len(), CITY_REGISTRY.len());
    for city in &snapshot.cities {
        assert!(city.pollution.estimated);
        assert!(city.weather.estimated);
    }

    // Curated baselines surface for cataloged cities even in a full outage.
    let sao_paulo = snapshot.cities.iter().find(|c| c.city == "São Paulo").unwrap();
    assert_eq!(sao_paulo.pollution.value.aqi, 87);
}
