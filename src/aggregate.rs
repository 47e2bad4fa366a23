/// Snapshot assembly: fans out to every provider concurrently, substitutes
/// fallback output wherever a call fails, and returns one complete snapshot.
///
/// The central contract is that `refresh` is infallible. Provider errors are
/// caught at the smallest scope that still yields a coherent entity (one
/// city's pollution, one event category), logged, and replaced; they never
/// merge, cascade, or abort the cycle.
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::cities::CITY_REGISTRY;
use crate::config::Config;
use crate::fallback;
use crate::ingest::{donki, openweather, swpc};
use crate::model::{
    CityConditions, MagneticReading, RecentEvents, Snapshot, SolarWindReading, Sourced,
    SpaceWeatherSummary, StationRecord,
};
use crate::stations::STATION_REGISTRY;

/// Builds snapshots on demand. Holds the shared HTTP client and an owned RNG
/// for fallback synthesis; `refresh` takes `&mut self` because each cycle
/// advances the RNG.
pub struct Aggregator {
    config: Config,
    client: Client,
    rng: StdRng,
}

impl Aggregator {
    /// Creates an aggregator with an entropy-seeded RNG.
    pub fn new(config: Config) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Creates an aggregator with a caller-supplied RNG seed, so fallback
    /// output is reproducible.
    pub fn with_seed(config: Config, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: Config, rng: StdRng) -> Self {
        let client = Client::builder()
            .timeout(config.http_timeout())
            .user_agent(concat!("swxmon/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());
        Aggregator { config, client, rng }
    }

    /// Produces one complete snapshot. Never fails: with live providers
    /// disabled every entity is synthesized; with them enabled, each failed
    /// provider call is logged and replaced by fallback output for exactly
    /// the entities it covered.
    pub async fn refresh(&mut self) -> Snapshot {
        let now = Utc::now();

        if !self.config.enable_live_providers {
            debug!("live providers disabled, generating simulated snapshot");
            return self.simulated_snapshot();
        }

        // Planetary feeds and the event history are independent; fire them
        // all at once.
        let swpc_base = self.config.swpc_base_url.clone();
        let (k_index, magnetometer, plasma, xray, notifications, recent_events) = tokio::join!(
            swpc::fetch_planetary_k_index(&self.client, &swpc_base),
            swpc::fetch_magnetometer(&self.client, &swpc_base),
            swpc::fetch_plasma(&self.client, &swpc_base),
            swpc::fetch_xray_flux(&self.client, &swpc_base),
            swpc::fetch_notifications(&self.client, &swpc_base),
            donki::fetch_recent_events(
                &self.client,
                &self.config.donki_base_url,
                &self.config.nasa_api_key,
            ),
        );

        let magnetometer = magnetometer
            .map_err(|err| warn!(%err, "magnetometer feed failed, angles degrade to zero"))
            .ok();
        let xray = xray
            .map_err(|err| warn!(%err, "X-ray flux feed failed, omitting flux"))
            .ok();

        let magnetic = match k_index
            .and_then(|entries| swpc::normalize_magnetic(&entries, magnetometer.as_deref(), now))
        {
            Ok(reading) => Sourced::live(reading),
            Err(err) => {
                warn!(%err, "K index unavailable, using estimated magnetic conditions");
                Sourced::estimated(fallback::magnetic_reading(now, &mut self.rng))
            }
        };

        let solar_wind = match plasma.and_then(|entries| {
            swpc::normalize_solar_wind(&entries, magnetometer.as_deref(), xray.as_deref(), now)
        }) {
            Ok(reading) => Sourced::live(reading),
            Err(err) => {
                warn!(%err, "plasma feed unavailable, using estimated solar wind");
                Sourced::estimated(fallback::solar_wind_reading(now, &mut self.rng))
            }
        };

        let alerts = match notifications {
            Ok(entries) => Sourced::live(swpc::normalize_alerts(&entries, now)),
            Err(err) => {
                warn!(%err, "notifications feed unavailable, synthesizing alerts");
                Sourced::estimated(fallback::alerts(now, &mut self.rng))
            }
        };

        let cities = self.fetch_cities(now).await;
        let stations = self.station_records(now);

        let snapshot = Snapshot {
            generated_at: now,
            space_weather: SpaceWeatherSummary { magnetic, solar_wind, alerts },
            recent_events,
            stations,
            cities,
        };
        log_cycle(&snapshot);
        snapshot
    }

    /// Fetches pollution and weather for every monitored city concurrently.
    /// The two readings for a city fail (and fall back) independently.
    async fn fetch_cities(&mut self, now: chrono::DateTime<Utc>) -> Vec<CityConditions> {
        let api_key = self.config.openweather_api_key.clone();
        let base_url = self.config.openweather_base_url.clone();

        let futures = CITY_REGISTRY.iter().map(|city| {
            let client = &self.client;
            let api_key = &api_key;
            let base_url = &base_url;
            async move {
                let (pollution, weather) = tokio::join!(
                    async {
                        let payload =
                            openweather::fetch_air_pollution(client, base_url, city, api_key)
                                .await?;
                        openweather::normalize_pollution(city, &payload)
                    },
                    async {
                        let payload =
                            openweather::fetch_current_weather(client, base_url, city, api_key)
                                .await?;
                        openweather::normalize_weather(city, &payload)
                    },
                );
                (city, pollution, weather)
            }
        });
        let results = futures::future::join_all(futures).await;

        results
            .into_iter()
            .map(|(city, pollution, weather)| CityConditions {
                city: city.name.to_string(),
                pollution: match pollution {
                    Ok(reading) => Sourced::live(reading),
                    Err(err) => {
                        warn!(city = city.name, %err, "air pollution unavailable, using baseline");
                        Sourced::estimated(fallback::pollution_reading(city, &mut self.rng))
                    }
                },
                weather: match weather {
                    Ok(reading) => Sourced::live(reading),
                    Err(err) => {
                        warn!(city = city.name, %err, "weather unavailable, using baseline");
                        Sourced::estimated(fallback::weather_reading(city, now, &mut self.rng))
                    }
                },
            })
            .collect()
    }

    /// Observatory records are always generated from the catalog; there is
    /// no live per-station provider.
    fn station_records(&mut self, now: chrono::DateTime<Utc>) -> Vec<StationRecord> {
        STATION_REGISTRY
            .iter()
            .map(|station| fallback::station_record(station, now, &mut self.rng))
            .collect()
    }

    /// Builds a snapshot entirely from the fallback generator, with every
    /// reading marked estimated. Used when live providers are disabled and
    /// unreachable in any other configuration.
    fn simulated_snapshot(&mut self) -> Snapshot {
        let now = Utc::now();
        let magnetic: MagneticReading = fallback::magnetic_reading(now, &mut self.rng);
        let solar_wind: SolarWindReading = fallback::solar_wind_reading(now, &mut self.rng);
        let alerts = fallback::alerts(now, &mut self.rng);

        let cities = CITY_REGISTRY
            .iter()
            .map(|city| CityConditions {
                city: city.name.to_string(),
                pollution: Sourced::estimated(fallback::pollution_reading(city, &mut self.rng)),
                weather: Sourced::estimated(fallback::weather_reading(city, now, &mut self.rng)),
            })
            .collect();

        let snapshot = Snapshot {
            generated_at: now,
            space_weather: SpaceWeatherSummary {
                magnetic: Sourced::estimated(magnetic),
                solar_wind: Sourced::estimated(solar_wind),
                alerts: Sourced::estimated(alerts),
            },
            recent_events: RecentEvents::default(),
            stations: self.station_records(now),
            cities,
        };
        log_cycle(&snapshot);
        snapshot
    }
}

/// One-line cycle summary in the service log.
fn log_cycle(snapshot: &Snapshot) {
    let estimated_cities = snapshot
        .cities
        .iter()
        .filter(|c| c.pollution.estimated || c.weather.estimated)
        .count();
    info!(
        k_index = snapshot.space_weather.magnetic.value.k_index,
        magnetic_estimated = snapshot.space_weather.magnetic.estimated,
        wind_estimated = snapshot.space_weather.solar_wind.estimated,
        alerts = snapshot.space_weather.alerts.value.len(),
        events = snapshot.recent_events.total(),
        stations = snapshot.stations.len(),
        cities = snapshot.cities.len(),
        estimated_cities,
        "refresh cycle complete"
    );
}
