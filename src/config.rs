//! Service configuration.
//!
//! All toggles and keys are collected into an explicit [`Config`] passed to
//! the aggregator at construction time; the data-fetching core never reads
//! the environment itself, which keeps refresh cycles deterministic under
//! test. Values resolve in three layers: built-in defaults, then an optional
//! TOML file, then environment variables.

use serde::Deserialize;
use std::time::Duration;

/// NOAA Space Weather Prediction Center JSON feed root.
pub const SWPC_BASE_URL: &str = "https://services.swpc.noaa.gov";

/// NASA DONKI event API root.
pub const DONKI_BASE_URL: &str = "https://api.nasa.gov/DONKI";

/// OpenWeatherMap API root (pollution + current weather).
pub const OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";

/// Placeholder NASA key accepted by the API with tight rate limits.
pub const NASA_DEMO_KEY: &str = "DEMO_KEY";

/// Placeholder OpenWeatherMap key; requests made with it fail and fall back.
pub const OPENWEATHER_DEMO_KEY: &str = "demo";

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Resolved service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// When `false`, no network calls are made and every refresh produces a
    /// fully simulated snapshot.
    pub enable_live_providers: bool,
    /// NASA API key for DONKI; `DEMO_KEY` works with reduced limits.
    pub nasa_api_key: String,
    /// OpenWeatherMap API key; the "demo" placeholder yields failures that
    /// resolve to fallback data.
    pub openweather_api_key: String,
    /// Verbose diagnostic logging.
    pub verbose: bool,
    /// Seconds between automatic refresh cycles.
    pub refresh_interval_secs: u64,
    /// Per-request HTTP timeout in seconds. Bounds worst-case refresh
    /// latency, since the merge waits for every provider to settle.
    pub http_timeout_secs: u64,
    /// Provider base URLs, overridable so tests can point at mock servers.
    pub swpc_base_url: String,
    pub donki_base_url: String,
    pub openweather_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            enable_live_providers: false,
            nasa_api_key: NASA_DEMO_KEY.to_string(),
            openweather_api_key: OPENWEATHER_DEMO_KEY.to_string(),
            verbose: false,
            refresh_interval_secs: 300,
            http_timeout_secs: 10,
            swpc_base_url: SWPC_BASE_URL.to_string(),
            donki_base_url: DONKI_BASE_URL.to_string(),
            openweather_base_url: OPENWEATHER_BASE_URL.to_string(),
        }
    }
}

/// Optional on-disk configuration; every field may be omitted.
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    enable_live_providers: Option<bool>,
    nasa_api_key: Option<String>,
    openweather_api_key: Option<String>,
    verbose: Option<bool>,
    refresh_interval_secs: Option<u64>,
    http_timeout_secs: Option<u64>,
}

impl Config {
    /// Builds the configuration from defaults, an optional TOML file named by
    /// `SWXMON_CONFIG`, and environment variable overrides.
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(path) = std::env::var("SWXMON_CONFIG") {
            match std::fs::read_to_string(&path) {
                Ok(text) => match config.apply_toml(&text) {
                    Ok(()) => {}
                    Err(e) => eprintln!("ignoring malformed config file {}: {}", path, e),
                },
                Err(e) => eprintln!("ignoring unreadable config file {}: {}", path, e),
            }
        }

        if let Ok(v) = std::env::var("SWXMON_ENABLE_LIVE") {
            config.enable_live_providers = v == "true" || v == "1";
        }
        if let Ok(v) = std::env::var("NASA_API_KEY") {
            if !v.is_empty() {
                config.nasa_api_key = v;
            }
        }
        if let Ok(v) = std::env::var("OPENWEATHER_API_KEY") {
            if !v.is_empty() {
                config.openweather_api_key = v;
            }
        }
        if let Ok(v) = std::env::var("SWXMON_VERBOSE") {
            config.verbose = v == "true" || v == "1";
        }
        if let Ok(v) = std::env::var("SWXMON_REFRESH_SECS") {
            if let Ok(secs) = v.parse() {
                config.refresh_interval_secs = secs;
            }
        }
        if let Ok(v) = std::env::var("SWXMON_TIMEOUT_SECS") {
            if let Ok(secs) = v.parse() {
                config.http_timeout_secs = secs;
            }
        }

        config
    }

    /// Overlays values from a TOML document onto this configuration.
    pub fn apply_toml(&mut self, text: &str) -> Result<(), toml::de::Error> {
        let file: FileConfig = toml::from_str(text)?;
        if let Some(v) = file.enable_live_providers {
            self.enable_live_providers = v;
        }
        if let Some(v) = file.nasa_api_key {
            self.nasa_api_key = v;
        }
        if let Some(v) = file.openweather_api_key {
            self.openweather_api_key = v;
        }
        if let Some(v) = file.verbose {
            self.verbose = v;
        }
        if let Some(v) = file.refresh_interval_secs {
            self.refresh_interval_secs = v;
        }
        if let Some(v) = file.http_timeout_secs {
            self.http_timeout_secs = v;
        }
        Ok(())
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// Enables live providers. Primarily for tests paired with mock servers.
    #[must_use]
    pub fn with_live_providers(mut self, enabled: bool) -> Self {
        self.enable_live_providers = enabled;
        self
    }

    /// Points every provider at the same base URL (a mock server).
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.swpc_base_url = url.clone();
        self.donki_base_url = format!("{}/DONKI", url);
        self.openweather_base_url = url;
        self
    }

    #[must_use]
    pub fn with_openweather_key(mut self, key: impl Into<String>) -> Self {
        self.openweather_api_key = key.into();
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.http_timeout_secs = secs;
        self
    }
}
