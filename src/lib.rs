//! Space-weather and environmental data acquisition service.
//!
//! The crate pulls live conditions from three public providers (NOAA SWPC
//! real-time feeds, the NASA DONKI event archive, and OpenWeatherMap) and
//! normalizes everything into one canonical [`model::Snapshot`] per refresh
//! cycle. Every provider call that fails is replaced, at the smallest
//! sensible scope, by curated or bounded-random fallback data, so a refresh
//! always yields a complete result.
//!
//! Entry point for consumers is [`aggregate::Aggregator`].

pub mod aggregate;
pub mod cities;
pub mod config;
pub mod fallback;
pub mod ingest;
pub mod logging;
pub mod model;
pub mod scales;
pub mod stations;

pub use aggregate::Aggregator;
pub use config::Config;
pub use model::Snapshot;
