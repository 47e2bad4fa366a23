/// NASA DONKI event API client.
///
/// DONKI (Database Of Notifications, Knowledge, Information) catalogs solar
/// events: flares, CMEs, geomagnetic storms, energetic particle events,
/// high-speed streams, radiation belt enhancements, and notifications. All
/// endpoints take a date range and an `api_key` query parameter; the shared
/// `DEMO_KEY` placeholder works with tight rate limits, and rate-limit
/// rejections simply surface as `ProviderUnavailable`.
///
/// API documentation: https://api.nasa.gov/
use chrono::{Duration, Utc};
use futures::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use crate::model::{DonkiEvent, FetchError, RecentEvents};

/// Days of history requested per refresh cycle.
const LOOKBACK_DAYS: i64 = 7;

/// One DONKI event category and its endpoint path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    SolarFlare,
    Cme,
    GeomagneticStorm,
    EnergeticParticle,
    HighSpeedStream,
    RadiationBeltEnhancement,
    Notification,
}

impl EventKind {
    pub fn path(self) -> &'static str {
        match self {
            EventKind::SolarFlare => "/FLR",
            EventKind::Cme => "/CME",
            EventKind::GeomagneticStorm => "/GST",
            EventKind::EnergeticParticle => "/SEP",
            EventKind::HighSpeedStream => "/HSS",
            EventKind::RadiationBeltEnhancement => "/RBE",
            EventKind::Notification => "/notifications",
        }
    }
}

/// Raw DONKI event. Each category names its identifier and time fields
/// differently (`flrID`/`beginTime`, `activityID`/`startTime`, ...); the
/// aliases fold them into one shape.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    #[serde(
        default,
        alias = "flrID",
        alias = "activityID",
        alias = "gstID",
        alias = "sepID",
        alias = "hssID",
        alias = "rbeID",
        alias = "messageID"
    )]
    pub event_id: Option<String>,
    #[serde(
        default,
        alias = "beginTime",
        alias = "startTime",
        alias = "eventTime",
        alias = "messageIssueTime"
    )]
    pub start_time: Option<String>,
    #[serde(default, alias = "classType", alias = "messageType")]
    pub class_type: Option<String>,
}

/// Fetches one event category over an explicit date range (YYYY-MM-DD).
pub async fn fetch_events(
    client: &Client,
    base_url: &str,
    kind: EventKind,
    api_key: &str,
    start_date: &str,
    end_date: &str,
) -> Result<Vec<DonkiEvent>, FetchError> {
    let url = format!(
        "{}{}?startDate={}&endDate={}&api_key={}",
        base_url,
        kind.path(),
        start_date,
        end_date,
        api_key
    );
    let response = client.get(&url).send().await?;
    if !response.status().is_success() {
        return Err(FetchError::ProviderUnavailable(format!(
            "DONKI {:?}: HTTP {}",
            kind,
            response.status()
        )));
    }
    let raw: Vec<RawEvent> = response
        .json()
        .await
        .map_err(|e| FetchError::MalformedPayload(format!("DONKI {:?}: {}", kind, e)))?;
    Ok(raw.into_iter().map(normalize_event).collect())
}

/// Maps a raw DONKI record into the canonical event shape. Records with no
/// recognizable identifier keep an empty id rather than being dropped; the
/// category counts still matter for the display.
pub fn normalize_event(raw: RawEvent) -> DonkiEvent {
    DonkiEvent {
        event_id: raw.event_id.unwrap_or_default(),
        start_time: raw.start_time,
        class_type: raw.class_type,
    }
}

/// Fetches all seven event categories concurrently over the trailing 7-day
/// window. Every category settles independently: a failed call degrades that
/// one list to empty and never disturbs its siblings.
pub async fn fetch_recent_events(client: &Client, base_url: &str, api_key: &str) -> RecentEvents {
    let end = Utc::now();
    let start = end - Duration::days(LOOKBACK_DAYS);
    let start_date = start.format("%Y-%m-%d").to_string();
    let end_date = end.format("%Y-%m-%d").to_string();

    let kinds = [
        EventKind::SolarFlare,
        EventKind::Cme,
        EventKind::GeomagneticStorm,
        EventKind::EnergeticParticle,
        EventKind::HighSpeedStream,
        EventKind::RadiationBeltEnhancement,
        EventKind::Notification,
    ];

    let results = join_all(kinds.iter().map(|&kind| {
        let (start_date, end_date) = (start_date.clone(), end_date.clone());
        async move {
            match fetch_events(client, base_url, kind, api_key, &start_date, &end_date).await {
                Ok(events) => events,
                Err(e) => {
                    warn!(source = "DONKI", kind = ?kind, error = %e, "event fetch failed, using empty list");
                    Vec::new()
                }
            }
        }
    }))
    .await;

    let mut iter = results.into_iter();
    RecentEvents {
        solar_flares: iter.next().unwrap_or_default(),
        cmes: iter.next().unwrap_or_default(),
        geomagnetic_storms: iter.next().unwrap_or_default(),
        energetic_particles: iter.next().unwrap_or_default(),
        high_speed_streams: iter.next().unwrap_or_default(),
        radiation_belt_enhancements: iter.next().unwrap_or_default(),
        notifications: iter.next().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_paths() {
        assert_eq!(EventKind::SolarFlare.path(), "/FLR");
        assert_eq!(EventKind::Cme.path(), "/CME");
        assert_eq!(EventKind::GeomagneticStorm.path(), "/GST");
        assert_eq!(EventKind::Notification.path(), "/notifications");
    }

    #[test]
    fn test_raw_event_decodes_flare_shape() {
        let raw: RawEvent = serde_json::from_str(
            r#"{"flrID": "2026-08-29T12:00:00-FLR-001", "beginTime": "2026-08-29T12:00Z", "classType": "M1.4"}"#,
        )
        .expect("flare shape should decode");
        let event = normalize_event(raw);
        assert_eq!(event.event_id, "2026-08-29T12:00:00-FLR-001");
        assert_eq!(event.class_type.as_deref(), Some("M1.4"));
    }

    #[test]
    fn test_raw_event_decodes_cme_shape() {
        let raw: RawEvent = serde_json::from_str(
            r#"{"activityID": "2026-08-28T03:12:00-CME-001", "startTime": "2026-08-28T03:12Z"}"#,
        )
        .expect("cme shape should decode");
        let event = normalize_event(raw);
        assert_eq!(event.event_id, "2026-08-28T03:12:00-CME-001");
        assert!(event.class_type.is_none());
    }

    #[test]
    fn test_raw_event_tolerates_unrecognized_shape() {
        let raw: RawEvent =
            serde_json::from_str(r#"{"something": "else"}"#).expect("unknown shape should decode");
        let event = normalize_event(raw);
        assert!(event.event_id.is_empty());
        assert!(event.start_time.is_none());
    }
}
