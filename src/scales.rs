//! Classification scales for geomagnetic activity, air quality, and alerts.
//!
//! Every function here is total over its input domain and pure: the UI-facing
//! label for a reading must never depend on anything but the reading itself.
//! Labels are kept in Portuguese, matching the audience of the display layer.

use crate::model::AlertSeverity;

// ---------------------------------------------------------------------------
// K index
// ---------------------------------------------------------------------------

/// Descriptive label for a planetary K index value.
///
/// Nine labels, monotonically increasing in severity. Values above 9 cannot
/// occur on the K scale but clamp to the extreme label rather than panic.
pub fn k_index_description(k_index: u8) -> &'static str {
    match k_index {
        0 => "Inativo",
        1 | 2 => "Muito Calmo",
        3 => "Calmo",
        4 => "Moderado",
        5 => "Ativo",
        6 => "Tempestade Menor",
        7 => "Tempestade Moderada",
        8 => "Tempestade Forte",
        _ => "Tempestade Extrema",
    }
}

/// Display color band for a K index value.
pub fn k_index_color(k_index: u8) -> &'static str {
    match k_index {
        0..=2 => "green",
        3..=4 => "yellow",
        5..=6 => "orange",
        _ => "red",
    }
}

// ---------------------------------------------------------------------------
// AQI
// ---------------------------------------------------------------------------

/// Air-quality category for a US-style AQI value.
///
/// Band edges are inclusive on the lower band: 50 is still "Boa", 100 is
/// still "Moderada", and so on through 300.
pub fn aqi_category(aqi: u32) -> &'static str {
    match aqi {
        0..=50 => "Boa",
        51..=100 => "Moderada",
        101..=150 => "Prejudicial para grupos sensíveis",
        151..=200 => "Prejudicial",
        201..=300 => "Muito prejudicial",
        _ => "Perigosa",
    }
}

/// Display color band for an AQI value, aligned with `aqi_category`.
pub fn aqi_color(aqi: u32) -> &'static str {
    match aqi {
        0..=50 => "green",
        51..=100 => "yellow",
        101..=150 => "orange",
        151..=200 => "red",
        201..=300 => "purple",
        _ => "maroon",
    }
}

// ---------------------------------------------------------------------------
// Alert severity
// ---------------------------------------------------------------------------

/// Maps a NOAA notification message type to a severity band.
///
/// NOAA's product names encode urgency: watches and outlooks are advisory,
/// warnings are actionable, alerts mean conditions are observed now.
/// Anything unrecognized is treated as extreme rather than dropped.
pub fn alert_severity(message_type: &str) -> AlertSeverity {
    let ty = message_type.to_lowercase();
    if ty.contains("watch") || ty.contains("outlook") {
        AlertSeverity::Low
    } else if ty.contains("warning") {
        AlertSeverity::Moderate
    } else if ty.contains("alert") {
        AlertSeverity::High
    } else {
        AlertSeverity::Extreme
    }
}
