use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format of the provider-local timestamp in [`WeatherSnapshot::localtime`].
const LOCALTIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One published value of the weather screen's state machine.
///
/// Exactly one case is active at a time. Per query the transitions are
/// one-directional: (`Idle` | `Success` | `Error`) -> `Loading` ->
/// (`Success` | `Error`), never skipping `Loading`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QueryState {
    /// No lookup has been submitted yet.
    #[default]
    Idle,
    /// A lookup is in flight.
    Loading,
    /// The last completed lookup succeeded.
    Success(WeatherSnapshot),
    /// The last completed lookup failed; the message is shown verbatim.
    Error(String),
}

/// Immutable result of one successful lookup.
///
/// Replaced wholesale by the next query; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    /// City name as reported by the provider.
    pub location: String,
    pub country: String,
    /// Provider-local timestamp, `YYYY-MM-DD HH:MM`.
    pub localtime: String,
    pub temp_c: f64,
    /// Condition description, e.g. "Cloudy".
    pub condition: String,
    /// Fully-qualified URL of the 128x128 condition icon.
    pub icon_url: String,
    pub humidity: f64,
    pub wind_kph: f64,
    pub uv: f64,
    pub precip_mm: f64,
}

impl WeatherSnapshot {
    /// Local date part of [`Self::localtime`], e.g. `2024-01-01`.
    pub fn local_date(&self) -> String {
        self.localtime_parts().0
    }

    /// Local wall-clock part of [`Self::localtime`], e.g. `12:00`.
    pub fn local_time(&self) -> String {
        self.localtime_parts().1
    }

    fn localtime_parts(&self) -> (String, String) {
        if let Ok(dt) = NaiveDateTime::parse_from_str(&self.localtime, LOCALTIME_FORMAT) {
            return (dt.format("%Y-%m-%d").to_string(), dt.format("%H:%M").to_string());
        }

        // Unrecognized timestamp shape; split on the first space as-is.
        match self.localtime.split_once(' ') {
            Some((date, time)) => (date.to_string(), time.to_string()),
            None => (self.localtime.clone(), String::new()),
        }
    }
}
