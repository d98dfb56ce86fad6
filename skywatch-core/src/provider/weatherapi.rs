use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Deserializer, de};
use tracing::debug;

use super::WeatherProvider;
use crate::{FetchError, WeatherSnapshot};

const CURRENT_URL: &str = "http://api.weatherapi.com/v1/current.json";

/// weatherapi.com backend for current conditions.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self { api_key, http: Client::new() }
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current_weather(&self, location: &str) -> Result<WeatherSnapshot, FetchError> {
        debug!(%location, "requesting current conditions");

        let res = self
            .http
            .get(CURRENT_URL)
            .query(&[("key", self.api_key.as_str()), ("q", location)])
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = res.status();
        let body = res.text().await.map_err(|e| FetchError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(FetchError::Api(format!("status {}: {}", status, truncate_body(&body))));
        }

        parse_current(&body)
    }
}

/// Parse a `current.json` body into a snapshot.
///
/// Only the fields the screen consumes are validated; the rest of the
/// document is ignored.
fn parse_current(body: &str) -> Result<WeatherSnapshot, FetchError> {
    let parsed: WaResponse =
        serde_json::from_str(body).map_err(|e| FetchError::InvalidResponse(e.to_string()))?;

    Ok(WeatherSnapshot {
        location: parsed.location.name,
        country: parsed.location.country,
        localtime: parsed.location.localtime,
        temp_c: parsed.current.temp_c,
        condition: parsed.current.condition.text,
        icon_url: icon_display_url(&parsed.current.condition.icon),
        humidity: parsed.current.humidity,
        wind_kph: parsed.current.wind_kph,
        uv: parsed.current.uv,
        precip_mm: parsed.current.precip_mm,
    })
}

/// The API hands out protocol-relative 64x64 icon paths; the screen wants
/// the sharper 128x128 asset behind a full URL.
fn icon_display_url(icon: &str) -> String {
    let icon = icon.replace("64x64", "128x128");
    if icon.starts_with("//") { format!("https:{icon}") } else { icon }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    country: String,
    localtime: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    #[serde(deserialize_with = "lenient_f64")]
    temp_c: f64,
    condition: WaCondition,
    #[serde(deserialize_with = "lenient_f64")]
    humidity: f64,
    #[serde(deserialize_with = "lenient_f64")]
    wind_kph: f64,
    #[serde(deserialize_with = "lenient_f64")]
    uv: f64,
    #[serde(deserialize_with = "lenient_f64")]
    precip_mm: f64,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

/// Metric fields arrive as JSON numbers or as quoted numbers depending on
/// the endpoint mirror; accept both.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrStr {
        Num(f64),
        Str(String),
    }

    match NumOrStr::deserialize(deserializer)? {
        NumOrStr::Num(n) => Ok(n),
        NumOrStr::Str(s) => s.trim().parse().map_err(de::Error::custom),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
