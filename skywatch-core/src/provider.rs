use std::fmt::Debug;

use async_trait::async_trait;

use crate::{FetchError, WeatherSnapshot};

pub mod weatherapi;

/// A weather lookup backend.
///
/// The screen talks to the controller and the controller talks to this
/// trait, so tests can substitute their own implementations.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current conditions for a free-form location string.
    async fn current_weather(&self, location: &str) -> Result<WeatherSnapshot, FetchError>;
}
