use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};

use crate::{
    error::{Result, WeatherError},
    model::{Coordinates, GeocodeResponse},
};

use super::{Geocoder, get_json};

const SERVICE: &str = "HERE geocoder";

/// Geocoder backed by the HERE 6.2 geocode API.
#[derive(Debug, Clone)]
pub struct HereGeocoder {
    endpoint: String,
    app_id: String,
    app_code: String,
    http: Client,
}

impl HereGeocoder {
    pub fn new(http: Client, endpoint: String, app_id: String, app_code: String) -> Self {
        Self { endpoint, app_id, app_code, http }
    }

    /// Request URL for `city`. The city is form-encoded into `searchtext`.
    pub fn request_url(&self, city: &str) -> Result<Url> {
        Url::parse_with_params(
            &self.endpoint,
            &[
                ("app_id", self.app_id.as_str()),
                ("app_code", self.app_code.as_str()),
                ("searchtext", city),
            ],
        )
        .map_err(|source| WeatherError::Url { service: SERVICE, source })
    }
}

#[async_trait]
impl Geocoder for HereGeocoder {
    async fn geocode(&self, city: &str) -> Result<Coordinates> {
        let url = self.request_url(city)?;

        debug!("Geocoding '{city}' with {SERVICE}");
        let parsed: GeocodeResponse = get_json(&self.http, url, SERVICE).await?;

        parsed.first_position(city)
    }
}
