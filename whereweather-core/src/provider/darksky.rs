use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};

use crate::{
    error::{Result, WeatherError},
    model::{Coordinates, ForecastResponse, WeatherSnapshot},
};

use super::{WeatherProvider, get_json};

const SERVICE: &str = "DarkSky";

#[derive(Debug, Clone)]
pub struct DarkSkyProvider {
    endpoint: String,
    api_key: String,
    http: Client,
}

impl DarkSkyProvider {
    pub fn new(http: Client, endpoint: String, api_key: String) -> Self {
        Self { endpoint, api_key, http }
    }

    /// `{endpoint}/{api_key}/{lat},{lon}?units=si`
    pub fn request_url(&self, at: Coordinates) -> Result<Url> {
        let raw = format!(
            "{}/{}/{}",
            self.endpoint.trim_end_matches('/'),
            self.api_key,
            at.to_path_segment()
        );

        let mut url =
            Url::parse(&raw).map_err(|source| WeatherError::Url { service: SERVICE, source })?;
        url.query_pairs_mut().append_pair("units", "si");

        Ok(url)
    }
}

#[async_trait]
impl WeatherProvider for DarkSkyProvider {
    async fn current(&self, at: Coordinates) -> Result<WeatherSnapshot> {
        let url = self.request_url(at)?;

        debug!("Requesting current weather at {} from {SERVICE}", at.to_path_segment());
        let parsed: ForecastResponse = get_json(&self.http, url, SERVICE).await?;

        Ok(parsed.currently)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_url_uses_fixed_point_coordinates_and_si_units() {
        let provider = DarkSkyProvider::new(
            Client::new(),
            "https://api.darksky.net/forecast/".into(),
            "KEY".into(),
        );

        let url = provider
            .request_url(Coordinates { latitude: 52.520008, longitude: 13.404954 })
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.darksky.net/forecast/KEY/52.520008,13.404954?units=si"
        );
    }

    #[test]
    fn request_url_handles_negative_coordinates() {
        let provider =
            DarkSkyProvider::new(Client::new(), "http://localhost:1234/forecast".into(), "k".into());

        let url = provider
            .request_url(Coordinates { latitude: -33.8688, longitude: -151.2093 })
            .unwrap();

        assert_eq!(url.path(), "/forecast/k/-33.868800,-151.209300");
        assert_eq!(url.query(), Some("units=si"));
    }
}
