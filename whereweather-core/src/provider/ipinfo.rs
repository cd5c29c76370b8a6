use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Url};

use crate::{
    error::{Result, WeatherError},
    model::ClientInfo,
};

use super::{CityLocator, get_json};

const SERVICE: &str = "ipinfo";

/// Looks up the caller's city from their public IP address.
#[derive(Debug, Clone)]
pub struct IpInfoLocator {
    endpoint: String,
    http: Client,
}

impl IpInfoLocator {
    pub fn new(http: Client, endpoint: String) -> Self {
        Self { endpoint, http }
    }
}

#[async_trait]
impl CityLocator for IpInfoLocator {
    async fn locate_city(&self) -> Result<String> {
        let url = Url::parse(&self.endpoint)
            .map_err(|source| WeatherError::Url { service: SERVICE, source })?;

        debug!("Requesting client location from {SERVICE}");
        let info: ClientInfo = get_json(&self.http, url, SERVICE).await?;

        if info.city.is_empty() {
            return Err(WeatherError::UnknownLocation { service: SERVICE });
        }

        Ok(info.city)
    }
}
