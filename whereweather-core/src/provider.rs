use crate::{
    Config,
    error::{Result, WeatherError},
    model::{Coordinates, WeatherSnapshot},
    provider::{darksky::DarkSkyProvider, here::HereGeocoder, ipinfo::IpInfoLocator},
};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::fmt::Debug;

pub mod darksky;
pub mod here;
pub mod ipinfo;

/// Resolves the caller's city when none was given on the command line.
#[async_trait]
pub trait CityLocator: Send + Sync + Debug {
    async fn locate_city(&self) -> Result<String>;
}

/// Turns a free-text city name into coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync + Debug {
    async fn geocode(&self, city: &str) -> Result<Coordinates>;
}

/// Fetches current conditions at a point.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    async fn current(&self, at: Coordinates) -> Result<WeatherSnapshot>;
}

/// One implementation per pipeline stage.
#[derive(Debug)]
pub struct Services {
    pub locator: Box<dyn CityLocator>,
    pub geocoder: Box<dyn Geocoder>,
    pub weather: Box<dyn WeatherProvider>,
}

impl Services {
    /// HTTP-backed services sharing a single client.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        let creds = &config.credentials;
        let endpoints = &config.endpoints;

        Ok(Self {
            locator: Box::new(IpInfoLocator::new(http.clone(), endpoints.ipinfo.clone())),
            geocoder: Box::new(HereGeocoder::new(
                http.clone(),
                endpoints.here_geocode.clone(),
                creds.here_app_id.clone(),
                creds.here_app_code.clone(),
            )),
            weather: Box::new(DarkSkyProvider::new(
                http,
                endpoints.darksky.clone(),
                creds.darksky_api_key.clone(),
            )),
        })
    }
}

/// GET `url` and decode the JSON body. The body is read in full before
/// decoding, so the connection is released on every path.
pub(crate) async fn get_json<T: DeserializeOwned>(
    http: &Client,
    url: Url,
    service: &'static str,
) -> Result<T> {
    let res = http
        .get(url)
        .send()
        .await
        .map_err(|source| WeatherError::Transport { service, source })?;

    let status = res.status();
    let body = res.text().await.map_err(|source| WeatherError::Transport { service, source })?;

    if !status.is_success() {
        return Err(WeatherError::Status { service, status, body: truncate_body(&body) });
    }

    serde_json::from_str(&body).map_err(|source| WeatherError::Decode { service, source })
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.chars().count() > MAX {
        format!("{}...", body.chars().take(MAX).collect::<String>())
    } else {
        body.to_string()
    }
}
