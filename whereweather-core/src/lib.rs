//! Core library for the `whereweather` CLI.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The three lookup stages (city locator, geocoder, weather provider) and
//!   their HTTP implementations
//! - Shared domain models and the error type
//! - The pipeline that chains the stages into a one-line report
//!
//! It is used by `whereweather-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod provider;

pub use config::{Config, Credentials, Endpoints};
pub use error::WeatherError;
pub use model::{ClientInfo, Coordinates, GeocodeResponse, WeatherSnapshot};
pub use pipeline::{current_weather_report, resolve_city};
pub use provider::{CityLocator, Geocoder, Services, WeatherProvider};
