use log::info;

use crate::{
    error::Result,
    provider::{CityLocator, Services},
};

/// The explicit city if one was given, otherwise whatever the locator says.
/// An empty string counts as "not given".
pub async fn resolve_city(explicit: Option<&str>, locator: &dyn CityLocator) -> Result<String> {
    match explicit {
        Some(city) if !city.is_empty() => Ok(city.to_string()),
        _ => locator.locate_city().await,
    }
}

/// Locate, geocode, fetch and format, stopping at the first error.
pub async fn current_weather_report(city: Option<&str>, services: &Services) -> Result<String> {
    let city = resolve_city(city, services.locator.as_ref()).await?;
    info!("Resolved city: {city}");

    let coordinates = services.geocoder.geocode(&city).await?;
    info!("Geocoded '{city}' to {}", coordinates.to_path_segment());

    let snapshot = services.weather.current(coordinates).await?;

    Ok(snapshot.report())
}
