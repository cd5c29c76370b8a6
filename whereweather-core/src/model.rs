use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use crate::error::{Result, WeatherError};

/// Caller location as reported by the IP geolocation service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientInfo {
    /// Empty or absent when the service can't place the address.
    #[serde(default)]
    pub city: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// `lat,lon` with six fixed decimals, as used in the weather service path.
    pub fn to_path_segment(&self) -> String {
        format!("{:.6},{:.6}", self.latitude, self.longitude)
    }
}

/// Body of a geocoding response. Only the fields leading to the first
/// display position are decoded.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GeocodeResponse {
    response: GeocodeBody,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GeocodeBody {
    #[serde(default)]
    view: Vec<GeocodeView>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GeocodeView {
    #[serde(default)]
    result: Vec<GeocodeMatch>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GeocodeMatch {
    location: GeocodeLocation,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GeocodeLocation {
    display_position: DisplayPosition,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DisplayPosition {
    latitude: f64,
    longitude: f64,
}

impl GeocodeResponse {
    /// Display position of the first result of the first view.
    pub fn first_position(&self, city: &str) -> Result<Coordinates> {
        let position = self
            .response
            .view
            .first()
            .and_then(|view| view.result.first())
            .map(|m| m.location.display_position)
            .ok_or_else(|| WeatherError::NoResults { city: city.to_string() })?;

        Ok(Coordinates { latitude: position.latitude, longitude: position.longitude })
    }
}

/// Envelope of a forecast response; only current conditions are kept.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub currently: WeatherSnapshot,
}

/// Current conditions at a point in time, in SI units.
///
/// The service leaves out fields that don't apply (no storm, no gusts) and
/// sometimes sends `null`; either way the field falls back to zero or an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WeatherSnapshot {
    /// UNIX timestamp of the observation, in seconds.
    #[serde(deserialize_with = "null_as_default")]
    pub time: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
    #[serde(deserialize_with = "null_as_default")]
    pub icon: String,
    #[serde(deserialize_with = "null_as_default")]
    pub nearest_storm_distance: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub nearest_storm_bearing: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub precip_intensity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub precip_probability: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub temperature: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub apparent_temperature: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub dew_point: f64,
    /// Relative humidity, 0..=1.
    #[serde(deserialize_with = "null_as_default")]
    pub humidity: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub pressure: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub wind_speed: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub wind_gust: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub wind_bearing: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub cloud_cover: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub uv_index: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub visibility: f64,
    #[serde(deserialize_with = "null_as_default")]
    pub ozone: f64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl WeatherSnapshot {
    pub fn observed_at(&self) -> Option<DateTime<Utc>> {
        if !self.time.is_finite() {
            return None;
        }
        let secs = self.time.floor();
        let nanos = (((self.time - secs) * 1e9) as u32).min(999_999_999);
        DateTime::from_timestamp(secs as i64, nanos)
    }

    /// One-line human readable report. Numbers use their shortest decimal form.
    pub fn report(&self) -> String {
        format!(
            "Current temperature is {}\u{00b0}C. Although it feels like {}\u{00b0}C. \
             It's mostly {} with humidity at {}.",
            self.temperature, self.apparent_temperature, self.summary, self.humidity
        )
    }
}
