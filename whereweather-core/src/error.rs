use reqwest::StatusCode;
use thiserror::Error;

/// Errors produced while running the locate → geocode → weather pipeline.
///
/// Every variant carries the name of the service that failed so the top-level
/// message is useful on its own.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Invalid {service} URL")]
    Url {
        service: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to send request to {service}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} request failed with status {status}: {body}")]
    Status {
        service: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("Failed to parse {service} JSON")]
    Decode {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{service} could not determine a city for this IP address")]
    UnknownLocation { service: &'static str },

    #[error("Geocoding returned no results for '{city}'")]
    NoResults { city: String },
}

pub type Result<T, E = WeatherError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_names_service_and_status() {
        let err = WeatherError::Status {
            service: "DarkSky",
            status: StatusCode::FORBIDDEN,
            body: "daily usage limit exceeded".into(),
        };

        let msg = err.to_string();
        assert!(msg.contains("DarkSky"));
        assert!(msg.contains("403"));
        assert!(msg.contains("daily usage limit exceeded"));
    }

    #[test]
    fn unknown_location_message_names_service() {
        let err = WeatherError::UnknownLocation { service: "ipinfo" };
        assert_eq!(err.to_string(), "ipinfo could not determine a city for this IP address");
    }

    #[test]
    fn no_results_message_quotes_city() {
        let err = WeatherError::NoResults { city: "Atlantis".into() };
        assert_eq!(err.to_string(), "Geocoding returned no results for 'Atlantis'");
    }
}
