use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use log::{debug, warn};
use serde::Deserialize;
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

pub const DARKSKY_API_KEY_VAR: &str = "DARKSKY_API_KEY";
pub const HEREMAPS_APP_ID_VAR: &str = "HEREMAPS_APP_ID";
pub const HEREMAPS_APP_CODE_VAR: &str = "HEREMAPS_APP_CODE";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Secrets interpolated into outgoing requests. Empty values are sent as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub darksky_api_key: String,
    pub here_app_id: String,
    pub here_app_code: String,
}

/// Base URLs of the three services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    pub ipinfo: String,
    pub here_geocode: String,
    pub darksky: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            ipinfo: "https://ipinfo.io/json".to_string(),
            here_geocode: "https://geocoder.api.here.com/6.2/geocode.json".to_string(),
            darksky: "https://api.darksky.net/forecast".to_string(),
        }
    }
}

/// Top-level configuration.
///
/// Example TOML:
/// ```toml
/// timeout_secs = 10
///
/// [credentials]
/// darksky_api_key = "..."
///
/// [endpoints]
/// ipinfo = "https://ipinfo.io/json"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub credentials: Credentials,
    pub endpoints: Endpoints,

    /// Total per-request timeout. `0` disables it.
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials: Credentials::default(),
            endpoints: Endpoints::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Build the runtime configuration: defaults, then the config file (if
    /// any), then `.env` in the working directory, then the process
    /// environment.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()
            .map_err(|err| debug!("Skipping config file: {err}"))
            .ok();

        let cfg = Self::load_with(config_path.as_deref(), Path::new(".env"), |key| {
            std::env::var(key).ok()
        })?;

        for var in cfg.missing_credentials() {
            warn!("{var} is not set; the remote service will likely reject the request");
        }

        Ok(cfg)
    }

    /// Layer `config_path`, then `dotenv_path`, then `lookup` over the
    /// defaults. Either file may be missing.
    pub fn load_with(
        config_path: Option<&Path>,
        dotenv_path: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut cfg = match config_path {
            Some(path) => Self::load_from(path)?,
            None => Self::default(),
        };

        let dotenv = read_dotenv(dotenv_path)?;
        cfg.apply_env(|key| dotenv.get(key).cloned());
        cfg.apply_env(lookup);

        Ok(cfg)
    }

    /// Load config from `path`, or return the defaults if it doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!("Loaded config file {}", path.display());
        Ok(cfg)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "whereweather", "whereweather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Override credentials with whatever `lookup` returns for the credential
    /// variables. Unset variables leave the current value alone.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let targets = [
            (DARKSKY_API_KEY_VAR, &mut self.credentials.darksky_api_key),
            (HEREMAPS_APP_ID_VAR, &mut self.credentials.here_app_id),
            (HEREMAPS_APP_CODE_VAR, &mut self.credentials.here_app_code),
        ];

        for (var, slot) in targets {
            if let Some(value) = lookup(var) {
                *slot = value;
            }
        }
    }

    /// Names of the credential variables that are still empty.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let creds = &self.credentials;
        [
            (DARKSKY_API_KEY_VAR, &creds.darksky_api_key),
            (HEREMAPS_APP_ID_VAR, &creds.here_app_id),
            (HEREMAPS_APP_CODE_VAR, &creds.here_app_code),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(var, _)| var)
        .collect()
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

/// Variables from a `.env` file. The process environment is left untouched.
fn read_dotenv(path: &Path) -> Result<HashMap<String, String>> {
    if !path.exists() {
        debug!("No .env file at {}", path.display());
        return Ok(HashMap::new());
    }

    let vars = dotenvy::from_path_iter(path)
        .and_then(|iter| iter.collect::<Result<HashMap<_, _>, _>>())
        .with_context(|| format!("Failed to load .env file: {}", path.display()))?;

    debug!("Loaded {} variables from {}", vars.len(), path.display());
    Ok(vars)
}
