//! Configuration constants and profile loading for charsearch
//!
//! Settings live in an INI file with one section per profile:
//!
//! ```ini
//! [default]
//! base_url = https://rickandmortyapi.com
//! debounce_ms = 500
//! ```
//!
//! A missing file or section means defaults; a present but invalid value is
//! an error.

use crate::error::ConfigError;
use crate::services::DEFAULT_BASE_URL;
use crate::view_models::DEFAULT_DEBOUNCE;
use ini::Ini;
use std::path::Path;
use std::time::Duration;

/// Default profile file path for charsearch
pub const DEFAULT_PROFILE_PATH: &str = "~/.charsearch/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "CHARSEARCH_PROFILE_PATH";

const BASE_URL_KEY: &str = "base_url";
const DEBOUNCE_MS_KEY: &str = "debounce_ms";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Settings resolved from a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub base_url: String,
    pub debounce: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

/// Load settings for `profile_name` from the INI file at `profile_path`.
/// `~` in the path is expanded.
pub fn load_settings(profile_name: &str, profile_path: &str) -> Result<Settings, ConfigError> {
    let expanded = shellexpand::tilde(profile_path);
    let path = Path::new(expanded.as_ref());

    if !path.exists() {
        tracing::debug!("Profile file '{}' not found, using defaults", expanded);
        return Ok(Settings::default());
    }

    let ini = Ini::load_from_file(path).map_err(|e| match e {
        ini::Error::Io(source) => ConfigError::Io {
            path: expanded.to_string(),
            source,
        },
        ini::Error::Parse(parse_error) => ConfigError::Parse {
            path: expanded.to_string(),
            message: parse_error.to_string(),
        },
    })?;

    let Some(section) = ini.section(Some(profile_name)) else {
        tracing::debug!("Profile '{}' not found, using defaults", profile_name);
        return Ok(Settings::default());
    };

    let mut settings = Settings::default();

    if let Some(base_url) = section.get(BASE_URL_KEY) {
        let base_url = base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                profile: profile_name.to_string(),
                key: BASE_URL_KEY,
                value: base_url.to_string(),
            });
        }
        settings.base_url = base_url.to_string();
    }

    if let Some(debounce_ms) = section.get(DEBOUNCE_MS_KEY) {
        let millis = debounce_ms
            .trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidValue {
                profile: profile_name.to_string(),
                key: DEBOUNCE_MS_KEY,
                value: debounce_ms.to_string(),
            })?;
        settings.debounce = Duration::from_millis(millis);
    }

    tracing::debug!("Profile '{}' loaded: {:?}", profile_name, settings);
    Ok(settings)
}
