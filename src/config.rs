//! Device configuration.
//!
//! Configuration is small and usually baked into the firmware image, but it
//! can also be provisioned as JSON and parsed without allocation:
//!
//! ```rust
//! use serialcmd::config::Config;
//! use serialcmd::platform::MacType;
//!
//! let config = Config::from_json(r#"{"identity": "node-7", "mac_type": "softap"}"#).unwrap();
//! assert_eq!(config.identity.as_str(), "node-7");
//! assert_eq!(config.mac_type, MacType::SoftAp);
//! ```

use crate::platform::MacType;
use heapless::String;
use serde::{Deserialize, Serialize};

/// Maximum length of the identity string reported by `id`.
pub const MAX_IDENTITY_LEN: usize = 32;

/// Identity reported when none is configured.
pub const DEFAULT_IDENTITY: &str = "otf2@hi.is";

/// Errors produced while loading a configuration.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ConfigError {
    /// The document was not valid JSON for a [`Config`].
    Parse,
    /// The identity does not fit into [`MAX_IDENTITY_LEN`] bytes, whether
    /// given to [`Config::with_identity`] or in a JSON document.
    IdentityTooLong,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ConfigError::Parse => defmt::write!(f, "Parse"),
            ConfigError::IdentityTooLong => defmt::write!(f, "IdentityTooLong"),
        }
    }
}

/// Borrowed view of a JSON document, checked before it becomes a [`Config`].
#[derive(Deserialize)]
struct RawConfig<'a> {
    #[serde(borrow, default)]
    identity: Option<&'a str>,
    #[serde(default)]
    mac_type: Option<MacType>,
}

/// Settings consulted by the command handlers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Identity string answered by the `id` command.
    pub identity: String<MAX_IDENTITY_LEN>,
    /// Interface whose MAC address the `mac` command reports.
    pub mac_type: MacType,
}

impl Default for Config {
    fn default() -> Self {
        let mut identity = String::new();
        // Constant shorter than MAX_IDENTITY_LEN.
        let _ = identity.push_str(DEFAULT_IDENTITY);
        Self {
            identity,
            mac_type: MacType::default(),
        }
    }
}

impl Config {
    /// Build a configuration with the given identity.
    pub fn with_identity(identity: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            identity: String::try_from(identity).map_err(|_| ConfigError::IdentityTooLong)?,
            ..Self::default()
        })
    }

    /// Parse a JSON configuration document. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::Parse`] - malformed JSON, an unknown `mac_type`, or an
    ///   identity containing escape sequences
    /// * [`ConfigError::IdentityTooLong`] - the identity exceeds [`MAX_IDENTITY_LEN`]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let (raw, _): (RawConfig<'_>, _) =
            serde_json_core::from_str(json).map_err(|_| ConfigError::Parse)?;

        let mut config = match raw.identity {
            Some(identity) => Self::with_identity(identity)?,
            None => Self::default(),
        };
        if let Some(mac_type) = raw.mac_type {
            config.mac_type = mac_type;
        }
        Ok(config)
    }
}
