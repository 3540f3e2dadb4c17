use std::num::ParseIntError;
use std::time::Duration;

use dioxus::logger::tracing::Level;

/// The build-time variable that overrides [`ShopConfig::fetch_delay`], in milliseconds.
pub const FETCH_DELAY_VAR: &str = "STOREFRONT_FETCH_DELAY_MS";

/// Errors encountered while reading the storefront configuration.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The fetch delay override was not a whole number of milliseconds.
    #[error("STOREFRONT_FETCH_DELAY_MS={value:?} is not a number of milliseconds")]
    InvalidDelay {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Settings shared by every page of the storefront, provided to components through context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShopConfig {
    /// How long the simulated product lookup takes.
    pub fetch_delay: Duration,

    /// The most verbose level the logger will emit.
    pub log_level: Level,

    /// Whether the development route table is mounted next to the pages.
    pub dev_routes: bool,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            fetch_delay: Duration::from_millis(500),
            log_level: if cfg!(debug_assertions) {
                Level::DEBUG
            } else {
                Level::INFO
            },
            dev_routes: cfg!(feature = "dev-routes"),
        }
    }
}

impl ShopConfig {
    /// Reads the configuration baked in at build time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::default().with_delay_override(option_env!("STOREFRONT_FETCH_DELAY_MS"))
    }

    /// Applies a fetch delay override given in milliseconds, if there is one.
    pub fn with_delay_override(mut self, value: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(value) = value {
            let millis = value
                .trim()
                .parse::<u64>()
                .map_err(|source| ConfigError::InvalidDelay {
                    value: value.to_string(),
                    source,
                })?;
            self.fetch_delay = Duration::from_millis(millis);
        }
        Ok(self)
    }

    pub fn with_fetch_delay(mut self, fetch_delay: Duration) -> Self {
        self.fetch_delay = fetch_delay;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let config = ShopConfig::default();
        assert_eq!(config.fetch_delay, Duration::from_millis(500));
        assert_eq!(config.dev_routes, cfg!(feature = "dev-routes"));
    }

    #[test]
    fn delay_override() {
        let config = ShopConfig::default()
            .with_delay_override(Some(" 20 "))
            .unwrap();
        assert_eq!(config.fetch_delay, Duration::from_millis(20));

        let untouched = ShopConfig::default().with_delay_override(None).unwrap();
        assert_eq!(untouched, ShopConfig::default());
    }

    #[test]
    fn bad_delay_is_rejected() {
        let err = ShopConfig::default()
            .with_delay_override(Some("soon"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDelay { ref value, .. } if value == "soon"));
        assert_eq!(
            err.to_string(),
            "STOREFRONT_FETCH_DELAY_MS=\"soon\" is not a number of milliseconds"
        );
    }
}
