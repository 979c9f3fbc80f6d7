//! Configuration of the game and of the engine running it.

use log::LevelFilter;
use semver::Version;

/// Name of the engine library.
pub const ENGINE_NAME: &str = env!("CARGO_CRATE_NAME", "library must be compiled by Cargo");

const ENGINE_VERSION_STR: &str = env!("CARGO_PKG_VERSION", "library must be compiled by Cargo");
lazy_static::lazy_static! {
    /// Version of the engine library.
    pub static ref ENGINE_VERSION: Version = Version::parse(ENGINE_VERSION_STR)
        .unwrap_or_else(|_| Version::new(0, 0, 0));
}

/// General configuration of the game.
///
/// With validation enabled the engine reports what it does in detail:
/// see [`log_level`](Config::log_level).
///
#[derive(Debug, Clone)]
pub struct Config {
    name: String,
    version: Version,
    enable_validation: bool,
}

impl Config {
    /// Creates new configuration with given name, version and validation usage.
    pub const fn new(name: String, version: Version, enable_validation: bool) -> Self {
        Self {
            name,
            version,
            enable_validation,
        }
    }

    /// Name of your game, used as the window title.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    /// If game will check and report its state in detail (useful for debugging).
    pub fn enable_validation(&self) -> bool {
        self.enable_validation
    }

    /// Most verbose level of messages the game should log.
    ///
    /// Debug messages (per-frame draw data, scene changes) are emitted
    /// only if validation is enabled.
    ///
    pub fn log_level(&self) -> LevelFilter {
        if self.enable_validation {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

impl Default for Config {
    /// Configuration of the window from the engine demo, validated in debug builds.
    fn default() -> Self {
        Self::new(
            "Vortex2D Window".to_string(),
            Version::new(0, 0, 0),
            cfg!(debug_assertions),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_version() {
        assert_eq!(ENGINE_NAME, "vortex_core");
        assert_eq!(ENGINE_VERSION.to_string(), ENGINE_VERSION_STR);
    }

    #[test]
    fn test_default() {
        let config = Config::default();
        assert_eq!(config.name(), "Vortex2D Window");
        assert_eq!(config.version(), &Version::new(0, 0, 0));
        assert_eq!(config.enable_validation(), cfg!(debug_assertions));
    }

    #[test]
    fn test_log_level_follows_validation() {
        let validated = Config::new("game".to_string(), Version::new(1, 2, 3), true);
        assert_eq!(validated.log_level(), LevelFilter::Debug);

        let quiet = Config::new("game".to_string(), Version::new(1, 2, 3), false);
        assert_eq!(quiet.log_level(), LevelFilter::Info);
    }
}
