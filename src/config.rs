use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;

/// Upper bound for every configurable delay, in milliseconds.
pub const MAX_DELAY_MS: u64 = 2000;

/// Timing of the terminal UI.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Per-row delay of the falling chip animation; 0 disables it
    pub drop_animation_ms: u64,
    /// Pause before the computer's move is shown
    pub computer_delay_ms: u64,
    /// Blink interval when a menu entry is selected; 0 disables the blink
    pub menu_flash_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            drop_animation_ms: 125,
            computer_delay_ms: 350,
            menu_flash_ms: 110,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OpponentConfig {
    /// Seed for the computer opponents; seeded from the OS when absent
    pub seed: Option<u64>,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub opponent: OpponentConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let delays = [
            ("ui.drop_animation_ms", self.ui.drop_animation_ms),
            ("ui.computer_delay_ms", self.ui.computer_delay_ms),
            ("ui.menu_flash_ms", self.ui.menu_flash_ms),
        ];
        for (name, value) in delays {
            if value > MAX_DELAY_MS {
                return Err(ConfigError::Validation(format!(
                    "{name} must be <= {MAX_DELAY_MS}"
                )));
            }
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[ui]
drop_animation_ms = 0
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ui.drop_animation_ms, 0);
        // Other fields should be defaults
        assert_eq!(config.ui.computer_delay_ms, 350);
        assert_eq!(config.opponent.seed, None);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_seed_is_read() {
        let config: AppConfig = toml::from_str("[opponent]\nseed = 1234\n").unwrap();
        assert_eq!(config.opponent.seed, Some(1234));
    }

    #[test]
    fn test_validation_rejects_long_animation() {
        let mut config = AppConfig::default();
        config.ui.drop_animation_ms = MAX_DELAY_MS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_long_computer_delay() {
        let mut config = AppConfig::default();
        config.ui.computer_delay_ms = 10_000;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("ui.computer_delay_ms"));
    }

    #[test]
    fn test_validation_accepts_zero_delays() {
        let mut config = AppConfig::default();
        config.ui.drop_animation_ms = 0;
        config.ui.computer_delay_ms = 0;
        config.ui.menu_flash_ms = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[ui]
menu_flash_ms = 50

[opponent]
seed = 7
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.ui.menu_flash_ms, 50);
        assert_eq!(config.opponent.seed, Some(7));
        // Others are defaults
        assert_eq!(config.ui.drop_animation_ms, 125);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[ui]\ncomputer_delay_ms = 99999\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_rejects_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "[ui\n").unwrap();
        assert!(matches!(AppConfig::load(&path), Err(ConfigError::TomlParse(_))));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
