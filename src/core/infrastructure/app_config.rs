use crate::model::config::{Config, ConfigTable};
use crate::model::error::Error;
use crate::model::error::system::SystemError;
use crate::model::log::system::SystemLog;
use macros::log;
use std::fs;
use std::io;
use std::ops::Deref;
use std::path::Path;

pub const CONFIG_PATH: &str = "./config.toml";

#[derive(Debug, Clone)]
pub struct AppConfig {
    config: Config,
}

impl AppConfig {
    pub fn new() -> Result<Self, Error> {
        Self::from_path(CONFIG_PATH)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let config = Self::load_config_file(path.as_ref())?;
        Self::validate(&config)?;
        Ok(Self { config })
    }

    pub fn from_config(config: Config) -> Result<Self, Error> {
        Self::validate(&config)?;
        Ok(Self { config })
    }

    fn load_config_file(path: &Path) -> Result<Config, Error> {
        let toml_string = match fs::read_to_string(path) {
            Ok(toml_string) => toml_string,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log!(SystemLog::ConfigDefaulted {
                    path: path.display().to_string()
                });
                return Ok(Config::default());
            }
            Err(err) => {
                return Err(SystemError::ConfigUnreadable {
                    path: path.to_path_buf(),
                    reason: err.to_string(),
                }
                .into());
            }
        };
        let config = toml::from_str::<ConfigTable>(&toml_string)
            .map_err(|err| SystemError::InvalidConfig {
                reason: err.to_string(),
            })?
            .config;
        Ok(config)
    }

    fn validate(config: &Config) -> Result<(), Error> {
        let dimensions = [
            ("default_window_width", config.default_window_width),
            ("default_window_height", config.default_window_height),
            ("min_window_width", config.min_window_width),
            ("min_window_height", config.min_window_height),
        ];
        if let Some((key, _)) = dimensions.iter().find(|(_, value)| *value == 0) {
            return Err(SystemError::InvalidConfig {
                reason: format!("{key} must be greater than zero"),
            }
            .into());
        }
        if config.preferences_path.as_os_str().is_empty() {
            return Err(SystemError::InvalidConfig {
                reason: "preferences_path must not be empty".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

impl Deref for AppConfig {
    type Target = Config;

    fn deref(&self) -> &Self::Target {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::AppConfig;
    use crate::model::config::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH, MIN_WINDOW_WIDTH};
    use crate::model::error::Error;
    use crate::model::error::system::SystemError;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn missing_config_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = AppConfig::from_path(dir.path().join("config.toml")).expect("defaults");
        assert_eq!(config.default_window_width, DEFAULT_WINDOW_WIDTH);
        assert_eq!(config.default_window_height, DEFAULT_WINDOW_HEIGHT);
        assert_eq!(config.min_window_width, MIN_WINDOW_WIDTH);
    }

    #[test]
    fn partial_config_keeps_defaults_for_missing_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[Config]\npreferences_path = \"/tmp/prefs.toml\"\nmin_window_width = 300\n",
        )
        .expect("write config");

        let config = AppConfig::from_path(&path).expect("config");
        assert_eq!(config.preferences_path, PathBuf::from("/tmp/prefs.toml"));
        assert_eq!(config.min_window_width, 300);
        assert_eq!(config.default_window_width, DEFAULT_WINDOW_WIDTH);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[Config]\nmin_window_height = 0\n").expect("write config");

        let error = AppConfig::from_path(&path).expect_err("zero height must fail");
        assert!(matches!(
            error,
            Error::System(SystemError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn malformed_config_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "[Config\nmin_window_height = ").expect("write config");

        assert!(AppConfig::from_path(&path).is_err());
    }
}
