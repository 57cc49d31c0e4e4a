use crate::model::window::WindowSize;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_WINDOW_WIDTH: u32 = 1024;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 768;
pub const MIN_WINDOW_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 640;
pub const DEFAULT_PREFERENCES_PATH: &str = "./preferences.toml";

#[derive(Debug, Default, Deserialize)]
pub struct ConfigTable {
    #[serde(rename = "Config", default)]
    pub config: Config,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub preferences_path: PathBuf,
    pub default_window_width: u32,
    pub default_window_height: u32,
    pub min_window_width: u32,
    pub min_window_height: u32,
}

impl Config {
    pub fn default_window_size(&self) -> WindowSize {
        WindowSize::new(self.default_window_width, self.default_window_height)
    }

    pub fn min_window_size(&self) -> WindowSize {
        WindowSize::new(self.min_window_width, self.min_window_height)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preferences_path: PathBuf::from(DEFAULT_PREFERENCES_PATH),
            default_window_width: DEFAULT_WINDOW_WIDTH,
            default_window_height: DEFAULT_WINDOW_HEIGHT,
            min_window_width: MIN_WINDOW_WIDTH,
            min_window_height: MIN_WINDOW_HEIGHT,
        }
    }
}
