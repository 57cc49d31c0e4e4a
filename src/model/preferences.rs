use serde::{Deserialize, Serialize};

/// On-disk preferences record. Every field is optional in the file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Preferences {
    pub behavior: BehaviorPreferences,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct BehaviorPreferences {
    pub window_width: i64,
    pub window_height: i64,
    pub window_maximized: bool,
    pub last_version: String,
}
