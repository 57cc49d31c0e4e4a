pub mod config;
pub mod error;
pub mod lifecycle;
pub mod log;
pub mod menu;
pub mod platform;
pub mod preferences;
pub mod window;
