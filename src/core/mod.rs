pub mod gui;
pub mod infrastructure;
pub mod lifecycle;
pub mod preferences;
pub mod service;
pub mod system;
