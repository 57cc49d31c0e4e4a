pub mod lifecycle;
pub mod preferences;
pub mod system;
