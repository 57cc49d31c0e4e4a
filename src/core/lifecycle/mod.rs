pub mod lifecycle_coordinator;
pub mod menu;
