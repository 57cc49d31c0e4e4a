pub mod gui_manager;
pub mod window_tracker;
