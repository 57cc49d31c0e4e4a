pub mod host_runtime;
pub mod startup_hook;
pub mod system_service;
pub mod window_state_sink;
