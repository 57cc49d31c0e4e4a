use crate::interface::startup_hook::StartupHook;
use crate::interface::window_state_sink::WindowStateSink;
use crate::model::error::Error;
use crate::model::window::HostConfiguration;
use async_trait::async_trait;
use std::sync::Arc;

/// The GUI shell that owns the event loop.
///
/// `run` opens the window described by `configuration`, invokes `hook` once when it is
/// ready, forwards window changes to `window_sink`, and returns when the event loop exits.
/// An `Err` means the host itself could not start.
#[async_trait]
pub trait HostRuntime {
    async fn run(
        &self,
        configuration: HostConfiguration,
        hook: Arc<dyn StartupHook>,
        window_sink: Arc<dyn WindowStateSink>,
    ) -> Result<(), Error>;
}
