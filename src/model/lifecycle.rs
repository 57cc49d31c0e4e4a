use crate::model::error::lifecycle::LifecycleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use tokio_util::sync::CancellationToken;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecyclePhase {
    Uninitialized,
    Configured,
    Starting,
    Ready,
    Aborted,
}

impl fmt::Display for LifecyclePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LifecyclePhase::Uninitialized => "uninitialized",
            LifecyclePhase::Configured => "configured",
            LifecyclePhase::Starting => "starting",
            LifecyclePhase::Ready => "ready",
            LifecyclePhase::Aborted => "aborted",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartupOutcome {
    Ready,
    Aborted,
}

/// Cancellation-aware context handed to the startup hook by the host.
#[derive(Debug, Clone, Default)]
pub struct StartupContext {
    token: CancellationToken,
}

impl StartupContext {
    pub fn new(token: CancellationToken) -> Self {
        Self { token }
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub async fn cancelled(&self) {
        self.token.cancelled().await
    }

    /// Fails with `StartupAborted` once the host has cancelled the context.
    pub fn checkpoint(&self) -> Result<(), LifecycleError> {
        if self.token.is_cancelled() {
            Err(LifecycleError::StartupAborted)
        } else {
            Ok(())
        }
    }
}
