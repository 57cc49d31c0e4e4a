use crate::model::error::Error;
use crate::model::lifecycle::{StartupContext, StartupOutcome};
use async_trait::async_trait;

#[async_trait]
pub trait StartupHook: Send + Sync {
    async fn on_ready(&self, ctx: StartupContext) -> Result<StartupOutcome, Error>;
}
