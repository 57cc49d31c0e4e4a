use crate::model::error::Error;
use crate::model::lifecycle::StartupContext;
use async_trait::async_trait;

#[async_trait]
pub trait SystemService: Send + Sync {
    async fn start(&self, ctx: &StartupContext, version: &str) -> Result<(), Error>;
}
