pub mod lifecycle;
pub mod misc;
pub mod preferences;
pub mod system;

use crate::model::error::lifecycle::LifecycleError;
use crate::model::error::misc::MiscError;
use crate::model::error::preferences::PreferencesError;
use crate::model::error::system::SystemError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize, Deserialize)]
pub enum Error {
    #[error(transparent)]
    Lifecycle(LifecycleError),
    #[error(transparent)]
    Misc(MiscError),
    #[error(transparent)]
    Preferences(PreferencesError),
    #[error(transparent)]
    System(SystemError),
}

impl Error {
    pub fn level(&self) -> tracing::Level {
        match self {
            Self::Lifecycle(error) => error.level(),
            Self::Misc(error) => error.level(),
            Self::Preferences(error) => error.level(),
            Self::System(error) => error.level(),
        }
    }
}

impl From<LifecycleError> for Error {
    fn from(error: LifecycleError) -> Self {
        Self::Lifecycle(error)
    }
}

impl From<MiscError> for Error {
    fn from(error: MiscError) -> Self {
        Self::Misc(error)
    }
}

impl From<PreferencesError> for Error {
    fn from(error: PreferencesError) -> Self {
        Self::Preferences(error)
    }
}

impl From<SystemError> for Error {
    fn from(error: SystemError) -> Self {
        Self::System(error)
    }
}
