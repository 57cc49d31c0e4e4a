use std::sync::{PoisonError, RwLock};

/// Process-wide state owned by the bootstrap and shared by reference.
#[derive(Debug, Default)]
pub struct AppState {
    version: RwLock<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write wins; meant to be called once before startup.
    pub fn set_app_version(&self, version: impl Into<String>) {
        let mut guard = self.version.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(version.into());
    }

    pub fn app_version(&self) -> Option<String> {
        self.version
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::AppState;

    #[test]
    fn app_version_is_unset_until_recorded() {
        let state = AppState::new();
        assert_eq!(state.app_version(), None);
    }

    #[test]
    fn app_version_returns_exact_string_and_last_write_wins() {
        let state = AppState::new();
        state.set_app_version("1.0.0");
        state.set_app_version(" v1.2.3-beta+build.7 ");
        assert_eq!(state.app_version().as_deref(), Some(" v1.2.3-beta+build.7 "));
    }
}
