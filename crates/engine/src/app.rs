//! Application state and composition.

use std::sync::Arc;

use profiler_domain::SystemProfile;

use crate::infrastructure::AppConfig;
use crate::selector::select_profile;

/// Main application state.
///
/// Holds the single active system profile for the process lifetime.
/// Passed to HTTP handlers via Axum state.
#[derive(Debug, Clone)]
pub struct App {
    profile: Arc<dyn SystemProfile>,
}

impl App {
    pub fn new(profile: Arc<dyn SystemProfile>) -> Self {
        Self { profile }
    }

    /// Compose the application from loaded configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(select_profile(config.profile_dev))
    }

    pub fn profile(&self) -> &dyn SystemProfile {
        self.profile.as_ref()
    }
}
