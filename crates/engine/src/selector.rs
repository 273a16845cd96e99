//! Profile selection.
//!
//! The `profile.dev` flag picks exactly one [`SystemProfile`] for the life of
//! the process. Nothing else constructs a profile.

use std::sync::Arc;

use profiler_domain::{DevProfile, ProductionProfile, ProfileKind, SystemProfile};

/// Construct the profile selected by the `profile.dev` flag.
pub fn select_profile(dev: bool) -> Arc<dyn SystemProfile> {
    let profile: Arc<dyn SystemProfile> = match ProfileKind::from_dev_flag(dev) {
        ProfileKind::Dev => Arc::new(DevProfile),
        ProfileKind::Production => Arc::new(ProductionProfile),
    };

    tracing::info!(profile = %profile.kind(), "System profile selected");
    profile
}
