//! System profile capability
//!
//! A system profile identifies the environment the process was started in.
//! Variants are stateless; the only thing that distinguishes them is which
//! one the process chose at startup.

use std::fmt::Debug;

use crate::ProfileKind;

/// Environment identity exposed by the running process.
///
/// Implementations must be immutable so a single instance can be shared
/// across request tasks without locking.
pub trait SystemProfile: Debug + Send + Sync {
    /// Human-readable description of the active profile.
    fn describe(&self) -> &'static str;

    /// Variant tag of this profile.
    fn kind(&self) -> ProfileKind;
}

/// Profile used for local development.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DevProfile;

impl SystemProfile for DevProfile {
    fn describe(&self) -> &'static str {
        "Current profile is dev"
    }

    fn kind(&self) -> ProfileKind {
        ProfileKind::Dev
    }
}

/// Profile used for production deployments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductionProfile;

impl SystemProfile for ProductionProfile {
    fn describe(&self) -> &'static str {
        "Current profile is production"
    }

    fn kind(&self) -> ProfileKind {
        ProfileKind::Production
    }
}
