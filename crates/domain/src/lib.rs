//! Profiler domain.
//!
//! The [`SystemProfile`] capability and the two interchangeable variants a
//! running process can be configured with.

pub mod profile;
pub mod profile_kind;

pub use profile::{DevProfile, ProductionProfile, SystemProfile};
pub use profile_kind::ProfileKind;
