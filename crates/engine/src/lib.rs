//! Profiler Engine library.
//!
//! Loads configuration, selects the active system profile and serves it over
//! HTTP.
//!
//! ## Structure
//!
//! - `infrastructure/` - Configuration sources, CLI flags and error types
//! - `selector` - Maps the `profile.dev` flag to one profile instance
//! - `app` - Application composition
//! - `api/` - HTTP entry points
//! - `run/` - Process lifecycle (logging, listener, graceful shutdown)

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod run;
pub mod selector;


pub use app::App;
