//! Process lifecycle.

mod server;

pub use server::{init_tracing, run, serve, setup_shutdown_signal};
