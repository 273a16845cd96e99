//! In-process server harness.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::app::App;
use crate::infrastructure::{AppConfig, ConfigLoader};
use crate::run::serve;

/// A running server bound to 127.0.0.1 on an OS-assigned port.
///
/// Dropping the harness cancels the server.
pub struct ServerHarness {
    base_url: String,
    handle: JoinHandle<anyhow::Result<()>>,
    _shutdown: DropGuard,
}

impl ServerHarness {
    /// Start a server for an already resolved configuration.
    pub async fn start(config: &AppConfig) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let app = Arc::new(App::from_config(config));
        let cancel_token = CancellationToken::new();
        let handle = tokio::spawn(serve(listener, app, cancel_token.clone()));

        Ok(Self {
            base_url: format!("http://{addr}"),
            handle,
            _shutdown: cancel_token.drop_guard(),
        })
    }

    /// Load configuration from the given environment variables, then start.
    pub async fn start_with_env(
        vars: &[(&str, &str)],
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let config = ConfigLoader::new().with_env_vars(vars).load()?;
        Self::start(&config).await
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Cancel the server and wait for it to finish draining.
    pub async fn shutdown(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let Self {
            handle, _shutdown, ..
        } = self;
        drop(_shutdown);
        handle.await??;
        Ok(())
    }
}
