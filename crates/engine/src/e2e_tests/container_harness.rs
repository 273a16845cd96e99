//! Testcontainers harness for the service image.
//!
//! Provides one running container per profile, mirroring how the service is
//! deployed: same image, different `NETOLOGY_PROFILE_DEV`.

use std::time::Duration;

use testcontainers::{core::WaitFor, runners::AsyncRunner, ContainerAsync, GenericImage};
use tokio::time::sleep;

/// Image built from the repository `Dockerfile`.
pub const PROFILER_IMAGE: &str = "profiler-engine";
pub const PROFILER_IMAGE_TAG: &str = "latest";

/// Port the service listens on inside the container.
pub const CONTAINER_PORT: u16 = 8080;

/// A running service container reachable from the host.
pub struct ProfilerContainer {
    _container: ContainerAsync<GenericImage>,
    base_url: String,
}

impl ProfilerContainer {
    /// Start the service image with the given profile flag and wait until it
    /// answers health checks.
    pub async fn start(profile_dev: bool) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let container = profiler_image(profile_dev).start().await;
        let host_port = container.get_host_port_ipv4(CONTAINER_PORT).await;
        let base_url = format!("http://127.0.0.1:{host_port}");

        wait_until_healthy(&base_url).await?;

        Ok(Self {
            _container: container,
            base_url,
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Create the service image with the given profile flag.
pub fn profiler_image(profile_dev: bool) -> GenericImage {
    GenericImage::new(PROFILER_IMAGE, PROFILER_IMAGE_TAG)
        .with_env_var("NETOLOGY_PROFILE_DEV", profile_dev.to_string())
        .with_env_var("NETOLOGY_SERVER_PORT", CONTAINER_PORT.to_string())
        .with_env_var("RUST_LOG", "profiler_engine=info")
        .with_exposed_port(CONTAINER_PORT)
        // Readiness is verified by wait_until_healthy
        .with_wait_for(WaitFor::seconds(1))
}

/// Poll `/health` with exponential backoff: 200ms doubling up to 2s, 20 attempts.
pub async fn wait_until_healthy(
    base_url: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let max_attempts = 20;
    let max_delay = Duration::from_secs(2);

    let url = format!("{base_url}/health");
    let mut delay = Duration::from_millis(200);
    let mut last_err: Option<String> = None;

    for attempt in 1..=max_attempts {
        match reqwest::get(&url).await {
            Ok(response) if response.status().is_success() => {
                tracing::info!(attempt = attempt, url = %url, "Profiler container is healthy");
                return Ok(());
            }
            Ok(response) => {
                last_err = Some(format!("unexpected status {}", response.status()));
            }
            Err(e) => {
                last_err = Some(e.to_string());
            }
        }

        tracing::debug!(
            attempt = attempt,
            delay_ms = delay.as_millis(),
            error = last_err.as_deref().unwrap_or("unknown"),
            "Retrying health check"
        );

        sleep(delay).await;
        delay = std::cmp::min(delay.saturating_mul(2), max_delay);
    }

    Err(format!(
        "Profiler container at {base_url} not healthy after {max_attempts} attempts: {:?}",
        last_err
    )
    .into())
}
