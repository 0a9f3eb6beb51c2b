//! Shared HTTP client construction for consistent timeout and TLS configuration.

use std::time::Duration;

/// Create the shared HTTP client: 30s connect timeout, 60s request timeout,
/// rustls TLS, `planwright/{version}` user-agent.
#[must_use]
pub fn default_client() -> reqwest::Client {
    reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(30))
        .timeout(Duration::from_secs(60))
        .user_agent(concat!("planwright/", env!("CARGO_PKG_VERSION")))
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .expect("default HTTP client construction must not fail")
}
