//! Shared utilities for puzzle providers.

/// User-Agent string for HTTP requests.
pub const USER_AGENT: &str = concat!("crossnorm/", env!("CARGO_PKG_VERSION"));

/// Create a configured reqwest client with standard headers.
pub fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_default()
}
