//! Shared configuration for the gateway's outgoing HTTP clients.

use {
    crate::arguments::Arguments,
    reqwest::{Client, ClientBuilder},
    std::time::Duration,
};

const USER_AGENT: &str = "cloudsave-validation-gateway/1.0.0";

/// An HTTP client factory.
///
/// This ensures a common configuration for all HTTP clients used in various
/// places, while allowing for separate connection pools across different
/// remote endpoints.
#[derive(Clone, Debug)]
pub struct HttpClientFactory {
    timeout: Duration,
}

impl HttpClientFactory {
    pub fn new(args: &Arguments) -> Self {
        Self {
            timeout: args.http_timeout,
        }
    }

    /// Creates a new HTTP client with the default settings.
    pub fn create(&self) -> Client {
        self.builder().build().unwrap()
    }

    /// Returns a `ClientBuilder` with the default settings.
    pub fn builder(&self) -> ClientBuilder {
        ClientBuilder::new()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
    }
}

impl Default for HttpClientFactory {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}
