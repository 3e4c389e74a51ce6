use std::time::Duration;

use crate::client::Client;

pub const DEFAULT_MANAGEMENT_URL: &str = "https://api.geoengine.dev";
pub const DEFAULT_INGEST_URL: &str = "http://ingest.geoengine.dev";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const USER_AGENT: &str = concat!("geoengine-rs/", env!("CARGO_PKG_VERSION"));

/// Settings shared by every request issued by a [`Client`].
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub ingest_url: String,
    pub management_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ingest_url: DEFAULT_INGEST_URL.to_string(),
            management_url: DEFAULT_MANAGEMENT_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

// The key is a credential, keep it out of logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("ingest_url", &self.ingest_url)
            .field("management_url", &self.management_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Applies overrides on top of the defaults. Later calls replace earlier ones.
///
/// Values are not validated; a malformed URL is reported when a request is built.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    config: Config,
}

impl ClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            config: Config::new(api_key),
        }
    }

    pub fn ingest_url(mut self, url: impl Into<String>) -> Self {
        self.config.ingest_url = url.into();
        self
    }

    pub fn management_url(mut self, url: impl Into<String>) -> Self {
        self.config.management_url = url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn build(self) -> Client {
        Client::from_config(self.config)
    }
}
