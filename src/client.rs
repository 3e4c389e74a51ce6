use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::header::{HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, Url};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::config::{self, ClientBuilder, Config};
use crate::error::{Error, Result, ValidationError};
use crate::polygon::polygon_from_lat_lng;
use crate::types::{GeofencePayload, LocationPayload};

const API_KEY_HEADER: &str = "x-api-key";

/// Client for the ingestion and management endpoints.
///
/// Every operation issues exactly one request and never retries. The client holds no
/// mutable state and can be cloned and shared between tasks.
#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
    http: reqwest::Client,
}

impl Client {
    /// Client with the default endpoints and timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::from_config(Config::new(api_key))
    }

    pub fn builder(api_key: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(api_key)
    }

    pub(crate) fn from_config(config: Config) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Submits a location reading for `device_id`, stamped with the current time.
    ///
    /// Latitude and longitude are sent as given, without range checks.
    pub async fn send_location(&self, device_id: &str, latitude: f64, longitude: f64) -> Result<()> {
        let payload = location_payload(device_id, latitude, longitude)?;
        let url = format!("{}/ingest", self.config.ingest_url);
        self.do_request(Method::POST, &url, &payload).await
    }

    /// Registers a geofence from `[lat, lng]` pairs.
    ///
    /// The pairs are sent in GeoJSON `[lng, lat]` order as a closed, single ring polygon.
    /// `webhook_url` is forwarded untouched.
    pub async fn create_geofence<C>(
        &self,
        name: &str,
        coordinates: &[C],
        webhook_url: &str,
    ) -> Result<()>
    where
        C: AsRef<[f64]>,
    {
        let payload = GeofencePayload {
            name: name.to_string(),
            webhook_url: webhook_url.to_string(),
            geojson: polygon_from_lat_lng(coordinates)?,
        };
        let url = format!("{}/geofences", self.config.management_url);
        self.do_request(Method::POST, &url, &payload).await
    }

    #[instrument(level = "debug", skip_all, fields(method = %method, url = %url), err(level = "debug"))]
    pub(crate) async fn do_request<T>(&self, method: Method, url: &str, payload: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(payload)?;

        let url = Url::parse(url).map_err(|e| Error::Request(format!("invalid url {url}: {e}")))?;
        let api_key = HeaderValue::from_str(&self.config.api_key)
            .map_err(|e| Error::Request(format!("invalid api key header: {e}")))?;

        let request = self
            .http
            .request(method, url)
            .timeout(self.config.timeout)
            .header(CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, api_key)
            .header(USER_AGENT, config::USER_AGENT)
            .body(body)
            .build()
            .map_err(|e| Error::Request(e.to_string()))?;

        // the response body is never read, it is released here on every path
        let status = self
            .http
            .execute(request)
            .await
            .map_err(Error::Network)?
            .status();
        debug!(status = status.as_u16(), "server replied");

        if status.as_u16() >= 400 {
            return Err(Error::Api {
                status: status.as_u16(),
            });
        }

        Ok(())
    }
}

fn location_payload(
    device_id: &str,
    latitude: f64,
    longitude: f64,
) -> std::result::Result<LocationPayload, ValidationError> {
    if device_id.is_empty() {
        return Err(ValidationError::MissingDeviceId);
    }

    Ok(LocationPayload {
        device_id: device_id.to_string(),
        latitude,
        longitude,
        timestamp: unix_timestamp(),
    })
}

fn unix_timestamp() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs() as i64)
        // clock set before 1970
        .unwrap_or_default()
}
