//! Client SDK for the GeoEngine service.
//!
//! [`Client::send_location`] submits device location pings to the ingestion endpoint and
//! [`Client::create_geofence`] registers polygon geofences with the management endpoint.
//!
//! ```rust,no_run
//! # async fn run() -> geoengine::Result<()> {
//! use std::time::Duration;
//!
//! let client = geoengine::Client::builder("my-api-key")
//!     .timeout(Duration::from_secs(5))
//!     .build();
//!
//! client.send_location("truck-7", -33.45, -70.66).await?;
//! client
//!     .create_geofence(
//!         "depot",
//!         &[[-33.40, -70.60], [-33.41, -70.61], [-33.42, -70.59]],
//!         "https://hooks.example.com/depot",
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod polygon;
pub mod types;

pub use client::Client;
pub use config::{ClientBuilder, Config};
pub use error::{Error, Result, ValidationError};
pub use polygon::polygon_from_lat_lng;
pub use types::{GeofencePayload, Geometry, LocationPayload, Ring};
