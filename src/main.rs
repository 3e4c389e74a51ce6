use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use geoengine::{config, Client};

fn parse_duration(s: &str) -> Result<Duration, std::num::ParseIntError> {
    let millis: u64 = s.parse()?;
    Ok(Duration::from_millis(millis))
}

/// A `lat,lng` argument. The number of components is checked by the client.
#[derive(Debug, Clone, PartialEq)]
struct Point(Vec<f64>);

impl AsRef<[f64]> for Point {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

fn parse_point(s: &str) -> Result<Point, String> {
    s.split(',')
        .map(|component| {
            component
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid coordinate component '{component}': {e}"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Point)
}

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// API key sent with every request
    #[arg(env = "GEOENGINE_API_KEY", long = "api-key", value_name = "key", hide_env_values = true)]
    api_key: String,

    /// Base URL of the ingestion endpoint
    #[arg(
        env = "GEOENGINE_INGEST_URL",
        long = "ingest-url",
        value_name = "url",
        default_value = config::DEFAULT_INGEST_URL
    )]
    ingest_url: String,

    /// Base URL of the management endpoint
    #[arg(
        env = "GEOENGINE_MANAGEMENT_URL",
        long = "management-url",
        value_name = "url",
        default_value = config::DEFAULT_MANAGEMENT_URL
    )]
    management_url: String,

    /// Request timeout in milliseconds
    #[arg(
        env = "GEOENGINE_TIMEOUT_MS",
        long = "timeout-ms",
        value_name = "ms",
        value_parser = parse_duration
    )]
    timeout: Option<Duration>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Submit the current location of a device
    SendLocation {
        #[arg(long = "device-id")]
        device_id: String,

        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },

    /// Register a polygon geofence from `lat,lng` points
    CreateGeofence {
        #[arg(long)]
        name: String,

        /// URL notified when a device crosses the geofence
        #[arg(long = "webhook-url", default_value = "")]
        webhook_url: String,

        /// Polygon vertex as `lat,lng`, repeat for each point
        #[arg(
            long = "point",
            value_name = "lat,lng",
            value_parser = parse_point,
            allow_hyphen_values = true,
            required = true
        )]
        points: Vec<Point>,
    },
}

fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .event_format(fmt::format().compact().with_target(false)),
        )
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    initialize_tracing();

    let cli = Cli::parse();

    let mut builder = Client::builder(cli.api_key)
        .ingest_url(cli.ingest_url)
        .management_url(cli.management_url);
    if let Some(timeout) = cli.timeout {
        builder = builder.timeout(timeout);
    }
    let client = builder.build();

    let res = match &cli.command {
        Command::SendLocation {
            device_id,
            lat,
            lng,
        } => client.send_location(device_id, *lat, *lng).await.map(|_| {
            info!(device_id = %device_id, lat = *lat, lng = *lng, "location sent");
        }),
        Command::CreateGeofence {
            name,
            webhook_url,
            points,
        } => client
            .create_geofence(name, points, webhook_url)
            .await
            .map(|_| {
                info!(name = %name, points = points.len(), "geofence created");
            }),
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
