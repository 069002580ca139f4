// Module containing the response data structure for solar events
mod response;

pub use response::SunInfo;

use std::io::{self, Write};

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use tabular::{Table, row};
use tracing::{debug, info, warn};

use crate::{
    config::Config,
    datetime::{Zone, format_clock},
    error::AppError,
    session::SessionProvider,
};

// Resource path, relative to the API base URL
const SUN_INFO_PATH: &str = "locations/{id}/suninfo";

const TABLE_HEADER: [&str; 4] = ["Event Type", "Timestamp", "Local Time", "UTC"];

/// Runs the `suninfo` command: loads the session, fetches the solar events of
/// the first saved location and writes them to `out` as a table.
///
/// Any failure along the way is written to `out` as a single diagnostic line
/// instead of the table. Only errors writing to `out` itself are returned.
pub async fn handle_suninfo_command<W: Write>(
    sessions: &impl SessionProvider,
    client: &reqwest::Client,
    config: &Config,
    out: &mut W,
) -> io::Result<()> {
    match fetch_for_session(sessions, client, config).await {
        Ok(sun_info) => write!(out, "{}", render_table(&sun_info)),
        Err(err) => {
            warn!("suninfo command failed: {:?}", err);
            writeln!(out, "{err}")
        }
    }
}

async fn fetch_for_session(
    sessions: &impl SessionProvider,
    client: &reqwest::Client,
    config: &Config,
) -> Result<SunInfo, AppError> {
    let session = sessions.load()?;
    let location = session.primary_location()?;

    info!(
        "Fetching sun info for location: {}",
        location.name.as_deref().unwrap_or(&location.id)
    );

    fetch_sun_info(client, config, &session.access_token, &location.id).await
}

/// Fetches the solar events of one location.
///
/// # Arguments
/// * `access_token` - Bearer token of the current session
/// * `location_id` - Identifier of a saved location, substituted as-is into the path
pub async fn fetch_sun_info(
    client: &reqwest::Client,
    config: &Config,
    access_token: &str,
    location_id: &str,
) -> Result<SunInfo, AppError> {
    let url = config.api_endpoint(&SUN_INFO_PATH.replace("{id}", location_id));
    debug!("GET {}", url);

    let request = client
        .get(&url)
        .bearer_auth(access_token)
        .header(ACCEPT, "application/json")
        .header(CONTENT_TYPE, "application/json")
        .build()
        .map_err(AppError::RequestConstruction)?;

    let response = client
        .execute(request)
        .await
        .map_err(AppError::Transport)?;

    // The body is decoded whatever the status; error payloads that are JSON
    // objects render as an all-zero table.
    if !response.status().is_success() {
        warn!("Sun info request answered with {}", response.status());
    }

    let body = response.bytes().await.map_err(AppError::ResponseRead)?;
    let sun_info = SunInfo::from_json(&body)?;

    debug!("Sun info fetched successfully: {:?}", sun_info);
    Ok(sun_info)
}

/// Lays out one row per solar event: name, raw timestamp, local and UTC clock.
pub fn render_table(sun_info: &SunInfo) -> Table {
    let mut table = Table::new("{:<}  {:>}  {:<}  {:<}");

    let [event, timestamp, local, utc] = TABLE_HEADER;
    table.add_row(row!(event, timestamp, local, utc));

    for (name, timestamp) in sun_info.events() {
        table.add_row(row!(
            name,
            timestamp,
            format_clock(timestamp, Zone::Local),
            format_clock(timestamp, Zone::Utc)
        ));
    }

    table
}
