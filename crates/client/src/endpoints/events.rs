//! Event endpoints (`/events`).

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::{endpoint_url, read_json, send_request};
use crate::error::Result;
use crate::models::{Event, EventQuery, EventQueryResult};

/// Query events; unset fields of `query` are left to server defaults.
pub async fn query_events(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    query: &EventQuery,
) -> Result<EventQueryResult> {
    let url = endpoint_url(api_root, &["events"]);
    let response = send_request(client.get(&url).query(query), credentials).await?;
    read_json(response).await
}

/// Fetch one event by its UUID.
pub async fn get_event(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    event_id: &str,
) -> Result<Event> {
    let url = endpoint_url(api_root, &["events", event_id]);
    let response = send_request(client.get(&url), credentials).await?;
    read_json(response).await
}
