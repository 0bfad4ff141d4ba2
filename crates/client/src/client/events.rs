//! Event methods for [`ClouderaManagerClient`].

use crate::client::ClouderaManagerClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{Event, EventQuery, EventQueryResult};

impl ClouderaManagerClient {
    /// Query events, e.g. `EventQuery::new().query("alert==true").max_results(20)`.
    pub async fn query_events(&self, query: &EventQuery) -> Result<EventQueryResult> {
        endpoints::query_events(&self.http, &self.api_root, &self.credentials, query).await
    }

    /// Fetch one event by its UUID.
    pub async fn get_event(&self, event_id: &str) -> Result<Event> {
        endpoints::get_event(&self.http, &self.api_root, &self.credentials, event_id).await
    }
}
