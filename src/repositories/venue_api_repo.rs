use std::time::Duration;
use anyhow::{anyhow, Context};
use reqwest::{Client, StatusCode, Url};
use tracing::{info, warn};
use crate::error::VenueError;
use crate::models::venue::VenueDetail;

/// Read-only access to the venue REST API.
pub struct VenueApiRepo {
    client: Client,
    api_base: Url,
}

impl VenueApiRepo {
    pub fn new(
        api_base_url: &str,
        request_timeout_secs: u64,
    ) -> anyhow::Result<Self> {
        let api_base = Url::parse(api_base_url)
            .with_context(|| format!("Invalid venue API base url: {}", api_base_url))?;
        if api_base.cannot_be_a_base() {
            return Err(anyhow!("Venue API base url cannot carry a path: {}", api_base_url));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(request_timeout_secs))
            .build()
            .context("Failed to build the venue API http client")?;

        Ok(Self {
            client,
            api_base,
        })
    }

    /// `{api_base}/venues/{id}/`, with `id` encoded as one path segment.
    pub fn venue_url(&self, venue_id: &str) -> Url {
        let mut url = self.api_base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["venues", venue_id, ""]);
        }
        url
    }

    pub async fn fetch_venue(
        &self,
        venue_id: &str,
    ) -> Result<VenueDetail, VenueError> {
        // `.` and `..` would be normalized away, leaving the list endpoint
        if is_dot_segment(venue_id) {
            warn!("Refusing dot segment venue id: {}", venue_id);
            return Err(VenueError::NotFound {
                id: venue_id.to_string(),
            });
        }

        let url = self.venue_url(venue_id);
        info!("Fetching venue details from: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to reach the venue API for venue {} due to: {}", venue_id, e);
                VenueError::network(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Venue API answered {} for venue {}", status, venue_id);
            return Err(classify_status(status, venue_id));
        }

        response
            .json::<VenueDetail>()
            .await
            .map_err(|e| {
                warn!("Failed to parse venue {} due to: {}", venue_id, e);
                VenueError::network(e)
            })
    }
}

fn is_dot_segment(venue_id: &str) -> bool {
    matches!(venue_id, "." | "..")
}

fn classify_status(status: StatusCode, venue_id: &str) -> VenueError {
    if status == StatusCode::NOT_FOUND {
        VenueError::NotFound {
            id: venue_id.to_string(),
        }
    } else {
        VenueError::HttpError {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
        }
    }
}
