//! The venue detail page: fetch once, then settle into the detail view or an
//! error message.

pub mod map;
pub mod render;
pub mod shell;
pub mod stars;

use tracing::{info, warn};
use crate::dom::Element;
use crate::error::VenueError;
use crate::models::venue::VenueDetail;
use crate::page::map::MapLibrary;
use crate::repositories::venue_api_repo::VenueApiRepo;

pub const CONTAINER_ID: &str = "venue-detail-content";
pub const LOADING_MESSAGE: &str = "Loading venue details...";
const HEADER_FALLBACK: &str = "Venue Details";
const ERROR_HEADER: &str = "Error";

#[derive(Clone, Debug, PartialEq)]
pub enum PageState {
    Loading,
    Displayed(VenueDetail),
    Errored(VenueError),
}

pub struct VenueDetailPage {
    container: Element,
    header: String,
    state: PageState,
}

impl Default for VenueDetailPage {
    fn default() -> Self {
        Self::new()
    }
}

impl VenueDetailPage {
    pub fn new() -> Self {
        let container = Element::new("div").with_id(CONTAINER_ID).with_child(
            Element::new("div")
                .with_class("loading")
                .with_text(LOADING_MESSAGE),
        );

        Self {
            container,
            header: HEADER_FALLBACK.to_string(),
            state: PageState::Loading,
        }
    }

    /// Runs the page once: a missing identifier fails without touching the
    /// network, otherwise the venue is fetched and rendered.
    pub async fn load(
        &mut self,
        venue_api: &VenueApiRepo,
        map_library: &dyn MapLibrary,
        venue_id: Option<&str>,
    ) {
        if self.state != PageState::Loading {
            warn!("Venue detail page already settled, ignoring reload");
            return;
        }

        let Some(venue_id) = venue_id.map(str::trim).filter(|id| !id.is_empty()) else {
            self.display_error(VenueError::MissingIdentifier);
            return;
        };

        match venue_api.fetch_venue(venue_id).await {
            Ok(venue) => self.display_venue(venue, map_library),
            Err(e) => self.display_error(e),
        }
    }

    pub fn display_venue(
        &mut self,
        venue: VenueDetail,
        map_library: &dyn MapLibrary,
    ) {
        if self.state != PageState::Loading {
            warn!("Venue detail page already settled, not rendering venue");
            return;
        }

        info!("Rendering venue: {}", venue.display_name());
        render::render_venue(&mut self.container, &venue, map_library);
        self.header = venue
            .name
            .clone()
            .unwrap_or_else(|| HEADER_FALLBACK.to_string());
        self.state = PageState::Displayed(venue);
    }

    pub fn display_error(&mut self, error: VenueError) {
        if self.state != PageState::Loading {
            warn!("Venue detail page already settled, not showing error: {}", error);
            return;
        }

        warn!("Displaying venue error: {}", error);
        render::display_error(&mut self.container, &error.to_string());
        self.header = ERROR_HEADER.to_string();
        self.state = PageState::Errored(error);
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn to_html(&self) -> String {
        shell::html_document(&self.header, &self.container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::map::LeafletMap;

    #[test]
    fn starts_loading_with_indicator() {
        let page = VenueDetailPage::new();
        assert_eq!(page.state(), &PageState::Loading);
        assert_eq!(page.container().text_content(), LOADING_MESSAGE);
        assert_eq!(page.container().id(), Some(CONTAINER_ID));
    }

    #[test]
    fn displayed_venue_sets_header() {
        let mut page = VenueDetailPage::new();
        let venue = VenueDetail {
            name: Some("The Loft".to_string()),
            ..VenueDetail::default()
        };
        page.display_venue(venue.clone(), &LeafletMap);

        assert_eq!(page.state(), &PageState::Displayed(venue));
        assert_eq!(page.header(), "The Loft");
        assert!(!page.container().text_content().contains(LOADING_MESSAGE));
    }

    #[test]
    fn error_is_terminal() {
        let mut page = VenueDetailPage::new();
        page.display_error(VenueError::MissingIdentifier);
        page.display_venue(VenueDetail::default(), &LeafletMap);

        assert_eq!(page.state(), &PageState::Errored(VenueError::MissingIdentifier));
        assert_eq!(page.header(), ERROR_HEADER);
        assert_eq!(
            page.container().text_content(),
            "Error: No Venue ID provided in the URL."
        );
    }

    #[test]
    fn displayed_page_ignores_later_errors() {
        let mut page = VenueDetailPage::new();
        page.display_venue(VenueDetail::default(), &LeafletMap);
        page.display_error(VenueError::network("late failure"));

        assert!(matches!(page.state(), PageState::Displayed(_)));
        assert!(page.container().find_by_class("error-message").is_none());
    }
}
