use serde::{Deserialize, Serialize};
use serde_with::{serde_as, NoneAsEmptyString};

pub const VENUE_NAME_FALLBACK: &str = "Venue Name Unavailable";

/// A single venue as returned by `GET /venues/{id}/`.
///
/// Blank text columns come back as `""` and are treated the same as missing.
#[serde_as]
#[derive(Clone, Serialize, Deserialize, Debug, Default, PartialEq)]
pub struct VenueDetail {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub name: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub rating_text: Option<String>,
    #[serde(default)]
    pub rating_stars: Option<f64>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub date_text: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub venue_icon1: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub venue_icon2: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub detail_image_url1: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub detail_image_url2: Option<String>,
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub detail_description: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl VenueDetail {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(VENUE_NAME_FALLBACK)
    }

    /// Both coordinates, or `None` when either one is missing.
    pub fn coordinates(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some(Coordinates { lat, lng }),
            _ => None,
        }
    }

    pub fn tags(&self) -> Option<String> {
        let tags = [&self.venue_icon1, &self.venue_icon2]
            .into_iter()
            .filter_map(|icon| icon.as_deref())
            .map(str::trim)
            .filter(|icon| !icon.is_empty())
            .collect::<Vec<&str>>();

        if tags.is_empty() {
            None
        } else {
            Some(tags.join(" "))
        }
    }
}
