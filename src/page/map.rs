//! Map region of the detail view.
//!
//! [`MapLibrary`] is the seam to the mapping library: it turns a [`MapView`]
//! into the markup that brings the map up. [`LeafletMap`] emits a container
//! plus a Leaflet bootstrap script that runs in the browser.

use std::time::Duration;
use tracing::{info, warn};
use crate::dom::Element;
use crate::error::MapRenderError;
use crate::models::venue::{Coordinates, VenueDetail};

pub const MAP_REGION_ID: &str = "map-section-wrapper";
pub const MAP_ELEMENT_ID: &str = "venue-map-embedded";
pub const DEFAULT_ZOOM: u8 = 13;
pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";
pub const TILE_MAX_ZOOM: u8 = 19;
/// Leaflet measures its container at creation; if layout was not final yet
/// the tiles render into a zero sized box until the size is recomputed.
pub const INVALIDATE_SIZE_AFTER: Duration = Duration::from_millis(150);
pub const NO_MAP_MESSAGE: &str = "Map information is not available for this venue.";
pub const MAP_ERROR_PREFIX: &str = "Error loading map: ";

#[derive(Clone, Debug, PartialEq)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
    pub max_zoom: u8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    pub position: Coordinates,
    pub popup_html: String,
    pub open_popup: bool,
}

/// Everything needed to bring up the venue map.
#[derive(Clone, Debug, PartialEq)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub tile_layer: TileLayer,
    pub markers: Vec<Marker>,
    pub invalidate_size_after: Duration,
}

impl MapView {
    /// Centered on the venue with a single, open marker naming it.
    pub fn for_venue(center: Coordinates, name: &str) -> Self {
        Self {
            center,
            zoom: DEFAULT_ZOOM,
            tile_layer: TileLayer {
                url_template: TILE_URL_TEMPLATE.to_string(),
                attribution: TILE_ATTRIBUTION.to_string(),
                max_zoom: TILE_MAX_ZOOM,
            },
            markers: vec![Marker {
                position: center,
                popup_html: format!("<b>{}</b>", quick_xml::escape::escape(name)),
                open_popup: true,
            }],
            invalidate_size_after: INVALIDATE_SIZE_AFTER,
        }
    }
}

pub trait MapLibrary: Send + Sync {
    /// Markup that creates the map inside an element with id `element_id`.
    fn create_map(
        &self,
        element_id: &str,
        view: &MapView,
    ) -> Result<Element, MapRenderError>;
}

#[derive(Clone, Debug, Default)]
pub struct LeafletMap;

impl MapLibrary for LeafletMap {
    fn create_map(
        &self,
        element_id: &str,
        view: &MapView,
    ) -> Result<Element, MapRenderError> {
        validate(view.center)?;
        for marker in &view.markers {
            validate(marker.position)?;
        }

        let script = leaflet_bootstrap(element_id, view)?;
        Ok(Element::new("div")
            .with_class("venue-map")
            .with_child(Element::new("div").with_id(element_id))
            .with_child(Element::new("script").with_script(script)))
    }
}

fn validate(position: Coordinates) -> Result<(), MapRenderError> {
    let in_range = position.lat.is_finite()
        && position.lng.is_finite()
        && (-90.0..=90.0).contains(&position.lat)
        && (-180.0..=180.0).contains(&position.lng);

    if in_range {
        Ok(())
    } else {
        Err(MapRenderError::InvalidCoordinates {
            latitude: position.lat,
            longitude: position.lng,
        })
    }
}

/// JSON string literal that is also safe inside a `<script>` element.
fn js_string(value: &str) -> Result<String, MapRenderError> {
    let literal = serde_json::to_string(value)
        .map_err(|e| MapRenderError::Library(e.to_string()))?;
    Ok(literal.replace("</", "<\\/"))
}

fn leaflet_bootstrap(
    element_id: &str,
    view: &MapView,
) -> Result<String, MapRenderError> {
    let mut markers = String::new();
    for marker in &view.markers {
        markers.push_str(&format!(
            "    L.marker([{}, {}]).addTo(map).bindPopup({}){};\n",
            marker.position.lat,
            marker.position.lng,
            js_string(&marker.popup_html)?,
            if marker.open_popup { ".openPopup()" } else { "" },
        ));
    }

    Ok(format!(
        "(function () {{\n\
         \x20 var container = document.getElementById({element_id});\n\
         \x20 try {{\n\
         \x20   var map = L.map(container).setView([{lat}, {lng}], {zoom});\n\
         \x20   L.tileLayer({tiles}, {{ attribution: {attribution}, maxZoom: {max_zoom} }}).addTo(map);\n\
         {markers}\
         \x20   setTimeout(function () {{ map.invalidateSize(); }}, {delay});\n\
         \x20 }} catch (err) {{\n\
         \x20   var message = document.createElement(\"p\");\n\
         \x20   message.className = \"error-message\";\n\
         \x20   message.textContent = {prefix} + (err && err.message ? err.message : err);\n\
         \x20   container.replaceChildren(message);\n\
         \x20 }}\n\
         }})();",
        element_id = js_string(element_id)?,
        lat = view.center.lat,
        lng = view.center.lng,
        zoom = view.zoom,
        tiles = js_string(&view.tile_layer.url_template)?,
        attribution = js_string(&view.tile_layer.attribution)?,
        max_zoom = view.tile_layer.max_zoom,
        markers = markers,
        delay = view.invalidate_size_after.as_millis(),
        prefix = js_string(MAP_ERROR_PREFIX)?,
    ))
}

/// The map region: a map when both coordinates exist, a placeholder when
/// they don't, and an inline error when the library fails.
pub fn render_map_region(
    venue: &VenueDetail,
    map_library: &dyn MapLibrary,
) -> Element {
    let region = Element::new("div").with_id(MAP_REGION_ID);

    let Some(center) = venue.coordinates() else {
        info!("Venue coordinates missing, showing map placeholder");
        return region.with_child(
            Element::new("p")
                .with_class("no-map-message")
                .with_text(NO_MAP_MESSAGE),
        );
    };

    let view = MapView::for_venue(center, venue.display_name());
    match map_library.create_map(MAP_ELEMENT_ID, &view) {
        Ok(map) => region.with_child(map),
        Err(e) => {
            warn!("Failed to initialize the venue map due to: {}", e);
            region.with_child(
                Element::new("p")
                    .with_class("error-message")
                    .with_text(format!("{}{}", MAP_ERROR_PREFIX, e)),
            )
        }
    }
}
