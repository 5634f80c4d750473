use crate::dom::Element;
use crate::models::venue::VenueDetail;
use crate::page::map::{render_map_region, MapLibrary};
use crate::page::stars::rating_line;

/// Replaces the container's content with the venue's detail view.
pub fn render_venue(
    container: &mut Element,
    venue: &VenueDetail,
    map_library: &dyn MapLibrary,
) {
    container.clear();

    let name = venue.display_name();
    container.append(
        Element::new("h2")
            .with_class("venue-name")
            .with_text(name),
    );

    if let Some(images) = venue_images(venue, name) {
        container.append(images);
    }

    container.append(venue_info(venue));
    container.append(render_map_region(venue, map_library));
}

/// Replaces everything in the container with a single error block.
pub fn display_error(container: &mut Element, message: &str) {
    container.clear();
    container.append(
        Element::new("div")
            .with_class("error-message")
            .with_text(format!("Error: {}", message)),
    );
}

fn venue_images(venue: &VenueDetail, name: &str) -> Option<Element> {
    let mut images = Element::new("div").with_class("venue-images");
    let mut has_image = false;

    if let Some(src) = &venue.image_url {
        images.append(
            Element::new("img")
                .with_id("venue-photo")
                .with_attr("src", src.as_str())
                .with_attr("alt", format!("Photo of {}", name)),
        );
        has_image = true;
    }

    for (index, src) in [&venue.detail_image_url1, &venue.detail_image_url2]
        .into_iter()
        .flatten()
        .enumerate()
    {
        images.append(
            Element::new("img")
                .with_class("venue-detail-photo")
                .with_attr("src", src.as_str())
                .with_attr("alt", format!("Photo of {} ({})", name, index + 1)),
        );
        has_image = true;
    }

    has_image.then_some(images)
}

fn venue_info(venue: &VenueDetail) -> Element {
    let mut info = Element::new("div").with_class("venue-info");

    if let Some(description) = &venue.rating_text {
        info.append(
            Element::new("p")
                .with_class("venue-description")
                .with_text(description.as_str()),
        );
    }
    if let Some(stars) = rating_line(venue.rating_stars) {
        info.append(
            Element::new("p")
                .with_class("rating-stars")
                .with_text(stars),
        );
    }
    if let Some(dates) = &venue.date_text {
        info.append(
            Element::new("p")
                .with_class("venue-dates")
                .with_text(dates.as_str()),
        );
    }
    if let Some(tags) = venue.tags() {
        info.append(
            Element::new("p")
                .with_class("venue-tags")
                .with_text(tags),
        );
    }
    if let Some(details) = &venue.detail_description {
        info.append(
            Element::new("p")
                .with_class("venue-detail-description")
                .with_text(details.as_str()),
        );
    }

    info
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::venue::VENUE_NAME_FALLBACK;
    use crate::page::map::{LeafletMap, MAP_REGION_ID, NO_MAP_MESSAGE};

    fn container() -> Element {
        Element::new("div").with_id("venue-detail-content")
    }

    fn tags_of(container: &Element) -> Vec<String> {
        container
            .child_elements()
            .map(|e| e.tag().to_string())
            .collect()
    }

    #[test]
    fn renders_sections_in_order() {
        let venue = VenueDetail {
            name: Some("The Loft".to_string()),
            image_url: Some("https://cdn.example.com/loft.jpg".to_string()),
            rating_text: Some("Cozy rooftop bar".to_string()),
            rating_stars: Some(4.0),
            date_text: Some("APRIL 5-6".to_string()),
            venue_icon1: Some("🎸".to_string()),
            venue_icon2: Some("🍺".to_string()),
            ..VenueDetail::default()
        };
        let mut container = container();
        render_venue(&mut container, &venue, &LeafletMap);

        assert_eq!(tags_of(&container), vec!["h2", "div", "div", "div"]);
        let info = container.find_by_class("venue-info").expect("info block");
        let lines = info
            .child_elements()
            .map(Element::text_content)
            .collect::<Vec<String>>();
        assert_eq!(
            lines,
            vec!["Cozy rooftop bar", "★★★★☆ (4/5)", "APRIL 5-6", "🎸 🍺"]
        );

        let photo = container.find_by_id("venue-photo").expect("photo");
        assert_eq!(photo.attr("alt"), Some("Photo of The Loft"));
        assert_eq!(
            container.find_by_id(MAP_REGION_ID).map(Element::text_content),
            Some(NO_MAP_MESSAGE.to_string())
        );
    }

    #[test]
    fn heading_falls_back_and_optional_parts_are_skipped() {
        let mut container = container();
        render_venue(&mut container, &VenueDetail::default(), &LeafletMap);

        assert_eq!(tags_of(&container), vec!["h2", "div", "div"]);
        assert_eq!(
            container.find_by_class("venue-name").map(Element::text_content),
            Some(VENUE_NAME_FALLBACK.to_string())
        );
        assert!(container.find_by_class("venue-images").is_none());
        let info = container.find_by_class("venue-info").expect("info block");
        assert_eq!(info.child_elements().count(), 0);
    }

    #[test]
    fn detail_images_and_description_are_included_when_present() {
        let venue = VenueDetail {
            name: Some("Dock".to_string()),
            detail_image_url2: Some("https://cdn.example.com/dock-2.jpg".to_string()),
            detail_description: Some("Open late.".to_string()),
            ..VenueDetail::default()
        };
        let mut container = container();
        render_venue(&mut container, &venue, &LeafletMap);

        let images = container.find_by_class("venue-images").expect("images");
        assert_eq!(images.child_elements().count(), 1);
        assert!(container.find_by_id("venue-photo").is_none());
        assert_eq!(
            container
                .find_by_class("venue-detail-description")
                .map(Element::text_content),
            Some("Open late.".to_string())
        );
    }

    #[test]
    fn render_clears_previous_content() {
        let mut container = container();
        display_error(&mut container, "stale");
        render_venue(&mut container, &VenueDetail::default(), &LeafletMap);
        assert!(container.find_by_class("error-message").is_none());
    }

    #[test]
    fn display_error_replaces_everything_with_one_block() {
        let mut container = container();
        render_venue(&mut container, &VenueDetail::default(), &LeafletMap);
        display_error(&mut container, "Venue with ID 42 not found.");

        assert_eq!(container.child_elements().count(), 1);
        let block = container.child_elements().next().expect("error block");
        assert!(block.has_class("error-message"));
        assert_eq!(block.text_content(), "Error: Venue with ID 42 not found.");
    }
}
