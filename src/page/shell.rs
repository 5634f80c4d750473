use crate::dom::Element;

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
pub const HEADER_ID: &str = "venue-name-header";

/// Wraps the settled container in a full HTML document.
pub fn html_document(header: &str, container: &Element) -> String {
    let head = Element::new("head")
        .with_child(Element::new("meta").with_attr("charset", "utf-8"))
        .with_child(
            Element::new("meta")
                .with_attr("name", "viewport")
                .with_attr("content", "width=device-width, initial-scale=1"),
        )
        .with_child(Element::new("title").with_text(header))
        .with_child(
            Element::new("link")
                .with_attr("rel", "stylesheet")
                .with_attr("href", LEAFLET_CSS),
        )
        .with_child(Element::new("script").with_attr("src", LEAFLET_JS));

    let body = Element::new("body")
        .with_child(Element::new("h1").with_id(HEADER_ID).with_text(header))
        .with_child(container.clone());

    let html = Element::new("html")
        .with_attr("lang", "en")
        .with_child(head)
        .with_child(body);

    format!("<!DOCTYPE html>\n{}", html.to_html())
}
