use std::sync::Arc;
use axum::{Extension, Router};
use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use crate::controller::AppState;
use crate::error::VenueError;
use crate::page::map::MapLibrary;
use crate::page::{PageState, VenueDetailPage};
use crate::repositories::venue_api_repo::VenueApiRepo;

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/venue-detail", get(retrieve_venue_detail))
        .route("/venue/:venue_id", get(retrieve_venue_detail_by_path))
        .route("/venue/:venue_id/", get(retrieve_venue_detail_by_path))
        .route_layer(Extension(app_state.venue_api))
        .route_layer(Extension(app_state.map_library))
}

pub async fn retrieve_venue_detail(
    Extension(venue_api): Extension<Arc<VenueApiRepo>>,
    Extension(map_library): Extension<Arc<dyn MapLibrary>>,
    Query(query): Query<Vec<(String, String)>>,
) -> impl IntoResponse {
    render_venue_detail_page(
        &venue_api,
        map_library.as_ref(),
        first_venue_id(&query),
    ).await
}

pub async fn retrieve_venue_detail_by_path(
    Extension(venue_api): Extension<Arc<VenueApiRepo>>,
    Extension(map_library): Extension<Arc<dyn MapLibrary>>,
    Path(venue_id): Path<String>,
) -> impl IntoResponse {
    render_venue_detail_page(
        &venue_api,
        map_library.as_ref(),
        Some(venue_id.as_str()),
    ).await
}

async fn render_venue_detail_page(
    venue_api: &VenueApiRepo,
    map_library: &dyn MapLibrary,
    venue_id: Option<&str>,
) -> (StatusCode, Html<String>) {
    let mut page = VenueDetailPage::new();
    page.load(venue_api, map_library, venue_id).await;

    (page_status(page.state()), Html(page.to_html()))
}

/// First `id` pair wins when the parameter is repeated.
fn first_venue_id(query: &[(String, String)]) -> Option<&str> {
    query
        .iter()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.as_str())
}

fn page_status(state: &PageState) -> StatusCode {
    match state {
        PageState::Loading | PageState::Displayed(_) => StatusCode::OK,
        PageState::Errored(VenueError::MissingIdentifier) => StatusCode::BAD_REQUEST,
        PageState::Errored(VenueError::NotFound { .. }) => StatusCode::NOT_FOUND,
        PageState::Errored(VenueError::HttpError { .. })
        | PageState::Errored(VenueError::NetworkError(_)) => StatusCode::BAD_GATEWAY,
    }
}
