use axum::http::StatusCode;
use axum::response::IntoResponse;

pub async fn page_not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Oops looks like you landed at the wrong endpoint, try /venue-detail?id=<venue id>")
}
