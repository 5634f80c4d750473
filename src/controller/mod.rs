use std::sync::Arc;
use anyhow::Context;
use axum::http::HeaderValue;
use axum::Router;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tracing::info;
use crate::config::Config;
use crate::helpers::handler_404::page_not_found_handler;
use crate::page::map::{LeafletMap, MapLibrary};
use crate::repositories::venue_api_repo::VenueApiRepo;

pub mod health_check;
pub mod venue_detail_controller;

#[derive(Clone)]
pub struct AppState {
    pub venue_api: Arc<VenueApiRepo>,
    pub map_library: Arc<dyn MapLibrary>,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let venue_api = VenueApiRepo::new(
            &config.api_base_url,
            config.request_timeout_secs,
        )?;

        Ok(Self {
            venue_api: Arc::new(venue_api),
            map_library: Arc::new(LeafletMap),
        })
    }
}

pub async fn serve(
    app_state: AppState,
    config: &Config,
) -> anyhow::Result<()> {
    let application = build_application(app_state, config)?;

    info!("Venue detail server listening on: {}", config.bind_addr);
    axum::Server::bind(&config.bind_addr)
        .serve(application.into_make_service())
        .await
        .context("Error spinning up the venue detail server")
}

pub fn build_application(
    app_state: AppState,
    config: &Config,
) -> anyhow::Result<Router> {
    let origins = config
        .origin_urls
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>()
                .with_context(|| format!("Invalid origin url: {}", s))
        })
        .collect::<anyhow::Result<Vec<HeaderValue>>>()?;

    Ok(router_endpoints(app_state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    CorsLayer::new()
                        .allow_methods([
                            Method::GET,
                            Method::OPTIONS
                        ])
                        .allow_origin(origins)
                        .allow_headers([CONTENT_TYPE])
                )
                .layer(CompressionLayer::new())
        )
        .fallback(page_not_found_handler))
}

pub fn router_endpoints(app_state: AppState) -> Router {
    health_check::router()
        .merge(venue_detail_controller::router(app_state))
}
