use std::{
    net::{Ipv4Addr, SocketAddrV4},
    sync::Arc,
};

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use relay_proto::{
    dto::{ErrorResponseDto, HealthDto, UploadResponseDto},
    ApiRoute, MAX_FILES, MAX_FILE_SIZE,
};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::Settings;

use self::controller::*;

mod controller;
mod error;

pub use error::{ApiError, UploadError};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Upload Relay API",
        description = "Accepts image and PDF uploads and relays them to the downstream webhook."
    ),
    paths(controller::health, controller::upload),
    components(schemas(HealthDto, UploadResponseDto, ErrorResponseDto))
)]
pub struct ApiDoc;

pub type SharedServerState = Arc<ServerState>;

pub struct ServerState {
    pub settings: Settings,
}

impl ServerState {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

// Room for a full upload of MAX_FILES files at MAX_FILE_SIZE each, plus
// multipart framing.
const BODY_LIMIT: usize = MAX_FILES * MAX_FILE_SIZE as usize + 1024 * 1024;

pub fn router(state: SharedServerState) -> Router {
    Router::new()
        .route(ApiRoute::Form.path(), get(form))
        .route(ApiRoute::Health.path(), get(health))
        .route(ApiRoute::Upload.path(), post(upload))
        .merge(Scalar::with_url(ApiRoute::Docs.path(), ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start_api_server(port: u16, state: SharedServerState) -> std::io::Result<()> {
    let listener = TcpListener::bind(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port)).await?;
    axum::serve(listener, router(state)).await
}
