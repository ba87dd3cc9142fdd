use crate::api::handlers::{auth, devices, health, users};
use crate::config::Config;
use crate::db::DbPool;
use crate::mail::Mailer;
use crate::repositories::{AccountRepository, DeviceRepository};
use crate::services::{AccountService, DeviceService};
use axum::{
    extract::Request,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use tracing::Level;

#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountService,
    pub devices: DeviceService,
}

impl AppState {
    pub fn new(pool: DbPool, config: Config, mailer: Mailer) -> Self {
        let accounts = AccountService::new(
            AccountRepository::new(pool.clone()),
            mailer,
            config.reset.clone(),
        );
        let devices = DeviceService::new(DeviceRepository::new(pool));
        Self { accounts, devices }
    }
}

pub fn create_router(pool: DbPool, config: Config, mailer: Mailer) -> Router {
    let state = AppState::new(pool, config, mailer);

    let public_routes = Router::new().route("/health", get(health::health));

    let api_routes = Router::new()
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/forgot-password", post(auth::forgot_password))
        .route("/api/v1/auth/reset-password", post(auth::reset_password))
        .route("/api/v1/users", get(users::list))
        .route(
            "/api/v1/users/:id",
            get(users::get).put(users::update).delete(users::delete),
        )
        .route("/api/v1/devices", get(devices::list))
        .route("/api/v1/devices/:id/measurements", get(devices::measurements));

    // CORS stays wide open on purpose: the dashboard is served from a
    // different origin during local development.
    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .with_state(state)
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request| {
                    tracing::span!(
                        Level::INFO,
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                    )
                })
                .on_response(
                    |_response: &axum::response::Response,
                     latency: std::time::Duration,
                     _span: &tracing::Span| {
                        tracing::event!(Level::INFO, latency = ?latency, "request completed");
                    },
                )
                .on_failure(
                    |_error: tower_http::classify::ServerErrorsFailureClass,
                     _latency: std::time::Duration,
                     _span: &tracing::Span| {
                        tracing::event!(Level::ERROR, "request failed");
                    },
                ),
        )
}
