pub mod balances;
pub mod health;
pub mod settlement;

use crate::config::Config;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/v1/settlement", post(settlement::post_settlement))
        .route("/v1/balances", post(balances::post_balances))
        .layer(cors)
        .with_state(state)
}
