use axum::http::{header, Method, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::global::health::health_check;
use crate::handlers::queue::dispatch::handle_action;
use crate::AppState;

pub fn app_router(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(global_routes(state.clone()))
        .merge(queue_routes(state))
        .fallback(handler_404)
        .layer(TraceLayer::new_for_http())
}

async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "The requested resource was not found")
}

fn queue_routes(state: AppState) -> Router<AppState> {
    // the static front-end posts to the API from another origin
    let cors = CorsLayer::new().allow_origin(Any).allow_methods([Method::POST]).allow_headers([header::CONTENT_TYPE]);

    Router::new().route("/", post(handle_action)).layer(cors).with_state(state)
}

fn global_routes(state: AppState) -> Router<AppState> {
    Router::new().route("/health", get(health_check)).with_state(state)
}
