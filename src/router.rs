use axum::http::{HeaderValue, Method, header};
use axum::routing::get;
use axum::{Json, Router, middleware};
use serde_json::{Value, json};
use tower_http::cors::CorsLayer;

use crate::logging::logging_middleware;
use crate::middleware::auth::{require_staff_token, require_user_token};
use crate::middleware::role::{require_admin_role, require_seller_role};
use crate::modules::account::router::{
    init_admin_account_router, init_seller_account_router, init_user_account_router,
};
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest(
            "/api",
            Router::new()
                .nest(
                    "/user",
                    init_user_account_router().route_layer(middleware::from_fn_with_state(
                        state.clone(),
                        require_user_token,
                    )),
                )
                .nest(
                    "/seller",
                    init_seller_account_router()
                        .route_layer(middleware::from_fn(require_seller_role))
                        .route_layer(middleware::from_fn_with_state(
                            state.clone(),
                            require_staff_token,
                        )),
                )
                .nest(
                    "/admin",
                    init_admin_account_router()
                        .route_layer(middleware::from_fn(require_admin_role))
                        .route_layer(middleware::from_fn_with_state(
                            state.clone(),
                            require_staff_token,
                        )),
                ),
        )
        .with_state(state.clone())
        .layer(middleware::from_fn(logging_middleware))
        .layer(cors_layer(&state))
}

// Credentials are allowed so browsers send the `token` cookie cross-origin.
fn cors_layer(state: &AppState) -> CorsLayer {
    let allowed_origins: Vec<HeaderValue> = state
        .cors_config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
}

async fn health() -> Json<Value> {
    Json(json!({ "success": true, "status": "ok" }))
}
