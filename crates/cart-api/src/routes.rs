//! # Routes
//!
//! Axum router configuration for the cart API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - POST   /api/v1/cart        - Add a product
/// - GET    /api/v1/cart        - Get cart contents
/// - DELETE /api/v1/cart        - Clear the cart
/// - GET    /api/v1/cart/count  - Total quantity
/// - GET    /api/v1/cart/total  - Total price
/// - PUT    /api/v1/cart/{id}   - Update a product
/// - DELETE /api/v1/cart/{id}   - Remove a product
/// - GET    /health             - Health check
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - allow all origins for now
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let cart_routes = Router::new()
        .route(
            "/cart",
            post(handlers::add_product)
                .get(handlers::get_cart)
                .delete(handlers::clear_cart),
        )
        // Fixed paths before the id capture so /cart/count and
        // /cart/total never parse as ids.
        .route("/cart/count", get(handlers::cart_count))
        .route("/cart/total", get(handlers::cart_total))
        .route(
            "/cart/{id}",
            put(handlers::update_product).delete(handlers::remove_product),
        );

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // API v1
        .nest("/api/v1", cart_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
