//! # cart-api
//!
//! HTTP API layer for cart-service-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints over the in-memory cart
//! - Application state and configuration
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/v1/cart` | Add a product |
//! | GET | `/api/v1/cart` | Get cart contents |
//! | DELETE | `/api/v1/cart` | Clear the cart |
//! | GET | `/api/v1/cart/count` | Total quantity |
//! | GET | `/api/v1/cart/total` | Total price |
//! | PUT | `/api/v1/cart/{id}` | Update a product |
//! | DELETE | `/api/v1/cart/{id}` | Remove a product |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
