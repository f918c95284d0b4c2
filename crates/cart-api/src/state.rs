//! # Application State
//!
//! Shared state for the Axum application: the cart store behind a
//! mutex, plus server configuration.

use cart_core::Cart;
use std::sync::{Arc, Mutex, MutexGuard};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
///
/// The cart itself is synchronous and single-threaded; the mutex is
/// the single mutual-exclusion boundary that keeps concurrent
/// requests from interleaving mutations. Each handler holds the lock
/// for exactly one cart operation.
#[derive(Clone)]
pub struct AppState {
    /// The process-wide cart store
    cart: Arc<Mutex<Cart>>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState with an empty cart
    pub fn new() -> Self {
        Self::with_config(AppConfig::from_env())
    }

    /// Create a new AppState with explicit configuration
    pub fn with_config(config: AppConfig) -> Self {
        Self {
            cart: Arc::new(Mutex::new(Cart::new())),
            config,
        }
    }

    /// Lock the cart for one operation
    pub fn cart(&self) -> MutexGuard<'_, Cart> {
        // Cart operations cannot panic mid-mutation, so a poisoned
        // lock still guards a consistent sequence.
        match self.cart.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_app_config_defaults() {
        // Clear env vars for test
        std::env::remove_var("HOST");
        std::env::remove_var("PORT");

        let config = AppConfig::from_env();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "test".to_string(),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_state_clones_share_one_cart() {
        let state = AppState::with_config(AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
        });
        let clone = state.clone();

        state
            .cart()
            .add(&json!({ "id": "1", "name": "Air Force", "price": 100, "quantity": 1 }))
            .unwrap();

        assert_eq!(clone.cart().len(), 1);
    }
}
