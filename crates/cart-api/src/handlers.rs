//! # Request Handlers
//!
//! Axum request handlers for the cart API.
//!
//! Add and update take the raw request body so an absent body can be
//! answered with the cart's own "Product is required" payload instead
//! of the framework's extractor rejection. Remove and update answer
//! 200 whether or not an entry matched; the response alone does not
//! distinguish "removed" from "nothing matched".

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use cart_core::{CartError, Product};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument, warn};

// =============================================================================
// Response Types
// =============================================================================

/// Error response body: `{ "error": <message or issue list> }`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: Value,
}

impl ErrorResponse {
    /// Error payload carrying a single message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            error: Value::String(message.into()),
        }
    }
}

fn cart_error_to_response(err: CartError) -> (StatusCode, Json<ErrorResponse>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = match err {
        // Validation failures list every violated field.
        CartError::Validation(validation) => ErrorResponse {
            error: Value::from(validation.messages()),
        },
        other => ErrorResponse::message(other.to_string()),
    };
    (status, Json(body))
}

/// Parse a request body into a JSON candidate value.
///
/// An empty body maps to `CartError::MissingBody`; anything that is
/// not JSON maps to a validation-shaped 400.
fn parse_body(body: &Bytes) -> Result<Value, (StatusCode, Json<ErrorResponse>)> {
    if body.is_empty() {
        return Err(cart_error_to_response(CartError::MissingBody));
    }

    serde_json::from_slice(body).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::message(format!("Invalid JSON: {}", e))),
        )
    })
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "cart-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Add a product to the cart
///
/// 201 with the stored item on success; 400 with an error payload for
/// a missing body or a candidate that fails validation. A failed add
/// leaves the cart untouched.
#[instrument(skip(state, body))]
pub async fn add_product(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>), (StatusCode, Json<ErrorResponse>)> {
    let candidate = parse_body(&body)?;

    let stored = state.cart().add(&candidate).map_err(|e| {
        warn!("Rejected product candidate: {}", e);
        cart_error_to_response(e.into())
    })?;

    info!("Added product to cart: id={}", stored.id);
    Ok((StatusCode::CREATED, Json(stored)))
}

/// Get the cart contents, in insertion order
pub async fn get_cart(State(state): State<AppState>) -> impl IntoResponse {
    let items = state.cart().items().to_vec();
    Json(items)
}

/// Remove a product from the cart by id
///
/// First match only; answers 200 whether or not anything matched.
#[instrument(skip(state), fields(product_id = %id))]
pub async fn remove_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let removed = state.cart().remove_by_id(&id);
    if removed {
        info!("Removed product from cart");
    } else {
        info!("Remove matched nothing");
    }

    Json(serde_json::json!({ "message": "Product removed from cart" }))
}

/// Update a product in the cart by id
///
/// The candidate is validated first, so an invalid body is a 400 even
/// when the id matches nothing. On a match, the entry is replaced
/// wholesale; on a miss nothing changes. Either way the success
/// answer is 200.
#[instrument(skip(state, body), fields(product_id = %id))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<Value>, (StatusCode, Json<ErrorResponse>)> {
    let candidate = parse_body(&body)?;

    let replaced = state
        .cart()
        .update_by_id(&id, &candidate)
        .map_err(|e| {
            warn!("Rejected update candidate: {}", e);
            cart_error_to_response(e.into())
        })?;

    if replaced {
        info!("Updated product in cart");
    } else {
        info!("Update matched nothing");
    }

    Ok(Json(serde_json::json!({ "message": "Product updated in cart" })))
}

/// Empty the cart unconditionally
#[instrument(skip(state))]
pub async fn clear_cart(State(state): State<AppState>) -> impl IntoResponse {
    state.cart().clear();
    info!("Cleared cart");

    Json(serde_json::json!({ "message": "Cart cleared" }))
}

/// Total quantity across the cart
pub async fn cart_count(State(state): State<AppState>) -> impl IntoResponse {
    let count = state.cart().count();
    Json(serde_json::json!({ "count": count }))
}

/// Total price across the cart (price times quantity, summed)
pub async fn cart_total(State(state): State<AppState>) -> impl IntoResponse {
    let total = state.cart().total();
    Json(serde_json::json!({ "total": total }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_core::{FieldViolation, ValidationError};

    #[test]
    fn test_missing_body_response() {
        let (status, Json(body)) = cart_error_to_response(CartError::MissingBody);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, Value::from("Product is required"));
    }

    #[test]
    fn test_validation_error_response_lists_violations() {
        let err: CartError = ValidationError::new(vec![
            FieldViolation::missing("name"),
            FieldViolation::wrong_type("price"),
        ])
        .into();

        let (status, Json(body)) = cart_error_to_response(err);
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body.error,
            Value::from(vec!["name is required", "price has the wrong type"])
        );
    }

    #[test]
    fn test_parse_body_empty_is_missing_body() {
        let result = parse_body(&Bytes::new());
        let (status, Json(body)) = result.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error, Value::from("Product is required"));
    }

    #[test]
    fn test_parse_body_rejects_malformed_json() {
        let result = parse_body(&Bytes::from_static(b"{not json"));
        let (status, _) = result.unwrap_err();
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
