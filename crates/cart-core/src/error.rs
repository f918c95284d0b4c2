//! # Cart Error Types
//!
//! Typed error handling for the cart engine.
//! All fallible cart operations return `Result<T, CartError>` (or the
//! narrower `ValidationError` where that is the only failure mode).

use thiserror::Error;

/// Why a single candidate field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Field absent from the candidate object
    Missing,
    /// Field present but not of the required type
    WrongType,
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViolationKind::Missing => write!(f, "is required"),
            ViolationKind::WrongType => write!(f, "has the wrong type"),
        }
    }
}

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    /// Name of the offending field
    pub field: &'static str,
    /// What was wrong with it
    pub kind: ViolationKind,
}

impl FieldViolation {
    pub fn missing(field: &'static str) -> Self {
        Self {
            field,
            kind: ViolationKind::Missing,
        }
    }

    pub fn wrong_type(field: &'static str) -> Self {
        Self {
            field,
            kind: ViolationKind::WrongType,
        }
    }
}

impl std::fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.kind)
    }
}

/// Candidate rejected by product validation.
///
/// Carries every violated field, not just the first one found, so the
/// caller can report the full list in one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// Violation messages, one per rejected field
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.to_string()).collect()
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid product: ")?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

/// Core error type for all cart operations
#[derive(Debug, Error)]
pub enum CartError {
    /// Candidate product failed field validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No candidate supplied at all (empty or absent request body)
    #[error("Product is required")]
    MissingBody,
}

impl CartError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CartError::Validation(_) => 400,
            CartError::MissingBody => 400,
        }
    }
}

/// Result type alias for cart operations
pub type CartResult<T> = Result<T, CartError>;
