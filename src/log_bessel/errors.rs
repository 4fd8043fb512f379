//! log_bessel::errors — error taxonomy for log-Bessel evaluation.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias shared by the bound evaluator,
//! ratio approximator, telescoping accumulator and dispatcher, together with
//! a conversion layer to Python exceptions for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Define [`LogBesselResult`] and [`LogBesselError`] as the canonical result
//!   and error types for every public entry point in `log_bessel`.
//! - Attach human-readable `Display` messages to each variant so diagnostics
//!   are meaningful without additional context.
//! - Implement `From<LogBesselError> for PyErr` (as `ValueError`) when the
//!   `python-bindings` feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Recoverable non-finiteness of the direct evaluator is never reported
//!   here; the dispatcher handles it by fallback. Only domain violations and
//!   results that stay undefined after fallback become errors.
//! - Variants carry the offending value and, for batch inputs, its flat
//!   (row-major) index so failures stay attributable to a single element.
//!
//! Conventions
//! -----------
//! - Messages are phrased in terms of domain constraints ("z must be finite
//!   and ≥ 0") rather than low-level details.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload. The PyO3 conversion is left to Python-level tests.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type LogBesselResult<T> = Result<T, LogBesselError>;

/// LogBesselError — failure conditions for log-Bessel evaluation.
///
/// Variants
/// --------
/// - `InvalidOrder { nu, reason }`
///   The order ν is negative or not finite.
/// - `InvalidArgument { index, value }`
///   A batch element `z` is negative or not finite (only checked when the
///   caller enables checking).
/// - `InvalidRatioOrder { index, nu }`
///   An order passed to the ratio approximator is below ½, where the ratio
///   bounds no longer hold.
/// - `InvalidBaseOrder { value, reason }`
///   A telescoping base order is negative, non-finite, above the target order,
///   or not an integer distance away from it.
/// - `InvalidTolerance { value }`
///   A validation tolerance is not finite and strictly positive.
/// - `UndefinedResult { index, nu, z }`
///   The logarithm stayed undefined (NaN) for an element even after fallback.
/// - `ShapeMismatch { expected, actual }`
///   Broadcasting or reshaping produced an unexpected array shape.
#[derive(Debug, Clone, PartialEq)]
pub enum LogBesselError {
    // ---- Domain violations ----
    InvalidOrder { nu: f64, reason: &'static str },

    InvalidArgument { index: usize, value: f64 },

    InvalidRatioOrder { index: usize, nu: f64 },

    // ---- Configuration ----
    InvalidBaseOrder { value: f64, reason: &'static str },

    InvalidTolerance { value: f64 },

    // ---- Evaluation ----
    UndefinedResult { index: usize, nu: f64, z: f64 },

    ShapeMismatch { expected: Vec<usize>, actual: Vec<usize> },
}

impl std::error::Error for LogBesselError {}

impl std::fmt::Display for LogBesselError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Domain violations ----
            LogBesselError::InvalidOrder { nu, reason } => {
                write!(f, "Order nu must be finite and >= 0; got: {nu}. {reason}")
            }
            LogBesselError::InvalidArgument { index, value } => {
                write!(f, "Argument z at index {index} must be finite and >= 0; got: {value}")
            }
            LogBesselError::InvalidRatioOrder { index, nu } => {
                write!(f, "Ratio order at index {index} must be finite and >= 0.5; got: {nu}")
            }
            // ---- Configuration ----
            LogBesselError::InvalidBaseOrder { value, reason } => {
                write!(f, "Invalid telescoping base order {value}; {reason}")
            }
            LogBesselError::InvalidTolerance { value } => {
                write!(f, "Tolerance must be finite and > 0; got: {value}")
            }
            // ---- Evaluation ----
            LogBesselError::UndefinedResult { index, nu, z } => {
                write!(
                    f,
                    "log I(nu, z) is undefined at index {index} (nu = {nu}, z = {z}) after fallback"
                )
            }
            LogBesselError::ShapeMismatch { expected, actual } => {
                write!(f, "Shape mismatch: expected {expected:?}, got {actual:?}")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<LogBesselError> for PyErr {
    fn from(err: LogBesselError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` formatting for the payload-carrying variants.
    //
    // They intentionally DO NOT cover:
    // - The `From<LogBesselError> for PyErr` conversion, which needs the
    //   Python C API and belongs in Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidArgument` reports both the index and the value.
    //
    // Given
    // -----
    // - `InvalidArgument { index: 7, value: -2.5 }`.
    //
    // Expect
    // ------
    // - The message contains "7" and "-2.5".
    fn invalid_argument_includes_index_and_value() {
        // Arrange
        let err = LogBesselError::InvalidArgument { index: 7, value: -2.5 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('7'), "missing index in: {msg}");
        assert!(msg.contains("-2.5"), "missing value in: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `InvalidOrder` embeds the offending order and reason.
    //
    // Given
    // -----
    // - `InvalidOrder { nu: -1.0, reason: "Order must be non-negative." }`.
    //
    // Expect
    // ------
    // - The message contains "-1" and the reason text.
    fn invalid_order_includes_payload_and_reason() {
        // Arrange
        let err = LogBesselError::InvalidOrder { nu: -1.0, reason: "Order must be non-negative." };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("-1"), "missing order in: {msg}");
        assert!(msg.contains("non-negative"), "missing reason in: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `UndefinedResult` names the element and its (ν, z) pair.
    //
    // Given
    // -----
    // - `UndefinedResult { index: 3, nu: 12.0, z: 4.5 }`.
    //
    // Expect
    // ------
    // - The message contains "3", "12" and "4.5".
    fn undefined_result_reports_location() {
        // Arrange
        let err = LogBesselError::UndefinedResult { index: 3, nu: 12.0, z: 4.5 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("index 3"), "missing index in: {msg}");
        assert!(msg.contains("12"), "missing order in: {msg}");
        assert!(msg.contains("4.5"), "missing argument in: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `ShapeMismatch` prints both shapes.
    //
    // Given
    // -----
    // - Expected `[2, 3]`, actual `[3, 2]`.
    //
    // Expect
    // ------
    // - Both shapes appear in the message.
    fn shape_mismatch_prints_both_shapes() {
        // Arrange
        let err = LogBesselError::ShapeMismatch { expected: vec![2, 3], actual: vec![3, 2] };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("[2, 3]") && msg.contains("[3, 2]"), "got: {msg}");
    }
}
