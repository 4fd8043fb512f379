//! log_bessel::validation — input guards for orders, arguments and bases.
//!
//! Purpose
//! -------
//! Centralize the domain checks shared by the ratio approximator, the
//! telescoping accumulator and the dispatcher so that each public entry point
//! rejects contract violations in the same way before any numeric work.
//!
//! Key behaviors
//! -------------
//! - [`validate_order`]: ν must be finite and ≥ 0.
//! - [`validate_arguments`]: every z must be finite and ≥ 0.
//! - [`is_valid_argument`]: the same test for one element, used where a bad
//!   element must not fail the whole batch.
//! - [`validate_ratio_orders`]: every ratio order must be finite and ≥ ½.
//! - [`validate_base_order`]: a telescoping base must satisfy 0 ≤ ν₀ ≤ ν with
//!   ν − ν₀ integral; returns the number of unit steps.
//!
//! Conventions
//! -----------
//! - Indices reported in errors are flat positions in iteration order of the
//!   input array (row-major for multi-dimensional inputs).
//! - This module performs no allocation beyond error construction.

use crate::log_bessel::errors::{LogBesselError, LogBesselResult};

/// Largest distance from an integer still accepted as an integral step count.
const STEP_ROUNDING_TOL: f64 = 1e-9;

/// Smallest order for which the ratio bounds bracket I(ν, z) / I(ν−1, z).
pub const MIN_RATIO_ORDER: f64 = 0.5;

/// Validate a scalar order ν.
///
/// Errors
/// ------
/// - `LogBesselError::InvalidOrder` when `nu` is NaN, ±∞ or negative.
pub fn validate_order(nu: f64) -> LogBesselResult<()> {
    if !nu.is_finite() {
        return Err(LogBesselError::InvalidOrder { nu, reason: "Order must be finite." });
    }
    if nu < 0.0 {
        return Err(LogBesselError::InvalidOrder { nu, reason: "Order must be non-negative." });
    }
    Ok(())
}

/// Whether a single argument z is finite and ≥ 0.
#[inline]
pub fn is_valid_argument(z: f64) -> bool {
    z.is_finite() && z >= 0.0
}

/// Validate a batch of arguments z, visiting elements in iteration order.
///
/// Errors
/// ------
/// - `LogBesselError::InvalidArgument { index, value }` for the first element
///   that is NaN, ±∞ or negative.
pub fn validate_arguments<'a, I>(z: I) -> LogBesselResult<()>
where
    I: IntoIterator<Item = &'a f64>,
{
    match z.into_iter().enumerate().find(|(_, v)| !is_valid_argument(**v)) {
        Some((index, &value)) => Err(LogBesselError::InvalidArgument { index, value }),
        None => Ok(()),
    }
}

/// Validate the orders handed to the ratio approximator.
///
/// Errors
/// ------
/// - `LogBesselError::InvalidRatioOrder { index, nu }` for the first order
///   that is non-finite or below ½.
pub fn validate_ratio_orders<'a, I>(nu: I) -> LogBesselResult<()>
where
    I: IntoIterator<Item = &'a f64>,
{
    match nu.into_iter().enumerate().find(|(_, v)| !v.is_finite() || **v < MIN_RATIO_ORDER) {
        Some((index, &nu)) => Err(LogBesselError::InvalidRatioOrder { index, nu }),
        None => Ok(()),
    }
}

/// Validate a telescoping base order against its target and return the number
/// of unit steps ν − ν₀.
///
/// Errors
/// ------
/// - `LogBesselError::InvalidOrder` when `nu` itself is invalid.
/// - `LogBesselError::InvalidBaseOrder` when `nu0` is non-finite, negative,
///   above `nu`, or not an integer distance below it.
pub fn validate_base_order(nu: f64, nu0: f64) -> LogBesselResult<usize> {
    validate_order(nu)?;
    if !nu0.is_finite() || nu0 < 0.0 {
        return Err(LogBesselError::InvalidBaseOrder {
            value: nu0,
            reason: "base order must be finite and >= 0.",
        });
    }
    if nu0 > nu {
        return Err(LogBesselError::InvalidBaseOrder {
            value: nu0,
            reason: "base order must not exceed the target order.",
        });
    }
    let gap = nu - nu0;
    let steps = gap.round();
    if (gap - steps).abs() > STEP_ROUNDING_TOL {
        return Err(LogBesselError::InvalidBaseOrder {
            value: nu0,
            reason: "target and base order must differ by an integer.",
        });
    }
    Ok(steps as usize)
}
