//! log_bessel::options — explicit configuration for log-Bessel evaluation.
//!
//! Purpose
//! -------
//! Collect every tunable of the dispatcher in one validated value instead of
//! module-level constants: the fast/accurate switch, the gate switch, the
//! trusted base order of the telescoping path, the ratio point estimate and
//! the relative tolerance used by verification helpers.
//!
//! Key behaviors
//! -------------
//! - [`LogBesselOptions`] bundles the flags and sub-configurations, with a
//!   `Default` matching the documented defaults.
//! - [`BaseOrder`] validates the trusted base order and carries the
//!   [`BasePolicy`] used to pick per-element telescoping bases.
//! - [`RatioEstimate`] selects how the two ratio bounds are combined.
//! - [`Tolerance`] validates a strictly positive relative tolerance.
//!
//! Invariants & assumptions
//! ------------------------
//! - `BaseOrder::order` is finite and ≥ 0.
//! - `Tolerance::relative` is finite and > 0.
//!
//! Testing notes
//! -------------
//! - Unit tests check constructors, rejection of invalid values and the
//!   documented defaults.

use crate::log_bessel::errors::{LogBesselError, LogBesselResult};

/// How the telescoping accumulator chooses its starting order per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BasePolicy {
    /// Always start from the configured trusted order (shifted by the
    /// fractional part of ν so that every step is a unit step).
    Fixed,
    /// Start from the largest unit-offset order at which the direct evaluator
    /// still returns a normal, finite, positive value; never below the
    /// configured trusted order.
    #[default]
    LargestTractable,
}

/// BaseOrder — trusted starting order of the telescoping path.
///
/// Fields
/// ------
/// - `order`: lowest order for which the direct evaluator is trusted.
/// - `policy`: whether the base is fixed or raised per element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseOrder {
    pub order: f64,
    pub policy: BasePolicy,
}

impl BaseOrder {
    /// Construct a validated base order.
    ///
    /// Errors
    /// ------
    /// - `LogBesselError::InvalidBaseOrder` when `order` is non-finite or
    ///   negative.
    pub fn new(order: f64, policy: BasePolicy) -> LogBesselResult<Self> {
        if !order.is_finite() || order < 0.0 {
            return Err(LogBesselError::InvalidBaseOrder {
                value: order,
                reason: "base order must be finite and >= 0.",
            });
        }
        Ok(BaseOrder { order, policy })
    }
}

impl Default for BaseOrder {
    fn default() -> Self {
        BaseOrder { order: 0.0, policy: BasePolicy::LargestTractable }
    }
}

/// Point estimate of A(ν, z) built from the bound pair (L, U).
///
/// Variants
/// --------
/// - `Interpolated`: interpolation inside the shared bound family with weight
///   λ = (1 − ν/√(ν² + z²)) · (2ν + 1)/(4ν). Matches L as z → 0 and the
///   large-argument expansion of the ratio to second order as z → ∞.
/// - `Midpoint`: (L + U) / 2.
/// - `Lower`: L alone.
/// - `Upper`: U alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RatioEstimate {
    #[default]
    Interpolated,
    Midpoint,
    Lower,
    Upper,
}

/// Tolerance — relative error accepted by verification helpers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    pub relative: f64,
}

impl Tolerance {
    /// Construct a validated relative tolerance.
    ///
    /// Errors
    /// ------
    /// - `LogBesselError::InvalidTolerance` unless `relative` is finite and > 0.
    pub fn new(relative: f64) -> LogBesselResult<Self> {
        if !relative.is_finite() || relative <= 0.0 {
            return Err(LogBesselError::InvalidTolerance { value: relative });
        }
        Ok(Tolerance { relative })
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance { relative: 1e-6 }
    }
}

/// LogBesselOptions — dispatcher configuration.
///
/// Fields
/// ------
/// - `fast`: use the asymptotic evaluator instead of the telescoping
///   accumulator for elements the gate rejects.
/// - `check`: run argument validation and the tractability gate. When
///   `false`, the direct value is returned unchanged and non-finite results
///   propagate to the caller.
/// - `base`: trusted base order and per-element base policy.
/// - `estimate`: combination of the ratio bounds used by telescoping.
/// - `tolerance`: relative tolerance for verification helpers.
/// - `verbose`: emit a slog summary per call (feature `obs_slog`).
///
/// Notes
/// -----
/// - Defaults: `fast = false`, `check = true`, base order 0 with
///   [`BasePolicy::LargestTractable`], [`RatioEstimate::Interpolated`],
///   tolerance 1e-6, `verbose = false`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogBesselOptions {
    pub fast: bool,
    pub check: bool,
    pub base: BaseOrder,
    pub estimate: RatioEstimate,
    pub tolerance: Tolerance,
    pub verbose: bool,
}

impl LogBesselOptions {
    pub fn new(
        fast: bool, check: bool, base: BaseOrder, estimate: RatioEstimate, tolerance: Tolerance,
        verbose: bool,
    ) -> LogBesselOptions {
        LogBesselOptions { fast, check, base, estimate, tolerance, verbose }
    }

    /// Defaults with the given `fast` / `check` flags, mirroring the two
    /// keyword arguments of the public `logbessel_I` entry point.
    pub fn with_flags(fast: bool, check: bool) -> LogBesselOptions {
        LogBesselOptions { fast, check, ..LogBesselOptions::default() }
    }
}

impl Default for LogBesselOptions {
    fn default() -> Self {
        LogBesselOptions {
            fast: false,
            check: true,
            base: BaseOrder::default(),
            estimate: RatioEstimate::default(),
            tolerance: Tolerance::default(),
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Validation in `BaseOrder::new` and `Tolerance::new`.
    // - The documented defaults of `LogBesselOptions`.
    //
    // They intentionally DO NOT cover:
    // - How the options steer evaluation; that is exercised by the dispatch
    //   and telescoping tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `LogBesselOptions::default` matches the documented defaults.
    fn options_default_matches_documented_defaults() {
        // Arrange + Act
        let opts = LogBesselOptions::default();

        // Assert
        assert!(!opts.fast);
        assert!(opts.check);
        assert_eq!(opts.base.order, 0.0);
        assert_eq!(opts.base.policy, BasePolicy::LargestTractable);
        assert_eq!(opts.estimate, RatioEstimate::Interpolated);
        assert_eq!(opts.tolerance.relative, 1e-6);
        assert!(!opts.verbose);
    }

    #[test]
    // Purpose
    // -------
    // `with_flags` only overrides the two flags.
    fn with_flags_keeps_remaining_defaults() {
        let opts = LogBesselOptions::with_flags(true, false);

        assert!(opts.fast);
        assert!(!opts.check);
        assert_eq!(opts.base, BaseOrder::default());
        assert_eq!(opts.tolerance, Tolerance::default());
    }

    #[test]
    // Purpose
    // -------
    // Verify that invalid base orders are rejected with their value attached.
    //
    // Given
    // -----
    // - Orders -1.0 and NaN.
    //
    // Expect
    // ------
    // - `InvalidBaseOrder` for both, carrying the offending value.
    fn base_order_rejects_negative_and_non_finite() {
        // Arrange + Act
        let negative = BaseOrder::new(-1.0, BasePolicy::Fixed).unwrap_err();
        let nan = BaseOrder::new(f64::NAN, BasePolicy::Fixed).unwrap_err();

        // Assert
        match negative {
            LogBesselError::InvalidBaseOrder { value, .. } => assert_eq!(value, -1.0),
            other => panic!("expected InvalidBaseOrder, got {other:?}"),
        }
        assert!(matches!(nan, LogBesselError::InvalidBaseOrder { .. }));
        assert!(BaseOrder::new(1.0, BasePolicy::Fixed).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Tolerances must be strictly positive and finite.
    fn tolerance_requires_positive_finite_value() {
        assert!(Tolerance::new(1e-8).is_ok());
        assert_eq!(Tolerance::new(0.0).unwrap_err(), LogBesselError::InvalidTolerance { value: 0.0 });
        assert!(Tolerance::new(f64::INFINITY).is_err());
    }
}
