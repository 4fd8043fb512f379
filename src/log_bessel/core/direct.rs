//! log_bessel::core::direct — the safe direct evaluator seam.
//!
//! Purpose
//! -------
//! Define the interface through which the dispatcher and the telescoping
//! accumulator obtain the exponentially scaled Bessel function
//! X(ν, z) = e^{-z} I(ν, z) in the numerically safe regime, plus a default
//! implementation that behaves like a conventional special-function library:
//! accurate where it is tractable, and underflowing or non-finite elsewhere.
//!
//! Key behaviors
//! -------------
//! - [`DirectEvaluator`] exposes `scaled(ν, z)` and a batched variant; the
//!   logarithm is recovered as `log I = ln X + z`.
//! - [`ScaledSeries`] evaluates
//!   - the ascending series `Σ (z²/4)^k / (k! Γ(ν+k+1))` with the leading
//!     factor `(z/2)^ν e^{-z} / Γ(ν+1)` taken in log space for `z ≤ 500`,
//!   - the Hankel large-argument expansion for `z > 500` when `ν² < z`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are expected to satisfy ν ≥ 0 and z ≥ 0; negative z yields NaN.
//! - The default evaluator never panics; non-convergence is reported as NaN
//!   and values below the normal `f64` range (subnormals included) are
//!   flushed to `0`.
//!
//! Conventions
//! -----------
//! - `z = 0` returns the exact limits `X(0, 0) = 1` and `X(ν, 0) = 0`, ν > 0.

use ndarray::{Array1, ArrayView1};
use statrs::function::gamma::ln_gamma;
use std::f64::consts::PI;

/// Arguments above this value use the large-argument expansion.
pub const LARGE_ARGUMENT_CUTOFF: f64 = 500.0;

const SERIES_MAX_TERMS: usize = 5_000;
const HANKEL_MAX_TERMS: usize = 200;

/// Source of exponentially scaled Bessel values X(ν, z) = e^{-z} I(ν, z).
///
/// Implementations may return non-finite or non-positive values outside
/// their tractable regime; the tractability gate decides what to do with
/// them.
pub trait DirectEvaluator {
    /// Scaled value e^{-z} I(ν, z) for a single pair.
    fn scaled(&self, nu: f64, z: f64) -> f64;

    /// Scaled values for one order against a batch of arguments.
    fn scaled_batch(&self, nu: f64, z: ArrayView1<f64>) -> Array1<f64> {
        z.mapv(|z| self.scaled(nu, z))
    }

    /// log I(ν, z) recovered from the scaled value.
    fn log_value(&self, nu: f64, z: f64) -> f64 {
        self.scaled(nu, z).ln() + z
    }
}

/// ScaledSeries — default direct evaluator (power series + Hankel expansion).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaledSeries;

impl DirectEvaluator for ScaledSeries {
    fn scaled(&self, nu: f64, z: f64) -> f64 {
        if nu.is_nan() || z.is_nan() || z < 0.0 {
            return f64::NAN;
        }
        if z == 0.0 {
            return if nu == 0.0 { 1.0 } else { 0.0 };
        }
        let x = if z > LARGE_ARGUMENT_CUTOFF { scaled_large_argument(nu, z) } else { scaled_series(nu, z) };
        flush_subnormal(x)
    }
}

/// Subnormal results have lost most of their mantissa; report them as underflow.
#[inline]
fn flush_subnormal(x: f64) -> f64 {
    if x.abs() < f64::MIN_POSITIVE { 0.0 } else { x }
}

/// Ascending series with the leading factor kept in log space.
///
/// Terms are all positive, so the normalized sum S = Σ tₖ/t₀ has no
/// cancellation; S stays below ~e^{z} and cannot overflow for z ≤ 500.
fn scaled_series(nu: f64, z: f64) -> f64 {
    let log_lead = nu * (0.5 * z).ln() - ln_gamma(nu + 1.0) - z;
    let quarter_sq = 0.25 * z * z;
    let peak = 0.5 * z;

    let mut term = 1.0;
    let mut sum = 1.0;
    for k in 0..SERIES_MAX_TERMS {
        let kf = k as f64;
        term *= quarter_sq / ((kf + 1.0) * (nu + kf + 1.0));
        sum += term;
        if term <= f64::EPSILON * sum && kf + 1.0 > peak {
            return (log_lead + sum.ln()).exp();
        }
    }
    f64::NAN
}

/// Hankel expansion e^{-z} I(ν, z) ≈ (2πz)^{-1/2} Σ (−1)^k aₖ(ν) / zᵏ.
///
/// Only used while ν² < z; a growing term before convergence means the
/// asymptotic series has started to diverge and the result is NaN.
fn scaled_large_argument(nu: f64, z: f64) -> f64 {
    if nu * nu >= z {
        return f64::NAN;
    }
    let mu = 4.0 * nu * nu;
    let mut term: f64 = 1.0;
    let mut sum = 1.0;
    for k in 1..=HANKEL_MAX_TERMS {
        let kf = k as f64;
        let odd = 2.0 * kf - 1.0;
        let next = -term * (mu - odd * odd) / (8.0 * z * kf);
        if next.abs() > term.abs() {
            return f64::NAN;
        }
        term = next;
        sum += term;
        if term.abs() <= f64::EPSILON * sum.abs() {
            return sum / (2.0 * PI * z).sqrt();
        }
    }
    f64::NAN
}
