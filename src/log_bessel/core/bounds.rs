//! log_bessel::core::bounds — closed-form bounds on A(ν, z) = I(ν, z) / I(ν−1, z).
//!
//! Purpose
//! -------
//! Evaluate the Amos-type sandwich L(ν, z) ≤ A(ν, z) ≤ U(ν, z) for ν ≥ ½ and
//! z ≥ 0, and expose the one-parameter family both bounds belong to so that
//! point estimates can be formed inside it.
//!
//! Key behaviors
//! -------------
//! - Both bounds are members of
//!   B(β²) = z / (ν − ½ + √(β² + z²)),
//!   with L = B((ν + ½)²) and U = B((ν − ½)²). B is increasing as β² decreases,
//!   so every β² between the two endpoints yields a value inside [L, U].
//! - [`RatioBounds::interpolate`] evaluates B at
//!   β² = (1 − λ)(ν + ½)² + λ(ν − ½)² for λ ∈ [0, 1].
//! - [`RatioBounds::estimate`] turns a [`RatioEstimate`] choice into a single
//!   point estimate.
//!
//! Invariants & assumptions
//! ------------------------
//! - z = 0 is guarded: every bound and estimate is exactly 0 (the ratio limit
//!   for ν > 0).
//! - For ν ≥ ½ and z ≥ 0: 0 ≤ L ≤ U, with equality only at z = 0.
//! - No validation happens here; callers are expected to hold ν ≥ ½, z ≥ 0.
//!
//! Conventions
//! -----------
//! - `√(β² + z²)` is computed with `hypot` to stay accurate for large z.

use crate::log_bessel::options::RatioEstimate;

/// RatioBounds — the bound pair for one (ν, z) together with its inputs.
///
/// Fields
/// ------
/// - `nu`, `z`: the pair the bounds were evaluated at.
/// - `lower`: L(ν, z) = z / (ν − ½ + √((ν + ½)² + z²)).
/// - `upper`: U(ν, z) = z / (ν − ½ + √((ν − ½)² + z²)).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioBounds {
    pub nu: f64,
    pub z: f64,
    pub lower: f64,
    pub upper: f64,
}

impl RatioBounds {
    /// Evaluate the bound pair at (ν, z).
    pub fn new(nu: f64, z: f64) -> RatioBounds {
        if z == 0.0 {
            return RatioBounds { nu, z, lower: 0.0, upper: 0.0 };
        }
        let lower = family(nu, z, nu + 0.5);
        let upper = family(nu, z, nu - 0.5);
        RatioBounds { nu, z, lower, upper }
    }

    /// Member of the bound family at β² = (1 − λ)(ν + ½)² + λ(ν − ½)².
    ///
    /// `lambda` is clamped to [0, 1], so the result always lies in
    /// [`lower`](Self::lower), [`upper`](Self::upper).
    pub fn interpolate(&self, lambda: f64) -> f64 {
        if self.z == 0.0 {
            return 0.0;
        }
        let lambda = lambda.clamp(0.0, 1.0);
        let (nu, z) = (self.nu, self.z);
        let hi = (nu + 0.5) * (nu + 0.5);
        let lo = (nu - 0.5) * (nu - 0.5);
        let beta_sq = (1.0 - lambda) * hi + lambda * lo;
        z / (nu - 0.5 + (beta_sq + z * z).sqrt())
    }

    /// Interpolation weight of [`RatioEstimate::Interpolated`].
    ///
    /// λ = (1 − ν/√(ν² + z²)) · (2ν + 1)/(4ν): zero at z = 0 (the lower bound is
    /// exact there) and (2ν + 1)/(4ν) as z → ∞, where the family member has
    /// β² = ν² − ¼ and reproduces the large-argument ratio to second order.
    pub fn interpolation_weight(&self) -> f64 {
        let nu = self.nu;
        (1.0 - nu / nu.hypot(self.z)) * (2.0 * nu + 1.0) / (4.0 * nu)
    }

    /// Point estimate of A(ν, z) for the requested combination.
    pub fn estimate(&self, estimate: RatioEstimate) -> f64 {
        match estimate {
            RatioEstimate::Interpolated => self.interpolate(self.interpolation_weight()),
            RatioEstimate::Midpoint => 0.5 * (self.lower + self.upper),
            RatioEstimate::Lower => self.lower,
            RatioEstimate::Upper => self.upper,
        }
    }
}

/// B(β²) with β given directly: z / (ν − ½ + √(β² + z²)).
#[inline]
fn family(nu: f64, z: f64, beta: f64) -> f64 {
    z / (nu - 0.5 + beta.hypot(z))
}
