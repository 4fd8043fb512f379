//! log_bessel::diagnostics — tolerance-based consistency checks.
//!
//! Purpose
//! -------
//! Offer small verification helpers that compare results of independent
//! computations under the relative tolerance carried by `LogBesselOptions`.
//!
//! Key behaviors
//! -------------
//! - [`relative_error`]: |a − b| / |b| with exact equality mapped to 0.
//! - [`verify_telescoping_identity`]: for each z, checks
//!   exp(T(ν) − T(ν₀)) ≈ Π_{k=ν₀+1}^{ν} A(k, z), with T the telescoping
//!   accumulator and the product rebuilt from a single multi-order
//!   `ak_approx` call.
//!
//! Invariants & assumptions
//! ------------------------
//! - NaN comparisons never pass.
//! - The identity is meaningful for z > 0; at z = 0 both sides degenerate and
//!   the check reports `false` for ν₀ > 0.

use ndarray::{Array1, ArrayView1, Axis};

use crate::log_bessel::{
    core::{direct::ScaledSeries, ratio::ak_approx, telescoping::log_bessel_from_base},
    errors::LogBesselResult,
    options::LogBesselOptions,
    validation::validate_base_order,
};

/// Relative error of `a` with respect to the reference `b`.
pub fn relative_error(a: f64, b: f64) -> f64 {
    if a == b {
        return 0.0;
    }
    (a - b).abs() / b.abs().max(f64::MIN_POSITIVE)
}

/// Check the telescoping identity between orders ν₀ and ν for every z.
///
/// Parameters
/// ----------
/// - `nu`, `nu0`: `f64`
///   Orders with 0 ≤ ν₀ ≤ ν and ν − ν₀ a whole number.
/// - `z`: `ArrayView1<f64>`
///   Arguments, each finite and ≥ 0.
/// - `opts`: `&LogBesselOptions`
///   Supplies the base order floor, the ratio estimate and the tolerance.
///
/// Returns
/// -------
/// `LogBesselResult<Array1<bool>>`
///   `true` where the relative error is within `opts.tolerance.relative`.
///
/// Errors
/// ------
/// - `LogBesselError::InvalidOrder` / `InvalidBaseOrder` for an invalid pair.
/// - `LogBesselError::InvalidArgument` for the first bad z.
///
/// Notes
/// -----
/// - Both T(ν) and T(ν₀) telescope from the same base: ν₀ lowered by whole
///   steps to the configured base order (or ν₀ itself if it is already below).
pub fn verify_telescoping_identity(
    nu: f64, nu0: f64, z: ArrayView1<f64>, opts: &LogBesselOptions,
) -> LogBesselResult<Array1<bool>> {
    let steps = validate_base_order(nu, nu0)?;
    let base = if nu0 > opts.base.order { nu0 - (nu0 - opts.base.order).floor() } else { nu0 };

    let t_nu = log_bessel_from_base(nu, base, z, opts.estimate, &ScaledSeries)?;
    let t_nu0 = log_bessel_from_base(nu0, base, z, opts.estimate, &ScaledSeries)?;

    let orders = Array1::from_iter((1..=steps).map(|k| nu0 + k as f64));
    let ratios = ak_approx(orders.view(), z, opts.estimate)?;
    let product = ratios.map_axis(Axis(1), |row| row.product());

    let tol = opts.tolerance.relative;
    let mut ok = Array1::from_elem(z.len(), false);
    ndarray::Zip::from(&mut ok).and(&t_nu).and(&t_nu0).and(&product).for_each(
        |ok, &hi, &lo, &prod| {
            *ok = relative_error((hi - lo).exp(), prod) <= tol;
        },
    );
    Ok(ok)
}
