//! log_bessel::core::ratio — batched point estimates of A(ν, z) = I(ν, z) / I(ν−1, z).
//!
//! Purpose
//! -------
//! Provide the public ratio approximator `ak_approx`, which evaluates the
//! bound pair once per (ν, z) pair and combines it into a single estimate,
//! vectorized over both inputs independently (outer-product semantics).
//!
//! Key behaviors
//! -------------
//! - Orders form a `(1, N0)` row and arguments an `(N1, 1)` column; both are
//!   broadcast to `(N1, N0)` and zipped elementwise. Entry `(i, j)` is the
//!   estimate of A(νⱼ, zᵢ).
//! - Every entry is an independent closed-form expression: no iteration, no
//!   convergence loop.
//!
//! Invariants & assumptions
//! ------------------------
//! - `ak_approx` validates its inputs (orders finite and ≥ ½, arguments finite
//!   and ≥ 0). The crate-internal `ratio_matrix` skips validation and is used
//!   by the telescoping accumulator, which validates once up front.
//! - Distinctness of the orders is not enforced; duplicate orders yield
//!   duplicate columns.
//!
//! Downstream usage
//! ----------------
//! - The telescoping accumulator calls `ratio_matrix` with a single-order row
//!   `[k]` per step and consumes the resulting `(N1, 1)` column.
//! - Diagnostics reconstruct Π A(k, z) from one multi-order call.

use ndarray::{Array2, ArrayView1, Axis, Zip};

use crate::log_bessel::{
    core::bounds::RatioBounds,
    errors::{LogBesselError, LogBesselResult},
    options::RatioEstimate,
    validation::{validate_arguments, validate_ratio_orders},
};

/// Approximate A(νⱼ, zᵢ) for every pair of orders and arguments.
///
/// Parameters
/// ----------
/// - `nu`: `ArrayView1<f64>` of length N0
///   Orders, each finite and ≥ ½. Orders in [0, ½) are rejected: the bound
///   pair no longer brackets the ratio there (at ν = ½ it is tanh z).
/// - `z`: `ArrayView1<f64>` of length N1
///   Arguments, each finite and ≥ 0.
/// - `estimate`: `RatioEstimate`
///   How the bound pair is combined into a point estimate.
///
/// Returns
/// -------
/// `LogBesselResult<Array2<f64>>`
///   Matrix of shape `(N1, N0)` whose entry `(i, j)` lies in
///   `[L(νⱼ, zᵢ), U(νⱼ, zᵢ)]`.
///
/// Errors
/// ------
/// - `LogBesselError::InvalidRatioOrder` for the first order below ½ or
///   non-finite.
/// - `LogBesselError::InvalidArgument` for the first argument that is negative
///   or non-finite.
///
/// Examples
/// --------
/// ```
/// use logbessel::log_bessel::core::ratio::ak_approx;
/// use logbessel::log_bessel::options::RatioEstimate;
/// use ndarray::array;
///
/// let a = ak_approx(array![1.0, 2.0, 3.0].view(), array![0.5, 10.0].view(),
///     RatioEstimate::default()).unwrap();
/// assert_eq!(a.dim(), (2, 3));
/// ```
pub fn ak_approx(
    nu: ArrayView1<f64>, z: ArrayView1<f64>, estimate: RatioEstimate,
) -> LogBesselResult<Array2<f64>> {
    validate_ratio_orders(nu.iter())?;
    validate_arguments(z.iter())?;
    ratio_matrix(nu, z, estimate)
}

/// Unvalidated outer-product evaluation behind [`ak_approx`].
pub(crate) fn ratio_matrix(
    nu: ArrayView1<f64>, z: ArrayView1<f64>, estimate: RatioEstimate,
) -> LogBesselResult<Array2<f64>> {
    let shape = (z.len(), nu.len());
    let row = nu.insert_axis(Axis(0));
    let col = z.insert_axis(Axis(1));

    let nu_b = row.broadcast(shape).ok_or_else(|| LogBesselError::ShapeMismatch {
        expected: vec![shape.0, shape.1],
        actual: row.shape().to_vec(),
    })?;
    let z_b = col.broadcast(shape).ok_or_else(|| LogBesselError::ShapeMismatch {
        expected: vec![shape.0, shape.1],
        actual: col.shape().to_vec(),
    })?;

    Ok(Zip::from(&nu_b)
        .and(&z_b)
        .map_collect(|&nu, &z| RatioBounds::new(nu, z).estimate(estimate)))
}
