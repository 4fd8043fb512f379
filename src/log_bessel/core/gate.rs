//! log_bessel::core::gate — tractability predicate on direct-evaluator output.
//!
//! Purpose
//! -------
//! Decide, per element, whether a direct value X = e^{-z} I(ν, z) can be fed to
//! the logarithm. Rejected elements are recomputed by a fallback path.
//!
//! Key behaviors
//! -------------
//! - [`assess`] returns `Reject` iff X is NaN, ±∞ or ≤ 0, and `Accept`
//!   otherwise.
//! - [`tractability_mask`] lifts the predicate to arrays of any dimension; with
//!   `check = false` it accepts everything.
//!
//! Invariants & assumptions
//! ------------------------
//! - Pure: no state, no side effects, no allocation beyond the returned mask.

use ndarray::{Array, ArrayBase, Data, Dimension};

/// Gate verdict for one direct value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tractability {
    Accept,
    Reject,
}

impl Tractability {
    pub fn is_accept(self) -> bool {
        matches!(self, Tractability::Accept)
    }
}

/// Classify a single direct value.
#[inline]
pub fn assess(x: f64) -> Tractability {
    if x.is_finite() && x > 0.0 { Tractability::Accept } else { Tractability::Reject }
}

/// Elementwise accept mask, `true` where the direct value is usable.
///
/// When `check` is `false` every element is accepted and the caller takes
/// responsibility for non-finite values downstream.
pub fn tractability_mask<S, D>(x: &ArrayBase<S, D>, check: bool) -> Array<bool, D>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    if check { x.mapv(|v| assess(v).is_accept()) } else { x.mapv(|_| true) }
}
