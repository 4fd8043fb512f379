//! log_bessel — logarithm of the modified Bessel function of the first kind.
//!
//! Purpose
//! -------
//! Compute log I(ν, z) for large orders and arguments where a conventional
//! special-function evaluation underflows or fails. The ratio
//! A(ν, z) = I(ν, z) / I(ν−1, z) is approximated from tight analytic bounds
//! and telescoped from a tractable base order; a closed-form asymptotic path
//! trades that accuracy for speed.
//!
//! Key behaviors
//! -------------
//! - [`core`]: bounds, ratio approximator, telescoping accumulator, asymptotic
//!   evaluator, tractability gate and the direct evaluator seam.
//! - [`dispatch`]: the `logbessel_i` entry point choosing a strategy per
//!   element.
//! - [`options`]: explicit configuration (flags, base order, ratio estimate,
//!   tolerance).
//! - [`validation`] and [`errors`]: domain guards and the error taxonomy.
//! - [`diagnostics`]: tolerance-based consistency checks.
//!
//! Invariants & assumptions
//! ------------------------
//! - Orders satisfy ν ≥ 0; ratio orders satisfy ν ≥ ½. With checking
//!   enabled, an argument outside z ≥ 0 fails only its own batch element.
//! - Every function is deterministic; the only shared state is the optional
//!   `obs_slog` logger.
//!
//! Conventions
//! -----------
//! - Batches are `ndarray` arrays of `f64`. Ratio matrices are indexed
//!   (argument, order).
//! - This module performs no I/O; logging is limited to the optional
//!   `obs_slog` summary emitted by the dispatcher.
//!
//! Downstream usage
//! ----------------
//! - Most callers need only [`logbessel_i`] (or [`logbessel_i_scalar`]) with
//!   [`LogBesselOptions`], and [`ak_approx`] for batched ratios.
//! - Alternative direct evaluators plug in through [`DirectEvaluator`] and
//!   [`logbessel_i_with`].
//!
//! Testing notes
//! -------------
//! - Unit tests live next to each submodule; end-to-end scenarios and
//!   high-precision reference values live in `tests/`.

pub mod core;
pub mod diagnostics;
pub mod dispatch;
pub mod errors;
pub mod options;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    DirectEvaluator, RatioBounds, ScaledSeries, Tractability, ak_approx, asymptotic_log_bessel,
    log_bessel_from_base, log_bessel_telescoping,
};
pub use self::diagnostics::{relative_error, verify_telescoping_identity};
pub use self::dispatch::{
    EvaluationPath, LogBesselOutcome, logbessel_i, logbessel_i_detailed, logbessel_i_scalar,
    logbessel_i_with,
};
pub use self::errors::{LogBesselError, LogBesselResult};
pub use self::options::{BaseOrder, BasePolicy, LogBesselOptions, RatioEstimate, Tolerance};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use logbessel::log_bessel::prelude::*;
//
// to import the everyday surface in a single line.

pub mod prelude {
    pub use super::core::{DirectEvaluator, ScaledSeries, ak_approx};
    pub use super::dispatch::{EvaluationPath, logbessel_i, logbessel_i_scalar};
    pub use super::errors::{LogBesselError, LogBesselResult};
    pub use super::options::{BaseOrder, BasePolicy, LogBesselOptions, RatioEstimate, Tolerance};
}
