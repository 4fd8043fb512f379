//! core — numerical building blocks for log I(ν, z).
//!
//! Purpose
//! -------
//! Collect the closed-form and iterative pieces the dispatcher composes: the
//! direct evaluator seam, the ratio bounds and their point estimate, the
//! batched ratio approximator, the telescoping accumulator, the asymptotic
//! evaluator and the tractability gate.
//!
//! Key behaviors
//! -------------
//! - [`direct`]: [`DirectEvaluator`] trait and the default [`ScaledSeries`]
//!   returning X = e^{-z} I(ν, z).
//! - [`bounds`]: [`RatioBounds`] with L ≤ A(ν, z) ≤ U and in-family
//!   interpolation.
//! - [`ratio`]: [`ak_approx`], the `(N1, N0)` outer-product approximator.
//! - [`telescoping`]: [`log_bessel_from_base`] and [`log_bessel_telescoping`].
//! - [`asymptotic`]: [`asymptotic_log_bessel`], the fast rough path.
//! - [`gate`]: [`assess`] and [`tractability_mask`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Every function here is a pure function of its inputs; nothing is cached
//!   or shared across calls.
//! - Only `ratio` and `telescoping` validate inputs; the remaining pieces
//!   assume the domain ν ≥ 0, z ≥ 0 has been checked upstream.
//!
//! Conventions
//! -----------
//! - Batches are `ndarray` 1-D views; orientation of ratio matrices is
//!   (argument, order).
//! - No I/O and no logging at this layer.

pub mod asymptotic;
pub mod bounds;
pub mod direct;
pub mod gate;
pub mod ratio;
pub mod telescoping;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::asymptotic::{asymptotic_log_bessel, asymptotic_log_bessel_scalar};
pub use self::bounds::RatioBounds;
pub use self::direct::{DirectEvaluator, LARGE_ARGUMENT_CUTOFF, ScaledSeries};
pub use self::gate::{Tractability, assess, tractability_mask};
pub use self::ratio::ak_approx;
pub use self::telescoping::{base_steps, log_bessel_from_base, log_bessel_telescoping};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use logbessel::log_bessel::core::prelude::*;
//
// to import the core surface in a single line.

pub mod prelude {
    pub use super::asymptotic::asymptotic_log_bessel;
    pub use super::bounds::RatioBounds;
    pub use super::direct::{DirectEvaluator, ScaledSeries};
    pub use super::gate::{Tractability, tractability_mask};
    pub use super::ratio::ak_approx;
    pub use super::telescoping::{log_bessel_from_base, log_bessel_telescoping};
}
