//! log_bessel::core::asymptotic — fast closed-form approximation of log I(ν, z).
//!
//! Purpose
//! -------
//! Provide the "fast, rough" fallback: a non-iterative estimate of
//! log I(ν, z) that stays finite where the direct evaluator underflows or
//! fails to converge.
//!
//! Key behaviors
//! -------------
//! Three expansions are evaluated per element, each with a proxy for its first
//! omitted term; the finite candidate with the smallest proxy wins:
//! - Small argument (z → 0), with q = z²/4:
//!   ν ln(z/2) − lnΓ(ν+1) + ln(1 + q/(ν+1) + q²/(2(ν+1)(ν+2))),
//!   proxy q³ / (6(ν+1)(ν+2)(ν+3)).
//! - Uniform large order (Debye), with h = √(ν² + z²) and p = ν/h:
//!   −½ ln(2πν) − ½ ln(h/ν) + h + ν ln(z/(ν+h)) + ln(1 + u₁(p)/ν + u₂(p)/ν²),
//!   proxy |u₃(p)| / ν³. Only for ν > 0.
//! - Large argument (Hankel), with μ = 4ν² and w = 8z:
//!   z − ½ ln(2πz) + ln(1 − (μ−1)/w + (μ−1)(μ−9)/(2w²)),
//!   proxy |(μ−1)(μ−9)(μ−25)| / (6w³). Skipped when the truncated sum is ≤ 0.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs satisfy ν ≥ 0, z ≥ 0; the dispatcher validates before calling.
//! - `z = 0` returns the exact limit: 0 for ν = 0, −∞ for ν > 0.
//! - For z > 0 the small-argument candidate is always finite, so the result
//!   is finite on the whole domain.
//!
//! Conventions
//! -----------
//! - No accuracy guarantee is attached; errors range from ~1e-3 relative near
//!   ν ≈ z ≈ 1 down to round-off once either ν or z is large.

use ndarray::{Array1, ArrayView1};
use statrs::function::gamma::ln_gamma;
use std::f64::consts::PI;

/// Asymptotic log I(ν, z) for one order against a batch of arguments.
///
/// Parameters
/// ----------
/// - `nu`: `f64`
///   Order, ≥ 0.
/// - `z`: `ArrayView1<f64>`
///   Arguments, each ≥ 0.
///
/// Returns
/// -------
/// `Array1<f64>`
///   One approximation per argument, in input order.
pub fn asymptotic_log_bessel(nu: f64, z: ArrayView1<f64>) -> Array1<f64> {
    z.mapv(|z| asymptotic_log_bessel_scalar(nu, z))
}

/// Scalar form of [`asymptotic_log_bessel`].
pub fn asymptotic_log_bessel_scalar(nu: f64, z: f64) -> f64 {
    if z == 0.0 {
        return if nu == 0.0 { 0.0 } else { f64::NEG_INFINITY };
    }

    let mut best = small_argument(nu, z);
    let mut consider = |candidate: Option<Candidate>| {
        if let Some(c) = candidate {
            if c.value.is_finite() && (!best.value.is_finite() || c.error < best.error) {
                best = c;
            }
        }
    };
    consider(large_order(nu, z));
    consider(large_argument(nu, z));
    best.value
}

#[derive(Debug, Clone, Copy)]
struct Candidate {
    value: f64,
    error: f64,
}

fn small_argument(nu: f64, z: f64) -> Candidate {
    let q = 0.25 * z * z;
    let (n1, n2, n3) = (nu + 1.0, nu + 2.0, nu + 3.0);
    let corr = q / n1 + q * q / (2.0 * n1 * n2);
    Candidate {
        value: nu * (0.5 * z).ln() - ln_gamma(n1) + corr.ln_1p(),
        error: q * q * q / (6.0 * n1 * n2 * n3),
    }
}

fn large_order(nu: f64, z: f64) -> Option<Candidate> {
    if nu <= 0.0 {
        return None;
    }
    let h = nu.hypot(z);
    let p = nu / h;
    let (p2, p3) = (p * p, p * p * p);
    let u1 = (3.0 * p - 5.0 * p3) / 24.0;
    let u2 = (81.0 * p2 - 462.0 * p2 * p2 + 385.0 * p3 * p3) / 1152.0;
    let u3 = (30375.0 * p3 - 369603.0 * p3 * p2 + 765765.0 * p3 * p2 * p2
        - 425425.0 * p3 * p3 * p3)
        / 414720.0;

    let value = -0.5 * (2.0 * PI * nu).ln() - 0.5 * (h / nu).ln()
        + h
        + nu * (z / (nu + h)).ln()
        + (u1 / nu + u2 / (nu * nu)).ln_1p();
    Some(Candidate { value, error: u3.abs() / (nu * nu * nu) })
}

fn large_argument(nu: f64, z: f64) -> Option<Candidate> {
    let mu = 4.0 * nu * nu;
    let w = 8.0 * z;
    let sum = 1.0 - (mu - 1.0) / w + (mu - 1.0) * (mu - 9.0) / (2.0 * w * w);
    if sum <= 0.0 {
        return None;
    }
    Some(Candidate {
        value: z - 0.5 * (2.0 * PI * z).ln() + sum.ln(),
        error: ((mu - 1.0) * (mu - 9.0) * (mu - 25.0)).abs() / (6.0 * w * w * w),
    })
}
