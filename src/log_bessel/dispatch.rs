//! log_bessel::dispatch — strategy selection for log I(ν, z).
//!
//! Purpose
//! -------
//! Orchestrate the three evaluation strategies behind the public
//! `logbessel_i` entry point: try the direct evaluator on the whole batch,
//! gate its output, and recompute the rejected elements with either the
//! asymptotic evaluator (`fast = true`) or the telescoping accumulator
//! (`fast = false`).
//!
//! Key behaviors
//! -------------
//! - The batch may have any dimension; it is flattened in logical (row-major)
//!   order, processed as 1-D, and reshaped back, so the output shape always
//!   equals the shape of `z`.
//! - Rejected elements are gathered, recomputed in a single batched fallback
//!   call and merged back by an elementwise mask-select in original order.
//! - [`logbessel_i_detailed`] also reports the [`EvaluationPath`] taken by
//!   each element and the per-element errors.
//!
//! Invariants & assumptions
//! ------------------------
//! - ν is always validated (finite, ≥ 0); an invalid order fails the call.
//! - With `check = true`, failures stay local to their element: a negative or
//!   non-finite z, or a NaN left after fallback, yields NaN at that position,
//!   path [`EvaluationPath::Undefined`] and one entry in
//!   [`LogBesselOutcome::errors`]. Every other element is still computed.
//!   `−∞` (the z → 0 limit for ν > 0) is a valid result.
//! - With `check = false`: no validation of z and no fallback; direct values
//!   are returned as-is and non-finite entries propagate.
//! - Fallback values are returned exactly as produced by the fallback
//!   function; the dispatcher performs no post-processing on them.
//!
//! Conventions
//! -----------
//! - Indices in errors are flat positions in the row-major iteration order of
//!   `z`.
//! - With the `obs_slog` feature and `opts.verbose`, one structured record is
//!   emitted per call (batch size, rejections, undefined elements, fallback
//!   strategy) through a process-wide logger built on first use.

use ndarray::{Array, Array1, ArrayBase, Axis, Data, Dimension, Zip, arr0};

use crate::log_bessel::{
    core::{
        asymptotic::asymptotic_log_bessel,
        direct::{DirectEvaluator, ScaledSeries},
        gate::tractability_mask,
        telescoping::log_bessel_telescoping,
    },
    errors::{LogBesselError, LogBesselResult},
    options::LogBesselOptions,
    validation::{is_valid_argument, validate_order},
};

/// Strategy that produced an output element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EvaluationPath {
    /// Direct evaluator, accepted by the gate.
    Direct,
    /// Asymptotic fallback (`fast = true`).
    Asymptotic,
    /// Telescoping fallback (`fast = false`).
    Telescoping,
    /// No value: invalid argument, or NaN after fallback (`check = true`).
    Undefined,
}

impl EvaluationPath {
    pub fn as_str(self) -> &'static str {
        match self {
            EvaluationPath::Direct => "direct",
            EvaluationPath::Asymptotic => "asymptotic",
            EvaluationPath::Telescoping => "telescoping",
            EvaluationPath::Undefined => "undefined",
        }
    }

    /// Whether the element was recomputed by a fallback strategy.
    pub fn is_fallback(self) -> bool {
        matches!(self, EvaluationPath::Asymptotic | EvaluationPath::Telescoping)
    }
}

impl std::fmt::Display for EvaluationPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// LogBesselOutcome — values plus the per-element evaluation path.
///
/// Fields
/// ------
/// - `values`: log I(ν, z), same shape as `z`; NaN where undefined.
/// - `paths`: strategy used for each element, same shape as `z`.
/// - `errors`: one `InvalidArgument` or `UndefinedResult` per
///   [`EvaluationPath::Undefined`] element, in flat index order. Always empty
///   with `check = false`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogBesselOutcome<D: Dimension> {
    pub values: Array<f64, D>,
    pub paths: Array<EvaluationPath, D>,
    pub errors: Vec<LogBesselError>,
}

impl<D: Dimension> LogBesselOutcome<D> {
    /// Number of elements recomputed by a fallback.
    pub fn n_fallback(&self) -> usize {
        self.paths.iter().filter(|p| p.is_fallback()).count()
    }

    /// Number of elements without a value.
    pub fn n_undefined(&self) -> usize {
        self.errors.len()
    }

    /// Values, or the first element error if any element is undefined.
    pub fn into_result(self) -> LogBesselResult<Array<f64, D>> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.values),
        }
    }
}

/// Compute log I(ν, z) with the default direct evaluator.
///
/// Parameters
/// ----------
/// - `nu`: `f64`
///   Order, finite and ≥ 0.
/// - `z`: `&ArrayBase<S, D>`
///   Arguments of any dimension (0-D for a scalar).
/// - `opts`: `&LogBesselOptions`
///   `fast` / `check` flags plus telescoping configuration.
///
/// Returns
/// -------
/// `LogBesselResult<Array<f64, D>>`
///   One value per argument, with the shape of `z`. With `check`, elements
///   with a negative or non-finite z, or still NaN after fallback, are NaN;
///   use [`logbessel_i_detailed`] for the per-element errors.
///
/// Errors
/// ------
/// - `LogBesselError::InvalidOrder` if ν is negative or non-finite.
/// - Configuration errors of the telescoping fallback (`InvalidBaseOrder`).
///
/// Examples
/// --------
/// ```
/// use logbessel::log_bessel::{dispatch::logbessel_i, options::LogBesselOptions};
/// use ndarray::array;
///
/// let out = logbessel_i(1000.0, &array![50.0, -1.0], &LogBesselOptions::default()).unwrap();
/// assert!(out[0].is_finite());
/// assert!(out[1].is_nan());
/// ```
pub fn logbessel_i<S, D>(
    nu: f64, z: &ArrayBase<S, D>, opts: &LogBesselOptions,
) -> LogBesselResult<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    logbessel_i_with(nu, z, opts, &ScaledSeries)
}

/// Scalar convenience form of [`logbessel_i`].
///
/// A single argument is its own batch, so an undefined element is returned as
/// its error (`InvalidArgument` or `UndefinedResult`) instead of NaN.
pub fn logbessel_i_scalar(nu: f64, z: f64, opts: &LogBesselOptions) -> LogBesselResult<f64> {
    let out = logbessel_i_detailed(nu, &arr0(z), opts, &ScaledSeries)?.into_result()?;
    Ok(out[()])
}

/// [`logbessel_i`] with a caller-supplied direct evaluator.
pub fn logbessel_i_with<S, D, E>(
    nu: f64, z: &ArrayBase<S, D>, opts: &LogBesselOptions, evaluator: &E,
) -> LogBesselResult<Array<f64, D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
    E: DirectEvaluator + ?Sized,
{
    Ok(logbessel_i_detailed(nu, z, opts, evaluator)?.values)
}

/// Full dispatcher: values, per-element evaluation paths and element errors.
///
/// Parameters are those of [`logbessel_i`]; `evaluator` supplies the direct
/// values and the telescoping base values. Only call-level failures are
/// returned as `Err`; element failures are collected in
/// [`LogBesselOutcome::errors`].
pub fn logbessel_i_detailed<S, D, E>(
    nu: f64, z: &ArrayBase<S, D>, opts: &LogBesselOptions, evaluator: &E,
) -> LogBesselResult<LogBesselOutcome<D>>
where
    S: Data<Elem = f64>,
    D: Dimension,
    E: DirectEvaluator + ?Sized,
{
    validate_order(nu)?;

    let flat: Array1<f64> = z.iter().copied().collect();
    let n = flat.len();
    let valid = flat.mapv(|z| !opts.check || is_valid_argument(z));

    let x = evaluator.scaled_batch(nu, flat.view());
    let accept = tractability_mask(&x, opts.check) & &valid;
    let direct = Zip::from(&x).and(&flat).map_collect(|&x, &z| x.ln() + z);

    // Gather: only valid arguments reach the fallback.
    let retry = Zip::from(&accept).and(&valid).map_collect(|&ok, &valid| !ok && valid);
    let rejected: Vec<usize> = retry.iter().enumerate().filter(|&(_, &r)| r).map(|(i, _)| i).collect();
    let fallback_path = if opts.fast { EvaluationPath::Asymptotic } else { EvaluationPath::Telescoping };
    let fallback = if rejected.is_empty() {
        Array1::zeros(0)
    } else {
        let subset = flat.select(Axis(0), &rejected);
        match fallback_path {
            EvaluationPath::Asymptotic => asymptotic_log_bessel(nu, subset.view()),
            _ => log_bessel_telescoping(nu, subset.view(), opts, evaluator)?,
        }
    };

    // Scatter: slot[i] is the position of element i within `fallback`.
    let slots: Array1<usize> = retry
        .iter()
        .scan(0usize, |next, &r| {
            let slot = *next;
            if r {
                *next += 1;
            }
            Some(slot)
        })
        .collect();
    let values = Zip::from(&accept).and(&retry).and(&direct).and(&slots).map_collect(
        |&ok, &r, &d, &s| match (ok, r) {
            (true, _) => d,
            (false, true) => fallback[s],
            (false, false) => f64::NAN,
        },
    );
    let mut paths = Zip::from(&accept).and(&retry).map_collect(|&ok, &r| match (ok, r) {
        (true, _) => EvaluationPath::Direct,
        (false, true) => fallback_path,
        (false, false) => EvaluationPath::Undefined,
    });

    let mut errors = Vec::new();
    if opts.check {
        for (index, (path, (&zi, &v))) in paths.iter_mut().zip(flat.iter().zip(values.iter())).enumerate() {
            if !is_valid_argument(zi) {
                errors.push(LogBesselError::InvalidArgument { index, value: zi });
            } else if v.is_nan() {
                *path = EvaluationPath::Undefined;
                errors.push(LogBesselError::UndefinedResult { index, nu, z: zi });
            }
        }
    }

    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_summary(nu, n, rejected.len(), errors.len(), fallback_path);
    }

    let shape = z.raw_dim();
    let mismatch = |_| LogBesselError::ShapeMismatch { expected: shape.slice().to_vec(), actual: vec![n] };
    Ok(LogBesselOutcome {
        values: values.into_shape_with_order(shape.clone()).map_err(mismatch)?,
        paths: paths.into_shape_with_order(shape.clone()).map_err(mismatch)?,
        errors,
    })
}

// ---- Helper Methods ----

/// Process-wide terminal logger; the async drain thread is spawned once.
#[cfg(feature = "obs_slog")]
fn summary_logger() -> &'static slog::Logger {
    use slog::{Drain, o};
    use std::sync::OnceLock;

    static LOGGER: OnceLock<slog::Logger> = OnceLock::new();
    LOGGER.get_or_init(|| {
        let decorator = slog_term::TermDecorator::new().build();
        let drain = slog_term::FullFormat::new(decorator).build().fuse();
        let drain = slog_async::Async::new(drain).build().fuse();
        slog::Logger::root(drain, o!("component" => "logbessel"))
    })
}

#[cfg(feature = "obs_slog")]
fn log_summary(nu: f64, batch: usize, rejected: usize, undefined: usize, fallback: EvaluationPath) {
    use slog::info;

    info!(summary_logger(), "logbessel_i";
        "nu" => nu,
        "batch" => batch,
        "rejected" => rejected,
        "undefined" => undefined,
        "fallback" => fallback.as_str()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_bessel::core::asymptotic::asymptotic_log_bessel_scalar;
    use ndarray::{array, arr0};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Path selection for accepted and rejected elements.
    // - Bit-for-bit delegation to the fallback functions.
    // - The `check` switch: validation, gate and per-element failures.
    //
    // End-to-end accuracy and the shape law live in `tests/`.
    // -------------------------------------------------------------------------

    /// Evaluator returning NaN everywhere: every element is rejected and the
    /// telescoping base is NaN as well.
    struct AlwaysNan;

    impl DirectEvaluator for AlwaysNan {
        fn scaled(&self, _nu: f64, _z: f64) -> f64 {
            f64::NAN
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify per-element paths in a mixed batch.
    //
    // Given
    // -----
    // - ν = 1000 with z = [50, 1e7]: the first underflows, the second is in the
    //   large-argument regime of the direct evaluator.
    //
    // Expect
    // ------
    // - Paths [Telescoping, Direct] with `fast = false`, and
    //   [Asymptotic, Direct] with `fast = true`.
    fn mixed_batch_reports_paths() {
        // Arrange
        let z = array![50.0, 1.0e7];

        // Act
        let slow = logbessel_i_detailed(1000.0, &z, &LogBesselOptions::with_flags(false, true), &ScaledSeries)
            .unwrap();
        let fast = logbessel_i_detailed(1000.0, &z, &LogBesselOptions::with_flags(true, true), &ScaledSeries)
            .unwrap();

        // Assert
        assert_eq!(slow.paths, array![EvaluationPath::Telescoping, EvaluationPath::Direct]);
        assert_eq!(fast.paths, array![EvaluationPath::Asymptotic, EvaluationPath::Direct]);
        assert_eq!(slow.n_fallback(), 1);
        assert_eq!(slow.values[1], fast.values[1]);
    }

    #[test]
    // Purpose
    // -------
    // Fallback values are exactly those of the delegated functions.
    fn fallback_values_are_delegated_exactly() {
        // Arrange
        let opts = LogBesselOptions::with_flags(false, true);
        let z = array![50.0];

        // Act
        let slow = logbessel_i(1000.0, &z, &opts).unwrap();
        let fast = logbessel_i(1000.0, &z, &LogBesselOptions::with_flags(true, true)).unwrap();
        let telescoped = log_bessel_telescoping(1000.0, z.view(), &opts, &ScaledSeries).unwrap();

        // Assert
        assert_eq!(slow[0].to_bits(), telescoped[0].to_bits());
        assert_eq!(fast[0].to_bits(), asymptotic_log_bessel_scalar(1000.0, 50.0).to_bits());
    }

    #[test]
    // Purpose
    // -------
    // With checking disabled the direct value is returned untouched.
    fn unchecked_call_skips_gate_and_validation() {
        let opts = LogBesselOptions::with_flags(false, false);

        let out = logbessel_i(1000.0, &array![50.0, -1.0], &opts).unwrap();

        assert_eq!(out[0], f64::NEG_INFINITY);
        assert!(out[1].is_nan());
    }

    #[test]
    // Purpose
    // -------
    // With checking enabled, invalid arguments and undefined results fail
    // only their own element.
    //
    // Given
    // -----
    // - ν = 2 with z = [1, 5, −1, NaN].
    // - ν = 5 with an evaluator that never works, on the telescoping path.
    //
    // Expect
    // ------
    // - Valid neighbours keep their values; bad elements are NaN with path
    //   `Undefined` and one error each, in index order.
    // - An invalid order still fails the whole call.
    fn checked_call_keeps_valid_neighbours() {
        // Arrange
        let opts = LogBesselOptions::default();
        let z = array![1.0, 5.0, -1.0, f64::NAN];

        // Act
        let outcome = logbessel_i_detailed(2.0, &z, &opts, &ScaledSeries).unwrap();
        let undefined = logbessel_i_detailed(5.0, &array![1.0, 2.0], &opts, &AlwaysNan).unwrap();
        let bad_order = logbessel_i(-1.0, &array![1.0], &LogBesselOptions::with_flags(false, false));

        // Assert
        assert_eq!(outcome.values[0], ScaledSeries.log_value(2.0, 1.0));
        assert_eq!(outcome.values[1], ScaledSeries.log_value(2.0, 5.0));
        assert!(outcome.values[2].is_nan() && outcome.values[3].is_nan());
        assert_eq!(
            outcome.paths,
            array![
                EvaluationPath::Direct,
                EvaluationPath::Direct,
                EvaluationPath::Undefined,
                EvaluationPath::Undefined
            ]
        );
        assert_eq!(outcome.errors[0], LogBesselError::InvalidArgument { index: 2, value: -1.0 });
        assert!(matches!(outcome.errors[1], LogBesselError::InvalidArgument { index: 3, .. }));
        assert_eq!(outcome.n_undefined(), 2);
        assert_eq!(outcome.n_fallback(), 0);

        assert_eq!(undefined.errors, vec![
            LogBesselError::UndefinedResult { index: 0, nu: 5.0, z: 1.0 },
            LogBesselError::UndefinedResult { index: 1, nu: 5.0, z: 2.0 },
        ]);
        assert!(undefined.paths.iter().all(|&p| p == EvaluationPath::Undefined));

        assert!(matches!(bad_order, Err(LogBesselError::InvalidOrder { .. })));
    }

    #[test]
    // Purpose
    // -------
    // The scalar wrapper surfaces an undefined element as its error.
    fn scalar_wrapper_reports_element_error() {
        let opts = LogBesselOptions::default();

        let err = logbessel_i_scalar(2.0, -1.0, &opts).unwrap_err();

        assert_eq!(err, LogBesselError::InvalidArgument { index: 0, value: -1.0 });
    }

    #[test]
    // Purpose
    // -------
    // The fast path recovers from an evaluator that never works.
    fn fast_path_ignores_direct_failures() {
        let opts = LogBesselOptions::with_flags(true, true);

        let out = logbessel_i_with(5.0, &array![1.0, 2.0], &opts, &AlwaysNan).unwrap();

        assert_eq!(out[0], asymptotic_log_bessel_scalar(5.0, 1.0));
        assert_eq!(out[1], asymptotic_log_bessel_scalar(5.0, 2.0));
    }

    #[test]
    // Purpose
    // -------
    // Scalar wrapper agrees with the 0-D array call.
    fn scalar_wrapper_matches_zero_dimensional_call() {
        let opts = LogBesselOptions::default();

        let scalar = logbessel_i_scalar(20.0, 10.0, &opts).unwrap();
        let zero_d = logbessel_i(20.0, &arr0(10.0), &opts).unwrap();

        assert_eq!(zero_d.ndim(), 0);
        assert_eq!(scalar, zero_d[()]);
    }
}
