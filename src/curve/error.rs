use thiserror::Error;

/// Errors produced when curve inputs cannot generate a valid B-spline.
///
/// All variants are deterministic precondition failures: validation runs
/// before any computation, nothing partial is returned, and retrying with
/// the same inputs fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveError {
    /// A degree-d curve needs at least d+1 control points.
    #[error("curves of degree {degree} require at least {required} cvs, got {count}")]
    InsufficientControlPoints {
        degree: usize,
        required: usize,
        count: usize,
    },

    /// A supplied knot vector must have exactly cvs + degree + 1 entries.
    #[error(
        "knot vector length mismatch: curves with {cv_count} cvs need a knot \
         vector of length {expected}, got {actual}"
    )]
    KnotVectorLengthMismatch {
        cv_count: usize,
        expected: usize,
        actual: usize,
    },

    /// The recursion hit a zero-width knot span, so the blend factor is
    /// undefined. Only reachable with a degenerate caller-supplied knot
    /// vector; default knots never trigger this.
    #[error("degenerate knot span: knots[{left}] == knots[{right}] == {value}")]
    DegenerateKnotSpan {
        left: usize,
        right: usize,
        value: f64,
    },
}

pub type CurveResult<T> = Result<T, CurveError>;
