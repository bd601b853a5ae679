//! Curve-driven rigging math, independent of any host application.
//!
//! - B-spline basis weights (Boor's recursion) and clamped knot vectors
//! - Weighted matrix blending and scale/rotate/translate decomposition
//! - Curve attachment: one blended transform per evenly spaced target
//! - Barycentric coordinates for triangle-based weighting
//!
//! Everything here is pure computation over plain numeric data: control
//! points are opaque identifiers, transforms are nalgebra matrices, and
//! no call touches shared state, so all entry points are safe to run
//! concurrently.

pub mod algorithm;
pub mod curve;
pub mod rig;
pub mod types;

pub use algorithm::barycentric_coordinates;
pub use curve::{default_knots, generate_weights, CurveError, CurveResult, Weight};
pub use rig::{blend_matrices, decompose_matrix, matrix_curve, matrix_curve_even, PathSample, Srt};
pub use types::{Mat4, Pt3, Quat, Vec3};
