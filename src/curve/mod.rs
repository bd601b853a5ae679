pub mod error;
pub mod knots;
pub mod weights;

// Re-export commonly used items
pub use error::{CurveError, CurveResult};
pub use knots::default_knots;
pub use weights::{generate_weights, Weight};
