pub mod blend;
pub mod path;

// Re-export commonly used items
pub use blend::{blend_matrices, decompose_matrix, Srt};
pub use path::{evenly_spaced_parameters, matrix_curve, matrix_curve_even, PathSample};
