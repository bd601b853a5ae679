use crate::curve::{generate_weights, CurveResult};
use crate::rig::blend::{blend_matrices, decompose_matrix, Srt};
use crate::types::{Mat4, SrtData};
use log::debug;
use rayon::prelude::*;

/// One target attached to the curve: its parameter and blended transform
#[derive(Debug, Clone)]
pub struct PathSample {
    pub parameter: f64,
    pub transform: Srt,
}

/// Evenly spaced curve parameters for `count` targets, from 0.0 to 1.0.
/// A single target sits at the start of the curve.
pub fn evenly_spaced_parameters(count: usize) -> Vec<f64> {
    if count <= 1 {
        return vec![0.0; count];
    }
    (0..count)
        .map(|index| index as f64 / (count - 1) as f64)
        .collect()
}

/// Attach targets along a curve whose control points are the driver
/// matrices: for each parameter, blend the drivers by their curve
/// weights and decompose the result into transform channels.
///
/// Each sample is independent, so they are computed in parallel; the
/// indexed collect reassembles the output in parameter order, which
/// keeps downstream wiring deterministic.
pub fn matrix_curve(
    drivers: &[Mat4],
    parameters: &[f64],
    degree: usize,
) -> CurveResult<Vec<PathSample>> {
    let samples = parameters
        .par_iter()
        .map(|&parameter| {
            let weights = generate_weights(drivers, parameter, degree, None)?;
            let blended = blend_matrices(&weights);
            Ok(PathSample {
                parameter,
                transform: decompose_matrix(&blended),
            })
        })
        .collect::<CurveResult<Vec<_>>>()?;

    debug!(
        "blended {} samples along a degree {} curve with {} drivers",
        samples.len(),
        degree,
        drivers.len()
    );
    Ok(samples)
}

/// Convenience wrapper: one sample per target, evenly spaced.
pub fn matrix_curve_even(
    drivers: &[Mat4],
    target_count: usize,
    degree: usize,
) -> CurveResult<Vec<PathSample>> {
    let parameters = evenly_spaced_parameters(target_count);
    matrix_curve(drivers, &parameters, degree)
}

/// Serialize path samples into a JSON table for frontend consumption.
/// Returns array of { parameter, transform: { scale, rotation, translation } }
pub fn path_samples_json(samples: &[PathSample]) -> Vec<serde_json::Value> {
    samples
        .iter()
        .map(|sample| {
            let data = SrtData::from(&sample.transform);
            serde_json::json!({
                "parameter": sample.parameter,
                "transform": {
                    "scale": {
                        "x": data.scale.x,
                        "y": data.scale.y,
                        "z": data.scale.z,
                    },
                    "rotation": {
                        "x": data.rotation.x,
                        "y": data.rotation.y,
                        "z": data.rotation.z,
                        "w": data.rotation.w,
                    },
                    "translation": {
                        "x": data.translation.x,
                        "y": data.translation.y,
                        "z": data.translation.z,
                    },
                }
            })
        })
        .collect()
}
