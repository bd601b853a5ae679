use crate::curve::error::{CurveError, CurveResult};
use crate::curve::knots::default_knots;
use log::error;

/// One control point's contribution to a curve sample.
///
/// Generic over the control-point identifier: the weight generator never
/// interprets the item, it only echoes it back next to its weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Weight<T> {
    pub item: T,
    pub weight: f64,
}

/// Generate the blend weight of each control point at a curve parameter.
///
/// `time` is normalized to [0, 1] across the whole curve. The result
/// holds exactly `degree + 1` entries (the control points whose basis
/// functions are non-zero at `time`) and their weights sum to 1.0.
///
/// When `knots` is `None` the clamped default vector from
/// [`default_knots`] is used. A supplied vector must have
/// `cvs.len() + degree + 1` entries; it does not need to be clamped.
///
/// # Errors
///
/// * [`CurveError::InsufficientControlPoints`] when `cvs.len() <= degree`.
/// * [`CurveError::KnotVectorLengthMismatch`] for a wrong-length knot vector.
/// * [`CurveError::DegenerateKnotSpan`] when the recursion would divide by
///   a zero-width knot interval (degenerate caller-supplied knots).
pub fn generate_weights<T: Clone>(
    cvs: &[T],
    time: f64,
    degree: usize,
    knots: Option<&[f64]>,
) -> CurveResult<Vec<Weight<T>>> {
    let order = degree + 1;

    // Ensure that all data provided is correct and can be computed
    if cvs.len() <= degree {
        let err = CurveError::InsufficientControlPoints {
            degree,
            required: order,
            count: cvs.len(),
        };
        error!("{}", err);
        return Err(err);
    }

    let default;
    let knots = match knots {
        Some(k) => k,
        None => {
            default = default_knots(cvs.len(), degree);
            &default
        }
    };
    if knots.len() != cvs.len() + order {
        let err = CurveError::KnotVectorLengthMismatch {
            cv_count: cvs.len(),
            expected: cvs.len() + order,
            actual: knots.len(),
        };
        error!("{}", err);
        return Err(err);
    }

    // Remap the time parameter to match the range of the knot values.
    // The +/-1 padding keeps the remapped value off the exact domain
    // boundaries, where segment selection would be ambiguous.
    let min_knot = knots[order] - 1.0;
    let max_knot = knots[knots.len() - 1 - order] + 1.0;
    let time = time * (max_knot - min_knot) + min_knot;

    // Determine on which segment of the curve the time value lies.
    // The last interior knot <= time wins, so a parameter landing
    // exactly on a knot belongs to the later segment.
    let mut segment = degree;
    for (index, knot) in knots[order..knots.len() - order].iter().enumerate() {
        if *knot <= time {
            segment = index + order;
        }
    }

    // Only the `order` control points around the segment can contribute
    let used_indices: Vec<usize> = (0..order).map(|j| j + segment - degree).collect();

    // Run Boor's recursion. Each slot holds an insertion-ordered map of
    // control-point index to accumulated weight, since several recursion
    // branches can land on the same underlying control point.
    let mut cv_weights: Vec<Vec<(usize, f64)>> =
        used_indices.iter().map(|&cv| vec![(cv, 1.0)]).collect();

    for i in 1..order {
        for j in (i..=degree).rev() {
            let left = j + segment - degree;
            let right = j + 1 + segment - i;

            let span = knots[right] - knots[left];
            if span == 0.0 {
                let err = CurveError::DegenerateKnotSpan {
                    left,
                    right,
                    value: knots[left],
                };
                error!("{}", err);
                return Err(err);
            }
            let alpha = (time - knots[left]) / span;

            let mut merged: Vec<(usize, f64)> = cv_weights[j]
                .iter()
                .map(|&(idx, weight)| (idx, weight * alpha))
                .collect();
            for &(idx, weight) in &cv_weights[j - 1] {
                let value = weight * (1.0 - alpha);
                match merged.iter_mut().find(|(existing, _)| *existing == idx) {
                    Some(entry) => entry.1 += value,
                    None => merged.push((idx, value)),
                }
            }

            cv_weights[j] = merged;
        }
    }

    // The last slot holds the fully blended weights
    Ok(cv_weights[degree]
        .iter()
        .map(|&(index, weight)| Weight {
            item: cvs[index].clone(),
            weight,
        })
        .collect())
}
