/// Build the default clamped (open uniform) knot vector for a curve.
///
/// The first `degree` entries are 0, the middle entries count up from 0
/// to `count - degree` in whole steps, and the last `degree` entries
/// repeat the final middle value. Repeating the end values pins the
/// curve to its first and last control point.
///
/// Total length is always `count + degree + 1`.
///
/// Callers must pass `count >= degree + 1` and `degree >= 1`; the weight
/// generator enforces the control-point count before calling in here.
///
/// Example: `default_knots(5, 1)` -> `[0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 4.0]`
pub fn default_knots(count: usize, degree: usize) -> Vec<f64> {
    debug_assert!(count > degree, "count must be at least degree + 1");

    let span = count - degree;
    let mut knots = Vec::with_capacity(count + degree + 1);
    knots.extend(std::iter::repeat(0.0).take(degree));
    knots.extend((0..=span).map(|k| k as f64));
    knots.extend(std::iter::repeat(span as f64).take(degree));
    knots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_knots_concrete() {
        let knots = default_knots(5, 1);
        assert_eq!(knots, vec![0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 4.0]);
    }

    #[test]
    fn test_default_knots_cubic() {
        let knots = default_knots(5, 3);
        assert_eq!(knots, vec![0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_knot_length_invariant() {
        for degree in 1..=5 {
            for count in (degree + 1)..(degree + 12) {
                let knots = default_knots(count, degree);
                assert_eq!(
                    knots.len(),
                    count + degree + 1,
                    "wrong length for count={} degree={}",
                    count,
                    degree
                );
            }
        }
    }

    #[test]
    fn test_knot_clamping_invariant() {
        for degree in 1..=4 {
            for count in (degree + 1)..(degree + 8) {
                let knots = default_knots(count, degree);

                // Leading degree entries all equal the first interior value
                let first = knots[degree];
                assert!(knots[..degree].iter().all(|&k| k == first));

                // Trailing degree entries all equal the last interior value
                let last = knots[knots.len() - 1 - degree];
                assert!(knots[knots.len() - degree..].iter().all(|&k| k == last));
            }
        }
    }

    #[test]
    fn test_knots_non_decreasing() {
        let knots = default_knots(9, 3);
        for pair in knots.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }
}
