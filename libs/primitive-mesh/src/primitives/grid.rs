//! Subdivision coordinates shared by every face of the cube.

/// Returns `factor + 1` coordinates spanning `[-radius, radius]`.
///
/// The endpoints are pinned to exactly `-radius` and `radius` so that
/// adjacent faces meet on bit-identical edges. Interior values step by
/// `2 * radius / factor`.
///
/// # Examples
/// ```
/// use primitive_mesh::primitives::grid::subdivisions;
/// assert_eq!(subdivisions(1.0, 2), vec![-1.0, 0.0, 1.0]);
/// assert_eq!(subdivisions(0.5, 1), vec![-0.5, 0.5]);
/// ```
pub fn subdivisions(radius: f64, factor: u32) -> Vec<f64> {
    let step = (radius * 2.0) / f64::from(factor);
    let mut subs = Vec::with_capacity(factor as usize + 1);

    subs.push(-radius);
    subs.extend((1..factor).map(|i| step * f64::from(i) - radius));
    subs.push(radius);

    subs
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_endpoints_are_exact() {
        for factor in 1..=17 {
            let subs = subdivisions(0.3, factor);
            assert_eq!(subs.len(), factor as usize + 1);
            assert_eq!(subs[0], -0.3);
            assert_eq!(subs[factor as usize], 0.3);
        }
    }

    #[test]
    fn test_interior_is_evenly_spaced() {
        let subs = subdivisions(1.5, 6);
        for pair in subs.windows(2) {
            assert_relative_eq!(pair[1] - pair[0], 0.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_values_are_increasing() {
        let subs = subdivisions(2.0, 9);
        assert!(subs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_negative_radius_is_not_validated() {
        assert_eq!(subdivisions(-1.0, 2), vec![1.0, 0.0, -1.0]);
    }
}
