//! Dominant-eigenvector computation via power iteration.
//!
//! The routine iterates the matrix directly, so it accepts signed entries
//! (required for vengeful-cooperation input) and never assumes
//! non-negativity. The returned vector has unit L2 norm, with the sign fixed
//! so that the component of largest magnitude is non-negative.

/// Iteration cap used by [`dominant_eigenvector`].
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Convergence tolerance used by [`dominant_eigenvector`].
pub const DEFAULT_TOLERANCE: f64 = 1e-8;

/// Computes the dominant eigenvector of a square matrix with default
/// iteration cap and tolerance.
///
/// # Returns
///
/// * `Some(vector)` - a unit-L2-norm eigenvector estimate
/// * `None` - if the matrix is empty or not square
///
/// # Examples
///
/// ```
/// use dilemma_stats::eigen::dominant_eigenvector;
///
/// let matrix = vec![vec![3.0, 0.0], vec![0.0, 1.0]];
/// let vector = dominant_eigenvector(&matrix).unwrap();
/// assert!((vector[0] - 1.0).abs() < 1e-6);
/// ```
#[must_use]
pub fn dominant_eigenvector(matrix: &[Vec<f64>]) -> Option<Vec<f64>> {
    power_iteration(matrix, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE)
}

/// Computes the dominant eigenvector of a square matrix by power iteration.
///
/// Iteration stops when successive estimates differ by less than `tolerance`
/// in L2 distance, or after `max_iterations` steps. If the matrix maps the
/// current estimate to (numerically) zero, the current estimate is returned
/// unchanged; every vector is an eigenvector of the zero matrix.
///
/// # Arguments
///
/// * `matrix` - a square matrix, one inner `Vec` per row
/// * `max_iterations` - upper bound on iteration count
/// * `tolerance` - L2 convergence threshold
///
/// # Returns
///
/// * `Some(vector)` - a unit-L2-norm eigenvector estimate
/// * `None` - if the matrix is empty or not square
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn power_iteration(
    matrix: &[Vec<f64>],
    max_iterations: usize,
    tolerance: f64,
) -> Option<Vec<f64>> {
    let n = matrix.len();
    if n == 0 || matrix.iter().any(|row| row.len() != n) {
        return None;
    }

    // A ramp start breaks symmetry; a uniform start can coincide with a
    // non-dominant eigenvector and never leave it.
    let mut vector: Vec<f64> = (1..=n).map(|i| i as f64).collect();
    let norm = l2_norm(&vector);
    for value in &mut vector {
        *value /= norm;
    }

    for _ in 0..max_iterations {
        let mut next = multiply(matrix, &vector);
        let norm = l2_norm(&next);
        if norm < f64::EPSILON {
            break;
        }
        for value in &mut next {
            *value /= norm;
        }
        let delta = l2_distance(&next, &vector);
        vector = next;
        if delta < tolerance {
            break;
        }
    }

    fix_sign(&mut vector);
    Some(vector)
}

fn multiply(matrix: &[Vec<f64>], vector: &[f64]) -> Vec<f64> {
    matrix
        .iter()
        .map(|row| {
            row.iter()
                .zip(vector)
                .map(|(entry, component)| entry * component)
                .sum()
        })
        .collect()
}

fn l2_norm(vector: &[f64]) -> f64 {
    vector.iter().map(|v| v * v).sum::<f64>().sqrt()
}

fn l2_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).powi(2))
        .sum::<f64>()
        .sqrt()
}

/// Negates the vector if its largest-magnitude component is negative, so two
/// runs over the same matrix always agree on orientation.
fn fix_sign(vector: &mut [f64]) {
    let dominant = vector
        .iter()
        .copied()
        .max_by(|a, b| a.abs().total_cmp(&b.abs()));
    if let Some(dominant) = dominant
        && dominant < 0.0
    {
        for value in &mut *vector {
            *value = -*value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-6;

    #[test]
    fn test_rejects_non_square() {
        assert_eq!(dominant_eigenvector(&[]), None);
        assert_eq!(dominant_eigenvector(&[vec![1.0, 2.0]]), None);
    }

    #[test]
    fn test_diagonal_matrix() {
        let matrix = vec![vec![5.0, 0.0], vec![0.0, 2.0]];
        let vector = dominant_eigenvector(&matrix).unwrap();
        assert!((vector[0] - 1.0).abs() < TOLERANCE);
        assert!(vector[1].abs() < TOLERANCE);
    }

    #[test]
    fn test_symmetric_matrix() {
        // Dominant eigenvector of [[2, 1], [1, 2]] is (1, 1) / sqrt(2).
        let matrix = vec![vec![2.0, 1.0], vec![1.0, 2.0]];
        let vector = dominant_eigenvector(&matrix).unwrap();
        let expected = 1.0 / 2.0_f64.sqrt();
        assert!((vector[0] - expected).abs() < TOLERANCE);
        assert!((vector[1] - expected).abs() < TOLERANCE);
    }

    #[test]
    fn test_unit_norm_result() {
        let matrix = vec![
            vec![1.0, 0.5, 0.2],
            vec![0.5, 1.0, 0.7],
            vec![0.2, 0.7, 1.0],
        ];
        let vector = dominant_eigenvector(&matrix).unwrap();
        assert!((l2_norm(&vector) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_signed_matrix() {
        // Vengeful-cooperation style input: signed entries, dominant
        // eigenvalue still well defined.
        let matrix = vec![vec![1.0, -0.5], vec![-0.5, 1.0]];
        let vector = dominant_eigenvector(&matrix).unwrap();
        assert!((l2_norm(&vector) - 1.0).abs() < TOLERANCE);
        // Eigenvector for eigenvalue 1.5 is (1, -1) / sqrt(2), either sign;
        // the orientation fix makes the dominant component positive.
        assert!((vector[0].abs() - vector[1].abs()).abs() < TOLERANCE);
        assert!(vector[0] * vector[1] < 0.0);
    }

    #[test]
    fn test_zero_matrix() {
        let matrix = vec![vec![0.0, 0.0], vec![0.0, 0.0]];
        let vector = dominant_eigenvector(&matrix).unwrap();
        assert!((l2_norm(&vector) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_deterministic() {
        let matrix = vec![vec![0.9, 0.4], vec![0.4, 0.1]];
        let first = dominant_eigenvector(&matrix).unwrap();
        let second = dominant_eigenvector(&matrix).unwrap();
        assert_eq!(first, second);
    }
}
