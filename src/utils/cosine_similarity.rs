/// Calculate cosine similarity between two vectors
///
/// A vector with zero magnitude on either side yields a similarity of `0.0`.
pub fn cosine_similarity(v1: &[f64], v2: &[f64]) -> f64 {
    debug_assert_eq!(
        v1.len(),
        v2.len(),
        "Vectors must have the same length for cosine similarity"
    );

    // Use iterators to reduce redundant passes through the vectors
    let (dot_product, magnitude_v1_sq, magnitude_v2_sq) = v1.iter().zip(v2).fold(
        (0.0f64, 0.0f64, 0.0f64),
        |(dot, mag1, mag2), (&a, &b)| (dot + a * b, mag1 + a * a, mag2 + b * b),
    );

    let magnitude_v1 = magnitude_v1_sq.sqrt();
    let magnitude_v2 = magnitude_v2_sq.sqrt();

    if magnitude_v1 == 0.0 || magnitude_v2 == 0.0 {
        return 0.0;
    }

    // Rounding can push parallel vectors marginally outside of [-1, 1]
    (dot_product / (magnitude_v1 * magnitude_v2)).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_direction() {
        let similarity = cosine_similarity(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
        assert!((similarity - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_opposite_direction() {
        let similarity = cosine_similarity(&[1.0, -2.0, 0.5], &[-1.0, 2.0, -0.5]);
        assert!((similarity + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_orthogonal() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 3.0]), 0.0);
    }

    #[test]
    fn test_zero_vector() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]), 0.0);
        assert_eq!(cosine_similarity(&[1.0, 2.0], &[0.0, 0.0]), 0.0);
    }
}
