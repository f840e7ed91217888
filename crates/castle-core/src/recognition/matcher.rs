// recognition/matcher.rs
//
// Similarity scoring between two normalized point sequences.

use glam::Vec2;

/// Score the similarity of two equal-length normalized point sequences.
///
/// Computes the mean per-point Euclidean distance and converts it to a
/// score `1 − min(1, mean)`, so 1.0 means identical shape and 0.0 means
/// no resemblance. Deterministic, no side effects.
pub fn compare_strokes(a: &[Vec2], b: &[Vec2]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "compare_strokes expects equal lengths");
    if a.is_empty() {
        return 0.0;
    }

    let total: f32 = a.iter().zip(b).map(|(p, q)| p.distance(*q)).sum();
    1.0 - (total / a.len() as f32).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize, y: f32) -> Vec<Vec2> {
        (0..n)
            .map(|i| Vec2::new(i as f32 / (n - 1) as f32, y))
            .collect()
    }

    #[test]
    fn identical_strokes_score_one() {
        let a = line(32, 0.5);
        assert!((compare_strokes(&a, &a) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn close_strokes_score_high() {
        let a = line(32, 0.5);
        let b = line(32, 0.55);
        let score = compare_strokes(&a, &b);
        assert!(score > 0.9, "score was {score}");
    }

    #[test]
    fn distant_strokes_score_low() {
        let a = line(32, 0.0);
        let b = line(32, 1.0);
        let score = compare_strokes(&a, &b);
        assert!((score - 0.0).abs() < 1e-6, "score was {score}");
    }

    #[test]
    fn score_never_negative() {
        // Mean distance beyond 1.0 clamps instead of going negative.
        let a = vec![Vec2::ZERO; 8];
        let b = vec![Vec2::new(3.0, 4.0); 8];
        assert_eq!(compare_strokes(&a, &b), 0.0);
    }

    #[test]
    fn empty_input_scores_zero() {
        assert_eq!(compare_strokes(&[], &[]), 0.0);
    }
}
