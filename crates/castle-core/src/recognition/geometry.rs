// recognition/geometry.rs
//
// Point-sequence preprocessing for the stroke recognizer.
// Pure math — no dependency on templates or game state.

use glam::Vec2;

/// Resample a polyline to exactly `n` points at equal arc-length intervals.
///
/// The first input point is always preserved. If the arc-length walk runs
/// short due to floating accumulation, the output is padded with the final
/// input point. Inputs with fewer than 2 points (or `n < 2`) are returned
/// unchanged — there is no polyline to walk.
pub fn resample(points: &[Vec2], n: usize) -> Vec<Vec2> {
    if points.len() < 2 || n < 2 {
        return points.to_vec();
    }

    let total_len: f32 = points.windows(2).map(|w| w[0].distance(w[1])).sum();
    let interval = total_len / (n - 1) as f32;
    if !(interval > 0.0) {
        // All points coincide; the polyline has no length to walk.
        return vec![points[0]; n];
    }

    let mut result = Vec::with_capacity(n);
    result.push(points[0]);
    // Distance covered since the last emitted sample.
    let mut carry = 0.0;

    for i in 1..points.len() {
        let seg = points[i] - points[i - 1];
        let seg_len = seg.length();
        if seg_len <= 0.0 {
            continue;
        }
        let mut walked = 0.0;
        while carry + (seg_len - walked) >= interval {
            walked += interval - carry;
            result.push(points[i - 1] + seg * (walked / seg_len));
            carry = 0.0;
            if result.len() >= n {
                return result;
            }
        }
        carry += seg_len - walked;
    }

    let last = points[points.len() - 1];
    while result.len() < n {
        result.push(last);
    }
    result
}

/// Map the bounding box of `points` onto the unit square [0,1]×[0,1].
///
/// A dimension with zero extent (a perfectly horizontal or vertical stroke)
/// divides by 1 instead — the stroke keeps its offset-from-minimum in that
/// dimension rather than triggering a divide-by-zero. Degenerate-case
/// policy, not an error.
pub fn normalize(points: &[Vec2]) -> Vec<Vec2> {
    let mut min = Vec2::splat(f32::INFINITY);
    let mut max = Vec2::splat(f32::NEG_INFINITY);
    for p in points {
        min = min.min(*p);
        max = max.max(*p);
    }

    let mut extent = max - min;
    if extent.x <= 0.0 {
        extent.x = 1.0;
    }
    if extent.y <= 0.0 {
        extent.y = 1.0;
    }

    points.iter().map(|p| (*p - min) / extent).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diagonal(n: usize) -> Vec<Vec2> {
        (0..n).map(|i| Vec2::splat(i as f32 * 10.0)).collect()
    }

    #[test]
    fn resample_returns_exact_count() {
        for input_len in [2, 3, 7, 50] {
            for n in [2, 8, 32, 64] {
                let out = resample(&diagonal(input_len), n);
                assert_eq!(out.len(), n, "input {input_len} → {n}");
            }
        }
    }

    #[test]
    fn resample_preserves_first_point() {
        let pts = vec![Vec2::new(3.0, 7.0), Vec2::new(90.0, 40.0)];
        let out = resample(&pts, 32);
        assert_eq!(out[0], pts[0]);
    }

    #[test]
    fn resample_spacing_is_uniform() {
        let pts = vec![Vec2::ZERO, Vec2::new(100.0, 0.0)];
        let out = resample(&pts, 11);
        for w in out.windows(2) {
            let gap = w[0].distance(w[1]);
            assert!((gap - 10.0).abs() < 0.01, "gap was {gap}");
        }
    }

    #[test]
    fn resample_short_input_unchanged() {
        let one = vec![Vec2::new(5.0, 5.0)];
        assert_eq!(resample(&one, 32), one);
        let none: Vec<Vec2> = Vec::new();
        assert!(resample(&none, 32).is_empty());
    }

    #[test]
    fn resample_coincident_points_does_not_hang() {
        let pts = vec![Vec2::new(4.0, 4.0); 5];
        let out = resample(&pts, 16);
        assert_eq!(out.len(), 16);
        assert!(out.iter().all(|p| *p == Vec2::new(4.0, 4.0)));
    }

    #[test]
    fn normalize_maps_into_unit_square() {
        let pts = vec![
            Vec2::new(40.0, 200.0),
            Vec2::new(90.0, 310.0),
            Vec2::new(15.0, 260.0),
        ];
        for p in normalize(&pts) {
            assert!((0.0..=1.0).contains(&p.x), "x out of range: {}", p.x);
            assert!((0.0..=1.0).contains(&p.y), "y out of range: {}", p.y);
        }
    }

    #[test]
    fn normalize_hits_unit_corners() {
        let pts = vec![Vec2::new(10.0, 20.0), Vec2::new(110.0, 220.0)];
        let out = normalize(&pts);
        assert_eq!(out[0], Vec2::ZERO);
        assert_eq!(out[1], Vec2::ONE);
    }

    #[test]
    fn normalize_zero_height_does_not_divide_by_zero() {
        // Perfectly horizontal stroke: y extent is zero.
        let pts = vec![Vec2::new(0.0, 50.0), Vec2::new(80.0, 50.0)];
        let out = normalize(&pts);
        assert!(out.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
        assert_eq!(out[0].y, 0.0);
        assert_eq!(out[1].y, 0.0);
    }

    #[test]
    fn normalize_zero_width_does_not_divide_by_zero() {
        let pts = vec![Vec2::new(50.0, 0.0), Vec2::new(50.0, 80.0)];
        let out = normalize(&pts);
        assert!(out.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    }
}
