// recognition/engine.rs
//
// Orchestrates resampling, normalization and stroke matching into a single
// confidence score for a multi-stroke drawing attempt.

use glam::Vec2;

use super::geometry::{normalize, resample};
use super::matcher::compare_strokes;

/// Every stroke is resampled to this many points before comparison.
pub const RESAMPLE_POINTS: usize = 32;

/// Recognition scores at or above this value count as a pass.
/// Callers own the pass/fail decision; the engine only reports the score.
pub const PASS_THRESHOLD: f32 = 0.52;

/// Strokes with fewer captured points than this are dropped as noise
/// (accidental taps) before they enter an attempt.
pub const MIN_STROKE_POINTS: usize = 3;

/// One continuous pointer drag, as an ordered point sequence.
pub type Stroke = Vec<Vec2>;

/// The set of strokes a user draws for one recognition check.
/// Unordered across strokes, ordered within each stroke.
#[derive(Debug, Clone, Default)]
pub struct Attempt {
    strokes: Vec<Stroke>,
}

impl Attempt {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a captured stroke. Strokes shorter than [`MIN_STROKE_POINTS`]
    /// are discarded as noise; returns whether the stroke was retained.
    pub fn add_stroke(&mut self, points: Vec<Vec2>) -> bool {
        if points.len() < MIN_STROKE_POINTS {
            return false;
        }
        self.strokes.push(points);
        true
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Discard all captured strokes (user cleared the canvas).
    /// No side effects beyond dropping the pending drawing.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }
}

/// Score a drawing attempt against a reference template, returning a
/// confidence in [0,1].
///
/// Either side empty scores 0. When the stroke counts differ by more than
/// one, both sides are flattened into a single "blob" sequence and compared
/// as one shape — this tolerates a user drawing one continuous curve for a
/// multi-stroke character. Otherwise each attempt stroke greedily claims
/// the best-scoring unclaimed template stroke, and the score sum is divided
/// by the larger stroke count so both missing and extra strokes cost.
///
/// The greedy assignment is deliberately not a minimum-cost matching: the
/// pass threshold was tuned against this exact behavior.
pub fn recognize(attempt: &[Stroke], template: &[Stroke]) -> f32 {
    if attempt.is_empty() || template.is_empty() {
        return 0.0;
    }

    let user: Vec<Vec<Vec2>> = attempt
        .iter()
        .map(|s| normalize(&resample(s, RESAMPLE_POINTS)))
        .collect();
    let refs: Vec<Vec<Vec2>> = template
        .iter()
        .map(|s| normalize(&resample(s, RESAMPLE_POINTS)))
        .collect();

    // Stroke counts too far apart: merge each side into one blob and
    // compare the combined shapes.
    if user.len().abs_diff(refs.len()) > 1 {
        let all_user: Vec<Vec2> = user.iter().flatten().copied().collect();
        let all_refs: Vec<Vec2> = refs.iter().flatten().copied().collect();
        let big_n = all_user.len().max(all_refs.len());
        let u = normalize(&resample(&all_user, big_n));
        let r = normalize(&resample(&all_refs, big_n));
        return compare_strokes(&u, &r);
    }

    // Greedy stroke-by-stroke matching, each template stroke claimed once.
    let mut total = 0.0;
    let mut claimed = vec![false; refs.len()];
    for us in &user {
        let mut best = -1.0;
        let mut best_idx = None;
        for (j, rs) in refs.iter().enumerate() {
            if claimed[j] {
                continue;
            }
            let score = compare_strokes(us, rs);
            if score > best {
                best = score;
                best_idx = Some(j);
            }
        }
        if let Some(j) = best_idx {
            claimed[j] = true;
            total += best;
        }
    }
    total / user.len().max(refs.len()) as f32
}
