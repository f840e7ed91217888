//! Handwriting stroke recognition: geometry preprocessing, stroke
//! similarity scoring, and the multi-stroke recognition engine.

pub mod engine;
pub mod geometry;
pub mod matcher;

pub use engine::{recognize, Attempt, Stroke, MIN_STROKE_POINTS, PASS_THRESHOLD, RESAMPLE_POINTS};
pub use geometry::{normalize, resample};
pub use matcher::compare_strokes;
