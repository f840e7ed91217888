//! Recognition and progression core for an offline katakana learning
//! game. The embedding shell (canvas, DOM, audio) collects pointer
//! strokes and renders results; this crate owns the handwriting scoring,
//! the learning-progression state machine, and its durable persistence.

pub mod content;
pub mod progression;
pub mod recognition;
pub mod session;

// Re-export key types at crate root for convenience
pub use content::rooms::{RoomDef, TaskDef, TaskKind, FIRST_ROOM, ROOMS};
pub use content::story::{StoryPage, StoryWord, TextSegment, STORY_PAGES, STORY_WORDS};
pub use content::templates::CharTemplate;
pub use progression::gate;
pub use progression::rules::{RoomClear, StoryAdvance};
pub use progression::state::{ProgressState, Settings};
pub use progression::store::{
    FileStorage, MemoryStorage, ProgressStorage, ProgressStore, STORAGE_KEY,
};
pub use recognition::{
    compare_strokes, normalize, recognize, resample, Attempt, Stroke, MIN_STROKE_POINTS,
    PASS_THRESHOLD, RESAMPLE_POINTS,
};
pub use session::{
    GameSession, RetryEscalation, TaskCompletion, TraceOutcome, TraceSession, HINT_THRESHOLD,
};
