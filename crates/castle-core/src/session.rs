// session.rs
//
// Session-scoped state: the per-character trace session with its retry
// escalation counter, and the game session that ties progression rules to
// the store with a commit after every mutation. Nothing here persists
// across sessions except through the store.

use glam::Vec2;

use crate::content::rooms::{room, RoomDef};
use crate::content::templates::template_strokes;
use crate::progression::gate;
use crate::progression::rules::{self, RoomClear, StoryAdvance};
use crate::progression::state::ProgressState;
use crate::progression::store::{ProgressStorage, ProgressStore};
use crate::recognition::{recognize, Attempt, PASS_THRESHOLD};

/// Consecutive failures before a hint is triggered.
pub const HINT_THRESHOLD: u32 = 3;

/// Tracks consecutive recognition failures within one trace session.
#[derive(Debug, Clone, Copy, Default)]
pub struct RetryEscalation {
    failures: u32,
}

impl RetryEscalation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failed check. Returns `true` when the failure run reaches
    /// the hint threshold; the counter resets so the hint fires once per
    /// run.
    pub fn record_failure(&mut self) -> bool {
        self.failures += 1;
        if self.failures >= HINT_THRESHOLD {
            self.failures = 0;
            return true;
        }
        false
    }

    /// A success discards the failure run.
    pub fn record_success(&mut self) {
        self.failures = 0;
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }
}

/// Outcome of checking a trace attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TraceOutcome {
    /// Nothing was drawn yet; no failure is counted.
    NothingDrawn,
    /// The drawing passed (score at or above the threshold, or the
    /// character has no authored template).
    Passed { score: f32 },
    /// The drawing failed. `hint` is set exactly when this failure
    /// completed a run of [`HINT_THRESHOLD`] consecutive misses;
    /// `remaining` counts the attempts left before the next hint.
    Failed { score: f32, hint: bool, remaining: u32 },
}

/// One character-tracing session: the captured drawing plus the retry
/// counter. Created when the trace screen opens, discarded when it closes.
#[derive(Debug, Clone)]
pub struct TraceSession {
    character: char,
    attempt: Attempt,
    retries: RetryEscalation,
}

impl TraceSession {
    pub fn new(character: char) -> Self {
        Self {
            character,
            attempt: Attempt::new(),
            retries: RetryEscalation::new(),
        }
    }

    pub fn character(&self) -> char {
        self.character
    }

    /// Capture a finished stroke. Strokes below the noise floor are
    /// dropped; returns whether the stroke was kept.
    pub fn add_stroke(&mut self, points: Vec<Vec2>) -> bool {
        self.attempt.add_stroke(points)
    }

    pub fn stroke_count(&self) -> usize {
        self.attempt.len()
    }

    /// Discard the drawing (user hit clear). The failure run is kept —
    /// clearing the canvas is not a fresh start.
    pub fn clear_drawing(&mut self) {
        self.attempt.clear();
    }

    pub fn failures(&self) -> u32 {
        self.retries.failures()
    }

    /// Score the captured drawing against the character's template.
    ///
    /// A character without an authored template always passes, so content
    /// missing a template never blocks progress. On failure the drawing is
    /// discarded for the retry and the escalation counter advances.
    pub fn check(&mut self) -> TraceOutcome {
        if self.attempt.is_empty() {
            return TraceOutcome::NothingDrawn;
        }

        let Some(reference) = template_strokes(self.character) else {
            return TraceOutcome::Passed { score: 1.0 };
        };

        let score = recognize(self.attempt.strokes(), &reference);
        if score >= PASS_THRESHOLD {
            self.retries.record_success();
            return TraceOutcome::Passed { score };
        }

        self.attempt.clear();
        let hint = self.retries.record_failure();
        let remaining = if hint {
            0
        } else {
            HINT_THRESHOLD - self.retries.failures()
        };
        TraceOutcome::Failed { score, hint, remaining }
    }
}

/// What happened when the current task was completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskCompletion {
    /// Room-clear result, including any newly unlocked room.
    pub room_clear: RoomClear,
    /// The next task to offer in this room, or `None` when the room is
    /// done.
    pub next_task: Option<usize>,
}

/// One player's play session: the authoritative in-memory state, its
/// store, and the current room/task cursors. Every mutation commits to
/// the store on the same logical turn.
pub struct GameSession<S: ProgressStorage> {
    store: ProgressStore<S>,
    pub state: ProgressState,
    current_room: Option<&'static RoomDef>,
    current_task: usize,
}

impl<S: ProgressStorage> GameSession<S> {
    /// Open a session, loading whatever state the storage holds.
    pub fn new(storage: S) -> Self {
        let store = ProgressStore::new(storage);
        let state = store.load();
        Self {
            store,
            state,
            current_room: None,
            current_task: 0,
        }
    }

    fn commit(&mut self) {
        self.store.save(&self.state);
    }

    pub fn current_room(&self) -> Option<&'static RoomDef> {
        self.current_room
    }

    pub fn current_task(&self) -> usize {
        self.current_task
    }

    /// Record a word interaction. Commits only when the word is newly
    /// mastered.
    pub fn master_word(&mut self, word_id: &str) -> bool {
        let newly = rules::mark_word_mastered(&mut self.state, word_id);
        if newly {
            self.commit();
        }
        newly
    }

    /// Show a story page; the cursor is persisted so reopening the story
    /// resumes where the player left off.
    pub fn open_story_page(&mut self, page: usize) {
        rules::set_story_page(&mut self.state, page);
        self.commit();
    }

    pub fn advance_story(&mut self) -> StoryAdvance {
        let outcome = rules::advance_story(&mut self.state);
        self.commit();
        outcome
    }

    pub fn retreat_story(&mut self) -> usize {
        let page = rules::retreat_story(&mut self.state);
        self.commit();
        page
    }

    /// Update audio volumes (clamped to [0,1]), committing immediately.
    pub fn set_volumes(&mut self, bgm: f32, se: f32) {
        self.state.settings.bgm_vol = bgm.clamp(0.0, 1.0);
        self.state.settings.se_vol = se.clamp(0.0, 1.0);
        self.commit();
    }

    /// Enter a room if it is unlocked; positions the cursor on its next
    /// open task.
    pub fn enter_room(&mut self, room_id: &str) -> bool {
        let Some(def) = room(room_id) else {
            return false;
        };
        if !self.state.is_room_unlocked(def.id) {
            return false;
        }
        self.current_room = Some(def);
        self.current_task = gate::next_task(&self.state, def).unwrap_or(0);
        true
    }

    /// Start a specific task in the current room; refuses locked tasks.
    pub fn start_task(&mut self, index: usize) -> bool {
        let Some(def) = self.current_room else {
            return false;
        };
        if index >= def.tasks.len() || gate::is_locked(&self.state, def, index) {
            return false;
        }
        self.current_task = index;
        true
    }

    /// Complete the current task: mark it done, commit, then run the
    /// room-clear check (which may award the star and unlock the next
    /// room, committing again on that transition).
    pub fn complete_task(&mut self) -> Option<TaskCompletion> {
        let def = self.current_room?;
        if rules::mark_task_done(&mut self.state, def.id, self.current_task) {
            self.commit();
        }
        let room_clear = rules::check_room_clear(&mut self.state, def.id);
        if room_clear.newly_cleared {
            self.commit();
        }
        let next_task = gate::next_task(&self.state, def);
        if let Some(next) = next_task {
            self.current_task = next;
        }
        Some(TaskCompletion { room_clear, next_task })
    }

    /// Hand back the underlying storage (simulated restart in tests).
    pub fn into_storage(self) -> S {
        self.store.into_inner()
    }
}
