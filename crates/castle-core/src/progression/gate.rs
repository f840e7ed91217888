// progression/gate.rs
//
// Sequential task gating within a room: tasks unlock in order, and a room
// with no remaining task is ready for the clear flow.

use super::state::ProgressState;
use crate::content::rooms::RoomDef;

/// Index of the first not-yet-done task in the room, or `None` when every
/// task is done (the signal to run the room-clear flow).
pub fn next_task(state: &ProgressState, room: &RoomDef) -> Option<usize> {
    (0..room.tasks.len()).find(|&i| !state.task_done(room.id, i))
}

/// A task is locked while its predecessor is not done. Task 0 is never
/// locked.
pub fn is_locked(state: &ProgressState, room: &RoomDef, index: usize) -> bool {
    index > 0 && !state.task_done(room.id, index - 1)
}
