//! Learning-progression core: the persisted progress aggregate, its
//! durable store, task gating, and the rules that advance mastery,
//! room clearing and unlocking.

pub mod gate;
pub mod rules;
pub mod state;
pub mod store;

pub use rules::{RoomClear, StoryAdvance};
pub use state::{task_key, CastleProgress, ProgressState, Settings, StoryProgress};
pub use store::{FileStorage, MemoryStorage, ProgressStorage, ProgressStore, STORAGE_KEY};
