// progression/state.rs
//
// The persisted progress aggregate and its JSON schema. Field names match
// the save format ("bblearn_v1"); unknown or missing fields are backfilled
// with defaults so an old or hand-edited save never hard-fails.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::content::rooms::{FIRST_ROOM, ROOMS};
use crate::content::story::STORY_PAGES;

/// Key for a task's done flag in `task_progress`: `"{room_id}_{index}"`.
pub fn task_key(room_id: &str, index: usize) -> String {
    format!("{room_id}_{index}")
}

/// Story-module progress: mastered words, the earned key, and the reader's
/// page cursor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryProgress {
    /// Word ids the player has tapped at least once. Grows monotonically.
    #[serde(default)]
    pub words_mastered: Vec<String>,
    /// Set exactly once when the story module is completed; never reverts.
    #[serde(default)]
    pub key_earned: bool,
    /// 0-indexed page cursor, bounded by the story length.
    #[serde(default)]
    pub story_page: usize,
}

impl Default for StoryProgress {
    fn default() -> Self {
        Self {
            words_mastered: Vec::new(),
            key_earned: false,
            story_page: 0,
        }
    }
}

/// Castle-module progress: per-room stars, the unlocked-room prefix, and
/// per-task done flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastleProgress {
    /// Room id → star count (single-star model: 0 or 1).
    #[serde(default = "default_room_stars")]
    pub room_stars: HashMap<String, u8>,
    /// Unlocked rooms; always a prefix of the room order.
    #[serde(default = "default_rooms_unlocked")]
    pub rooms_unlocked: Vec<String>,
    /// `"{room_id}_{index}"` → done flag.
    #[serde(default)]
    pub task_progress: HashMap<String, bool>,
}

fn default_room_stars() -> HashMap<String, u8> {
    ROOMS.iter().map(|r| (r.id.to_string(), 0)).collect()
}

fn default_rooms_unlocked() -> Vec<String> {
    vec![FIRST_ROOM.to_string()]
}

impl Default for CastleProgress {
    fn default() -> Self {
        Self {
            room_stars: default_room_stars(),
            rooms_unlocked: default_rooms_unlocked(),
            task_progress: HashMap::new(),
        }
    }
}

/// Player-adjustable audio settings, persisted alongside progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "bgmVol", default = "default_bgm_vol")]
    pub bgm_vol: f32,
    #[serde(rename = "seVol", default = "default_se_vol")]
    pub se_vol: f32,
}

fn default_bgm_vol() -> f32 {
    0.5
}

fn default_se_vol() -> f32 {
    0.7
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bgm_vol: default_bgm_vol(),
            se_vol: default_se_vol(),
        }
    }
}

/// The full persisted aggregate. Mutated in place by the progression rules
/// and committed to the store after every mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressState {
    #[serde(default)]
    pub module1: StoryProgress,
    #[serde(default)]
    pub module2: CastleProgress,
    #[serde(default)]
    pub settings: Settings,
}

impl ProgressState {
    /// Restore structural invariants after loading persisted data:
    /// every known room has a star entry, stars are 0 or 1, the unlocked
    /// set is a non-empty prefix of the room order, the story cursor is
    /// in range, and volumes are within [0,1].
    pub fn sanitize(&mut self) {
        for r in ROOMS {
            let star = self.module2.room_stars.entry(r.id.to_string()).or_insert(0);
            *star = (*star).min(1);
        }

        let unlocked: Vec<String> = {
            let stored = &self.module2.rooms_unlocked;
            let prefix_len = ROOMS
                .iter()
                .take_while(|r| stored.iter().any(|id| id == r.id))
                .count()
                .max(1);
            ROOMS[..prefix_len].iter().map(|r| r.id.to_string()).collect()
        };
        self.module2.rooms_unlocked = unlocked;

        if self.module1.story_page >= STORY_PAGES.len() {
            self.module1.story_page = STORY_PAGES.len() - 1;
        }

        self.settings.bgm_vol = self.settings.bgm_vol.clamp(0.0, 1.0);
        self.settings.se_vol = self.settings.se_vol.clamp(0.0, 1.0);
    }

    pub fn is_word_mastered(&self, word_id: &str) -> bool {
        self.module1.words_mastered.iter().any(|w| w == word_id)
    }

    pub fn task_done(&self, room_id: &str, index: usize) -> bool {
        self.module2
            .task_progress
            .get(&task_key(room_id, index))
            .copied()
            .unwrap_or(false)
    }

    pub fn star(&self, room_id: &str) -> u8 {
        self.module2.room_stars.get(room_id).copied().unwrap_or(0)
    }

    pub fn is_room_unlocked(&self, room_id: &str) -> bool {
        self.module2.rooms_unlocked.iter().any(|r| r == room_id)
    }

    /// Whether this state represents any actual play (drives the title
    /// screen's continue button).
    pub fn has_save(&self) -> bool {
        !self.module1.words_mastered.is_empty() || self.star(FIRST_ROOM) > 0
    }
}
