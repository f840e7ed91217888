//! Authored game content: story words and pages, castle rooms with their
//! task lists, and the katakana stroke templates the recognizer scores
//! against.

pub mod rooms;
pub mod story;
pub mod templates;

pub use rooms::{next_room, room, room_index, RoomDef, TaskDef, TaskKind, FIRST_ROOM, ROOMS};
pub use story::{page_segments, word, word_chars, StoryPage, StoryWord, TextSegment, STORY_PAGES, STORY_WORDS};
pub use templates::{template, template_strokes, CharTemplate};
