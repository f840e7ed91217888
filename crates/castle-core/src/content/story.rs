// content/story.rs
//
// Module 1 authored content: the six katakana story words, the five story
// pages, and the per-word character breakdown used by trace lessons.

/// A katakana vocabulary word taught by the story.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryWord {
    /// Stable identifier used in persisted state.
    pub id: &'static str,
    /// Katakana spelling shown to the player.
    pub kana: &'static str,
    /// English gloss.
    pub english: &'static str,
    /// Audio cue key the shell resolves to a voice clip.
    pub audio: &'static str,
    /// Emoji shown next to the word.
    pub emoji: &'static str,
}

pub const STORY_WORDS: &[StoryWord] = &[
    StoryWord { id: "beast", kana: "ビースト", english: "Beast", audio: "kata_beast", emoji: "👹" },
    StoryWord { id: "bell", kana: "ベル", english: "Belle", audio: "kata_bell", emoji: "👸" },
    StoryWord { id: "ballroom", kana: "ボールルーム", english: "Ballroom", audio: "kata_ballroom", emoji: "💃" },
    StoryWord { id: "dance", kana: "ダンス", english: "Dance", audio: "kata_dance", emoji: "🎶" },
    StoryWord { id: "party", kana: "パーティー", english: "Party", audio: "kata_party", emoji: "🎉" },
    StoryWord { id: "rose", kana: "ローズ", english: "Rose", audio: "kata_rose", emoji: "🌹" },
];

/// Look up a story word by its identifier.
pub fn word(id: &str) -> Option<&'static StoryWord> {
    STORY_WORDS.iter().find(|w| w.id == id)
}

/// The katakana characters making up a word, in writing order.
/// Drives the per-character trace lessons.
pub fn word_chars(id: &str) -> Option<&'static [char]> {
    match id {
        "beast" => Some(&['ビ', 'ー', 'ス', 'ト']),
        "bell" => Some(&['ベ', 'ル']),
        "ballroom" => Some(&['ボ', 'ー', 'ル', 'ル', 'ー', 'ム']),
        "dance" => Some(&['ダ', 'ン', 'ス']),
        "party" => Some(&['パ', 'ー', 'テ', 'ィ', 'ー']),
        "rose" => Some(&['ロ', 'ー', 'ズ']),
        _ => None,
    }
}

/// One page of the picture-book story.
///
/// `text` embeds tappable vocabulary as `[word_id:display]` markers;
/// [`page_segments`] splits them out for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryPage {
    /// Large emoji illustrating the page.
    pub emoji: &'static str,
    /// Page text with embedded word markers.
    pub text: &'static str,
    /// Background tint for the page.
    pub bg: &'static str,
}

pub const STORY_PAGES: &[StoryPage] = &[
    StoryPage {
        emoji: "👹",
        text: "むかしむかし、ふしぎなおしろに\n[beast:ビースト] が すんでいました。",
        bg: "#2D1B69",
    },
    StoryPage {
        emoji: "👸",
        text: "[bell:ベル] という むすめが\nそのおしろに やってきました。",
        bg: "#1A2D69",
    },
    StoryPage {
        emoji: "🏰",
        text: "ビーストは ベルを\nきれいな [ballroom:ボールルーム] へ\nあんないしました。",
        bg: "#1A3D29",
    },
    StoryPage {
        emoji: "🎶",
        text: "ふたりは いっしょに\n[dance:ダンス] を おどりました！",
        bg: "#3D2D1A",
    },
    StoryPage {
        emoji: "🌹",
        text: "[party:パーティー] のあとで\nベルは すてきな [rose:ローズ] を\nもらいました。",
        bg: "#2D1A3D",
    },
];

/// A parsed fragment of story-page text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSegment {
    /// Plain narration text (may contain newlines).
    Plain(&'static str),
    /// A tappable vocabulary word.
    Word {
        id: &'static str,
        display: &'static str,
    },
}

/// Split a page's text into plain runs and tappable word markers.
/// Malformed markers are passed through as plain text.
pub fn page_segments(text: &'static str) -> Vec<TextSegment> {
    let mut segments = Vec::new();
    let mut rest = text;
    while let Some(open) = rest.find('[') {
        let candidate = &rest[open + 1..];
        let parsed = candidate.find(']').and_then(|close| {
            let inner = &candidate[..close];
            let colon = inner.find(':')?;
            let (id, display) = (&inner[..colon], &inner[colon + 1..]);
            if id.is_empty() || display.is_empty() {
                return None;
            }
            Some((id, display, close))
        });
        match parsed {
            Some((id, display, close)) => {
                if open > 0 {
                    segments.push(TextSegment::Plain(&rest[..open]));
                }
                segments.push(TextSegment::Word { id, display });
                rest = &candidate[close + 1..];
            }
            None => {
                // No well-formed marker here; emit through the bracket.
                segments.push(TextSegment::Plain(&rest[..open + 1]));
                rest = candidate;
            }
        }
    }
    if !rest.is_empty() {
        segments.push(TextSegment::Plain(rest));
    }
    segments
}
