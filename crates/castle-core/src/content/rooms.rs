// content/rooms.rs
//
// Module 2 authored content: the four castle rooms in unlock order, each
// with an ordered task list. The core only tracks task completion; the
// tagged TaskKind variants tell the presentation layer what to render.

/// What a task asks the player to do. The core is agnostic to the content
/// beyond completion tracking — the shell renders and judges these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    /// Tap a button a target number of times.
    TapCount {
        target: u32,
        button: &'static str,
        emoji: &'static str,
    },
    /// Pick the katakana word matching a prompt.
    KataChoice {
        image: &'static str,
        correct: &'static str,
        choices: &'static [&'static str],
        audio: &'static str,
    },
    /// Simple addition with answer choices.
    MathAdd {
        a: u32,
        b: u32,
        emoji: &'static str,
        choices: &'static [u32],
    },
    /// Count the pictured items.
    Count {
        items: &'static str,
        count: u32,
        choices: &'static [u32],
    },
    /// Find a number of hidden items in the scene.
    FindHidden { total: u32, emoji: &'static str },
}

/// One task within a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskDef {
    /// Short label shown in the room's task list.
    pub label: &'static str,
    /// Title shown on the task screen.
    pub title: &'static str,
    /// The question text read to the player.
    pub question: &'static str,
    pub kind: TaskKind,
}

/// A castle room with its ordered task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomDef {
    /// Stable identifier used in persisted state.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    pub icon: &'static str,
    pub desc: &'static str,
    /// Theme color for the room screen.
    pub color: &'static str,
    pub tasks: &'static [TaskDef],
}

/// Rooms in unlock order. `rooms_unlocked` in the persisted state is
/// always a prefix of this list.
pub const ROOMS: &[RoomDef] = &[
    RoomDef {
        id: "ballroom",
        name: "ボールルーム",
        icon: "💃",
        desc: "ビーストと いっしょに おどろう！",
        color: "#2D1B69",
        tasks: &[
            TaskDef {
                label: "おどる！を タップ",
                title: "ダンス",
                question: "ビーストと ベルが おどっているよ！\n「おどる！」を 8かい タップしよう！",
                kind: TaskKind::TapCount { target: 8, button: "おどる！", emoji: "🎶" },
            },
            TaskDef {
                label: "ドレスの なまえは？",
                title: "カタカナもんだい",
                question: "ベルの ドレスを えらんでね！",
                kind: TaskKind::KataChoice {
                    image: "👗",
                    correct: "レッドドレス",
                    choices: &["レッドドレス", "ブルードレス", "ローズ"],
                    audio: "kata_red_dress",
                },
            },
            TaskDef {
                label: "足し算：3 ＋ 2",
                title: "さんすう",
                question: "パーティーに おきゃくさんが きたよ！",
                kind: TaskKind::MathAdd { a: 3, b: 2, emoji: "🧑", choices: &[3, 4, 5, 6] },
            },
        ],
    },
    RoomDef {
        id: "dining",
        name: "ダイニング",
        icon: "🍽️",
        desc: "おりょうりを かぞえよう！",
        color: "#2D1B50",
        tasks: &[
            TaskDef {
                label: "おさらを かぞえよう",
                title: "かずのべんきょう",
                question: "テーブルの おさらを かぞえてね！",
                kind: TaskKind::Count { items: "🍽️🍽️🍽️🍽️🍽️🍽️", count: 6, choices: &[4, 5, 6, 7] },
            },
            TaskDef {
                label: "足し算：4 ＋ 1",
                title: "さんすう",
                question: "ケーキを わけるよ！\nいくつに なるかな？",
                kind: TaskKind::MathAdd { a: 4, b: 1, emoji: "🎂", choices: &[3, 4, 5, 6] },
            },
            TaskDef {
                label: "ろうそくを かぞえよう",
                title: "かずのべんきょう",
                question: "ケーキの ろうそくを かぞえてね！",
                kind: TaskKind::Count { items: "🕯️🕯️🕯️🕯️🕯️🕯️🕯️", count: 7, choices: &[5, 6, 7, 8] },
            },
        ],
    },
    RoomDef {
        id: "library",
        name: "としょしつ",
        icon: "📚",
        desc: "カタカナを よもう！",
        color: "#1A3050",
        tasks: &[
            TaskDef {
                label: "カタカナを えらぼう",
                title: "カタカナもんだい",
                question: "「ダンス」という ことばは\nどれかな？",
                kind: TaskKind::KataChoice {
                    image: "🎶",
                    correct: "ダンス",
                    choices: &["ダンス", "ローズ", "ベル"],
                    audio: "kata_dance",
                },
            },
            TaskDef {
                label: "カタカナを えらぼう",
                title: "カタカナもんだい",
                question: "バラのはなを あらわす\nカタカナは？",
                kind: TaskKind::KataChoice {
                    image: "🌹",
                    correct: "ローズ",
                    choices: &["パーティー", "ローズ", "ビースト"],
                    audio: "kata_rose",
                },
            },
            TaskDef {
                label: "カタカナを よもう",
                title: "カタカナよみもの",
                question: "おしろで おどる へやの なまえは？",
                kind: TaskKind::KataChoice {
                    image: "💃",
                    correct: "ボールルーム",
                    choices: &["ボールルーム", "ダンス", "パーティー"],
                    audio: "kata_ballroom",
                },
            },
        ],
    },
    RoomDef {
        id: "westwing",
        name: "ひみつのにし",
        icon: "🌹",
        desc: "かくれた バラをさがそう！",
        color: "#3D1A2D",
        tasks: &[
            TaskDef {
                label: "バラを 3つ さがそう！",
                title: "かくれんぼ",
                question: "ひみつのにしに かくれている\nバラを 3つ さがしてね！",
                kind: TaskKind::FindHidden { total: 3, emoji: "🌹" },
            },
            TaskDef {
                label: "足し算：10 ＋ 5",
                title: "さんすう",
                question: "バラが へやの あちこちに！\nあわせて いくつ？",
                kind: TaskKind::MathAdd { a: 10, b: 5, emoji: "🌹", choices: &[13, 14, 15, 16] },
            },
            TaskDef {
                label: "カタカナを あわせよう",
                title: "カタカナまとめ",
                question: "おしろの ぬしの なまえは？",
                kind: TaskKind::KataChoice {
                    image: "👹",
                    correct: "ビースト",
                    choices: &["ビースト", "ローズ", "パーティー"],
                    audio: "kata_beast",
                },
            },
        ],
    },
];

/// The room every new save starts with.
pub const FIRST_ROOM: &str = "ballroom";

/// Look up a room by its identifier.
pub fn room(id: &str) -> Option<&'static RoomDef> {
    ROOMS.iter().find(|r| r.id == id)
}

/// Position of a room in unlock order.
pub fn room_index(id: &str) -> Option<usize> {
    ROOMS.iter().position(|r| r.id == id)
}

/// The room unlocked after `id`, if any.
pub fn next_room(id: &str) -> Option<&'static RoomDef> {
    ROOMS.get(room_index(id)? + 1)
}
