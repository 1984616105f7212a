use serde::Serialize;

use crate::model::GameInfo;

/// Online state read from the profile's status indicator.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
pub enum StatusKind {
    Online,
    #[default]
    Offline,
    #[serde(rename = "In-Game")]
    #[strum(serialize = "In-Game")]
    InGame,
}

/// What a user is currently playing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ActiveGame {
    /// Full entry taken from the recent games block.
    Game(GameInfo),
    /// Only the game name, when the profile shows no recent games.
    Name(String),
}

impl ActiveGame {
    pub fn name(&self) -> &str {
        match self {
            ActiveGame::Game(game) => &game.name,
            ActiveGame::Name(name) => name,
        }
    }
}

/// Current status of a profile.
///
/// `active_game` is only ever set when `kind` is [`StatusKind::InGame`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub kind: StatusKind,
    pub active_game: Option<ActiveGame>,
    pub status_text: String,
}
