use serde::Serialize;

/// A game as shown in the recent activity list, the in-game status block,
/// or the favorite game showcase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameInfo {
    pub name: String,
    /// Steam app id, `0` when the store link is missing or malformed.
    pub app_id: u32,
    pub icon_url: String,
    /// e.g. `"1,168 hrs on record"` or `"12.9 Hours played"`.
    pub playtime: String,
    /// e.g. `"last played on 4 Jan"`. Always `None` for showcase games.
    pub last_played: Option<String>,
    pub badge: Option<Badge>,
    /// Achievement progress such as `"4 of 6"`.
    pub achievements: Option<String>,
}

/// A game badge or a profile's featured badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub name: String,
    pub icon_url: String,
    pub xp: String,
}
