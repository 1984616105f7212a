use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::Badge;

/// Animated nameplate media from the mini profile, keyed by media subtype
/// (`"webm"`, `"mp4"`, or `"typeless{index}"`).
pub type Background = BTreeMap<String, String>;

/// Identity block of a profile page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInfo {
    /// Real name as entered by the user.
    pub name: String,
    pub nickname: String,
    pub avatar_url: String,
    pub avatar_frame_url: Option<String>,
    pub background: Option<Background>,
    pub country: Option<String>,
    pub summary: String,
    /// Icons of the badges shown in the profile sidebar.
    pub badge_icons: Option<Vec<String>>,
    pub featured_badge: Option<Badge>,
    pub level: u32,
}

/// The subset of [`UserInfo`] carried by a [`crate::model::BasicProfile`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicUserInfo {
    pub nickname: String,
    pub avatar_url: String,
    pub avatar_frame_url: Option<String>,
    pub level: u32,
    pub featured_badge: Option<Badge>,
    pub background: Option<Background>,
}

impl From<UserInfo> for BasicUserInfo {
    fn from(info: UserInfo) -> Self {
        Self {
            nickname: info.nickname,
            avatar_url: info.avatar_url,
            avatar_frame_url: info.avatar_frame_url,
            level: info.level,
            featured_badge: info.featured_badge,
            background: info.background,
        }
    }
}
