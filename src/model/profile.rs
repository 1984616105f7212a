use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{BasicUserInfo, GameInfo, Status, UserInfo};

/// Lightweight summary: status plus a fixed subset of the identity block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BasicProfile {
    pub status: Status,
    pub user_info: BasicUserInfo,
}

/// Everything on a profile page except the showcases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub status: Status,
    pub user_info: UserInfo,
    pub recent_games: Option<Vec<GameInfo>>,
}

/// User-facing components selectable through a user selector.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum UserField {
    Status,
    UserInfo,
    RecentGames,
}

/// Showcase components selectable through a showcase selector.
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    Eq,
    PartialEq,
    Ord,
    PartialOrd,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ShowcaseField {
    FavoriteGame,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UserComponent {
    Status(Status),
    UserInfo(UserInfo),
    RecentGames(Option<Vec<GameInfo>>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ShowcaseComponent {
    FavoriteGame(Option<GameInfo>),
}

/// Result of a custom selection: the requested user components and,
/// if a showcase selector was given, the requested showcase components.
///
/// An absent showcase selector yields `showcase: None`, which is distinct
/// from a selector that matched nothing (`Some` of an empty map).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CustomProfile {
    pub user: BTreeMap<UserField, UserComponent>,
    pub showcase: Option<BTreeMap<ShowcaseField, ShowcaseComponent>>,
}

impl CustomProfile {
    pub fn status(&self) -> Option<&Status> {
        match self.user.get(&UserField::Status) {
            Some(UserComponent::Status(status)) => Some(status),
            _ => None,
        }
    }

    pub fn user_info(&self) -> Option<&UserInfo> {
        match self.user.get(&UserField::UserInfo) {
            Some(UserComponent::UserInfo(info)) => Some(info),
            _ => None,
        }
    }

    /// Outer `None`: not selected. Inner `None`: selected, but the profile has no recent games.
    pub fn recent_games(&self) -> Option<Option<&[GameInfo]>> {
        match self.user.get(&UserField::RecentGames) {
            Some(UserComponent::RecentGames(games)) => Some(games.as_deref()),
            _ => None,
        }
    }

    /// Outer `None`: not selected. Inner `None`: selected, but the profile has no favorite game.
    pub fn favorite_game(&self) -> Option<Option<&GameInfo>> {
        let showcase = self.showcase.as_ref()?;
        match showcase.get(&ShowcaseField::FavoriteGame) {
            Some(ShowcaseComponent::FavoriteGame(game)) => Some(game.as_ref()),
            None => None,
        }
    }
}
