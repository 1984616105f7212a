use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

use strum::IntoEnumIterator;
use tracing::debug;

use crate::error::{Result, SteamError};
use crate::model::{
    CustomProfile, ShowcaseComponent, ShowcaseField, UserComponent, UserField,
};
use crate::scraper::games::parse_recent_games;
use crate::scraper::showcase::parse_favorite_game;
use crate::scraper::status::parse_status;
use crate::scraper::user_info::parse_user_info;
use crate::scraper::Html;

const MAX_SHOWCASE_FIELDS: usize = 2;

/// Which components a custom profile request asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub user: BTreeSet<UserField>,
    /// `None` when no showcase selector was given.
    pub showcase: Option<BTreeSet<ShowcaseField>>,
}

impl Selection {
    /// Parse a user selector and a showcase selector.
    ///
    /// User selector: absent, or names separated by commas that are all
    /// prefixed with `+` (only these) or all with `-` (all but these), e.g.
    /// `"+status, +recentGames"` or `"-userInfo"`. Showcase selector: up to
    /// two names, e.g. `"favoriteGame"`. Unknown names are ignored.
    pub fn parse(user_selector: Option<&str>, showcase_selector: Option<&str>) -> Result<Self> {
        Ok(Self {
            user: parse_user_selector(user_selector)?,
            showcase: parse_showcase_selector(showcase_selector)?,
        })
    }

    /// Whether the identity block, and with it the background, is selected.
    pub fn wants_user_info(&self) -> bool {
        self.user.contains(&UserField::UserInfo)
    }
}

fn non_blank(selector: Option<&str>) -> Option<&str> {
    selector.map(str::trim).filter(|s| !s.is_empty())
}

fn named_fields<F: FromStr + Ord>(selector: &str, prefix: char) -> BTreeSet<F> {
    selector
        .replace(prefix, "")
        .split(',')
        .filter_map(|name| name.trim().parse().ok())
        .collect()
}

fn parse_user_selector(selector: Option<&str>) -> Result<BTreeSet<UserField>> {
    let all: BTreeSet<UserField> = UserField::iter().collect();
    let Some(selector) = non_blank(selector) else {
        return Ok(all);
    };

    let include = selector.contains('+');
    let exclude = selector.contains('-');
    match (include, exclude) {
        (true, true) => Err(SteamError::InvalidSelection(format!(
            "user selector {selector:?} mixes '+' and '-'"
        ))),
        (false, true) => {
            let excluded = named_fields::<UserField>(selector, '-');
            Ok(all.difference(&excluded).copied().collect())
        }
        (true, false) => Ok(named_fields(selector, '+')),
        (false, false) => Ok(all),
    }
}

fn parse_showcase_selector(selector: Option<&str>) -> Result<Option<BTreeSet<ShowcaseField>>> {
    let Some(selector) = non_blank(selector) else {
        return Ok(None);
    };

    let stripped = selector.replace('+', "");
    let count = stripped.split(',').count();
    if count > MAX_SHOWCASE_FIELDS {
        return Err(SteamError::InvalidSelection(format!(
            "showcase selector {selector:?} names {count} showcases, at most {MAX_SHOWCASE_FIELDS} allowed"
        )));
    }

    Ok(Some(named_fields(&stripped, '+')))
}

/// Assemble the selected components from a single document.
pub fn parse_custom_user(
    document: &Html,
    selection: &Selection,
    mini_profile: Option<&Html>,
) -> Result<CustomProfile> {
    let mut user = BTreeMap::new();
    for field in &selection.user {
        let component = match field {
            UserField::Status => UserComponent::Status(parse_status(document)?),
            UserField::UserInfo => {
                UserComponent::UserInfo(parse_user_info(document, mini_profile)?)
            }
            UserField::RecentGames => UserComponent::RecentGames(parse_recent_games(document)?),
        };
        user.insert(*field, component);
    }

    let showcase = match &selection.showcase {
        Some(fields) => {
            let mut showcase = BTreeMap::new();
            for field in fields {
                let component = match field {
                    ShowcaseField::FavoriteGame => {
                        ShowcaseComponent::FavoriteGame(parse_favorite_game(document)?)
                    }
                };
                showcase.insert(*field, component);
            }
            Some(showcase)
        }
        None => None,
    };

    debug!(
        user = user.len(),
        showcase = showcase.as_ref().map(BTreeMap::len),
        "assembled custom profile"
    );

    Ok(CustomProfile { user, showcase })
}
