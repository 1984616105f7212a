use ::scraper::{ElementRef, Selector};
use itertools::Itertools;
use tracing::debug;

use crate::error::Result;
use crate::model::{Badge, GameInfo};
use crate::scraper::{
    element_text, ensure_public, first_element_child, parse_app_id, select_src, select_text, Html,
};

/// Layout of the first child of a `.game_info_stats` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AchievementsLayout {
    /// `game_info_achievements_only_ctn`: achievements without a badge.
    OnlyAchievements,
    /// `game_info_achievements_badge`: achievements next to a game badge.
    AchievementsWithBadge,
}

impl AchievementsLayout {
    fn from_element(element: &ElementRef) -> Option<Self> {
        let classes = element.value().classes().collect_vec();
        if classes.contains(&"game_info_achievements_only_ctn") {
            Some(AchievementsLayout::OnlyAchievements)
        } else if classes.contains(&"game_info_achievements_badge") {
            Some(AchievementsLayout::AchievementsWithBadge)
        } else {
            None
        }
    }
}

/// Parse every recent game in document order.
///
/// Returns `None` when the profile has no recent games block.
pub fn parse_recent_games(document: &Html) -> Result<Option<Vec<GameInfo>>> {
    ensure_public(document)?;

    let Some(block) = recent_games_block(document)? else {
        return Ok(None);
    };

    let entry_selector = Selector::parse(".recent_game_content")?;
    let games = block
        .select(&entry_selector)
        .map(|entry| parse_recent_game(&entry))
        .collect::<Result<Vec<_>>>()?;

    debug!(count = games.len(), "parsed recent games");
    Ok(Some(games))
}

pub(crate) fn recent_games_block(document: &Html) -> Result<Option<ElementRef<'_>>> {
    let block_selector = Selector::parse(".recent_games")?;
    Ok(document.select(&block_selector).next())
}

/// Parse a single `.recent_game_content` entry.
pub(crate) fn parse_recent_game(entry: &ElementRef) -> Result<GameInfo> {
    let info_selector = Selector::parse(".game_info")?;
    let name_selector = Selector::parse(".game_name")?;
    let link_selector = Selector::parse(".game_name a[href]")?;
    let cap_selector = Selector::parse(".game_info_cap img")?;
    let img_selector = Selector::parse("img")?;
    let details_selector = Selector::parse(".game_info_details")?;
    let stats_selector = Selector::parse(".game_info_stats")?;

    let (name, app_id, icon_url, playtime, last_played) =
        match entry.select(&info_selector).next() {
            Some(info) => {
                let name = select_text(&info, &name_selector);
                let app_id = parse_app_id(
                    info.select(&link_selector)
                        .next()
                        .and_then(|a| a.value().attr("href")),
                );
                let icon_url = select_src(&info, &cap_selector)
                    .or_else(|| select_src(&info, &img_selector))
                    .unwrap_or_default();
                let (playtime, last_played) = info
                    .select(&details_selector)
                    .next()
                    .map(|details| split_details(&details))
                    .unwrap_or_default();
                (name, app_id, icon_url, playtime, last_played)
            }
            None => Default::default(),
        };

    let stats = entry.select(&stats_selector).next();
    let achievements = stats.map(|s| parse_achievements(&s)).transpose()?.flatten();
    let badge = stats.map(|s| parse_game_badge(&s)).transpose()?.flatten();

    Ok(GameInfo {
        name,
        app_id,
        icon_url,
        playtime,
        last_played,
        badge,
        achievements,
    })
}

/// Split the details blob (`"1,168 hrs on record<br>last played on 4 Jan"`)
/// into playtime and last-played lines.
fn split_details(details: &ElementRef) -> (String, Option<String>) {
    let lines = details
        .text()
        .flat_map(str::lines)
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect_vec();
    let playtime = lines.first().map(|l| l.to_string()).unwrap_or_default();
    let last_played = lines.get(1).map(|l| l.to_string());
    (playtime, last_played)
}

/// Achievement progress from a `.game_info_stats` block.
///
/// Both known layouts read the same summary path; any other layout has none.
pub(crate) fn parse_achievements(stats: &ElementRef) -> Result<Option<String>> {
    let summary_selector = Selector::parse(
        ".game_info_achievements .game_info_achievements_summary_area > span > span",
    )?;

    let Some(first) = first_element_child(stats) else {
        return Ok(None);
    };

    let achievements = match AchievementsLayout::from_element(&first) {
        Some(AchievementsLayout::OnlyAchievements) => select_text(&first, &summary_selector),
        Some(AchievementsLayout::AchievementsWithBadge) => select_text(&first, &summary_selector),
        None => return Ok(None),
    };
    Ok(Some(achievements))
}

/// Badge shown next to a recent game (`.game_info_badge`).
pub(crate) fn parse_game_badge(stats: &ElementRef) -> Result<Option<Badge>> {
    let badge_selector = Selector::parse(".game_info_badge")?;
    let icon_selector = Selector::parse(".game_info_badge_icon img")?;
    let img_selector = Selector::parse("img")?;
    let description_selector = Selector::parse(".game_info_badge_description")?;
    let xp_selector = Selector::parse(".xp")?;

    let Some(badge) = stats.select(&badge_selector).next() else {
        return Ok(None);
    };

    let icon_url =
        select_src(&badge, &icon_selector).or_else(|| select_src(&badge, &img_selector));
    let description = badge.select(&description_selector).next();
    let name = description
        .as_ref()
        .and_then(first_element_child)
        .map(|name| element_text(&name));
    let xp = description.map(|d| select_text(&d, &xp_selector));

    Ok(complete_badge(name, icon_url, xp))
}

/// A badge is only reported when every field is present.
pub(crate) fn complete_badge(
    name: Option<String>,
    icon_url: Option<String>,
    xp: Option<String>,
) -> Option<Badge> {
    let non_empty = |s: Option<String>| s.filter(|s| !s.is_empty());
    Some(Badge {
        name: non_empty(name)?,
        icon_url: non_empty(icon_url)?,
        xp: non_empty(xp)?,
    })
}
