use ::scraper::{ElementRef, Selector};
use itertools::Itertools;
use tracing::debug;

use crate::error::Result;
use crate::model::{Badge, GameInfo};
use crate::scraper::games::{complete_badge, parse_achievements};
use crate::scraper::{
    ensure_public, first_element_child, parse_app_id, select_src, select_text, Html,
};

/// Parse the favorite game showcase, `None` if the profile does not show one.
pub fn parse_favorite_game(document: &Html) -> Result<Option<GameInfo>> {
    ensure_public(document)?;

    let showcase_selector = Selector::parse(".favoritegame_showcase")?;
    let Some(showcase) = document.select(&showcase_selector).next() else {
        return Ok(None);
    };

    let title_selector = Selector::parse(".showcase_item_detail_title")?;
    let link_selector = Selector::parse(".showcase_item_detail_title a[href]")?;
    let img_selector = Selector::parse("img")?;
    let stats_row_selector = Selector::parse(".showcase_stats_row")?;
    let stats_selector = Selector::parse(".game_info_stats")?;

    let name = select_text(&showcase, &title_selector);
    let app_id = parse_app_id(
        showcase
            .select(&link_selector)
            .next()
            .and_then(|a| a.value().attr("href")),
    );

    let icon_url = first_element_child(&showcase)
        .and_then(|content| select_src(&content, &img_selector))
        .or_else(|| select_src(&showcase, &img_selector))
        .unwrap_or_default();

    let playtime = showcase
        .select(&stats_row_selector)
        .next()
        .and_then(|row| first_element_child(&row))
        .map(|stat| joined_text(&stat))
        .unwrap_or_default();

    let stats = showcase.select(&stats_selector).next();
    let achievements = stats.map(|s| parse_achievements(&s)).transpose()?.flatten();
    let badge = stats.map(|s| parse_showcase_badge(&s)).transpose()?.flatten();

    debug!(%name, app_id, "parsed favorite game");

    Ok(Some(GameInfo {
        name,
        app_id,
        icon_url,
        playtime,
        last_played: None,
        badge,
        achievements,
    }))
}

/// `"12.9"` and `"Hours played"` live in separate children; join them with a space.
fn joined_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .join(" ")
}

/// Badge inside the showcase's stats block (`.game_info_badge_border`).
fn parse_showcase_badge(stats: &ElementRef) -> Result<Option<Badge>> {
    let border_selector = Selector::parse(".game_info_badge_border")?;
    let img_selector = Selector::parse("img")?;
    let name_selector = Selector::parse(".game_info_badge_description .name")?;
    let xp_selector = Selector::parse(".game_info_badge_description .xp")?;

    let Some(border) = stats.select(&border_selector).next() else {
        return Ok(None);
    };

    Ok(complete_badge(
        Some(select_text(&border, &name_selector)),
        select_src(&border, &img_selector),
        Some(select_text(&border, &xp_selector)),
    ))
}
