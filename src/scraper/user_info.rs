use ::scraper::{ElementRef, Selector};
use itertools::Itertools;
use tracing::debug;

use crate::error::Result;
use crate::model::{Badge, UserInfo};
use crate::scraper::background::parse_background;
use crate::scraper::games::complete_badge;
use crate::scraper::{
    element_text, ensure_public, first_element_child, select_src, select_text, Html,
};

/// Parse the identity block of a profile page.
///
/// `background` is only filled in when a mini profile document is given;
/// fetching that document is up to the caller.
pub fn parse_user_info(document: &Html, mini_profile: Option<&Html>) -> Result<UserInfo> {
    ensure_public(document)?;

    let root = document.root_element();

    let name_selector = Selector::parse("bdi")?;
    let name = select_text(&root, &name_selector);

    let nickname_selector = Selector::parse(".actual_persona_name")?;
    let nickname = select_text(&root, &nickname_selector);

    let avatar_url = parse_avatar(&root)?;

    let frame_selector = Selector::parse(".profile_avatar_frame img")?;
    let avatar_frame_url = select_src(&root, &frame_selector);

    let background = mini_profile.map(parse_background).transpose()?;

    let country = parse_country(&root)?;

    let summary_selector = Selector::parse(".profile_summary")?;
    let summary = select_text(&root, &summary_selector);

    let badge_icons = parse_badge_icons(&root)?;
    let featured_badge = parse_featured_badge(&root)?;
    let level = parse_level(&root)?;

    debug!(%nickname, level, "parsed user info");

    Ok(UserInfo {
        name,
        nickname,
        avatar_url,
        avatar_frame_url,
        background,
        country,
        summary,
        badge_icons,
        featured_badge,
        level,
    })
}

/// The avatar image, skipping the frame drawn on top of it.
fn parse_avatar(root: &ElementRef) -> Result<String> {
    let direct_selector = Selector::parse(".playerAvatarAutoSizeInner > img")?;
    let picture_selector = Selector::parse(".playerAvatarAutoSizeInner > picture img")?;
    Ok(select_src(root, &direct_selector)
        .or_else(|| select_src(root, &picture_selector))
        .unwrap_or_default())
}

/// Location text that follows the real name and flag in `.header_real_name`.
fn parse_country(root: &ElementRef) -> Result<Option<String>> {
    let block_selector = Selector::parse(".header_real_name")?;
    let Some(block) = root.select(&block_selector).next() else {
        return Ok(None);
    };

    Ok(block
        .children()
        .filter_map(|node| node.value().as_text())
        .map(|text| text.trim())
        .filter(|text| !text.is_empty())
        .last()
        .map(str::to_string))
}

/// Icons of the sidebar badges, `None` when the profile shows none.
fn parse_badge_icons(root: &ElementRef) -> Result<Option<Vec<String>>> {
    let badge_selector = Selector::parse(".profile_badges_badge")?;
    let img_selector = Selector::parse("img")?;

    let icons = root
        .select(&badge_selector)
        .map(|badge| select_src(&badge, &img_selector).unwrap_or_default())
        .collect_vec();

    Ok(Some(icons).filter(|icons| !icons.is_empty()))
}

fn parse_featured_badge(root: &ElementRef) -> Result<Option<Badge>> {
    let badge_selector = Selector::parse(".favorite_badge")?;
    let img_selector = Selector::parse("img")?;
    let description_selector = Selector::parse(".favorite_badge_description")?;
    let xp_selector = Selector::parse(".xp")?;

    let Some(badge) = root.select(&badge_selector).next() else {
        return Ok(None);
    };

    let icon_url = select_src(&badge, &img_selector);
    let description = badge.select(&description_selector).next();
    let name = description
        .as_ref()
        .and_then(first_element_child)
        .map(|name| element_text(&name));
    let xp = description.map(|d| select_text(&d, &xp_selector));

    Ok(complete_badge(name, icon_url, xp))
}

/// Profile level, `0` when missing or not a number.
fn parse_level(root: &ElementRef) -> Result<u32> {
    let level_selector = Selector::parse(".persona_level")?;
    let level = root
        .select(&level_selector)
        .next()
        .map(|level| {
            first_element_child(&level)
                .map(|num| element_text(&num))
                .unwrap_or_else(|| element_text(&level))
        })
        .and_then(|text| text.parse().ok())
        .unwrap_or(0);
    Ok(level)
}
