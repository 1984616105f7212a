use ::scraper::{ElementRef, Selector};
use tracing::debug;

use crate::error::Result;
use crate::model::{ActiveGame, Status, StatusKind};
use crate::scraper::games::{parse_recent_game, recent_games_block};
use crate::scraper::{element_text, first_element_child, has_class, Html};

/// Parse the status block of a profile page.
///
/// Status is read even from private profiles.
pub fn parse_status(document: &Html) -> Result<Status> {
    let header_selector = Selector::parse(".profile_in_game_header")?;
    let status_text = document
        .select(&header_selector)
        .next()
        .map(|e| element_text(&e))
        .unwrap_or_default();

    let kind = status_indicator(document)?
        .map(|indicator| status_kind(&indicator))
        .unwrap_or_default();

    let active_game = match kind {
        StatusKind::InGame => Some(parse_active_game(document)?),
        StatusKind::Online | StatusKind::Offline => None,
    };

    debug!(%kind, %status_text, "parsed status");

    Ok(Status {
        kind,
        active_game,
        status_text,
    })
}

/// First element child of `.responsive_status_info`.
fn status_indicator(document: &Html) -> Result<Option<ElementRef<'_>>> {
    let info_selector = Selector::parse(".responsive_status_info")?;
    Ok(document
        .select(&info_selector)
        .next()
        .and_then(|info| first_element_child(&info)))
}

/// Unrecognized class combinations fall back to offline.
fn status_kind(indicator: &ElementRef) -> StatusKind {
    if has_class(indicator, "in-game") {
        StatusKind::InGame
    } else if has_class(indicator, "online") {
        StatusKind::Online
    } else {
        StatusKind::Offline
    }
}

/// The first recent game if the profile lists any, else just the in-game name.
fn parse_active_game(document: &Html) -> Result<ActiveGame> {
    let entry_selector = Selector::parse(".recent_game_content")?;
    let first_entry = recent_games_block(document)?
        .and_then(|block| block.select(&entry_selector).next());

    if let Some(entry) = first_entry {
        return Ok(ActiveGame::Game(parse_recent_game(&entry)?));
    }

    let name_selector = Selector::parse(".profile_in_game_name")?;
    let name = document
        .select(&name_selector)
        .next()
        .map(|e| element_text(&e))
        .unwrap_or_default();
    Ok(ActiveGame::Name(name))
}
