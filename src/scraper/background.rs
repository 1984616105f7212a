use ::scraper::Selector;
use tracing::debug;

use crate::error::Result;
use crate::model::Background;
use crate::scraper::{normalize_url, Html};

/// Numeric id used by the `/miniprofile/{id}` endpoint, read from the
/// `data-miniprofile` attribute of the avatar. `0` when absent.
pub fn parse_mini_profile_id(document: &Html) -> Result<u64> {
    let avatar_selector = Selector::parse(".playerAvatar[data-miniprofile]")?;
    Ok(document
        .select(&avatar_selector)
        .next()
        .and_then(|avatar| avatar.value().attr("data-miniprofile"))
        .and_then(|id| id.trim().parse().ok())
        .unwrap_or(0))
}

/// Nameplate media sources of a mini profile, keyed by media subtype.
///
/// Sources without a `type` are keyed `typeless{index}`. Empty when the
/// mini profile has no nameplate.
pub fn parse_background(mini_profile: &Html) -> Result<Background> {
    let container_selector = Selector::parse(".miniprofile_nameplatecontainer")?;
    let source_selector = Selector::parse("video source")?;

    let mut background = Background::new();
    let Some(container) = mini_profile.select(&container_selector).next() else {
        return Ok(background);
    };

    for (index, source) in container.select(&source_selector).enumerate() {
        let key = source
            .value()
            .attr("type")
            .and_then(|t| t.split('/').nth(1))
            .map(str::to_string)
            .unwrap_or_else(|| format!("typeless{index}"));
        let src = source
            .value()
            .attr("src")
            .map(normalize_url)
            .unwrap_or_default();
        background.insert(key, src);
    }

    debug!(count = background.len(), "parsed mini profile background");
    Ok(background)
}
