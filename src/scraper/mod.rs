pub(crate) mod background;
pub(crate) mod games;
pub(crate) mod selection;
pub(crate) mod showcase;
pub(crate) mod status;
pub(crate) mod user_info;

#[cfg(test)]
pub(crate) mod fixtures;

pub(crate) use ::scraper::Html;
use ::scraper::{ElementRef, Selector};
use tracing::debug;

use crate::error::{Result, SteamError};

pub(crate) const BASE_URL: &str = "https://steamcommunity.com";

/// Fetch a URL and return the response body.
///
/// The body is returned unparsed so callers can keep it across `.await`
/// points and parse it into an [`Html`] only where it is queried.
pub(crate) async fn fetch_markup(client: &reqwest::Client, url: &str) -> Result<String> {
    debug!(url, "fetching page");

    let response = client.get(url).send().await.map_err(|e| SteamError::Http {
        url: url.to_owned(),
        source: e,
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(SteamError::NotFound {
            url: url.to_owned(),
            status,
        });
    }

    response.text().await.map_err(|e| SteamError::ResponseBody {
        url: url.to_owned(),
        source: e,
    })
}

/// Fail with [`SteamError::PrivateProfile`] if the page carries the private-profile marker.
pub(crate) fn ensure_public(document: &Html) -> Result<()> {
    let private_selector = Selector::parse(".profile_private_info")?;
    if document.select(&private_selector).next().is_some() {
        return Err(SteamError::PrivateProfile);
    }
    Ok(())
}

/// Concatenated, trimmed text content of an element.
pub(crate) fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first element matching `selector` inside `element`.
/// Returns an empty string if nothing matches.
pub(crate) fn select_text(element: &ElementRef, selector: &Selector) -> String {
    element
        .select(selector)
        .next()
        .map(|e| element_text(&e))
        .unwrap_or_default()
}

/// `src` of the first image matching `selector` inside `element`, normalized.
pub(crate) fn select_src(element: &ElementRef, selector: &Selector) -> Option<String> {
    element
        .select(selector)
        .find_map(|e| e.value().attr("src"))
        .map(normalize_url)
}

/// First element child, skipping text and comment nodes.
pub(crate) fn first_element_child<'a>(element: &ElementRef<'a>) -> Option<ElementRef<'a>> {
    element.children().find_map(ElementRef::wrap)
}

pub(crate) fn has_class(element: &ElementRef, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}

/// Parse the app id from the last path segment of a store or community link
/// (`https://steamcommunity.com/app/730` -> 730). Returns 0 when unparsable.
pub(crate) fn parse_app_id(href: Option<&str>) -> u32 {
    href.and_then(|h| h.split(['?', '#']).next())
        .and_then(|h| h.split('/').filter(|s| !s.is_empty()).next_back())
        .and_then(|segment| segment.parse().ok())
        .unwrap_or(0)
}

/// Normalize a potentially relative URL to an absolute steamcommunity.com URL.
pub(crate) fn normalize_url(src: &str) -> String {
    let src = src.trim();
    if src.starts_with("//") {
        format!("https:{src}")
    } else if src.starts_with('/') {
        format!("{BASE_URL}{src}")
    } else {
        src.to_string()
    }
}
