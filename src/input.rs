use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use crate::error::{Result, SteamError};

const PROFILE_HOSTS: [&str; 2] = ["steamcommunity.com", "www.steamcommunity.com"];

/// Something a profile document can be obtained from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileInput {
    /// Raw profile page HTML, used as is.
    Markup(String),
    /// A `steamcommunity.com/id/...` or `steamcommunity.com/profiles/...` URL.
    Url(String),
    /// Custom profile name, fetched from `/id/{name}`.
    Vanity(String),
    /// SteamID64, fetched from `/profiles/{id}`.
    SteamId(u64),
}

/// Identifier a profile page is fetched by.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ProfileId {
    Vanity(String),
    SteamId(u64),
}

impl ProfileId {
    /// Path of the profile page relative to the community base URL.
    pub fn path(&self) -> String {
        match self {
            ProfileId::Vanity(name) => format!("/id/{name}"),
            ProfileId::SteamId(id) => format!("/profiles/{id}"),
        }
    }

    /// A vanity identifier, rejecting names that are not a single
    /// `[A-Za-z0-9_-]` path segment.
    pub fn vanity(name: &str) -> Result<Self> {
        if is_vanity_name(name) {
            Ok(ProfileId::Vanity(name.to_string()))
        } else {
            Err(SteamError::InvalidInput(format!(
                "not a steam vanity name: {name:?}"
            )))
        }
    }

    /// Split a full profile URL into its identifier.
    pub fn from_url(url: &str) -> Result<Self> {
        let invalid = || SteamError::InvalidInput(format!("not a steam profile url: {url}"));

        let rest = url
            .trim()
            .strip_prefix("https://")
            .or_else(|| url.trim().strip_prefix("http://"))
            .ok_or_else(invalid)?;
        let rest = rest.split(['?', '#']).next().unwrap_or_default();

        let segments = rest.split('/').filter(|s| !s.is_empty()).collect_vec();
        match segments.as_slice() {
            [host, "id", vanity, ..] if PROFILE_HOSTS.contains(host) => {
                ProfileId::vanity(vanity).map_err(|_| invalid())
            }
            [host, "profiles", id, ..] if PROFILE_HOSTS.contains(host) => id
                .parse::<u64>()
                .map(ProfileId::SteamId)
                .map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileId::Vanity(name) => write!(f, "{name}"),
            ProfileId::SteamId(id) => write!(f, "{id}"),
        }
    }
}

fn is_vanity_name(s: &str) -> bool {
    !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

impl FromStr for ProfileInput {
    type Err = SteamError;

    /// Classify a caller-supplied string as a URL, markup, or vanity name.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
            Ok(ProfileInput::Url(trimmed.to_string()))
        } else if trimmed.contains('<') {
            Ok(ProfileInput::Markup(s.to_string()))
        } else if is_vanity_name(trimmed) {
            Ok(ProfileInput::Vanity(trimmed.to_string()))
        } else {
            Err(SteamError::InvalidInput(format!(
                "expected profile html, url, vanity name or steam id, got {s:?}"
            )))
        }
    }
}

/// Short form for logs; markup is reported by size only.
impl fmt::Display for ProfileInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileInput::Markup(markup) => write!(f, "<markup, {} bytes>", markup.len()),
            ProfileInput::Url(url) => write!(f, "{url}"),
            ProfileInput::Vanity(name) => write!(f, "{name}"),
            ProfileInput::SteamId(id) => write!(f, "{id}"),
        }
    }
}

impl From<u64> for ProfileInput {
    fn from(id: u64) -> Self {
        ProfileInput::SteamId(id)
    }
}

impl From<ProfileId> for ProfileInput {
    fn from(id: ProfileId) -> Self {
        match id {
            ProfileId::Vanity(name) => ProfileInput::Vanity(name),
            ProfileId::SteamId(id) => ProfileInput::SteamId(id),
        }
    }
}
