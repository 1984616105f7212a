//! Scraper for public Steam Community profile pages.
//!
//! Profiles can be read from a vanity name, a SteamID64, a profile URL or
//! markup the caller already has. [`SteamClient`] is the configurable entry
//! point; the free functions use a default client.

pub use client::SteamClient;
pub use error::{Result, SteamError};
pub use input::{ProfileId, ProfileInput};
pub use model::*;
pub use profile::{
    get_basic_profile, get_custom_user, get_favorite_game, get_mini_profile_id, get_profile,
    get_recent_games, get_status, get_user_info, resolve, ProfileHandle,
};
pub use crate::scraper::background::{parse_background, parse_mini_profile_id};
pub use crate::scraper::games::parse_recent_games;
pub use crate::scraper::selection::{parse_custom_user, Selection};
pub use crate::scraper::showcase::parse_favorite_game;
pub use crate::scraper::status::parse_status;
pub use crate::scraper::user_info::parse_user_info;

pub mod client;
pub mod error;
pub mod input;
pub mod model;
pub mod profile;
pub(crate) mod scraper;
