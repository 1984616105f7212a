use tracing::debug;

use crate::client::SteamClient;
use crate::error::{Result, SteamError};
use crate::input::{ProfileId, ProfileInput};
use crate::model::*;
use crate::scraper::background::{parse_background, parse_mini_profile_id};
use crate::scraper::games::parse_recent_games;
use crate::scraper::selection::{parse_custom_user, Selection};
use crate::scraper::showcase::parse_favorite_game;
use crate::scraper::status::parse_status;
use crate::scraper::user_info::parse_user_info;
use crate::scraper::{fetch_markup, Html};

#[derive(Debug, Clone)]
enum HandleState {
    Empty,
    /// Knows where to fetch from, nothing fetched yet.
    Identified(ProfileId),
    /// Holds the profile page. `id` is `None` when the markup was given directly.
    Resolved {
        id: Option<ProfileId>,
        markup: String,
    },
}

/// Stateful view of a single profile.
///
/// A handle fetches the profile page at most once and answers every
/// following extraction from that copy until a new input is set. Handles
/// given markup never fetch the profile page; the mini profile is still
/// fetched for the background unless supplied or disabled on the client.
#[derive(Debug, Clone)]
pub struct ProfileHandle {
    client: SteamClient,
    state: HandleState,
    mini_profile: Option<String>,
}

impl ProfileHandle {
    /// Create an empty handle; set an input before extracting.
    pub fn new(client: SteamClient) -> Self {
        Self {
            client,
            state: HandleState::Empty,
            mini_profile: None,
        }
    }

    /// Point the handle at a new profile, dropping any cached document and
    /// mini profile.
    pub fn set_input(&mut self, input: ProfileInput) -> Result<()> {
        self.state = match input {
            ProfileInput::Markup(markup) => HandleState::Resolved { id: None, markup },
            ProfileInput::Url(url) => HandleState::Identified(ProfileId::from_url(&url)?),
            ProfileInput::Vanity(name) => HandleState::Identified(ProfileId::vanity(&name)?),
            ProfileInput::SteamId(id) => HandleState::Identified(ProfileId::SteamId(id)),
        };
        self.mini_profile = None;
        Ok(())
    }

    /// Use this mini profile markup for the background instead of fetching it.
    /// Cleared by [`set_input`](Self::set_input).
    pub fn set_mini_profile_html(&mut self, markup: impl Into<String>) {
        self.mini_profile = Some(markup.into());
    }

    /// Identifier the page was or will be fetched by, `None` for given markup.
    pub fn id(&self) -> Option<&ProfileId> {
        match &self.state {
            HandleState::Empty => None,
            HandleState::Identified(id) => Some(id),
            HandleState::Resolved { id, .. } => id.as_ref(),
        }
    }

    /// The held profile page, once resolved.
    pub fn markup(&self) -> Option<&str> {
        match &self.state {
            HandleState::Resolved { markup, .. } => Some(markup),
            HandleState::Empty | HandleState::Identified(_) => None,
        }
    }

    /// Whether the profile page is held and no fetch is pending.
    pub fn is_resolved(&self) -> bool {
        matches!(self.state, HandleState::Resolved { .. })
    }

    /// Fetch the profile page unless it is already held.
    pub async fn resolve(&mut self) -> Result<&str> {
        if let HandleState::Identified(id) = &self.state {
            let id = id.clone();
            let url = self.client.profile_url(&id);
            let markup = fetch_markup(self.client.http(), &url).await?;
            debug!(%id, bytes = markup.len(), "resolved profile");
            self.state = HandleState::Resolved {
                id: Some(id),
                markup,
            };
        }
        self.markup().ok_or(SteamError::MissingInput)
    }

    /// Run a synchronous extractor over the resolved document.
    async fn extract<T, F>(&mut self, extractor: F) -> Result<T>
    where
        F: FnOnce(&Html) -> Result<T>,
    {
        let markup = self.resolve().await?;
        let document = Html::parse_document(markup);
        extractor(&document)
    }

    /// Mini profile background, from the supplied markup or fetched by id.
    async fn background(&self, mini_profile_id: u64) -> Result<Option<Background>> {
        let markup = match &self.mini_profile {
            Some(markup) => markup.clone(),
            None if mini_profile_id != 0 && self.client.fetches_mini_profiles() => {
                let url = self.client.mini_profile_url(mini_profile_id);
                fetch_markup(self.client.http(), &url).await?
            }
            None => return Ok(None),
        };
        let mini_profile = Html::parse_document(&markup);
        parse_background(&mini_profile).map(Some)
    }

    /// A new handle for the same profile: re-fetched if an id is known,
    /// re-parsed from the held markup otherwise.
    fn fresh(&self) -> Result<ProfileHandle> {
        let state = match &self.state {
            HandleState::Empty => return Err(SteamError::MissingInput),
            HandleState::Identified(id) | HandleState::Resolved { id: Some(id), .. } => {
                HandleState::Identified(id.clone())
            }
            HandleState::Resolved { id: None, markup } => HandleState::Resolved {
                id: None,
                markup: markup.clone(),
            },
        };
        Ok(ProfileHandle {
            client: self.client.clone(),
            state,
            mini_profile: self.mini_profile.clone(),
        })
    }

    /// Online state, status text and active game. Works on private profiles.
    pub async fn get_status(&mut self) -> Result<Status> {
        self.extract(parse_status).await
    }

    /// Identity block. The background is filled in from the mini profile
    /// when one was supplied or fetching is enabled and the page has an id.
    pub async fn get_user_info(&mut self) -> Result<UserInfo> {
        let (mut user_info, mini_profile_id) = self
            .extract(|document| {
                Ok((
                    parse_user_info(document, None)?,
                    parse_mini_profile_id(document)?,
                ))
            })
            .await?;
        user_info.background = self.background(mini_profile_id).await?;
        Ok(user_info)
    }

    /// Recent activity, `None` when the profile lists no recent games.
    pub async fn get_recent_games(&mut self) -> Result<Option<Vec<GameInfo>>> {
        self.extract(parse_recent_games).await
    }

    /// Favorite game showcase, `None` when the profile has none.
    pub async fn get_favorite_game(&mut self) -> Result<Option<GameInfo>> {
        self.extract(parse_favorite_game).await
    }

    /// Id of the mini profile, `0` when the page carries none.
    pub async fn get_mini_profile_id(&mut self) -> Result<u64> {
        self.extract(parse_mini_profile_id).await
    }

    /// Status plus a subset of the identity block, from a fresh handle.
    pub async fn get_basic_profile(&self) -> Result<BasicProfile> {
        let mut handle = self.fresh()?;
        let status = handle.get_status().await?;
        let user_info = handle.get_user_info().await?;
        Ok(BasicProfile {
            status,
            user_info: user_info.into(),
        })
    }

    /// Status, identity block and recent games, from a fresh handle.
    pub async fn get_profile(&self) -> Result<Profile> {
        let mut handle = self.fresh()?;
        let status = handle.get_status().await?;
        let user_info = handle.get_user_info().await?;
        let recent_games = handle.get_recent_games().await?;
        Ok(Profile {
            status,
            user_info,
            recent_games,
        })
    }

    /// Only the components named by the selectors, from a single fetch.
    ///
    /// `user_selector` is `None` (everything) or comma-separated names all
    /// prefixed with `+` (only these) or all with `-` (all but these):
    /// `status`, `userInfo`, `recentGames`. `showcase_selector` names up to
    /// two showcases, currently `favoriteGame`. Both are validated before
    /// anything is fetched.
    pub async fn get_custom_user(
        &mut self,
        user_selector: Option<&str>,
        showcase_selector: Option<&str>,
    ) -> Result<CustomProfile> {
        let selection = Selection::parse(user_selector, showcase_selector)?;

        let (mut custom, mini_profile_id) = self
            .extract(|document| {
                let custom = parse_custom_user(document, &selection, None)?;
                let mini_profile_id = if selection.wants_user_info() {
                    parse_mini_profile_id(document)?
                } else {
                    0
                };
                Ok((custom, mini_profile_id))
            })
            .await?;

        if let Some(UserComponent::UserInfo(user_info)) = custom.user.get_mut(&UserField::UserInfo)
        {
            user_info.background = self.background(mini_profile_id).await?;
        }
        Ok(custom)
    }
}

/// Fetch the profile page markup with a default client.
pub async fn resolve(input: ProfileInput) -> Result<String> {
    SteamClient::default().resolve(input).await
}

pub async fn get_status(input: ProfileInput) -> Result<Status> {
    SteamClient::default().get_status(input).await
}

pub async fn get_user_info(input: ProfileInput) -> Result<UserInfo> {
    SteamClient::default().get_user_info(input).await
}

pub async fn get_recent_games(input: ProfileInput) -> Result<Option<Vec<GameInfo>>> {
    SteamClient::default().get_recent_games(input).await
}

pub async fn get_favorite_game(input: ProfileInput) -> Result<Option<GameInfo>> {
    SteamClient::default().get_favorite_game(input).await
}

pub async fn get_mini_profile_id(input: ProfileInput) -> Result<u64> {
    SteamClient::default().get_mini_profile_id(input).await
}

pub async fn get_basic_profile(input: ProfileInput) -> Result<BasicProfile> {
    SteamClient::default().get_basic_profile(input).await
}

pub async fn get_profile(input: ProfileInput) -> Result<Profile> {
    SteamClient::default().get_profile(input).await
}

pub async fn get_custom_user(
    input: ProfileInput,
    user_selector: Option<&str>,
    showcase_selector: Option<&str>,
) -> Result<CustomProfile> {
    SteamClient::default()
        .get_custom_user(input, user_selector, showcase_selector)
        .await
}
