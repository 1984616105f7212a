use tracing::instrument;

use crate::error::Result;
use crate::input::{ProfileId, ProfileInput};
use crate::model::*;
use crate::profile::ProfileHandle;
use crate::scraper::BASE_URL;

/// The main entry point for reading Steam Community profiles.
///
/// `SteamClient` wraps a [`reqwest::Client`] and hands out request-scoped
/// [`ProfileHandle`]s. Every `get_*` method builds a fresh handle for the
/// given input, so calls never share a cached document.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> steam_profile_scraper::Result<()> {
/// use steam_profile_scraper::{ProfileInput, SteamClient};
///
/// let client = SteamClient::new();
/// let status = client
///     .get_status(ProfileInput::Vanity("gabelogannewell".to_string()))
///     .await?;
/// println!("{}", status.status_text);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SteamClient {
    http: reqwest::Client,
    base_url: String,
    fetch_mini_profiles: bool,
}

impl SteamClient {
    /// Create a new client with default settings.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            http: client,
            base_url: BASE_URL.to_string(),
            fetch_mini_profiles: true,
        }
    }

    /// Fetch profile pages from another host instead of `steamcommunity.com`.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Whether user info lookups fetch the mini profile for the background.
    /// Enabled by default.
    pub fn with_mini_profiles(mut self, enabled: bool) -> Self {
        self.fetch_mini_profiles = enabled;
        self
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn fetches_mini_profiles(&self) -> bool {
        self.fetch_mini_profiles
    }

    pub(crate) fn profile_url(&self, id: &ProfileId) -> String {
        format!("{}{}", self.base_url, id.path())
    }

    pub(crate) fn mini_profile_url(&self, mini_profile_id: u64) -> String {
        format!("{}/miniprofile/{mini_profile_id}", self.base_url)
    }

    /// An empty handle bound to this client's configuration.
    pub fn handle(&self) -> ProfileHandle {
        ProfileHandle::new(self.clone())
    }

    /// A handle already pointed at `input`.
    pub fn handle_for(&self, input: ProfileInput) -> Result<ProfileHandle> {
        let mut handle = self.handle();
        handle.set_input(input)?;
        Ok(handle)
    }

    /// Fetch (or take) the profile page markup.
    #[instrument(skip_all, fields(input = %input))]
    pub async fn resolve(&self, input: ProfileInput) -> Result<String> {
        let mut handle = self.handle_for(input)?;
        handle.resolve().await.map(str::to_string)
    }

    /// Fetch the online state, status text and active game.
    #[instrument(skip_all, fields(input = %input))]
    pub async fn get_status(&self, input: ProfileInput) -> Result<Status> {
        self.handle_for(input)?.get_status().await
    }

    /// Fetch the identity block, including the mini profile background when enabled.
    #[instrument(skip_all, fields(input = %input))]
    pub async fn get_user_info(&self, input: ProfileInput) -> Result<UserInfo> {
        self.handle_for(input)?.get_user_info().await
    }

    /// Fetch the recent activity list.
    #[instrument(skip_all, fields(input = %input))]
    pub async fn get_recent_games(&self, input: ProfileInput) -> Result<Option<Vec<GameInfo>>> {
        self.handle_for(input)?.get_recent_games().await
    }

    /// Fetch the favorite game showcase.
    #[instrument(skip_all, fields(input = %input))]
    pub async fn get_favorite_game(&self, input: ProfileInput) -> Result<Option<GameInfo>> {
        self.handle_for(input)?.get_favorite_game().await
    }

    /// Fetch the id used by the mini profile endpoint.
    #[instrument(skip_all, fields(input = %input))]
    pub async fn get_mini_profile_id(&self, input: ProfileInput) -> Result<u64> {
        self.handle_for(input)?.get_mini_profile_id().await
    }

    /// Fetch the status and a subset of the identity block.
    #[instrument(skip_all, fields(input = %input))]
    pub async fn get_basic_profile(&self, input: ProfileInput) -> Result<BasicProfile> {
        self.handle_for(input)?.get_basic_profile().await
    }

    /// Fetch the status, identity block and recent games.
    #[instrument(skip_all, fields(input = %input))]
    pub async fn get_profile(&self, input: ProfileInput) -> Result<Profile> {
        self.handle_for(input)?.get_profile().await
    }

    /// Fetch only the components named by the selectors.
    ///
    /// See [`ProfileHandle::get_custom_user`] for the selector syntax.
    #[instrument(skip(self, input), fields(input = %input))]
    pub async fn get_custom_user(
        &self,
        input: ProfileInput,
        user_selector: Option<&str>,
        showcase_selector: Option<&str>,
    ) -> Result<CustomProfile> {
        self.handle_for(input)?
            .get_custom_user(user_selector, showcase_selector)
            .await
    }
}

impl Default for SteamClient {
    fn default() -> Self {
        Self::new()
    }
}
