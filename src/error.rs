use ::scraper::error::SelectorErrorKind;

/// All errors that can occur while resolving or scraping a Steam profile.
#[derive(thiserror::Error, Debug)]
pub enum SteamError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code for a profile or mini profile.
    #[error("profile not found at {url} (status {status})")]
    NotFound {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// The caller-supplied value is not markup, a profile URL, a vanity name or a SteamID64.
    #[error("invalid profile input: {0}")]
    InvalidInput(String),

    /// The profile page carries the private-profile marker.
    #[error("steam profile is private")]
    PrivateProfile,

    /// An extraction was requested before an identifier or document was set.
    #[error("no steam id, profile url or html has been set")]
    MissingInput,

    /// A user or showcase selector string is malformed.
    #[error("invalid select option: {0}")]
    InvalidSelection(String),
}

impl<'a> From<SelectorErrorKind<'a>> for SteamError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        SteamError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SteamError>;
