//! Social profile link validation, handle extraction and formatting.
//!
//! Each platform owns one URL pattern. A link is a profile link only when its
//! path is a single non-empty segment, so repository or status URLs are
//! rejected.

use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Supported social platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SocialPlatform {
    /// github.com
    Github,
    /// twitter.com and x.com
    Twitter,
}

/// Returned when parsing an unknown platform name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown social platform: {name}")]
pub struct UnknownPlatform {
    /// Name that failed to parse.
    pub name: String,
}

static GITHUB_RE: OnceLock<Regex> = OnceLock::new();
static TWITTER_RE: OnceLock<Regex> = OnceLock::new();

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern)
        .unwrap_or_else(|error| panic!("social link regex failed to compile: {error}"))
}

impl SocialPlatform {
    /// Every supported platform.
    pub const ALL: [Self; 2] = [Self::Github, Self::Twitter];

    /// Stable lower-case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Twitter => "twitter",
        }
    }

    /// Label shown next to links.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Github => "GitHub",
            Self::Twitter => "X",
        }
    }

    fn profile_regex(self) -> &'static Regex {
        match self {
            Self::Github => GITHUB_RE.get_or_init(|| {
                compile(r"^https?://(?:www\.)?github\.com/([^/?#\s]+)/?$")
            }),
            Self::Twitter => TWITTER_RE.get_or_init(|| {
                compile(r"^https?://(?:www\.)?(?:twitter\.com|x\.com)/([^/?#\s]+)/?$")
            }),
        }
    }

    fn canonical_base(self) -> &'static str {
        match self {
            Self::Github => "https://github.com/",
            Self::Twitter => "https://x.com/",
        }
    }

    /// Return whether `url` is a profile link for this platform.
    ///
    /// An empty string means "unset" and is always valid.
    ///
    /// # Examples
    /// ```
    /// use barforge_web::domain::social_links::SocialPlatform;
    ///
    /// assert!(SocialPlatform::Github.validate("https://github.com/octocat/"));
    /// assert!(!SocialPlatform::Github.validate("https://github.com/octocat/repo"));
    /// assert!(SocialPlatform::Twitter.validate(""));
    /// ```
    #[must_use]
    pub fn validate(self, url: &str) -> bool {
        url.is_empty() || self.profile_regex().is_match(url)
    }

    /// Extract the handle from a profile link, or `""` when `url` does not
    /// match this platform.
    #[must_use]
    pub fn extract_handle(self, url: &str) -> String {
        self.profile_regex()
            .captures(url)
            .and_then(|captures| captures.get(1))
            .map(|handle| handle.as_str().to_owned())
            .unwrap_or_default()
    }

    /// Build the canonical profile URL for `handle`.
    ///
    /// A single leading `@` is dropped. Twitter handles always use `x.com`.
    #[must_use]
    pub fn format_url(self, handle: &str) -> String {
        let handle = handle.strip_prefix('@').unwrap_or(handle);
        if handle.is_empty() {
            return String::new();
        }
        format!("{}{handle}", self.canonical_base())
    }

    /// Find the platform whose profile pattern accepts a non-empty `url`.
    #[must_use]
    pub fn detect(url: &str) -> Option<Self> {
        if url.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|platform| platform.profile_regex().is_match(url))
    }
}

impl FromStr for SocialPlatform {
    type Err = UnknownPlatform;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "github" => Ok(Self::Github),
            "twitter" | "x" => Ok(Self::Twitter),
            _ => Err(UnknownPlatform { name: s.to_owned() }),
        }
    }
}
