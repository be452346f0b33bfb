//! Registry records read from and written to the external API.
//!
//! These mirror the API's snake_case JSON. The web tier never mutates them;
//! profile edits travel as a [`ProfileUpdate`] partial payload.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Profile of the signed-in user as reported by `GET /api/v1/users/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Registry user id.
    pub id: i64,
    /// Registry username, normally the GitHub login.
    pub username: String,
    /// Optional display name chosen by the user.
    pub display_name: Option<String>,
    /// Optional avatar image URL.
    pub avatar_url: Option<String>,
    /// Optional free-form biography.
    pub bio: Option<String>,
    /// Optional personal website.
    pub website_url: Option<String>,
    /// Whether the registry verified this author.
    pub verified_author: bool,
    /// Number of modules the user has published.
    pub module_count: i64,
    /// Account creation time.
    pub created_at: DateTime<Utc>,
}

/// Semantic version of a published module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleVersion {
    /// Major component.
    pub major: u32,
    /// Minor component.
    pub minor: u32,
    /// Patch component.
    pub patch: u32,
}

impl fmt::Display for ModuleVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// A module listed in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Module {
    /// Identifier of the form `name@category`.
    pub uuid: String,
    /// Human-readable module name.
    pub name: String,
    /// Author username.
    pub author: String,
    /// Short description.
    pub description: String,
    /// Category slug.
    pub category: String,
    /// Total download count.
    pub downloads: i64,
    /// Average rating, absent until rated.
    pub rating: Option<f64>,
    /// Latest published version, absent before the first release.
    pub version: Option<ModuleVersion>,
}

/// Raw profile form submission.
///
/// Every field is optional because browsers omit controls that were not
/// rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ProfileForm {
    /// `display_name` form control.
    pub display_name: Option<String>,
    /// `bio` form control.
    pub bio: Option<String>,
    /// `website_url` form control.
    pub website_url: Option<String>,
}

/// Partial profile update sent with `PATCH /api/v1/users/me`.
///
/// Absent fields serialise as JSON `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    /// New display name.
    pub display_name: Option<String>,
    /// New biography.
    pub bio: Option<String>,
    /// New website URL.
    pub website_url: Option<String>,
}

impl From<ProfileForm> for ProfileUpdate {
    /// Empty strings become `None`; other values pass through untouched.
    fn from(form: ProfileForm) -> Self {
        Self {
            display_name: blank_to_none(form.display_name),
            bio: blank_to_none(form.bio),
            website_url: blank_to_none(form.website_url),
        }
    }
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
