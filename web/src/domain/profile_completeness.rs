//! Profile completeness scoring.
//!
//! Scores the four optional profile fields in a fixed order and produces one
//! suggestion per missing field.

use serde::Serialize;

use super::profile::UserProfile;

/// Optional profile fields that count towards completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    /// Display name.
    DisplayName,
    /// Biography.
    Bio,
    /// Personal website.
    WebsiteUrl,
    /// Avatar image.
    AvatarUrl,
}

impl ProfileField {
    /// Scoring order.
    pub const ALL: [Self; 4] = [
        Self::DisplayName,
        Self::Bio,
        Self::WebsiteUrl,
        Self::AvatarUrl,
    ];

    /// Suggestion shown when the field is missing.
    #[must_use]
    pub fn suggestion(self) -> &'static str {
        match self {
            Self::DisplayName => "Add a display name to personalize your profile",
            Self::Bio => "Write a bio to tell others about yourself",
            Self::WebsiteUrl => "Add a website link to share your work",
            Self::AvatarUrl => "Add an avatar to make your profile recognizable",
        }
    }
}

/// Overall completeness bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletenessState {
    /// No field filled.
    Incomplete,
    /// Some fields filled.
    Partial,
    /// Every field filled.
    Complete,
}

impl CompletenessState {
    /// Lower-case name, used as a CSS modifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::Partial => "partial",
            Self::Complete => "complete",
        }
    }
}

/// Borrowed view over the fields that are scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProfileFields<'a> {
    /// Display name.
    pub display_name: Option<&'a str>,
    /// Biography.
    pub bio: Option<&'a str>,
    /// Personal website.
    pub website_url: Option<&'a str>,
    /// Avatar image URL.
    pub avatar_url: Option<&'a str>,
}

impl<'a> ProfileFields<'a> {
    fn get(&self, field: ProfileField) -> Option<&'a str> {
        match field {
            ProfileField::DisplayName => self.display_name,
            ProfileField::Bio => self.bio,
            ProfileField::WebsiteUrl => self.website_url,
            ProfileField::AvatarUrl => self.avatar_url,
        }
    }
}

impl<'a> From<&'a UserProfile> for ProfileFields<'a> {
    fn from(profile: &'a UserProfile) -> Self {
        Self {
            display_name: profile.display_name.as_deref(),
            bio: profile.bio.as_deref(),
            website_url: profile.website_url.as_deref(),
            avatar_url: profile.avatar_url.as_deref(),
        }
    }
}

/// Result of scoring a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileCompleteness {
    /// Rounded share of filled fields, 0 to 100.
    pub percentage: u8,
    /// Number of filled fields.
    pub filled_count: usize,
    /// Number of scored fields.
    pub total_count: usize,
    /// Missing fields in scoring order.
    pub missing_fields: Vec<ProfileField>,
    /// One suggestion per missing field, in the same order.
    pub suggestions: Vec<&'static str>,
    /// Completeness bucket.
    pub state: CompletenessState,
}

impl ProfileCompleteness {
    /// Score a profile. A field counts when present and not blank.
    ///
    /// # Examples
    /// ```
    /// use barforge_web::domain::profile_completeness::{
    ///     CompletenessState, ProfileCompleteness, ProfileFields,
    /// };
    ///
    /// let result = ProfileCompleteness::score(&ProfileFields {
    ///     bio: Some("hello"),
    ///     ..ProfileFields::default()
    /// });
    /// assert_eq!(result.percentage, 25);
    /// assert_eq!(result.state, CompletenessState::Partial);
    /// ```
    #[must_use]
    pub fn score(fields: &ProfileFields<'_>) -> Self {
        let (filled, missing): (Vec<_>, Vec<_>) = ProfileField::ALL
            .into_iter()
            .partition(|field| is_filled(fields.get(*field)));

        let filled_count = filled.len();
        let total_count = ProfileField::ALL.len();
        let percentage = percentage(filled_count, total_count);

        Self {
            percentage,
            filled_count,
            total_count,
            suggestions: missing.iter().map(|field| field.suggestion()).collect(),
            missing_fields: missing,
            state: match percentage {
                0 => CompletenessState::Incomplete,
                100 => CompletenessState::Complete,
                _ => CompletenessState::Partial,
            },
        }
    }
}

fn is_filled(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.trim().is_empty())
}

fn percentage(filled: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let ratio = filled as f64 / total as f64 * 100.0;
    // Bounded to 0..=100 because filled <= total.
    ratio.round().clamp(0.0, 100.0) as u8
}
