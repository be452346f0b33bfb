//! Display name and username resolution for profile views.

/// Resolve the name shown for a user.
///
/// Precedence: the trimmed form value, then the stored profile value, then the
/// GitHub account name, then `fallback`. Only the form value is trimmed; the
/// other candidates are used as-is when non-empty.
///
/// # Examples
/// ```
/// use barforge_web::domain::display_name::resolve_display_name;
///
/// assert_eq!(resolve_display_name(Some("  Ada  "), None, None, "ada"), "Ada");
/// assert_eq!(resolve_display_name(Some("   "), Some("Lovelace"), None, "ada"), "Lovelace");
/// ```
#[must_use]
pub fn resolve_display_name(
    form_value: Option<&str>,
    profile_value: Option<&str>,
    github_name: Option<&str>,
    fallback: &str,
) -> String {
    form_value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .or_else(|| non_empty(profile_value))
        .or_else(|| non_empty(github_name))
        .unwrap_or(fallback)
        .to_owned()
}

/// Resolve the username for profile links: the profile's username, then the
/// session login, else an empty string.
#[must_use]
pub fn resolve_profile_username(
    profile_username: Option<&str>,
    session_login: Option<&str>,
) -> String {
    non_empty(profile_username)
        .or_else(|| non_empty(session_login))
        .unwrap_or_default()
        .to_owned()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}
