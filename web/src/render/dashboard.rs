//! Dashboard page.
//!
//! Signed-in users see their profile card, a completeness meter, the profile
//! form and their modules. Everyone else gets a sign-in prompt that returns to
//! the dashboard afterwards.

use maud::{Markup, html};

use super::{category_icon, is_safe_url, page};
use crate::domain::character_counter::CharacterCount;
use crate::domain::display_name::{resolve_display_name, resolve_profile_username};
use crate::domain::profile_completeness::{ProfileCompleteness, ProfileFields};
use crate::domain::social_links::SocialPlatform;
use crate::domain::url_encoding::{clean_redirect_url, encode_module_uuid};
use crate::domain::{
    ActionOutcome, DashboardData, Module, ProfileForm, SessionUser, UserProfile,
};

/// Maximum display name length accepted by the profile form.
pub const DISPLAY_NAME_MAX: usize = 50;
/// Maximum biography length accepted by the profile form.
pub const BIO_MAX: usize = 500;

const DASHBOARD_PATH: &str = "/dashboard";
const UPDATED_MESSAGE: &str = "Profile updated";

/// Everything the dashboard needs to render one response.
#[derive(Debug, Clone, Copy)]
pub struct DashboardView<'a> {
    /// Loader output.
    pub data: &'a DashboardData,
    /// Result of a form action submitted with this request.
    pub outcome: Option<&'a ActionOutcome>,
    /// Submitted form values, echoed back into the form.
    pub submitted: Option<&'a ProfileForm>,
}

impl<'a> DashboardView<'a> {
    /// View of a plain page load.
    #[must_use]
    pub fn loaded(data: &'a DashboardData) -> Self {
        Self {
            data,
            outcome: None,
            submitted: None,
        }
    }
}

/// Render the dashboard document.
#[must_use]
pub fn render(view: DashboardView<'_>) -> Markup {
    let user = view.data.session.as_ref().and_then(|session| session.user());
    let body = match user {
        Some(user) => signed_in(view, user),
        None => sign_in_prompt(),
    };
    page("Dashboard", body)
}

/// Link target for the sign-in button.
#[must_use]
pub fn sign_in_href() -> String {
    format!("/login?redirectTo={}", clean_redirect_url(DASHBOARD_PATH))
}

fn sign_in_prompt() -> Markup {
    html! {
        section class="card" {
            h1 { "Dashboard" }
            p { "Sign in to manage your profile and modules." }
            a class="button" href=(sign_in_href()) { "Sign in with GitHub" }
        }
    }
}

fn signed_in(view: DashboardView<'_>, user: &SessionUser) -> Markup {
    let profile = view.data.profile.as_ref();
    let username = resolve_profile_username(
        profile.map(|profile| profile.username.as_str()),
        user.login.as_deref(),
    );
    let display_name = resolve_display_name(
        view.submitted.and_then(|form| form.display_name.as_deref()),
        profile.and_then(|profile| profile.display_name.as_deref()),
        user.name.as_deref(),
        &username,
    );

    html! {
        @if let Some(outcome) = view.outcome {
            (banner(outcome))
        }
        section class="card profile" {
            @if let Some(avatar) = profile
                .and_then(|profile| profile.avatar_url.as_deref())
                .or(user.image.as_deref())
                .filter(|url| is_safe_url(url))
            {
                img class="avatar" src=(avatar) alt=(display_name);
            }
            h1 { (display_name) }
            @if !username.is_empty() {
                p class="username" {
                    a href=(format!("/users/{username}")) { "@" (username) }
                    " · "
                    a href=(SocialPlatform::Github.format_url(&username)) rel="noopener" {
                        (SocialPlatform::Github.label())
                    }
                }
            }
            @match profile {
                Some(profile) => {
                    (profile_details(profile))
                }
                None => {
                    p class="muted" { "Profile details are unavailable right now." }
                }
            }
        }
        @if let Some(profile) = profile {
            (completeness(profile))
            (profile_form(profile, view.submitted))
        }
        (module_list(&view.data.modules))
    }
}

fn banner(outcome: &ActionOutcome) -> Markup {
    match outcome {
        ActionOutcome::Success => html! {
            p class="banner success" role="status" { (UPDATED_MESSAGE) }
        },
        ActionOutcome::Failure { message, .. } => html! {
            p class="banner failure" role="alert" { (message) }
        },
    }
}

fn profile_details(profile: &UserProfile) -> Markup {
    html! {
        @if profile.verified_author {
            span class="badge" { "Verified author" }
        }
        @if let Some(bio) = profile.bio.as_deref() {
            p class="bio" { (bio) }
        }
        @if let Some(website) = profile.website_url.as_deref().filter(|url| is_safe_url(url)) {
            p {
                a href=(website) rel="noopener nofollow" { (website_label(website)) }
            }
        }
        p class="muted" {
            (profile.module_count) " modules · member since "
            (profile.created_at.format("%B %Y"))
        }
    }
}

fn website_label(url: &str) -> String {
    match SocialPlatform::detect(url) {
        Some(platform) => format!("{} @{}", platform.label(), platform.extract_handle(url)),
        None => url.to_owned(),
    }
}

fn completeness(profile: &UserProfile) -> Markup {
    let score = ProfileCompleteness::score(&ProfileFields::from(profile));
    html! {
        section class=(format!("card completeness {}", score.state.as_str())) {
            h2 { "Profile " (score.percentage) "% complete" }
            div class="meter" {
                span style=(format!("width:{}%", score.percentage)) {}
            }
            @if !score.suggestions.is_empty() {
                ul class="suggestions" {
                    @for suggestion in &score.suggestions {
                        li { (suggestion) }
                    }
                }
            }
        }
    }
}

fn profile_form(profile: &UserProfile, submitted: Option<&ProfileForm>) -> Markup {
    let display_name = submitted
        .and_then(|form| form.display_name.as_deref())
        .or(profile.display_name.as_deref())
        .unwrap_or_default();
    let bio = submitted
        .and_then(|form| form.bio.as_deref())
        .or(profile.bio.as_deref())
        .unwrap_or_default();
    let website = submitted
        .and_then(|form| form.website_url.as_deref())
        .or(profile.website_url.as_deref())
        .unwrap_or_default();

    html! {
        section class="card" {
            h2 { "Edit profile" }
            form method="post" action="?/updateProfile" {
                label for="display_name" { "Display name" }
                input id="display_name" name="display_name" type="text"
                    maxlength=(DISPLAY_NAME_MAX) value=(display_name);
                (counter(&CharacterCount::for_text(display_name, DISPLAY_NAME_MAX)))

                label for="bio" { "Bio" }
                textarea id="bio" name="bio" rows="4" maxlength=(BIO_MAX) { (bio) }
                (counter(&CharacterCount::for_text(bio, BIO_MAX)))

                label for="website_url" { "Website" }
                input id="website_url" name="website_url" type="url" value=(website);

                button type="submit" { "Save profile" }
            }
        }
    }
}

fn counter(count: &CharacterCount) -> Markup {
    html! {
        small class=(format!("counter {}", count.state.as_str())) { (count.display) }
    }
}

fn module_list(modules: &[Module]) -> Markup {
    html! {
        section class="card" {
            h2 { "Your modules" }
            @if modules.is_empty() {
                p class="muted" { "You have not published any modules yet." }
            } @else {
                ul class="modules" {
                    @for module in modules {
                        li {
                            (category_icon(&module.category))
                            a href=(format!("/modules/{}", encode_module_uuid(&module.uuid))) {
                                (module.name)
                            }
                            @if let Some(version) = module.version {
                                span class="muted" { "v" (version) }
                            }
                            span class="muted" { (module.downloads) " downloads" }
                        }
                    }
                }
            }
        }
    }
}
