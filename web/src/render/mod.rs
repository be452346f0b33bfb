//! Server-side HTML rendering.
//!
//! Pages and fragments are [maud](https://maud.lambda.xyz/) functions returning
//! `Markup`; every dynamic value is escaped by the macro.

pub mod category_icon;
pub mod dashboard;
pub mod footer;
pub mod layout;

pub use category_icon::{Category, category_icon};
pub use footer::footer;
pub use layout::page;

/// Check if a URL is safe to use in `src` or `href` attributes.
#[must_use]
pub fn is_safe_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}
