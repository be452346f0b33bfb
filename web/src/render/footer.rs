//! Site footer.

use maud::{Markup, html};

const NAV_LINKS: [(&str, &str); 4] = [
    ("/modules", "Browse modules"),
    ("/install", "Install"),
    ("/dashboard", "Dashboard"),
    ("https://github.com/Alexays/Waybar", "Waybar"),
];

/// Footer with the brand link back to `/` and static navigation.
#[must_use]
pub fn footer() -> Markup {
    html! {
        footer class="footer" {
            a class="footer-brand" href="/" aria-label="Barforge home" { "Barforge" }
            nav {
                @for (href, label) in NAV_LINKS {
                    a href=(href) { (label) } " "
                }
            }
        }
    }
}
