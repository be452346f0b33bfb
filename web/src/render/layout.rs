//! Document shell shared by every page.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use super::footer;

const SITE_NAME: &str = "Barforge";

/// Inline stylesheet for all pages.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#0f1117;--fg:#e6e6eb;--fg2:#a0a3ad;--accent:#7c5cff;--ok:#3ecf8e;--warn:#f5a524;--err:#f04f5c;--surface:#171a22;--border:rgba(124,92,255,.2)}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column}
main{max-width:960px;width:100%;margin:0 auto;padding:2rem 1rem;flex:1}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}
svg.icon{width:20px;height:20px;fill:none;stroke:currentColor;stroke-width:2;vertical-align:-4px}
.card{background:var(--surface);border:1px solid var(--border);border-radius:10px;padding:1.5rem;margin-bottom:1.5rem}
.banner{border-radius:8px;padding:.75rem 1rem;margin-bottom:1.5rem}
.banner.success{border:1px solid var(--ok);color:var(--ok)}
.banner.failure{border:1px solid var(--err);color:var(--err)}
.avatar{width:72px;height:72px;border-radius:50%;object-fit:cover}
.meter{height:8px;border-radius:4px;background:var(--border);overflow:hidden}
.meter span{display:block;height:100%;background:var(--accent)}
.counter.warning{color:var(--warn)}
.counter.error{color:var(--err)}
.modules{list-style:none}
.modules li{display:flex;gap:.75rem;align-items:center;padding:.5rem 0;border-bottom:1px solid var(--border)}
label{display:block;margin-top:1rem;color:var(--fg2)}
input,textarea{width:100%;padding:.5rem;background:var(--bg);color:var(--fg);border:1px solid var(--border);border-radius:6px}
button{margin-top:1rem;padding:.5rem 1.25rem;border:none;border-radius:6px;background:var(--accent);color:#fff;cursor:pointer}
.footer{border-top:1px solid var(--border);padding:1.5rem 1rem;display:flex;gap:1.5rem;justify-content:center;color:var(--fg2);font-size:.9rem}
.footer-brand{font-weight:700;color:var(--fg)}
"#;

/// Wrap `body` in a complete HTML document titled `"{title} | Barforge"`.
///
/// # Examples
/// ```
/// use barforge_web::render::page;
/// use maud::html;
///
/// let markup = page("Dashboard", html! { h1 { "Hi" } }).into_string();
/// assert!(markup.starts_with("<!DOCTYPE html>"));
/// assert!(markup.contains("<title>Dashboard | Barforge</title>"));
/// ```
#[must_use]
pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (SITE_NAME) }
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                main { (body) }
                (footer())
            }
        }
    }
}
