//! Inline SVG icons for module categories.

use std::str::FromStr;

use maud::{Markup, PreEscaped, html};

/// Module category as listed by the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// CPU, memory and load.
    System,
    /// Sensors and devices.
    Hardware,
    /// Connectivity and traffic.
    Network,
    /// Volume and sinks.
    Audio,
    /// Battery and power profiles.
    Power,
    /// Clocks and calendars.
    Time,
    /// Compositor workspaces and windows.
    Workspace,
    /// System tray.
    Tray,
    /// Forecasts.
    Weather,
    /// Players and now-playing.
    Media,
    /// Timers, notes and tasks.
    Productivity,
    /// Anything else.
    Custom,
}

/// Slug was not one of the known categories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {slug}")]
pub struct UnknownCategory {
    /// The rejected slug.
    pub slug: String,
}

impl Category {
    /// Every category, in catalogue order.
    pub const ALL: [Self; 12] = [
        Self::System,
        Self::Hardware,
        Self::Network,
        Self::Audio,
        Self::Power,
        Self::Time,
        Self::Workspace,
        Self::Tray,
        Self::Weather,
        Self::Media,
        Self::Productivity,
        Self::Custom,
    ];

    /// Registry slug.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Hardware => "hardware",
            Self::Network => "network",
            Self::Audio => "audio",
            Self::Power => "power",
            Self::Time => "time",
            Self::Workspace => "workspace",
            Self::Tray => "tray",
            Self::Weather => "weather",
            Self::Media => "media",
            Self::Productivity => "productivity",
            Self::Custom => "custom",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::System => "System",
            Self::Hardware => "Hardware",
            Self::Network => "Network",
            Self::Audio => "Audio",
            Self::Power => "Power",
            Self::Time => "Time",
            Self::Workspace => "Workspace",
            Self::Tray => "Tray",
            Self::Weather => "Weather",
            Self::Media => "Media",
            Self::Productivity => "Productivity",
            Self::Custom => "Custom",
        }
    }

    // Paths are drawn on a 24x24 stroke grid.
    fn paths(self) -> &'static str {
        match self {
            Self::System => r#"<rect x="2" y="3" width="20" height="14" rx="2"/><path d="M8 21h8M12 17v4"/>"#,
            Self::Hardware => r#"<rect x="6" y="6" width="12" height="12" rx="1"/><path d="M9 2v4M15 2v4M9 18v4M15 18v4M2 9h4M2 15h4M18 9h4M18 15h4"/>"#,
            Self::Network => r#"<path d="M5 12.5a10 10 0 0 1 14 0M8.5 16a5 5 0 0 1 7 0M2 9a15 15 0 0 1 20 0"/><circle cx="12" cy="19.5" r="1"/>"#,
            Self::Audio => r#"<path d="M11 5 6 9H2v6h4l5 4V5zM15.5 8.5a5 5 0 0 1 0 7M19 5a10 10 0 0 1 0 14"/>"#,
            Self::Power => r#"<rect x="2" y="7" width="18" height="10" rx="2"/><path d="M22 11v2M6 10v4M10 10v4"/>"#,
            Self::Time => r#"<circle cx="12" cy="12" r="10"/><path d="M12 6v6l4 2"/>"#,
            Self::Workspace => r#"<rect x="3" y="3" width="7" height="7"/><rect x="14" y="3" width="7" height="7"/><rect x="3" y="14" width="7" height="7"/><rect x="14" y="14" width="7" height="7"/>"#,
            Self::Tray => r#"<path d="M22 12h-6l-2 3h-4l-2-3H2"/><path d="M5.5 5.1 2 12v6a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-6l-3.5-6.9A2 2 0 0 0 16.8 4H7.2a2 2 0 0 0-1.7 1.1z"/>"#,
            Self::Weather => r#"<path d="M17.5 19H9a7 7 0 1 1 6.7-9h1.8a4.5 4.5 0 1 1 0 9z"/>"#,
            Self::Media => r#"<polygon points="6 3 20 12 6 21 6 3"/>"#,
            Self::Productivity => r#"<path d="M9 11l3 3L22 4"/><path d="M21 12v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11"/>"#,
            Self::Custom => r#"<path d="M12 2l3 7h7l-5.5 4.5 2 7.5L12 16.5 5.5 21l2-7.5L2 9h7z"/>"#,
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(slug: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.slug() == slug)
            .ok_or_else(|| UnknownCategory {
                slug: slug.to_owned(),
            })
    }
}

const GENERIC_PATHS: &str =
    r#"<path d="M21 16V8a2 2 0 0 0-1-1.7l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.7l7 4a2 2 0 0 0 2 0l7-4a2 2 0 0 0 1-1.7z"/>"#;

/// Inline `<svg>` for a category slug; unknown slugs get a generic package
/// icon.
///
/// # Examples
/// ```
/// use barforge_web::render::category_icon;
///
/// let svg = category_icon("system").into_string();
/// assert!(svg.starts_with("<svg"));
/// assert!(svg.contains(r#"data-category="system""#));
/// ```
#[must_use]
pub fn category_icon(slug: &str) -> Markup {
    let category = slug.parse::<Category>().ok();
    let (paths, label) = category.map_or((GENERIC_PATHS, "Module"), |category| {
        (category.paths(), category.name())
    });
    html! {
        svg class="icon" viewBox="0 0 24 24" role="img" aria-label=(label)
            data-category=(category.map_or("generic", Category::slug)) {
            (PreEscaped(paths))
        }
    }
}
