//! Content records shared by several sections.

use serde::{Deserialize, Serialize};

/// A navigation entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    /// Visible text.
    pub label: String,
    /// Target URL or in-page anchor.
    pub href: String,
    /// Open in a new tab.
    #[serde(default)]
    pub external: bool,
}

impl NavLink {
    /// Value for the anchor's `target` attribute.
    pub fn target(&self) -> &'static str {
        if self.external {
            "_blank"
        } else {
            "_self"
        }
    }
}

/// Visual weight of a call-to-action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Emphasis {
    /// Filled, brand coloured.
    #[default]
    Primary,
    /// Muted alternative.
    Secondary,
}

/// A link rendered as a button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallToAction {
    /// Button text.
    pub label: String,
    /// Link target.
    pub href: String,
    /// Button weight; the section decides when omitted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
}

impl CallToAction {
    /// Button pointing at `href` with the section's default weight.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            emphasis: None,
        }
    }

    /// Same button with secondary weight.
    pub fn secondary(mut self) -> Self {
        self.emphasis = Some(Emphasis::Secondary);
        self
    }

    /// Configured weight, or `fallback` when none was given.
    pub fn emphasis_or(&self, fallback: Emphasis) -> Emphasis {
        self.emphasis.unwrap_or(fallback)
    }
}

/// Media slot content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Media {
    /// A still image.
    Image {
        /// Image URL.
        src: String,
        /// Alternative text.
        #[serde(default)]
        alt: String,
    },
    /// An inline video with controls.
    Video {
        /// Video URL.
        src: String,
    },
}

impl Media {
    /// Shorthand for an image with alt text.
    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Media::Image {
            src: src.into(),
            alt: alt.into(),
        }
    }
}

/// A social profile link with its glyph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Glyph shown in place of text.
    pub icon: IconName,
    /// Profile URL.
    pub href: String,
    /// Accessible label.
    #[serde(default)]
    pub label: Option<String>,
}

impl SocialLink {
    /// Accessible label, `social` when none was configured.
    pub fn aria_label(&self) -> &str {
        self.label.as_deref().unwrap_or("social")
    }
}

/// Line icons (paths from <https://lucide.dev>) used by the sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs, reason = "variant names mirror the upstream icon names")]
pub enum IconName {
    // Chrome
    Menu,
    X,
    ChevronDown,
    Star,
    Sun,
    Moon,

    // Content
    School,
    NotebookPen,
    DoorOpen,
    ShieldCheck,
    Award,
    Mail,
    MessageCircle,

    // Social
    Github,
    Linkedin,
    Twitter,
}

impl IconName {
    /// SVG path data for a 24x24 viewbox.
    pub fn path(&self) -> &'static str {
        match self {
            IconName::Menu => "M4 12h16M4 6h16M4 18h16",
            IconName::X => "M18 6 6 18M6 6l12 12",
            IconName::ChevronDown => "m6 9 6 6 6-6",
            IconName::Star => {
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"
            },
            IconName::Sun => {
                "M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8zM12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 \
                 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41"
            },
            IconName::Moon => "M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z",

            IconName::School => {
                "M14 22v-4a2 2 0 1 0-4 0v4M18 10l4 2v8a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2v-8l4-2M18 \
                 5v17M4 6l8-4 8 4M6 5v17"
            },
            IconName::NotebookPen => {
                "M13.4 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2v-7.4M2 6h4M2 10h4M2 \
                 14h4M2 18h4M21.4 5.6a1 1 0 1 0-3-3l-5 5a2 2 0 0 0-.5.9l-.8 2.9a.5.5 0 0 0 \
                 .6.6l2.9-.8a2 2 0 0 0 .9-.5z"
            },
            IconName::DoorOpen => {
                "M13 4h3a2 2 0 0 1 2 2v14M2 20h3M13 20h9M10 12v.01M13 4.6v16.1a1 1 0 0 \
                 1-1.2 1L5 20V5.6a2 2 0 0 1 1.5-1.9l4-1A2 2 0 0 1 13 4.6z"
            },
            IconName::ShieldCheck => {
                "M20 13c0 5-3.5 7.5-7.7 9a1 1 0 0 1-.7 0C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 \
                 4.5-1.2 6.2-2.7a1.2 1.2 0 0 1 1.5 0C14.5 3.8 17 5 19 5a1 1 0 0 1 1 1zM9 12l2 2 \
                 4-4"
            },
            IconName::Award => {
                "M15.5 12.9 17 22l-5-3-5 3 1.5-9.1M12 2a7 7 0 1 0 0 14 7 7 0 0 0 0-14z"
            },
            IconName::Mail => {
                "M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2zM22 \
                 6l-10 7L2 6"
            },
            IconName::MessageCircle => "M7.9 20A9 9 0 1 0 4 16.1L2 22z",

            IconName::Github => {
                "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.1-1.3-.3-2.5-1-3.5.3-1.2.3-2.4 \
                 0-3.5 0 0-1 0-3 1.5-2.6-.5-5.4-.5-8 0C6 2 5 2 5 2c-.3 1.2-.3 2.4 0 3.5A5.4 5.4 \
                 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.4.5-.7 1-.9 1.7-.2.6-.2 1.2-.1 1.8v4M9 18c-4.5 \
                 2-5-2-7-2"
            },
            IconName::Linkedin => {
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2zM4 \
                 2a2 2 0 1 0 0 4 2 2 0 0 0 0-4z"
            },
            IconName::Twitter => {
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 \
                 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z"
            },
        }
    }

    /// Glyphs drawn as solid shapes rather than outlines.
    pub fn needs_fill(&self) -> bool {
        matches!(self, IconName::Star)
    }
}
