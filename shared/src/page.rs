//! Page layouts assembled from section configurations.

use serde::{Deserialize, Serialize};

use crate::{
    outline::{Outline, Section},
    sections::{
        about::{AboutContent, AboutVariant},
        contact::{parse_kind, ContactContent, ContactVariant},
        content_block::{ContentBlockContent, ContentBlockVariant},
        cta::{CtaContent, CtaVariant},
        faq::{FaqContent, FaqVariant},
        features::{FeaturesContent, FeaturesVariant},
        footer::{FooterContent, FooterVariant},
        hero::{HeroContent, HeroVariant},
        how_we_work::{HowWeWorkContent, HowWeWorkVariant},
        navbar::{NavbarContent, NavbarVariant},
        previous_work::{PreviousWorkContent, WorkVariant},
        pricing::{PricingContent, PricingVariant},
        team::{TeamContent, TeamVariant},
        testimonials::{TestimonialVariant, TestimonialsContent},
        trust_bar::{TrustBarContent, TrustBarVariant},
    },
    ConfigError,
};

/// Bundled content of the main landing page.
pub const LANDING_PAGE_JSON: &str = include_str!("../content/landing.json");

/// Bundled content of the showcase page.
pub const SHOWCASE_PAGE_JSON: &str = include_str!("../content/showcase.json");

/// One section on a page: its variant plus its content payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", rename_all = "kebab-case")]
#[allow(missing_docs, reason = "fields are the variant tag and its payload")]
pub enum SectionConfig {
    /// Top navigation bar.
    Navbar {
        #[serde(default)]
        variant: NavbarVariant,
        content: NavbarContent,
    },
    /// Opening banner.
    Hero {
        #[serde(default)]
        variant: HeroVariant,
        content: HeroContent,
    },
    /// Company introduction.
    About {
        #[serde(default)]
        variant: AboutVariant,
        content: AboutContent,
    },
    /// Feature cards.
    Features {
        #[serde(default)]
        variant: FeaturesVariant,
        content: FeaturesContent,
    },
    /// Process steps.
    HowWeWork {
        #[serde(default)]
        variant: HowWeWorkVariant,
        content: HowWeWorkContent,
    },
    /// Questions and answers.
    Faq {
        #[serde(default)]
        variant: FaqVariant,
        content: FaqContent,
    },
    /// Team members.
    Team {
        #[serde(default)]
        variant: TeamVariant,
        content: TeamContent,
    },
    /// Customer quotes.
    Testimonials {
        #[serde(default)]
        variant: TestimonialVariant,
        content: TestimonialsContent,
    },
    /// Price plans.
    Pricing {
        #[serde(default)]
        variant: PricingVariant,
        content: PricingContent,
    },
    /// Contact form or links.
    Contact {
        #[serde(default)]
        variant: ContactVariant,
        content: ContactContent,
    },
    /// Call-to-action band.
    Cta {
        #[serde(default)]
        variant: CtaVariant,
        content: CtaContent,
    },
    /// Logos, stats or badges.
    TrustBar {
        #[serde(default)]
        variant: TrustBarVariant,
        content: TrustBarContent,
    },
    /// Portfolio.
    PreviousWork {
        #[serde(default)]
        variant: WorkVariant,
        content: PreviousWorkContent,
    },
    /// Free-form copy with media.
    ContentBlock {
        #[serde(default)]
        variant: ContentBlockVariant,
        content: ContentBlockContent,
    },
    /// Page footer.
    Footer {
        #[serde(default)]
        variant: FooterVariant,
        content: FooterContent,
    },
}

impl SectionConfig {
    /// Section tag as written in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            SectionConfig::Navbar { .. } => NavbarVariant::SECTION,
            SectionConfig::Hero { .. } => HeroVariant::SECTION,
            SectionConfig::About { .. } => AboutVariant::SECTION,
            SectionConfig::Features { .. } => FeaturesVariant::SECTION,
            SectionConfig::HowWeWork { .. } => HowWeWorkVariant::SECTION,
            SectionConfig::Faq { .. } => FaqVariant::SECTION,
            SectionConfig::Team { .. } => TeamVariant::SECTION,
            SectionConfig::Testimonials { .. } => TestimonialVariant::SECTION,
            SectionConfig::Pricing { .. } => PricingVariant::SECTION,
            SectionConfig::Contact { .. } => ContactVariant::SECTION,
            SectionConfig::Cta { .. } => CtaVariant::SECTION,
            SectionConfig::TrustBar { .. } => TrustBarVariant::SECTION,
            SectionConfig::PreviousWork { .. } => WorkVariant::SECTION,
            SectionConfig::ContentBlock { .. } => ContentBlockVariant::SECTION,
            SectionConfig::Footer { .. } => FooterVariant::SECTION,
        }
    }

    /// Blocks this section renders.
    pub fn outline(&self) -> Outline {
        match self {
            SectionConfig::Navbar { variant, content } => content.outline(*variant),
            SectionConfig::Hero { variant, content } => content.outline(*variant),
            SectionConfig::About { variant, content } => content.outline(*variant),
            SectionConfig::Features { variant, content } => content.outline(*variant),
            SectionConfig::HowWeWork { variant, content } => content.outline(*variant),
            SectionConfig::Faq { variant, content } => content.outline(*variant),
            SectionConfig::Team { variant, content } => content.outline(*variant),
            SectionConfig::Testimonials { variant, content } => content.outline(*variant),
            SectionConfig::Pricing { variant, content } => content.outline(*variant),
            SectionConfig::Contact { variant, content } => content.outline(*variant),
            SectionConfig::Cta { variant, content } => content.outline(*variant),
            SectionConfig::TrustBar { variant, content } => content.outline(*variant),
            SectionConfig::PreviousWork { variant, content } => content.outline(*variant),
            SectionConfig::ContentBlock { variant, content } => content.outline(*variant),
            SectionConfig::Footer { variant, content } => content.outline(*variant),
        }
    }
}

/// Rejects unknown variant tags and contact field kinds with their typed
/// errors; everything else is left to the deserializer.
fn check_tags(page: &serde_json::Value) -> Result<(), ConfigError> {
    let sections = page.get("sections").and_then(serde_json::Value::as_array);
    for section in sections.into_iter().flatten() {
        let Some(name) = section.get("section").and_then(serde_json::Value::as_str) else {
            continue;
        };
        if let Some(tag) = section.get("variant").and_then(serde_json::Value::as_str) {
            check_variant(name, tag)?;
        }
        if name == ContactVariant::SECTION {
            let fields = section
                .pointer("/content/fields")
                .and_then(serde_json::Value::as_array);
            for field in fields.into_iter().flatten() {
                let field_name = field.get("name").and_then(serde_json::Value::as_str);
                let kind = field.get("type").and_then(serde_json::Value::as_str);
                if let (Some(field_name), Some(kind)) = (field_name, kind) {
                    parse_kind(field_name, kind)?;
                }
            }
        }
    }
    Ok(())
}

fn check_variant(section: &str, tag: &str) -> Result<(), ConfigError> {
    match section {
        "navbar" => tag.parse::<NavbarVariant>().map(drop),
        "hero" => tag.parse::<HeroVariant>().map(drop),
        "about" => tag.parse::<AboutVariant>().map(drop),
        "features" => tag.parse::<FeaturesVariant>().map(drop),
        "how-we-work" => tag.parse::<HowWeWorkVariant>().map(drop),
        "faq" => tag.parse::<FaqVariant>().map(drop),
        "team" => tag.parse::<TeamVariant>().map(drop),
        "testimonials" => tag.parse::<TestimonialVariant>().map(drop),
        "pricing" => tag.parse::<PricingVariant>().map(drop),
        "contact" => tag.parse::<ContactVariant>().map(drop),
        "cta" => tag.parse::<CtaVariant>().map(drop),
        "trust-bar" => tag.parse::<TrustBarVariant>().map(drop),
        "previous-work" => tag.parse::<WorkVariant>().map(drop),
        "content-block" => tag.parse::<ContentBlockVariant>().map(drop),
        "footer" => tag.parse::<FooterVariant>().map(drop),
        // unknown sections fail in the deserializer
        _ => Ok(()),
    }
}

/// A landing-page layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// Document title.
    pub title: String,
    /// Sections top to bottom.
    pub sections: Vec<SectionConfig>,
}

impl PageConfig {
    /// Parses and validates a page. Unknown variants and field kinds are
    /// rejected here with [`ConfigError::InvalidVariant`] and
    /// [`ConfigError::InvalidFieldKind`], before anything renders.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        check_tags(&value)?;
        let page: PageConfig = serde_json::from_value(value)?;
        tracing::debug!(title = %page.title, sections = page.sections.len(), "page configuration loaded");
        Ok(page)
    }

    /// The bundled landing page.
    pub fn landing() -> Result<Self, ConfigError> {
        Self::from_json(LANDING_PAGE_JSON)
    }

    /// The bundled showcase page.
    pub fn showcase() -> Result<Self, ConfigError> {
        Self::from_json(SHOWCASE_PAGE_JSON)
    }
}
