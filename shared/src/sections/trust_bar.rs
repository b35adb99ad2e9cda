//! Logos, stats and certifications strip.

use serde::{Deserialize, Serialize};

use crate::{
    content::IconName,
    outline::{Block, Outline, Section},
    variant::closed_variant,
};

closed_variant! {
    /// Trust bar layouts.
    pub enum TrustBarVariant for "trust-bar" default Logos {
        /// Greyscale logo wall.
        Logos => "logos",
        /// Big numbers with labels.
        Stats => "stats",
        /// Bordered badges.
        Certifications => "certifications",
        /// Rating badges.
        Ratings => "ratings",
        /// Plain labels.
        Minimal => "minimal",
    }
}

impl TrustBarVariant {
    /// Classes for the item container.
    pub fn layout_class(self) -> &'static str {
        match self {
            TrustBarVariant::Logos => "grid grid-cols-2 gap-6 sm:grid-cols-4 md:grid-cols-6",
            TrustBarVariant::Stats => "grid grid-cols-2 gap-6 md:grid-cols-4",
            TrustBarVariant::Certifications => "flex flex-wrap items-center justify-center gap-6",
            TrustBarVariant::Ratings => "flex flex-wrap items-center justify-center gap-8",
            TrustBarVariant::Minimal => "flex flex-col items-center gap-4",
        }
    }
}

/// One trust indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustBarItem {
    /// Caption or alt text.
    pub label: String,
    /// Figure for the stats layout, e.g. `120+`.
    #[serde(default)]
    pub value: Option<String>,
    /// Glyph for badges.
    #[serde(default)]
    pub icon: Option<IconName>,
    /// Logo URL.
    #[serde(default)]
    pub image: Option<String>,
}

/// Trust bar content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrustBarContent {
    /// Small caption above the items.
    #[serde(default)]
    pub title: Option<String>,
    /// Indicators.
    #[serde(default)]
    pub items: Vec<TrustBarItem>,
}

impl Section for TrustBarContent {
    type Variant = TrustBarVariant;

    fn outline(&self, _variant: TrustBarVariant) -> Outline {
        let mut outline = Outline::new();
        outline
            .push_if(self.title.is_some(), Block::Headline)
            .items(self.items.len());
        outline
    }
}
