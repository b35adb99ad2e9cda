//! Feature cards.

use serde::{Deserialize, Serialize};

use crate::{
    content::IconName,
    outline::{heading, Outline, Section},
    variant::closed_variant,
};

closed_variant! {
    /// Feature list layouts.
    pub enum FeaturesVariant for "features" default Grid {
        /// Responsive card grid.
        Grid => "grid",
        /// Columns side by side.
        Split => "split",
        /// Single narrow column.
        List => "list",
        /// Horizontally scrolling strip.
        Carousel => "carousel",
        /// Evenly spaced steps.
        Timeline => "timeline",
    }
}

impl FeaturesVariant {
    /// Classes for the item container.
    pub fn layout_class(self) -> &'static str {
        match self {
            FeaturesVariant::Grid => "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
            FeaturesVariant::List => "flex flex-col gap-6 max-w-2xl mx-auto",
            FeaturesVariant::Carousel => "flex gap-6 overflow-x-auto py-4",
            FeaturesVariant::Split | FeaturesVariant::Timeline => {
                "flex flex-col md:flex-row gap-12"
            },
        }
    }

    /// Classes for each feature card.
    pub fn item_class(self) -> &'static str {
        match self {
            FeaturesVariant::Grid => "border shadow-sm hover:shadow-md",
            FeaturesVariant::Carousel => "min-w-65 border shadow-sm",
            FeaturesVariant::Timeline => "flex-1 text-center relative",
            FeaturesVariant::List => "flex gap-4",
            FeaturesVariant::Split => "flex flex-col gap-3",
        }
    }
}

/// One feature card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureItem {
    /// Feature name.
    pub title: String,
    /// One or two sentences about it.
    pub description: String,
    /// Glyph above the title.
    #[serde(default)]
    pub icon: Option<IconName>,
    /// Illustration URL above the title.
    #[serde(default)]
    pub image: Option<String>,
}

/// Feature section content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeaturesContent {
    /// Section heading.
    #[serde(default)]
    pub headline: Option<String>,
    /// Line under the heading.
    #[serde(default)]
    pub subheadline: Option<String>,
    /// Feature cards.
    #[serde(default)]
    pub features: Vec<FeatureItem>,
}

impl Section for FeaturesContent {
    type Variant = FeaturesVariant;

    fn outline(&self, _variant: FeaturesVariant) -> Outline {
        let mut outline = Outline::new();
        heading(&mut outline, self.headline.as_deref(), self.subheadline.as_deref());
        outline.items(self.features.len());
        outline
    }
}
