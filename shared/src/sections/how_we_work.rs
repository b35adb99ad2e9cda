//! Process steps.

use serde::{Deserialize, Serialize};

use crate::{
    content::{IconName, Media},
    outline::{heading, Block, Outline, Section},
    variant::closed_variant,
};

closed_variant! {
    /// Process section layouts.
    pub enum HowWeWorkVariant for "how-we-work" default Horizontal {
        /// Steps in a row.
        Horizontal => "horizontal",
        /// Steps stacked.
        Vertical => "vertical",
        /// Steps beside media.
        Split => "split",
        /// Steps as cards.
        Cards => "cards",
        /// Centred stack.
        Centered => "centered",
    }
}

impl HowWeWorkVariant {
    /// Classes for the step container.
    pub fn layout_class(self) -> &'static str {
        match self {
            HowWeWorkVariant::Horizontal => "flex flex-col md:flex-row md:justify-between gap-8",
            HowWeWorkVariant::Vertical => "flex flex-col gap-6",
            HowWeWorkVariant::Split => "flex flex-col md:flex-row md:items-center gap-10",
            HowWeWorkVariant::Cards => "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-8",
            HowWeWorkVariant::Centered => "flex flex-col items-center text-center gap-6",
        }
    }

    /// Classes for the heading wrapper.
    pub fn heading_class(self) -> &'static str {
        match self {
            HowWeWorkVariant::Centered => "items-center text-center",
            HowWeWorkVariant::Split | HowWeWorkVariant::Horizontal => "md:max-w-xl",
            HowWeWorkVariant::Vertical | HowWeWorkVariant::Cards => "",
        }
    }

    /// Classes for a single non-card step.
    pub fn step_class(self) -> &'static str {
        match self {
            HowWeWorkVariant::Centered => "items-center text-center",
            _ => "items-center md:items-start md:text-left",
        }
    }
}

/// One step of the process.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Step name.
    pub title: String,
    /// What happens in this step.
    #[serde(default)]
    pub description: Option<String>,
    /// Glyph above the title.
    #[serde(default)]
    pub icon: Option<IconName>,
    /// Illustration URL above the title.
    #[serde(default)]
    pub image: Option<String>,
}

/// Process section content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HowWeWorkContent {
    /// Section heading.
    #[serde(default)]
    pub headline: Option<String>,
    /// Line under the heading.
    #[serde(default)]
    pub subheadline: Option<String>,
    /// Ordered steps.
    #[serde(default)]
    pub steps: Vec<Step>,
    /// Media for the split layout.
    #[serde(default)]
    pub media: Option<Media>,
    /// Classes for a decorative layer behind the section.
    #[serde(default)]
    pub decoration: Option<String>,
}

impl Section for HowWeWorkContent {
    type Variant = HowWeWorkVariant;

    fn outline(&self, variant: HowWeWorkVariant) -> Outline {
        let mut outline = Outline::new();
        outline.push_if(self.decoration.is_some(), Block::Decoration);
        heading(&mut outline, self.headline.as_deref(), self.subheadline.as_deref());
        outline
            .push_if(variant == HowWeWorkVariant::Split && self.media.is_some(), Block::Media)
            .items(self.steps.len());
        outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_is_dropped_outside_split() {
        let content = HowWeWorkContent {
            headline: Some("OUR PROCESS".to_string()),
            media: Some(Media::image("/process.svg", "")),
            steps: vec![Step {
                title: "Discover".to_string(),
                description: None,
                icon: None,
                image: None,
            }],
            ..HowWeWorkContent::default()
        };

        assert!(content.outline(HowWeWorkVariant::Split).has(Block::Media));
        assert!(!content.outline(HowWeWorkVariant::Centered).has(Block::Media));
        assert_eq!(content.outline(HowWeWorkVariant::Cards).item_count(), 1);
    }
}
