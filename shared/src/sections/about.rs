//! About section: company introduction with optional media and items.

use serde::{Deserialize, Serialize};

use crate::{
    content::{IconName, Media},
    outline::{heading, Block, Outline, Section},
    variant::closed_variant,
};

closed_variant! {
    /// About section layouts.
    pub enum AboutVariant for "about" default Split {
        /// Copy beside media.
        Split => "split",
        /// Centred copy only.
        Centered => "centered",
        /// Copy followed by a card grid.
        Cards => "cards",
        /// Copy followed by a plain list.
        Minimal => "minimal",
        /// Split with the media first.
        Illustration => "illustration",
    }
}

impl AboutVariant {
    /// Layout classes for the inner container.
    pub fn layout_class(self) -> &'static str {
        match self {
            AboutVariant::Split => "md:flex-row md:items-center md:justify-between gap-10",
            AboutVariant::Centered => "flex-col text-center items-center gap-6",
            AboutVariant::Cards => "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-8",
            AboutVariant::Minimal => "flex flex-col gap-4",
            AboutVariant::Illustration => {
                "md:flex-row-reverse md:items-center md:justify-between gap-10"
            },
        }
    }

    /// Classes for the heading wrapper.
    pub fn heading_class(self) -> &'static str {
        match self {
            AboutVariant::Centered => "items-center text-center",
            AboutVariant::Split | AboutVariant::Illustration => "md:w-1/2",
            AboutVariant::Cards | AboutVariant::Minimal => "",
        }
    }

    /// The media slot is part of this layout.
    pub fn shows_media(self) -> bool {
        matches!(self, AboutVariant::Split | AboutVariant::Illustration)
    }

    /// The item region is part of this layout.
    pub fn shows_items(self) -> bool {
        matches!(self, AboutVariant::Cards | AboutVariant::Minimal)
    }

    /// Classes for the item region.
    pub fn items_class(self) -> &'static str {
        match self {
            AboutVariant::Cards => "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-8",
            _ => "flex flex-col gap-4",
        }
    }
}

/// One highlight in the about section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutItem {
    /// Short title.
    pub title: String,
    /// Supporting copy.
    #[serde(default)]
    pub description: Option<String>,
    /// Illustration URL, shown on cards.
    #[serde(default)]
    pub image: Option<String>,
    /// Glyph, shown on cards.
    #[serde(default)]
    pub icon: Option<IconName>,
}

/// About section content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AboutContent {
    /// Section heading.
    #[serde(default)]
    pub headline: Option<String>,
    /// Section copy.
    #[serde(default)]
    pub subheadline: Option<String>,
    /// Highlights; `None` leaves the item region out entirely.
    #[serde(default)]
    pub items: Option<Vec<AboutItem>>,
    /// Image or video for the split layouts.
    #[serde(default)]
    pub media: Option<Media>,
    /// Classes for a decorative layer behind the section.
    #[serde(default)]
    pub decoration: Option<String>,
}

impl Section for AboutContent {
    type Variant = AboutVariant;

    fn outline(&self, variant: AboutVariant) -> Outline {
        let mut outline = Outline::new();
        outline.push_if(self.decoration.is_some(), Block::Decoration);
        heading(&mut outline, self.headline.as_deref(), self.subheadline.as_deref());
        outline.push_if(self.media.is_some() && variant.shows_media(), Block::Media);
        if let Some(items) = self.items.as_ref().filter(|_| variant.shows_items()) {
            outline.items(items.len());
        }
        outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_only_for_list_layouts() {
        let about = AboutContent {
            headline: Some("About".to_string()),
            items: Some(vec![AboutItem {
                title: "Fast".to_string(),
                description: None,
                image: None,
                icon: Some(IconName::Award),
            }]),
            ..AboutContent::default()
        };

        assert_eq!(about.outline(AboutVariant::Cards).item_count(), 1);
        assert_eq!(about.outline(AboutVariant::Minimal).item_count(), 1);
        assert!(!about.outline(AboutVariant::Split).has(Block::Items));
        assert!(!about.outline(AboutVariant::Centered).has(Block::Items));
    }

    #[test]
    fn media_only_for_split_layouts() {
        let about = AboutContent {
            media: Some(Media::image("/team.jpg", "team")),
            ..AboutContent::default()
        };
        let with_media: Vec<_> = AboutVariant::ALL
            .iter()
            .filter(|variant| about.outline(**variant).has(Block::Media))
            .collect();
        assert_eq!(with_media, [&AboutVariant::Split, &AboutVariant::Illustration]);
    }

    #[test]
    fn empty_item_list_still_yields_region() {
        let about = AboutContent {
            items: Some(Vec::new()),
            ..AboutContent::default()
        };
        let outline = about.outline(AboutVariant::Cards);
        assert!(outline.has(Block::Items));
        assert_eq!(outline.item_count(), 0);
    }
}
