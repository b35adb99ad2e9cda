//! Free-form content block with optional media and actions.

use serde::{Deserialize, Serialize};

use crate::{
    content::{CallToAction, Media},
    outline::{Block, Outline, Section},
    variant::closed_variant,
};

const DEFAULT_BACKGROUND: &str = "#ffffff";

closed_variant! {
    /// Content block layouts.
    pub enum ContentBlockVariant for "content-block" default ImageLeft {
        /// Media left of the copy.
        ImageLeft => "image-left",
        /// Media right of the copy.
        ImageRight => "image-right",
        /// Centred copy across the page.
        FullWidth => "full-width",
        /// Copy only.
        Minimal => "minimal",
        /// Centred light copy for dark backgrounds.
        Highlight => "highlight",
    }
}

impl ContentBlockVariant {
    /// Row layout for the media/text pair.
    pub fn layout_class(self) -> &'static str {
        match self {
            ContentBlockVariant::ImageLeft | ContentBlockVariant::ImageRight => {
                "flex flex-col md:flex-row md:items-center gap-12"
            },
            ContentBlockVariant::FullWidth | ContentBlockVariant::Highlight => {
                "flex flex-col items-center gap-6"
            },
            ContentBlockVariant::Minimal => "flex flex-col max-w-3xl gap-4",
        }
    }

    /// The media slot is part of this layout.
    pub fn shows_media(self) -> bool {
        matches!(self, ContentBlockVariant::ImageLeft | ContentBlockVariant::ImageRight)
    }

    /// Ordering class for the media column.
    pub fn media_order_class(self) -> &'static str {
        match self {
            ContentBlockVariant::ImageLeft => "order-first",
            _ => "order-last",
        }
    }

    /// Classes for the text column.
    pub fn text_class(self) -> &'static str {
        match self {
            ContentBlockVariant::FullWidth | ContentBlockVariant::Highlight => {
                "text-center items-center md:w-full"
            },
            ContentBlockVariant::ImageLeft
            | ContentBlockVariant::ImageRight
            | ContentBlockVariant::Minimal => "",
        }
    }

    /// Copy is drawn light on a dark background.
    pub fn is_inverted(self) -> bool {
        self == ContentBlockVariant::Highlight
    }
}

/// Content block content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentBlockContent {
    /// Block heading.
    #[serde(default)]
    pub headline: Option<String>,
    /// Line under the heading.
    #[serde(default)]
    pub subheadline: Option<String>,
    /// Body paragraphs.
    #[serde(default)]
    pub body: Option<String>,
    /// Image or video for the image layouts.
    #[serde(default)]
    pub media: Option<Media>,
    /// CSS background colour.
    #[serde(default)]
    pub background_color: Option<String>,
    /// Buttons under the copy.
    #[serde(default)]
    pub cta: Vec<CallToAction>,
}

impl ContentBlockContent {
    /// Background colour, white when unset.
    pub fn background(&self) -> &str {
        self.background_color.as_deref().unwrap_or(DEFAULT_BACKGROUND)
    }
}

impl Section for ContentBlockContent {
    type Variant = ContentBlockVariant;

    fn outline(&self, variant: ContentBlockVariant) -> Outline {
        let mut outline = Outline::new();
        outline
            .push_if(variant.shows_media() && self.media.is_some(), Block::Media)
            .push_if(self.headline.is_some(), Block::Headline)
            .push_if(self.subheadline.is_some(), Block::Subheadline)
            .push_if(self.body.is_some(), Block::Body)
            .push_if(!self.cta.is_empty(), Block::Actions);
        outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_only_for_image_layouts() {
        let block = ContentBlockContent {
            body: Some("Copy".to_string()),
            media: Some(Media::image("/shot.png", "screenshot")),
            ..ContentBlockContent::default()
        };
        assert_eq!(block.outline(ContentBlockVariant::ImageRight).blocks(), &[Block::Media, Block::Body]);
        assert_eq!(block.outline(ContentBlockVariant::Highlight).blocks(), &[Block::Body]);
        assert_eq!(block.background(), "#ffffff");
    }
}
