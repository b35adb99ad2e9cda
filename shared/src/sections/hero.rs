//! Opening hero banner.

use serde::{Deserialize, Serialize};

use crate::{
    content::{CallToAction, Media},
    outline::{Block, Outline, Section},
    variant::closed_variant,
};

closed_variant! {
    /// Hero layouts.
    pub enum HeroVariant for "hero" default Split {
        /// Text and media side by side.
        Split => "split",
        /// Centred text column.
        Centered => "centered",
        /// Fills the viewport.
        FullScreen => "full-screen",
        /// No layout extras.
        Minimal => "minimal",
        /// Split layout on a tinted, taller band.
        MarketingBank => "marketing-bank",
        /// Background video behind centred text.
        Video => "video",
    }
}

impl HeroVariant {
    /// Section-level layout classes.
    pub fn layout_class(self) -> &'static str {
        match self {
            HeroVariant::Split => "md:flex-row md:items-center md:justify-between",
            HeroVariant::Centered => "items-center text-center",
            HeroVariant::FullScreen => "min-h-screen items-center justify-center",
            HeroVariant::Minimal => "",
            HeroVariant::MarketingBank => {
                "bg-gray-50 md:flex-row md:items-center md:justify-between lg:min-h-[700px]"
            },
            HeroVariant::Video => "min-h-[80vh] items-center justify-center",
        }
    }

    /// Text and media share a row on wide screens.
    pub fn is_two_column(self) -> bool {
        matches!(self, HeroVariant::Split | HeroVariant::MarketingBank)
    }

    /// Classes for the content wrapper.
    pub fn content_class(self) -> &'static str {
        if self.is_two_column() {
            "md:flex-row"
        } else {
            "items-center"
        }
    }

    /// Classes for the text column.
    pub fn text_class(self) -> &'static str {
        match self {
            HeroVariant::Centered => "items-center text-center",
            HeroVariant::Split | HeroVariant::MarketingBank => "md:w-1/2",
            _ => "",
        }
    }
}

/// Hero content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroContent {
    /// Main heading; always rendered.
    pub headline: String,
    /// Supporting line.
    #[serde(default)]
    pub subheadline: Option<String>,
    /// Buttons under the text.
    #[serde(default)]
    pub cta: Vec<CallToAction>,
    /// Image or video beside the text.
    #[serde(default)]
    pub media: Option<Media>,
    /// Classes for a decorative layer behind the section.
    #[serde(default)]
    pub decoration: Option<String>,
    /// Background video, used by the video layout only.
    #[serde(default)]
    pub video_src: Option<String>,
}

impl Section for HeroContent {
    type Variant = HeroVariant;

    fn outline(&self, variant: HeroVariant) -> Outline {
        let mut outline = Outline::new();
        outline
            .push_if(self.decoration.is_some(), Block::Decoration)
            .push_if(variant == HeroVariant::Video && self.video_src.is_some(), Block::BackgroundVideo)
            .push(Block::Headline)
            .push_if(self.subheadline.is_some(), Block::Subheadline)
            .push_if(!self.cta.is_empty(), Block::Actions)
            .push_if(self.media.is_some(), Block::Media);
        outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> HeroContent {
        HeroContent {
            headline: "Ship faster".to_string(),
            subheadline: Some("With less glue".to_string()),
            cta: vec![CallToAction::new("Start", "#")],
            media: Some(Media::image("/hero.png", "")),
            decoration: Some("bg-gradient-to-b".to_string()),
            video_src: Some("/intro.mp4".to_string()),
        }
    }

    #[test]
    fn background_video_only_for_video_layout() {
        let hero = full();
        for variant in HeroVariant::ALL {
            let outline = hero.outline(*variant);
            assert_eq!(outline.has(Block::BackgroundVideo), *variant == HeroVariant::Video);
            assert!(outline.has(Block::Media));
            assert!(outline.has(Block::Actions));
        }
    }

    #[test]
    fn bare_headline_renders_alone() {
        let hero = HeroContent {
            headline: "Hello".to_string(),
            ..HeroContent::default()
        };
        for variant in HeroVariant::ALL {
            assert_eq!(hero.outline(*variant).blocks(), &[Block::Headline]);
        }
    }

    #[test]
    fn two_column_layouts_split_text_width() {
        assert_eq!(HeroVariant::Split.text_class(), "md:w-1/2");
        assert_eq!(HeroVariant::MarketingBank.content_class(), "md:flex-row");
        assert_eq!(HeroVariant::FullScreen.content_class(), "items-center");
    }
}
