//! Portfolio of past projects.

use serde::{Deserialize, Serialize};

use crate::{
    outline::{heading, Outline, Section},
    variant::closed_variant,
};

closed_variant! {
    /// Portfolio layouts.
    pub enum WorkVariant for "previous-work" default Grid {
        /// Image cards in a grid.
        Grid => "grid",
        /// Snap-scrolling strip.
        Carousel => "carousel",
        /// CSS column masonry.
        Masonry => "masonry",
        /// Large stacked cards.
        Highlight => "highlight",
        /// Titles only.
        Minimal => "minimal",
    }
}

impl WorkVariant {
    /// Classes for the item container.
    pub fn layout_class(self) -> &'static str {
        match self {
            WorkVariant::Grid => "grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-8",
            WorkVariant::Carousel => "flex overflow-x-auto gap-6 snap-x snap-mandatory",
            WorkVariant::Masonry => "columns-1 sm:columns-2 md:columns-3 gap-6",
            WorkVariant::Highlight => "flex flex-col gap-10",
            WorkVariant::Minimal => "flex flex-col gap-4",
        }
    }

    /// Classes for the heading wrapper.
    pub fn heading_class(self) -> &'static str {
        match self {
            WorkVariant::Highlight => "items-center text-center",
            _ => "",
        }
    }
}

/// One portfolio entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    /// Project name.
    pub title: String,
    /// Short summary.
    #[serde(default)]
    pub description: Option<String>,
    /// Screenshot URL.
    #[serde(default)]
    pub image: Option<String>,
    /// Link to the project.
    #[serde(default)]
    pub project_url: Option<String>,
    /// Technology or industry tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl WorkItem {
    /// Link target; `#` when the project has no URL.
    pub fn href(&self) -> &str {
        self.project_url.as_deref().unwrap_or("#")
    }
}

/// Portfolio section content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PreviousWorkContent {
    /// Section heading.
    #[serde(default)]
    pub headline: Option<String>,
    /// Line under the heading.
    #[serde(default)]
    pub subheadline: Option<String>,
    /// Entries in display order.
    #[serde(default)]
    pub items: Vec<WorkItem>,
}

impl Section for PreviousWorkContent {
    type Variant = WorkVariant;

    fn outline(&self, _variant: WorkVariant) -> Outline {
        let mut outline = Outline::new();
        heading(&mut outline, self.headline.as_deref(), self.subheadline.as_deref());
        outline.items(self.items.len());
        outline
    }
}
