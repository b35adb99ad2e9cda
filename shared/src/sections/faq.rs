//! FAQ section and its accordion state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{
    outline::{heading, Outline, Section},
    variant::closed_variant,
};

closed_variant! {
    /// FAQ layouts.
    pub enum FaqVariant for "faq" default Accordion {
        /// Expandable question list.
        Accordion => "accordion",
        /// All answers visible in a grid.
        Grid => "grid",
    }
}

impl FaqVariant {
    /// Classes for the item container.
    pub fn layout_class(self) -> &'static str {
        match self {
            FaqVariant::Accordion => "flex flex-col gap-4 max-w-3xl mx-auto",
            FaqVariant::Grid => "grid gap-6 md:grid-cols-2 lg:grid-cols-3 max-w-5xl mx-auto",
        }
    }
}

/// A question and its answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    /// The question.
    pub question: String,
    /// The answer.
    pub answer: String,
}

/// FAQ section content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaqContent {
    /// Section heading.
    #[serde(default)]
    pub headline: Option<String>,
    /// Line under the heading.
    #[serde(default)]
    pub subheadline: Option<String>,
    /// Questions in display order.
    #[serde(default)]
    pub items: Vec<FaqItem>,
}

impl Section for FaqContent {
    type Variant = FaqVariant;

    fn outline(&self, _variant: FaqVariant) -> Outline {
        let mut outline = Outline::new();
        heading(&mut outline, self.headline.as_deref(), self.subheadline.as_deref());
        outline.items(self.items.len());
        outline
    }
}

/// Open/closed flags of an accordion, one per item index.
///
/// Items open and close independently; expanding one never collapses
/// another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accordion {
    open: BTreeSet<usize>,
}

impl Accordion {
    /// Flips the item at `index`.
    pub fn toggle(&mut self, index: usize) {
        if !self.open.remove(&index) {
            self.open.insert(index);
        }
    }

    /// Whether the item at `index` is expanded.
    pub fn is_open(&self, index: usize) -> bool {
        self.open.contains(&index)
    }

    /// Number of expanded items.
    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_open_independently() {
        let mut accordion = Accordion::default();
        accordion.toggle(0);
        accordion.toggle(2);

        assert!(accordion.is_open(0));
        assert!(!accordion.is_open(1));
        assert!(accordion.is_open(2));
        assert_eq!(accordion.open_count(), 2);

        accordion.toggle(0);
        assert!(!accordion.is_open(0));
        assert!(accordion.is_open(2));
    }

    #[test]
    fn empty_faq_keeps_heading() {
        let faq = FaqContent {
            headline: Some("FAQS".to_string()),
            ..FaqContent::default()
        };
        for variant in FaqVariant::ALL {
            let outline = faq.outline(*variant);
            assert!(outline.has(crate::Block::Headline));
            assert!(outline.has(crate::Block::Items));
            assert_eq!(outline.item_count(), 0);
        }
    }
}
