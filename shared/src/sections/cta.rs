//! Call-to-action band.

use serde::{Deserialize, Serialize};

use crate::{
    content::CallToAction,
    outline::{Block, Outline, Section},
    variant::closed_variant,
};

closed_variant! {
    /// Call-to-action band styles.
    pub enum CtaVariant for "cta" default Solid {
        /// Filled buttons.
        Solid => "solid",
        /// Bordered buttons.
        Outline => "outline",
        /// Text links.
        Minimal => "minimal",
    }
}

impl CtaVariant {
    /// Panel around the headline and buttons.
    pub fn layout_class(self) -> &'static str {
        match self {
            CtaVariant::Solid => "rounded-3xl bg-[var(--surface-alt)] p-12",
            CtaVariant::Outline => "rounded-3xl border border-[var(--border)] p-12",
            CtaVariant::Minimal => "py-4",
        }
    }

    /// Classes for the primary or the secondary button.
    pub fn button_class(self, primary: bool) -> &'static str {
        match (self, primary) {
            (CtaVariant::Solid, true) => "bg-primary text-white hover:bg-primary/90",
            (CtaVariant::Solid, false) => "bg-accent text-white hover:bg-accent/90",
            (CtaVariant::Outline, true) => "border border-primary text-primary hover:bg-primary/10",
            (CtaVariant::Outline, false) => "border border-accent text-accent hover:bg-accent/10",
            (CtaVariant::Minimal, true) => "text-primary hover:underline",
            (CtaVariant::Minimal, false) => "text-accent hover:underline",
        }
    }
}

/// Call-to-action band content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CtaContent {
    /// Band heading; always rendered.
    pub headline: String,
    /// Line under the heading.
    #[serde(default)]
    pub subheadline: Option<String>,
    /// Main button.
    pub primary: CallToAction,
    /// Optional second button.
    #[serde(default)]
    pub secondary: Option<CallToAction>,
}

impl CtaContent {
    /// Buttons in order, each paired with whether it is the primary one.
    pub fn buttons(&self) -> impl Iterator<Item = (&CallToAction, bool)> {
        std::iter::once((&self.primary, true)).chain(self.secondary.iter().map(|cta| (cta, false)))
    }
}

impl Section for CtaContent {
    type Variant = CtaVariant;

    fn outline(&self, _variant: CtaVariant) -> Outline {
        let mut outline = Outline::new();
        outline
            .push(Block::Headline)
            .push_if(self.subheadline.is_some(), Block::Subheadline)
            .push(Block::Actions);
        outline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secondary_button_is_optional() {
        let mut cta = CtaContent {
            headline: "Ready?".to_string(),
            subheadline: None,
            primary: CallToAction::new("Start", "#start"),
            secondary: None,
        };
        assert_eq!(cta.buttons().count(), 1);

        cta.secondary = Some(CallToAction::new("Talk", "#contact").secondary());
        let labels: Vec<_> = cta.buttons().map(|(button, primary)| (button.label.as_str(), primary)).collect();
        assert_eq!(labels, [("Start", true), ("Talk", false)]);
    }
}
