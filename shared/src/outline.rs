//! Which blocks a section emits for a given payload and variant.
//!
//! Components consult the outline for every variant-gated or
//! presence-gated block, so the decision is made once, here, and can be
//! checked without a DOM.

/// One renderable part of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Block {
    /// Main heading.
    Headline,
    /// Supporting line under the heading.
    Subheadline,
    /// Free-form body copy.
    Body,
    /// Image or video next to the text.
    Media,
    /// Decorative layer behind the section.
    Decoration,
    /// Autoplaying background video.
    BackgroundVideo,
    /// Row of call-to-action buttons or links.
    Actions,
    /// Monthly/yearly switch.
    BillingToggle,
    /// Footer column groups.
    Columns,
    /// Flat link row.
    Links,
    /// Social icon row.
    Socials,
    /// Newsletter signup form.
    Newsletter,
    /// Copyright line.
    Copyright,
    /// Floating chat button replacing the whole section.
    FloatingLink,
    /// Controlled contact form.
    Form,
    /// The item region (cards, steps, plans, questions...).
    Items,
}

/// Ordered list of blocks plus the number of entries in the item region.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outline {
    blocks: Vec<Block>,
    items: usize,
}

impl Outline {
    /// Empty outline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `block` when `present` holds.
    pub fn push_if(&mut self, present: bool, block: Block) -> &mut Self {
        if present {
            self.blocks.push(block);
        }
        self
    }

    /// Appends `block` unconditionally.
    pub fn push(&mut self, block: Block) -> &mut Self {
        self.push_if(true, block)
    }

    /// Appends the item region holding `count` entries. Zero is allowed and
    /// still yields an (empty) region.
    pub fn items(&mut self, count: usize) -> &mut Self {
        self.items = count;
        self.push(Block::Items)
    }

    /// Whether `block` will be rendered.
    pub fn has(&self, block: Block) -> bool {
        self.blocks.contains(&block)
    }

    /// Rendered blocks in document order.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Entries in the item region; zero when there is no region.
    pub fn item_count(&self) -> usize {
        self.items
    }
}

/// A content payload that renders as one page section.
pub trait Section {
    /// The closed set of layouts this section supports.
    type Variant: Copy;

    /// Blocks rendered for this payload under `variant`.
    fn outline(&self, variant: Self::Variant) -> Outline;
}

/// Heading pair shared by most sections.
pub(crate) fn heading(outline: &mut Outline, headline: Option<&str>, subheadline: Option<&str>) {
    outline
        .push_if(headline.is_some(), Block::Headline)
        .push_if(subheadline.is_some(), Block::Subheadline);
}

#[cfg(test)]
mod tests {
    use super::{Block, Outline};

    #[test]
    fn push_if_skips_absent_blocks() {
        let mut outline = Outline::new();
        outline
            .push_if(true, Block::Headline)
            .push_if(false, Block::Subheadline)
            .items(0);

        assert_eq!(outline.blocks(), &[Block::Headline, Block::Items]);
        assert!(!outline.has(Block::Subheadline));
        assert_eq!(outline.item_count(), 0);
    }
}
