use launchpad_shared::{
    sections::about::{AboutContent, AboutItem, AboutVariant},
    Block, Section,
};
use yew::prelude::*;

use crate::{
    components::{
        icons::Icon,
        media::{Decoration, MediaView},
        motion::{Motion, Reveal},
        section_heading::SectionHeading,
    },
    config::asset_path,
    i18n::current::about as t,
};

#[derive(Properties, PartialEq)]
pub struct AboutProps {
    pub content: AboutContent,
    #[prop_or_default]
    pub variant: AboutVariant,
}

#[function_component(About)]
pub fn about(props: &AboutProps) -> Html {
    let AboutProps {
        content,
        variant,
    } = props;
    let outline = content.outline(*variant);
    let items = content.items.as_deref().unwrap_or_default();

    html! {
        <section class="relative overflow-hidden px-6 py-20 md:px-16" aria-label={t::REGION_ARIA}>
            if let Some(class) = content.decoration.as_ref().filter(|_| outline.has(Block::Decoration)) {
                <Decoration class={class.clone()} />
            }
            <div class={classes!("max-w-7xl", "mx-auto", "flex", "flex-col", variant.layout_class())}>
                <SectionHeading
                    outline={outline.clone()}
                    headline={content.headline.clone()}
                    subheadline={content.subheadline.clone()}
                    class={variant.heading_class()}
                />
                if let Some(media) = content.media.as_ref().filter(|_| outline.has(Block::Media)) {
                    <Reveal motion={Motion::SlideLeft} class="md:w-1/2">
                        <MediaView media={media.clone()} />
                    </Reveal>
                }
            </div>
            if outline.has(Block::Items) {
                <div class={classes!("max-w-7xl", "mx-auto", "mt-10", variant.items_class())}>
                    { for items.iter().enumerate().map(|(index, item)| about_item(*variant, index, item)) }
                </div>
            }
        </section>
    }
}

fn about_item(variant: AboutVariant, index: usize, item: &AboutItem) -> Html {
    let card = variant == AboutVariant::Cards;
    html! {
        <Reveal
            motion={Motion::FadeUp}
            index={index}
            class={classes!(
                "flex",
                "gap-4",
                if card { "flex-col rounded-xl border border-[var(--border)] p-6 shadow-sm" } else { "items-start" }
            )}
        >
            if let Some(icon) = item.icon {
                <Icon name={icon} size={32} class="text-[var(--primary)]" />
            }
            if let Some(image) = &item.image {
                <img class="h-16 w-16 rounded-lg object-cover" src={asset_path(image)} alt={item.title.clone()} loading="lazy" />
            }
            <div>
                <h3 class="text-lg font-semibold">{ &item.title }</h3>
                if let Some(description) = &item.description {
                    <p class="mt-1 text-[var(--text-muted)]">{ description }</p>
                }
            </div>
        </Reveal>
    }
}
