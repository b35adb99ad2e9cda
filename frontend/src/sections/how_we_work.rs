use launchpad_shared::{
    sections::how_we_work::{HowWeWorkContent, HowWeWorkVariant, Step},
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
    i18n::current::how_we_work as t,
};

#[derive(Properties, PartialEq)]
pub struct HowWeWorkProps {
    pub content: HowWeWorkContent,
    #[prop_or_default]
    pub variant: HowWeWorkVariant,
}

#[function_component(HowWeWork)]
pub fn how_we_work(props: &HowWeWorkProps) -> Html {
    let HowWeWorkProps {
        content,
        variant,
    } = props;
    let outline = content.outline(*variant);

    let steps = html! {
        <div class={classes!("flex-1", variant.layout_class())}>
            { for content.steps.iter().enumerate().map(|(index, step)| step_view(*variant, index, step)) }
        </div>
    };

    html! {
        <section class="relative overflow-hidden px-6 py-20 md:px-16" aria-label={t::REGION_ARIA}>
            if let Some(class) = content.decoration.as_ref().filter(|_| outline.has(Block::Decoration)) {
                <Decoration class={class.clone()} />
            }
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    outline={outline.clone()}
                    headline={content.headline.clone()}
                    subheadline={content.subheadline.clone()}
                    class={variant.heading_class()}
                />
                if let Some(media) = content.media.as_ref().filter(|_| outline.has(Block::Media)) {
                    <div class="flex flex-col md:flex-row md:items-center gap-10">
                        <Reveal motion={Motion::SlideRight} class="md:w-1/2">
                            <MediaView media={media.clone()} />
                        </Reveal>
                        { steps }
                    </div>
                } else {
                    { steps }
                }
            </div>
        </section>
    }
}

fn step_view(variant: HowWeWorkVariant, index: usize, step: &Step) -> Html {
    let card = variant == HowWeWorkVariant::Cards;
    html! {
        <Reveal
            motion={Motion::FadeUp}
            index={index}
            class={classes!(
                "flex",
                "flex-col",
                "gap-3",
                variant.step_class(),
                card.then_some("rounded-xl border border-[var(--border)] p-6 shadow-sm")
            )}
        >
            if let Some(icon) = step.icon {
                <Icon name={icon} size={36} class="text-[var(--primary)]" />
            } else {
                <span class="flex h-10 w-10 items-center justify-center rounded-full bg-[var(--primary)] font-bold text-white">
                    { index + 1 }
                </span>
            }
            if let Some(image) = &step.image {
                <img class="h-32 w-full rounded-lg object-cover" src={asset_path(image)} alt={step.title.clone()} loading="lazy" />
            }
            <h3 class="text-xl font-semibold">{ &step.title }</h3>
            if let Some(description) = &step.description {
                <p class="text-[var(--text-muted)]">{ description }</p>
            }
        </Reveal>
    }
}
