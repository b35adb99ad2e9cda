use launchpad_shared::{
    sections::previous_work::{PreviousWorkContent, WorkItem, WorkVariant},
    Section,
};
use yew::prelude::*;

use crate::{
    components::{
        motion::{Motion, Reveal},
        section_heading::SectionHeading,
    },
    config::asset_path,
    i18n::current::previous_work as t,
};

#[derive(Properties, PartialEq)]
pub struct PreviousWorkProps {
    pub content: PreviousWorkContent,
    #[prop_or_default]
    pub variant: WorkVariant,
}

#[function_component(PreviousWork)]
pub fn previous_work(props: &PreviousWorkProps) -> Html {
    let PreviousWorkProps {
        content,
        variant,
    } = props;
    let outline = content.outline(*variant);

    html! {
        <section class="px-6 py-20 md:px-16" aria-label={t::REGION_ARIA}>
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    outline={outline}
                    headline={content.headline.clone()}
                    subheadline={content.subheadline.clone()}
                    class={variant.heading_class()}
                />
                <div class={variant.layout_class()}>
                    { for content.items.iter().enumerate().map(|(index, item)| work_card(*variant, index, item)) }
                </div>
            </div>
        </section>
    }
}

fn work_card(variant: WorkVariant, index: usize, item: &WorkItem) -> Html {
    let tags = html! {
        <div class="flex flex-wrap gap-2">
            { for item.tags.iter().map(|tag| html! {
                <span class="rounded-full bg-[var(--surface-alt)] px-3 py-1 text-xs">{ tag }</span>
            }) }
        </div>
    };

    if variant == WorkVariant::Minimal {
        return html! {
            <Reveal motion={Motion::FadeIn} index={index}>
                <a href={item.href().to_string()} class="flex items-baseline justify-between gap-4 border-b border-[var(--border)] py-3 hover:text-[var(--primary)]">
                    <span class="font-semibold">{ &item.title }</span>
                    { tags }
                </a>
            </Reveal>
        };
    }

    let highlight = variant == WorkVariant::Highlight;

    html! {
        <Reveal
            motion={if highlight { Motion::SlideRight } else { Motion::FadeUp }}
            index={index}
            class={classes!(
                "group",
                "overflow-hidden",
                "rounded-2xl",
                "border",
                "border-[var(--border)]",
                "shadow-sm",
                "transition",
                "hover:shadow-lg",
                match variant {
                    WorkVariant::Carousel => "shrink-0 snap-start w-80",
                    WorkVariant::Masonry => "mb-6 break-inside-avoid",
                    WorkVariant::Highlight => "md:flex",
                    _ => "",
                }
            )}
        >
            if let Some(image) = &item.image {
                <img
                    class={classes!(
                        "w-full",
                        "object-cover",
                        "transition-transform",
                        "group-hover:scale-105",
                        if highlight { "md:w-1/2 h-72" } else { "h-56" }
                    )}
                    src={asset_path(image)}
                    alt={item.title.clone()}
                    loading="lazy"
                />
            }
            <div class="flex flex-col gap-3 p-6">
                <h3 class="text-xl font-semibold">
                    <a href={item.href().to_string()} class="hover:text-[var(--primary)]">{ &item.title }</a>
                </h3>
                if let Some(description) = &item.description {
                    <p class="text-[var(--text-muted)]">{ description }</p>
                }
                { tags }
            </div>
        </Reveal>
    }
}
