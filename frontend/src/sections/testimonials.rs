use launchpad_shared::{
    sections::testimonials::{TestimonialItem, TestimonialVariant, TestimonialsContent},
    IconName, Section,
};
use yew::prelude::*;

use crate::{
    components::{
        icons::Icon,
        motion::{Motion, Reveal},
        section_heading::SectionHeading,
    },
    config::asset_path,
    i18n::{current::testimonials as t, fill_one, fill_two},
};

#[derive(Properties, PartialEq)]
pub struct TestimonialsProps {
    pub content: TestimonialsContent,
    #[prop_or_default]
    pub variant: TestimonialVariant,
}

#[function_component(Testimonials)]
pub fn testimonials(props: &TestimonialsProps) -> Html {
    let TestimonialsProps {
        content,
        variant,
    } = props;
    let outline = content.outline(*variant);

    html! {
        <section class="px-6 py-20 md:px-16">
            <div class="max-w-7xl mx-auto flex flex-col items-center">
                <SectionHeading
                    outline={outline}
                    headline={content.headline.clone()}
                    subheadline={content.subheadline.clone()}
                    class="items-center text-center"
                />
                <div class={variant.layout_class()}>
                    { for content.visible(*variant).into_iter().enumerate().map(|(index, item)| testimonial_card(*variant, index, item)) }
                </div>
            </div>
        </section>
    }
}

fn stars(item: &TestimonialItem) -> Html {
    let Some(slots) = item.stars() else {
        return Html::default();
    };
    let filled = slots.iter().filter(|slot| **slot).count();
    html! {
        <div class="flex gap-1 text-amber-400" role="img" aria-label={fill_one(t::RATING_ARIA_TEMPLATE, filled)}>
            { for slots.iter().map(|on| html! {
                <Icon
                    name={IconName::Star}
                    size={16}
                    color={if *on { "currentColor" } else { "#d1d5db" }}
                />
            }) }
        </div>
    }
}

fn attribution(item: &TestimonialItem) -> String {
    match &item.role {
        Some(role) => fill_two(t::ATTRIBUTION_TEMPLATE, &item.name, role),
        None => item.name.clone(),
    }
}

fn testimonial_card(variant: TestimonialVariant, index: usize, item: &TestimonialItem) -> Html {
    let avatar = item.avatar.as_ref().map(|src| {
        html! {
            <img class="h-12 w-12 rounded-full object-cover" src={asset_path(src)} alt={item.name.clone()} loading="lazy" />
        }
    });

    match variant {
        TestimonialVariant::Hero => html! {
            <Reveal motion={Motion::ScaleIn} class="flex flex-col md:flex-row items-center gap-12 w-full">
                if let Some(src) = &item.avatar {
                    <img class="h-40 w-40 rounded-full object-cover shadow-lg" src={asset_path(src)} alt={item.name.clone()} />
                }
                <blockquote class="flex flex-col gap-4">
                    { stars(item) }
                    <p class="text-2xl md:text-3xl font-medium leading-snug">{ format!("“{}”", item.quote) }</p>
                    <footer class="text-[var(--text-muted)]">{ attribution(item) }</footer>
                </blockquote>
            </Reveal>
        },
        TestimonialVariant::Video => html! {
            <Reveal motion={Motion::FadeUp} index={index} class="flex-1 flex flex-col gap-3">
                if let Some(src) = &item.video {
                    <video class="w-full rounded-xl" src={asset_path(src)} controls=true playsinline=true />
                }
                <p class="font-semibold">{ attribution(item) }</p>
            </Reveal>
        },
        TestimonialVariant::Inline => html! {
            <Reveal motion={Motion::FadeIn} index={index} class="flex-1 flex items-start gap-4">
                { avatar.unwrap_or_default() }
                <div class="flex flex-col gap-1">
                    <p class="italic">{ format!("“{}”", item.quote) }</p>
                    <p class="text-sm text-[var(--text-muted)]">{ attribution(item) }</p>
                </div>
            </Reveal>
        },
        TestimonialVariant::Grid | TestimonialVariant::Carousel => html! {
            <Reveal
                motion={Motion::FadeUp}
                index={index}
                class={classes!(
                    "flex",
                    "flex-col",
                    "gap-4",
                    "rounded-xl",
                    "border",
                    "border-[var(--border)]",
                    "p-6",
                    "shadow-sm",
                    (variant == TestimonialVariant::Carousel).then_some("min-w-80 snap-start")
                )}
            >
                { stars(item) }
                <p>{ format!("“{}”", item.quote) }</p>
                <div class="mt-auto flex items-center gap-3">
                    { avatar.unwrap_or_default() }
                    <div>
                        <p class="font-semibold">{ &item.name }</p>
                        if let Some(role) = &item.role {
                            <p class="text-sm text-[var(--text-muted)]">{ role }</p>
                        }
                    </div>
                </div>
            </Reveal>
        },
    }
}
