use launchpad_shared::{
    sections::features::{FeatureItem, FeaturesContent, FeaturesVariant},
    Section,
};
use yew::prelude::*;

use crate::{
    components::{
        icons::Icon,
        motion::{Motion, Reveal},
        section_heading::SectionHeading,
    },
    config::asset_path,
};

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    pub content: FeaturesContent,
    #[prop_or_default]
    pub variant: FeaturesVariant,
}

#[function_component(Features)]
pub fn features(props: &FeaturesProps) -> Html {
    let FeaturesProps {
        content,
        variant,
    } = props;
    let outline = content.outline(*variant);

    html! {
        <section class="px-6 py-20 md:px-16">
            <div class="max-w-7xl mx-auto">
                <SectionHeading
                    outline={outline}
                    headline={content.headline.clone()}
                    subheadline={content.subheadline.clone()}
                    class="items-center text-center"
                />
                <div class={variant.layout_class()}>
                    { for content.features.iter().enumerate().map(|(index, item)| feature_card(*variant, index, item)) }
                </div>
            </div>
        </section>
    }
}

fn feature_card(variant: FeaturesVariant, index: usize, item: &FeatureItem) -> Html {
    let motion = match variant {
        FeaturesVariant::Carousel => Motion::SlideLeft,
        FeaturesVariant::Timeline => Motion::DropIn,
        _ => Motion::FadeUp,
    };

    html! {
        <Reveal
            motion={motion}
            index={index}
            class={classes!("rounded-xl", "p-6", "transition", variant.item_class())}
        >
            if variant == FeaturesVariant::Timeline {
                <span class="mx-auto mb-4 flex h-10 w-10 items-center justify-center rounded-full bg-[var(--primary)] font-bold text-white">
                    { index + 1 }
                </span>
            }
            if let Some(icon) = item.icon {
                <Icon name={icon} size={36} class="mb-4 text-[var(--primary)]" />
            }
            if let Some(image) = &item.image {
                <img class="mb-4 h-40 w-full rounded-lg object-cover" src={asset_path(image)} alt={item.title.clone()} loading="lazy" />
            }
            <div>
                <h3 class="text-xl font-semibold">{ &item.title }</h3>
                <p class="mt-2 text-[var(--text-muted)]">{ &item.description }</p>
            </div>
        </Reveal>
    }
}
