use launchpad_shared::{
    sections::hero::{HeroContent, HeroVariant},
    Block, Section,
};
use yew::prelude::*;

use super::cta_link;
use crate::{
    components::{
        media::{Decoration, MediaView},
        motion::{Motion, Reveal},
    },
    config::asset_path,
    i18n::current::hero as t,
};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: HeroContent,
    #[prop_or_default]
    pub variant: HeroVariant,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let HeroProps {
        content,
        variant,
    } = props;
    let outline = content.outline(*variant);
    let over_video = outline.has(Block::BackgroundVideo);

    html! {
        <section
            class={classes!(
                "relative",
                "overflow-hidden",
                "flex",
                "flex-col",
                "gap-10",
                "px-6",
                "py-20",
                "md:px-16",
                variant.layout_class()
            )}
            aria-label={t::REGION_ARIA}
        >
            if let Some(class) = content.decoration.as_ref().filter(|_| outline.has(Block::Decoration)) {
                <Decoration class={class.clone()} />
            }
            if let Some(src) = content.video_src.as_ref().filter(|_| over_video) {
                <video
                    class="absolute inset-0 -z-10 h-full w-full object-cover"
                    src={asset_path(src)}
                    autoplay=true
                    muted=true
                    loop=true
                    playsinline=true
                    aria-hidden="true"
                />
                <div class="absolute inset-0 -z-10 bg-black/50" aria-hidden="true" />
            }

            <div class={classes!("flex", "flex-col", "gap-6", variant.text_class(), over_video.then_some("text-white"))}>
                <Reveal motion={Motion::FadeUp}>
                    <h1 class="text-4xl md:text-6xl font-extrabold leading-tight">{ &content.headline }</h1>
                </Reveal>
                if let Some(sub) = content.subheadline.as_ref().filter(|_| outline.has(Block::Subheadline)) {
                    <Reveal motion={Motion::FadeUp} index={1}>
                        <p class="text-lg md:text-xl opacity-80 max-w-2xl">{ sub }</p>
                    </Reveal>
                }
                if outline.has(Block::Actions) {
                    <Reveal motion={Motion::FadeUp} index={2} class="flex flex-wrap gap-4">
                        { for content.cta.iter().map(cta_link) }
                    </Reveal>
                }
            </div>

            if let Some(media) = content.media.as_ref().filter(|_| outline.has(Block::Media)) {
                <Reveal
                    motion={if variant.is_two_column() { Motion::SlideLeft } else { Motion::ScaleIn }}
                    class={classes!(variant.is_two_column().then_some("md:w-1/2"))}
                >
                    <MediaView media={media.clone()} class="shadow-2xl" />
                </Reveal>
            }
        </section>
    }
}
