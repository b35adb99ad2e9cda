use launchpad_shared::{
    sections::content_block::{ContentBlockContent, ContentBlockVariant},
    Block, Section,
};
use yew::prelude::*;

use super::cta_link;
use crate::components::{
    media::MediaView,
    motion::{Motion, Reveal},
};

#[derive(Properties, PartialEq)]
pub struct ContentBlockProps {
    pub content: ContentBlockContent,
    #[prop_or_default]
    pub variant: ContentBlockVariant,
}

#[function_component(ContentBlock)]
pub fn content_block(props: &ContentBlockProps) -> Html {
    let ContentBlockProps {
        content,
        variant,
    } = props;
    let outline = content.outline(*variant);
    let inverted = variant.is_inverted();
    let style = (!inverted).then(|| format!("background-color: {}", content.background()));

    html! {
        <section
            class={classes!("px-6", "py-20", "md:px-16", inverted.then_some("bg-[var(--primary)] text-white"))}
            style={style}
        >
            <div class={classes!("max-w-7xl", "mx-auto", variant.layout_class())}>
                if let Some(media) = content.media.as_ref().filter(|_| outline.has(Block::Media)) {
                    <Reveal
                        motion={if *variant == ContentBlockVariant::ImageLeft { Motion::SlideRight } else { Motion::SlideLeft }}
                        class={classes!("md:w-1/2", variant.media_order_class())}
                    >
                        <MediaView media={media.clone()} />
                    </Reveal>
                }
                <Reveal motion={Motion::FadeUp} class={classes!("flex", "flex-1", "flex-col", "gap-4", variant.text_class())}>
                    if let Some(headline) = content.headline.as_ref().filter(|_| outline.has(Block::Headline)) {
                        <h2 class="text-3xl md:text-4xl font-bold">{ headline }</h2>
                    }
                    if let Some(sub) = content.subheadline.as_ref().filter(|_| outline.has(Block::Subheadline)) {
                        <p class="text-lg font-medium opacity-80">{ sub }</p>
                    }
                    if let Some(body) = content.body.as_ref().filter(|_| outline.has(Block::Body)) {
                        <p class="leading-relaxed opacity-90">{ body }</p>
                    }
                    if outline.has(Block::Actions) {
                        <div class="flex flex-wrap gap-4">
                            { for content.cta.iter().map(cta_link) }
                        </div>
                    }
                </Reveal>
            </div>
        </section>
    }
}
