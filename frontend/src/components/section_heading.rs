use launchpad_shared::{Block, Outline};
use yew::prelude::*;

use super::motion::{Motion, Reveal};

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub outline: Outline,
    #[prop_or_default]
    pub headline: Option<String>,
    #[prop_or_default]
    pub subheadline: Option<String>,
    #[prop_or_default]
    pub class: Classes,
}

/// Headline and subheadline pair, each rendered only when the outline lists it.
#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    let SectionHeadingProps {
        outline,
        headline,
        subheadline,
        class,
    } = props;

    if !outline.has(Block::Headline) && !outline.has(Block::Subheadline) {
        return Html::default();
    }

    html! {
        <Reveal motion={Motion::FadeUp} class={classes!("flex", "flex-col", "gap-3", "mb-10", class.clone())}>
            if let Some(text) = headline.as_ref().filter(|_| outline.has(Block::Headline)) {
                <h2 class="text-3xl md:text-4xl font-bold text-[var(--text)]">{ text }</h2>
            }
            if let Some(text) = subheadline.as_ref().filter(|_| outline.has(Block::Subheadline)) {
                <p class="text-lg text-[var(--text-muted)] max-w-2xl">{ text }</p>
            }
        </Reveal>
    }
}
