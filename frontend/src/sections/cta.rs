use launchpad_shared::{
    sections::cta::{CtaContent, CtaVariant},
    Block, Section,
};
use yew::prelude::*;

use crate::components::motion::{Motion, Reveal};

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    pub content: CtaContent,
    #[prop_or_default]
    pub variant: CtaVariant,
}

#[function_component(Cta)]
pub fn cta(props: &CtaProps) -> Html {
    let CtaProps {
        content,
        variant,
    } = props;
    let outline = content.outline(*variant);

    html! {
        <section class="px-6 py-20 md:px-16">
            <Reveal
                motion={Motion::ScaleIn}
                class={classes!(
                    "max-w-4xl",
                    "mx-auto",
                    "flex",
                    "flex-col",
                    "items-center",
                    "gap-6",
                    "text-center",
                    variant.layout_class()
                )}
            >
                <h2 class="text-3xl md:text-4xl font-bold">{ &content.headline }</h2>
                if let Some(sub) = content.subheadline.as_ref().filter(|_| outline.has(Block::Subheadline)) {
                    <p class="text-lg text-[var(--text-muted)]">{ sub }</p>
                }
                <div class="flex flex-wrap justify-center gap-4">
                    { for content.buttons().map(|(action, primary)| html! {
                        <a
                            href={action.href.clone()}
                            class={classes!(
                                "inline-flex",
                                "items-center",
                                "rounded-lg",
                                "px-6",
                                "py-3",
                                "font-semibold",
                                "transition",
                                variant.button_class(primary)
                            )}
                        >
                            { &action.label }
                        </a>
                    }) }
                </div>
            </Reveal>
        </section>
    }
}
