use std::rc::Rc;

use launchpad_shared::{
    sections::faq::{Accordion, FaqContent, FaqItem, FaqVariant},
    IconName, Section,
};
use yew::prelude::*;

use crate::components::{
    icons::Icon,
    motion::{Motion, Reveal},
    section_heading::SectionHeading,
};

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub content: FaqContent,
    #[prop_or_default]
    pub variant: FaqVariant,
}

#[derive(Default, PartialEq)]
struct OpenQuestions(Accordion);

impl Reducible for OpenQuestions {
    type Action = usize;

    fn reduce(self: Rc<Self>, index: usize) -> Rc<Self> {
        let mut next = self.0.clone();
        next.toggle(index);
        Rc::new(Self(next))
    }
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let FaqProps {
        content,
        variant,
    } = props;
    let open = use_reducer(OpenQuestions::default);
    let outline = content.outline(*variant);

    let items = content.items.iter().enumerate().map(|(index, item)| match variant {
        FaqVariant::Accordion => {
            let ontoggle = {
                let open = open.dispatcher();
                Callback::from(move |_: MouseEvent| open.dispatch(index))
            };
            accordion_item(index, item, open.0.is_open(index), ontoggle)
        },
        FaqVariant::Grid => html! {
            <Reveal motion={Motion::FadeUp} index={index} class="rounded-xl border border-[var(--border)] p-6 shadow-sm">
                <h3 class="text-lg font-semibold">{ &item.question }</h3>
                <p class="mt-2 text-[var(--text-muted)]">{ &item.answer }</p>
            </Reveal>
        },
    });

    html! {
        <section class="px-6 py-20 md:px-16">
            <SectionHeading
                outline={outline}
                headline={content.headline.clone()}
                subheadline={content.subheadline.clone()}
                class="items-center text-center"
            />
            <div class={variant.layout_class()}>
                { for items }
            </div>
        </section>
    }
}

fn accordion_item(index: usize, item: &FaqItem, is_open: bool, ontoggle: Callback<MouseEvent>) -> Html {
    let panel_id = format!("faq-panel-{index}");
    html! {
        <Reveal motion={Motion::FadeUp} index={index} class="rounded-xl border border-[var(--border)]">
            <button
                type="button"
                class="flex w-full items-center justify-between gap-4 px-6 py-4 text-left font-semibold"
                aria-expanded={is_open.to_string()}
                aria-controls={panel_id.clone()}
                onclick={ontoggle}
            >
                <span>{ &item.question }</span>
                <Icon
                    name={IconName::ChevronDown}
                    size={20}
                    class={classes!("transition-transform", is_open.then_some("rotate-180"))}
                />
            </button>
            if is_open {
                <div id={panel_id} class="px-6 pb-4 text-[var(--text-muted)]">
                    { &item.answer }
                </div>
            }
        </Reveal>
    }
}
