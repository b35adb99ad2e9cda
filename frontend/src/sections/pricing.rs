use launchpad_shared::{
    sections::pricing::{BillingPeriod, PricingContent, PricingPlan, PricingVariant},
    Block, Section,
};
use yew::prelude::*;

use super::cta_button;
use crate::{
    components::{
        motion::{Motion, Reveal},
        section_heading::SectionHeading,
    },
    i18n::{current::pricing as t, fill_two},
};

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub content: PricingContent,
    #[prop_or_default]
    pub variant: PricingVariant,
}

fn period_label(period: BillingPeriod) -> &'static str {
    match period {
        BillingPeriod::Monthly => t::MONTHLY,
        BillingPeriod::Yearly => t::YEARLY,
    }
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let PricingProps {
        content,
        variant,
    } = props;
    let period = use_state(BillingPeriod::default);
    let outline = content.outline(*variant);
    let plans = content.plans_for(*period);

    let toggle = BillingPeriod::ALL
        .iter()
        .map(|option| {
            let selected = *option == *period;
            let onclick = {
                let period = period.clone();
                let option = *option;
                Callback::from(move |_: MouseEvent| period.set(option))
            };
            html! {
                <button
                    type="button"
                    role="radio"
                    aria-checked={selected.to_string()}
                    class={classes!(
                        "rounded-full",
                        "px-5",
                        "py-2",
                        "text-sm",
                        "font-medium",
                        "transition",
                        if selected { "bg-[var(--primary)] text-white" } else { "text-[var(--text)]" }
                    )}
                    {onclick}
                >
                    { period_label(*option) }
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <section class="px-6 py-20 md:px-16">
            <div class="max-w-7xl mx-auto flex flex-col items-center">
                <SectionHeading
                    outline={outline.clone()}
                    headline={content.headline.clone()}
                    subheadline={content.subheadline.clone()}
                    class="items-center text-center"
                />
                if outline.has(Block::BillingToggle) {
                    <div
                        class="mb-10 inline-flex rounded-full border border-[var(--border)] p-1"
                        role="radiogroup"
                        aria-label={t::BILLING_ARIA}
                    >
                        { toggle }
                    </div>
                }
                <div class={classes!("grid", "grid-cols-1", "gap-8", "w-full", variant.grid_class(plans.len()))}>
                    { for plans.iter().enumerate().map(|(index, plan)| plan_card(*variant, index, plan)) }
                </div>
            </div>
        </section>
    }
}

fn plan_card(variant: PricingVariant, index: usize, plan: &PricingPlan) -> Html {
    let highlighted = variant.highlights(plan);
    let price = match &plan.billing_cycle {
        Some(cycle) => fill_two(t::PRICE_TEMPLATE, &plan.price, cycle),
        None => plan.price.clone(),
    };

    html! {
        <Reveal
            motion={if highlighted { Motion::ScaleIn } else { Motion::FadeUp }}
            index={index}
            class={classes!(
                "relative",
                "flex",
                "flex-col",
                "gap-4",
                "rounded-2xl",
                "border",
                "p-8",
                variant.layout_class(),
                variant.card_class(plan)
            )}
        >
            if highlighted {
                <span class="absolute -top-3 left-1/2 -translate-x-1/2 rounded-full bg-blue-600 px-3 py-1 text-xs font-semibold text-white">
                    { t::RECOMMENDED }
                </span>
            }
            <h3 class="text-xl font-semibold">{ &plan.name }</h3>
            <p class="text-3xl font-bold">{ price }</p>
            <ul class="flex flex-col gap-2 text-[var(--text-muted)]">
                { for plan.features.iter().map(|feature| html! { <li>{ format!("✓ {feature}") }</li> }) }
            </ul>
            if let Some(cta) = &plan.cta {
                <div class="mt-auto">{ cta_button(cta, plan.cta_emphasis()) }</div>
            }
        </Reveal>
    }
}
