use launchpad_shared::{
    sections::trust_bar::{TrustBarContent, TrustBarItem, TrustBarVariant},
    Block, Section,
};
use yew::prelude::*;

use crate::{
    components::{
        icons::Icon,
        motion::{Motion, Reveal},
    },
    config::asset_path,
    i18n::current::trust_bar as t,
};

#[derive(Properties, PartialEq)]
pub struct TrustBarProps {
    pub content: TrustBarContent,
    #[prop_or_default]
    pub variant: TrustBarVariant,
}

#[function_component(TrustBar)]
pub fn trust_bar(props: &TrustBarProps) -> Html {
    let TrustBarProps {
        content,
        variant,
    } = props;
    let outline = content.outline(*variant);

    html! {
        <section class="px-6 py-12 md:px-16 bg-[var(--surface-alt)]" aria-label={t::REGION_ARIA}>
            <div class="max-w-7xl mx-auto flex flex-col items-center gap-8">
                if let Some(title) = content.title.as_ref().filter(|_| outline.has(Block::Headline)) {
                    <p class="text-sm font-semibold uppercase tracking-widest text-[var(--text-muted)]">{ title }</p>
                }
                <div class={classes!("w-full", variant.layout_class())}>
                    { for content.items.iter().enumerate().map(|(index, item)| trust_item(*variant, index, item)) }
                </div>
            </div>
        </section>
    }
}

fn trust_item(variant: TrustBarVariant, index: usize, item: &TrustBarItem) -> Html {
    let image = item.image.as_ref().map(|src| {
        html! {
            <img class="h-10 w-auto object-contain grayscale hover:grayscale-0 transition" src={asset_path(src)} alt={item.label.clone()} loading="lazy" />
        }
    });

    let body = match variant {
        TrustBarVariant::Stats => html! {
            <>
                if let Some(value) = &item.value {
                    <span class="text-3xl font-bold text-[var(--primary)]">{ value }</span>
                }
                <span class="text-sm text-[var(--text-muted)]">{ &item.label }</span>
            </>
        },
        TrustBarVariant::Logos => image.unwrap_or_else(|| html! {
            <span class="font-semibold text-[var(--text-muted)]">{ &item.label }</span>
        }),
        TrustBarVariant::Certifications | TrustBarVariant::Ratings => html! {
            <>
                if let Some(icon) = item.icon {
                    <Icon name={icon} size={28} class="text-[var(--primary)]" />
                }
                { image.unwrap_or_default() }
                <span class="font-medium">{ &item.label }</span>
                if let Some(value) = &item.value {
                    <span class="text-sm text-[var(--text-muted)]">{ value }</span>
                }
            </>
        },
        TrustBarVariant::Minimal => html! {
            <span class="text-[var(--text-muted)]">
                { item.value.as_ref().map(|value| format!("{value} {}", item.label)).unwrap_or_else(|| item.label.clone()) }
            </span>
        },
    };

    let row = matches!(variant, TrustBarVariant::Certifications | TrustBarVariant::Ratings);

    html! {
        <Reveal
            motion={Motion::FadeIn}
            index={index}
            class={classes!(
                "flex",
                "items-center",
                "justify-center",
                "gap-2",
                if row { "flex-row" } else { "flex-col" }
            )}
        >
            { body }
        </Reveal>
    }
}
