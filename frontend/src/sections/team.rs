use launchpad_shared::{
    sections::team::{TeamContent, TeamMember, TeamVariant},
    Section,
};
use yew::prelude::*;

use crate::{
    components::{
        motion::{Motion, Reveal},
        section_heading::SectionHeading,
    },
    config::asset_path,
    i18n::current::team as t,
};

#[derive(Properties, PartialEq)]
pub struct TeamProps {
    pub content: TeamContent,
    #[prop_or_default]
    pub variant: TeamVariant,
}

#[function_component(Team)]
pub fn team(props: &TeamProps) -> Html {
    let TeamProps {
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
                    class="items-center text-center"
                />
                <div class={variant.layout_class()}>
                    { for content.members.iter().enumerate().map(|(index, member)| member_card(*variant, index, member)) }
                </div>
            </div>
        </section>
    }
}

fn member_card(variant: TeamVariant, index: usize, member: &TeamMember) -> Html {
    if variant == TeamVariant::Minimal {
        return html! {
            <Reveal motion={Motion::FadeIn} index={index} class="flex items-center gap-4">
                if let Some(photo) = &member.photo {
                    <img class="h-12 w-12 rounded-full object-cover" src={asset_path(photo)} alt={member.name.clone()} loading="lazy" />
                }
                <p class="font-medium">{ member.summary_line() }</p>
            </Reveal>
        };
    }

    html! {
        <Reveal
            motion={Motion::ScaleIn}
            index={index}
            class={classes!("flex", "flex-col", "items-center", "text-center", "gap-2", variant.card_class())}
        >
            if let Some(photo) = &member.photo {
                <img
                    class={classes!("rounded-full", "object-cover", "mb-2", variant.avatar_class())}
                    src={asset_path(photo)}
                    alt={member.name.clone()}
                    loading="lazy"
                />
            }
            <h3 class="text-lg font-semibold">{ &member.name }</h3>
            if let Some(role) = &member.role {
                <p class="text-sm text-[var(--primary)]">{ role }</p>
            }
            if variant.shows_details() {
                if let Some(bio) = &member.bio {
                    <p class="mt-2 text-sm text-[var(--text-muted)]">{ bio }</p>
                }
                if !member.social.is_empty() {
                    <div class="mt-3 flex gap-3">
                        { for member.social.iter().map(|social| html! {
                            <a
                                href={social.href.clone()}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-sm underline hover:text-[var(--primary)]"
                            >
                                { &social.kind }
                            </a>
                        }) }
                    </div>
                }
            }
        </Reveal>
    }
}
