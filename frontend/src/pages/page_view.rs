use launchpad_shared::{sections::contact::FormPayload, PageConfig, SectionConfig};
use yew::prelude::*;

use crate::sections::{
    about::About, contact::Contact, content_block::ContentBlock, cta::Cta, faq::Faq,
    features::Features, footer::Footer, hero::Hero, how_we_work::HowWeWork, navbar::Navbar,
    previous_work::PreviousWork, pricing::Pricing, team::Team, testimonials::Testimonials,
    trust_bar::TrustBar,
};

#[derive(Properties, PartialEq)]
pub struct PageViewProps {
    pub page: PageConfig,
    #[prop_or_default]
    pub on_contact: Callback<FormPayload>,
    #[prop_or_default]
    pub on_subscribe: Option<Callback<String>>,
}

/// Renders a validated page configuration top to bottom.
#[function_component(PageView)]
pub fn page_view(props: &PageViewProps) -> Html {
    html! {
        <div class="flex flex-col bg-[var(--bg)] text-[var(--text)]" style="min-height: 100vh; min-height: 100svh;">
            { for props.page.sections.iter().map(|section| section_view(section, props)) }
        </div>
    }
}

fn section_view(section: &SectionConfig, props: &PageViewProps) -> Html {
    match section {
        SectionConfig::Navbar { variant, content } => html! {
            <Navbar content={content.clone()} variant={*variant} />
        },
        SectionConfig::Hero { variant, content } => html! {
            <Hero content={content.clone()} variant={*variant} />
        },
        SectionConfig::About { variant, content } => html! {
            <About content={content.clone()} variant={*variant} />
        },
        SectionConfig::Features { variant, content } => html! {
            <Features content={content.clone()} variant={*variant} />
        },
        SectionConfig::HowWeWork { variant, content } => html! {
            <HowWeWork content={content.clone()} variant={*variant} />
        },
        SectionConfig::Faq { variant, content } => html! {
            <Faq content={content.clone()} variant={*variant} />
        },
        SectionConfig::Team { variant, content } => html! {
            <Team content={content.clone()} variant={*variant} />
        },
        SectionConfig::Testimonials { variant, content } => html! {
            <Testimonials content={content.clone()} variant={*variant} />
        },
        SectionConfig::Pricing { variant, content } => html! {
            <Pricing content={content.clone()} variant={*variant} />
        },
        SectionConfig::Contact { variant, content } => html! {
            <Contact content={content.clone()} variant={*variant} on_submit={props.on_contact.clone()} />
        },
        SectionConfig::Cta { variant, content } => html! {
            <Cta content={content.clone()} variant={*variant} />
        },
        SectionConfig::TrustBar { variant, content } => html! {
            <TrustBar content={content.clone()} variant={*variant} />
        },
        SectionConfig::PreviousWork { variant, content } => html! {
            <PreviousWork content={content.clone()} variant={*variant} />
        },
        SectionConfig::ContentBlock { variant, content } => html! {
            <ContentBlock content={content.clone()} variant={*variant} />
        },
        SectionConfig::Footer { variant, content } => html! {
            <Footer content={content.clone()} variant={*variant} on_subscribe={props.on_subscribe.clone()} />
        },
    }
}
