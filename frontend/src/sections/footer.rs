use std::rc::Rc;

use launchpad_shared::{
    sections::footer::{FooterContent, FooterVariant, NewsletterForm},
    Block, NavLink,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    components::{
        icons::Icon,
        motion::{Motion, Reveal},
    },
    i18n::current::footer as t,
};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub content: FooterContent,
    #[prop_or_default]
    pub variant: FooterVariant,
    /// Newsletter signups are only rendered when a handler is wired.
    #[prop_or_default]
    pub on_subscribe: Option<Callback<String>>,
}

enum NewsletterAction {
    Edit(String),
    Clear,
}

#[derive(Default, PartialEq)]
struct NewsletterState(NewsletterForm);

impl Reducible for NewsletterState {
    type Action = NewsletterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            NewsletterAction::Edit(email) => next.set_email(email),
            NewsletterAction::Clear => {
                next.submit();
            },
        }
        Rc::new(Self(next))
    }
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

fn link_view(link: &NavLink) -> Html {
    html! {
        <a
            href={link.href.clone()}
            target={link.target()}
            rel={link.external.then_some("noopener noreferrer")}
            class="text-[var(--text-muted)] transition-colors hover:text-[var(--primary)]"
        >
            { &link.label }
        </a>
    }
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let FooterProps {
        content,
        variant,
        on_subscribe,
    } = props;
    let newsletter = use_reducer(NewsletterState::default);
    let outline = content.outline_with(*variant, on_subscribe.is_some());

    let columns = outline.has(Block::Columns).then(|| {
        html! {
            <div class="grid grid-cols-2 gap-8 md:grid-cols-4">
                { for content.columns.iter().enumerate().map(|(index, column)| html! {
                    <Reveal motion={Motion::FadeUp} index={index} class="flex flex-col gap-3">
                        <h4 class="font-semibold">{ &column.title }</h4>
                        { for column.links.iter().map(link_view) }
                    </Reveal>
                }) }
            </div>
        }
    });

    let links = outline.has(Block::Links).then(|| {
        html! {
            <nav class="flex flex-wrap gap-6">
                { for content.links.iter().map(link_view) }
            </nav>
        }
    });

    let socials = outline.has(Block::Socials).then(|| {
        html! {
            <div class="flex gap-4" aria-label={t::SOCIAL_ARIA}>
                { for content.socials.iter().map(|social| html! {
                    <a
                        href={social.href.clone()}
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label={social.aria_label().to_string()}
                        class="text-[var(--text-muted)] transition-colors hover:text-[var(--primary)]"
                    >
                        <Icon name={social.icon} size={20} />
                    </a>
                }) }
            </div>
        }
    });

    let signup = on_subscribe.as_ref().filter(|_| outline.has(Block::Newsletter)).map(|on_subscribe| {
        let oninput = {
            let newsletter = newsletter.dispatcher();
            Callback::from(move |event: InputEvent| {
                if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                    newsletter.dispatch(NewsletterAction::Edit(input.value()));
                }
            })
        };
        let onsubmit = {
            let newsletter = newsletter.clone();
            let on_subscribe = on_subscribe.clone();
            Callback::from(move |event: SubmitEvent| {
                event.prevent_default();
                on_subscribe.emit(newsletter.0.email().to_string());
                newsletter.dispatch(NewsletterAction::Clear);
            })
        };
        html! {
            <form class="flex w-full max-w-md gap-2" {onsubmit}>
                <input
                    type="email"
                    required=true
                    class="flex-1 rounded-lg border border-[var(--border)] bg-[var(--surface)] px-4 py-2"
                    placeholder={content.placeholder().to_string()}
                    value={newsletter.0.email().to_string()}
                    {oninput}
                />
                <button type="submit" class="rounded-lg bg-[var(--primary)] px-5 py-2 font-semibold text-white hover:opacity-90">
                    { t::SUBSCRIBE }
                </button>
            </form>
        }
    });

    html! {
        <footer class="border-t border-[var(--border)] px-6 py-12 md:px-16">
            <div class="max-w-7xl mx-auto flex flex-col gap-10">
                { columns.unwrap_or_default() }
                <div class={variant.layout_class()}>
                    { links.unwrap_or_default() }
                    { socials.unwrap_or_default() }
                    { signup.unwrap_or_default() }
                </div>
                <p class="text-sm text-[var(--text-muted)]">{ content.copyright_line(current_year()) }</p>
            </div>
        </footer>
    }
}
