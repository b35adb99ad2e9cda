use std::rc::Rc;

use launchpad_shared::{
    sections::navbar::{NavbarContent, NavbarState, NavbarVariant},
    Block, IconName, Section,
};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::window;
use yew::prelude::*;

use super::cta_link;
use crate::{
    components::{
        icons::IconButton,
        motion::{Motion, Reveal},
        theme_toggle::ThemeToggle,
    },
    i18n::current::navbar as t,
};

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub content: NavbarContent,
    #[prop_or_default]
    pub variant: NavbarVariant,
}

enum NavbarAction {
    Scrolled(f64),
    ToggleMenu,
    CloseMenu,
}

#[derive(Default, PartialEq)]
struct NavbarReducer(NavbarState);

impl Reducible for NavbarReducer {
    type Action = NavbarAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavbarAction::Scrolled(scroll_y) => self.0.scrolled_to(scroll_y),
            NavbarAction::ToggleMenu => self.0.toggle_menu(),
            NavbarAction::CloseMenu => self.0.close_menu(),
        };
        if next == self.0 {
            self
        } else {
            Rc::new(Self(next))
        }
    }
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let NavbarProps {
        content,
        variant,
    } = props;
    let state = use_reducer(NavbarReducer::default);

    // Passive scroll listener, detached on unmount.
    {
        let dispatch = state.dispatcher();
        use_effect_with((), move |_| {
            let listener = window().map(|window| {
                let closure = {
                    let window = window.clone();
                    Closure::wrap(Box::new(move || {
                        let scroll_y = window.scroll_y().unwrap_or(0.0);
                        dispatch.dispatch(NavbarAction::Scrolled(scroll_y));
                    }) as Box<dyn Fn()>)
                };
                if let Err(err) = window
                    .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
                {
                    web_sys::console::error_1(&err);
                }
                (window, closure)
            });

            move || {
                if let Some((window, closure)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        closure.as_ref().unchecked_ref(),
                    );
                    drop(closure);
                }
            }
        });
    }

    let toggle_menu = {
        let dispatch = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatch.dispatch(NavbarAction::ToggleMenu))
    };

    let close_menu = {
        let dispatch = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatch.dispatch(NavbarAction::CloseMenu))
    };

    let NavbarState {
        menu_open,
        scrolled,
    } = state.0;
    let outline = content.outline(*variant);

    let links = |extra: &'static str| -> Html {
        content
            .links
            .iter()
            .map(|link| {
                html! {
                    <a
                        href={link.href.clone()}
                        target={link.target()}
                        rel={link.external.then_some("noopener noreferrer")}
                        class={classes!("text-[var(--text)]", "hover:text-[var(--primary)]", "transition-colors", extra)}
                        onclick={close_menu.clone()}
                    >
                        { &link.label }
                    </a>
                }
            })
            .collect()
    };

    let cta = content
        .cta
        .as_ref()
        .filter(|_| outline.has(Block::Actions))
        .map(cta_link);

    html! {
        <Reveal motion={Motion::DropIn} class="relative z-50">
            <header
                class={classes!(
                    "w-full",
                    "z-50",
                    "transition-all",
                    "duration-300",
                    variant.surface_class(scrolled)
                )}
            >
                <nav
                    class={classes!("relative", "max-w-7xl", "mx-auto", "px-6", "py-4", variant.layout_class())}
                    aria-label={t::MAIN_NAV_ARIA}
                >
                    if let Some(logo) = content.logo.as_ref().filter(|_| outline.has(Block::Headline)) {
                        <a href="/" class={classes!("text-xl", "font-bold", variant.logo_class())}>
                            { logo }
                        </a>
                    }

                    <div class="hidden md:flex items-center gap-8">
                        { links("") }
                    </div>

                    <div class="flex items-center gap-3">
                        <ThemeToggle class="hidden md:inline-flex" />
                        <div class="hidden md:block">{ cta.clone().unwrap_or_default() }</div>
                        <IconButton
                            icon={if menu_open { IconName::X } else { IconName::Menu }}
                            aria_label={t::TOGGLE_MENU_ARIA}
                            expanded={Some(menu_open)}
                            onclick={toggle_menu}
                            class="md:hidden"
                        />
                    </div>
                </nav>

                if menu_open {
                    <div class="md:hidden flex flex-col gap-4 px-6 pb-6 bg-[var(--surface)] shadow-md">
                        { links("py-1") }
                        <ThemeToggle />
                        { cta.unwrap_or_default() }
                    </div>
                }
            </header>
        </Reveal>
    }
}
