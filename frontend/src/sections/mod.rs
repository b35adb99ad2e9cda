//! One function component per page section.

pub mod about;
pub mod contact;
pub mod content_block;
pub mod cta;
pub mod faq;
pub mod features;
pub mod footer;
pub mod hero;
pub mod how_we_work;
pub mod navbar;
pub mod previous_work;
pub mod pricing;
pub mod team;
pub mod testimonials;
pub mod trust_bar;

use launchpad_shared::{CallToAction, Emphasis};
use yew::prelude::*;

/// Call-to-action rendered as a button-styled link; unmarked buttons are
/// primary.
pub(crate) fn cta_link(cta: &CallToAction) -> Html {
    cta_button(cta, cta.emphasis_or(Emphasis::Primary))
}

pub(crate) fn cta_button(cta: &CallToAction, emphasis: Emphasis) -> Html {
    let style = match emphasis {
        Emphasis::Primary => "bg-[var(--primary)] text-white hover:opacity-90",
        Emphasis::Secondary => {
            "border border-[var(--border)] text-[var(--text)] hover:bg-[var(--surface-alt)]"
        },
    };
    html! {
        <a
            href={cta.href.clone()}
            class={classes!(
                "inline-flex",
                "items-center",
                "justify-center",
                "rounded-lg",
                "px-6",
                "py-3",
                "font-semibold",
                "transition",
                style
            )}
        >
            { &cta.label }
        </a>
    }
}
