//! Entrance animations.
//!
//! The keyframes live in `index.html`; these wrappers only attach the class
//! and, for lists, a per-index `animation-delay`.

use yew::prelude::*;

/// Delay between consecutive children of a staggered list, in milliseconds.
const STAGGER_STEP_MS: u32 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    #[default]
    FadeUp,
    FadeIn,
    ScaleIn,
    SlideLeft,
    SlideRight,
    DropIn,
}

impl Motion {
    fn class(self) -> &'static str {
        match self {
            Motion::FadeUp => "reveal-fade-up",
            Motion::FadeIn => "reveal-fade-in",
            Motion::ScaleIn => "reveal-scale-in",
            Motion::SlideLeft => "reveal-slide-left",
            Motion::SlideRight => "reveal-slide-right",
            Motion::DropIn => "reveal-drop-in",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub motion: Motion,

    /// Position in a staggered list; `None` animates immediately.
    #[prop_or_default]
    pub index: Option<usize>,

    #[prop_or_default]
    pub class: Classes,

    #[prop_or_default]
    pub children: Html,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let RevealProps {
        motion,
        index,
        class,
        children,
    } = props;

    let style = index.map(|index| format!("animation-delay: {}ms", stagger_delay(index)));

    html! {
        <div class={classes!("reveal", motion.class(), class.clone())} style={style}>
            { children.clone() }
        </div>
    }
}

fn stagger_delay(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(STAGGER_STEP_MS)
}
