use launchpad_shared::IconName;
use yew::prelude::*;

use crate::{
    components::icons::Icon,
    i18n::current::theme_toggle as t,
    theme::{ThemeAction, ThemeContext},
};

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Every toggle on the page reads and flips the one provided theme.
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let ThemeToggleProps {
        class,
    } = props;
    let Some(theme) = use_context::<ThemeContext>() else {
        return Html::default();
    };

    let onclick = {
        let theme = theme.dispatcher();
        Callback::from(move |_: MouseEvent| theme.dispatch(ThemeAction::Toggle))
    };

    let dark = theme.theme().is_dark();
    let label = if dark { t::SWITCH_TO_LIGHT } else { t::SWITCH_TO_DARK };
    let text = if dark { t::LIGHT_MODE } else { t::DARK_MODE };
    let icon = if dark { IconName::Sun } else { IconName::Moon };

    let button_class = classes!(
        "group",
        "inline-flex",
        "items-center",
        "gap-2",
        "rounded-lg",
        "border",
        "border-[var(--border)]",
        "px-3",
        "py-2",
        "bg-transparent",
        "hover:bg-[var(--surface-alt)]",
        "transition-all",
        "duration-100",
        class.clone()
    );

    html! {
        <button
            type="button"
            class={button_class}
            {onclick}
            aria-label={label}
            title={label}
            aria-pressed={dark.to_string()}
        >
            <Icon name={icon} size={18} class="text-[var(--text)] group-hover:text-[var(--primary)]" />
            <span class="text-sm">{ text }</span>
        </button>
    }
}
