use launchpad_shared::IconName;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_else(|| "currentColor".to_string())]
    pub color: String,

    #[prop_or_default]
    pub class: Classes,
}

/// Lucide line icon rendered as inline SVG.
#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        color,
        class,
    } = props;

    let stroke_width = if *size <= 16 { 2.5 } else { 2.0 };
    let fill = if name.needs_fill() { color.clone() } else { "none".to_string() };

    html! {
        <svg
            class={classes!(
                "inline-flex",
                "items-center",
                "justify-center",
                "shrink-0",
                "transition-all",
                "duration-200",
                class.clone()
            )}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill={fill}
            stroke={color.clone()}
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d={name.path()} />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct IconButtonProps {
    pub icon: IconName,

    pub aria_label: AttrValue,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,

    #[prop_or_default]
    pub class: Classes,

    #[prop_or_default]
    pub expanded: Option<bool>,
}

/// Square icon-only button with an accessible label.
#[function_component(IconButton)]
pub fn icon_button(props: &IconButtonProps) -> Html {
    let IconButtonProps {
        icon,
        aria_label,
        size,
        onclick,
        class,
        expanded,
    } = props;

    let button_class = classes!(
        "relative",
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[44px]",
        "min-h-[44px]",
        "rounded-lg",
        "text-[var(--text)]",
        "transition-all",
        "duration-100",
        "hover:bg-[var(--surface-alt)]",
        "hover:text-[var(--primary)]",
        class.clone()
    );

    html! {
        <button
            class={button_class}
            onclick={onclick}
            type="button"
            aria-label={aria_label.clone()}
            aria-expanded={expanded.map(|open| open.to_string())}
        >
            <Icon name={*icon} size={*size} />
        </button>
    }
}
