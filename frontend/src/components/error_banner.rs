use yew::prelude::*;

use crate::i18n::current::error_banner as t;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: AttrValue,
}

/// Configuration errors stay up until the reader closes them.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let visible = use_state(|| true);

    {
        let visible = visible.clone();
        use_effect_with(props.message.clone(), move |_| visible.set(true));
    }

    if !*visible || props.message.trim().is_empty() {
        return Html::default();
    }

    let onclick = {
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| visible.set(false))
    };

    html! {
        <div
            class={classes!(
                "error-banner",
                "fixed",
                "top-4",
                "left-1/2",
                "-translate-x-1/2",
                "z-[100]",
                "flex",
                "items-start",
                "gap-3",
                "w-[calc(100%-2rem)]",
                "max-w-2xl",
                "rounded-2xl",
                "px-5",
                "py-4",
                "text-sm",
                "shadow-xl",
                "bg-red-50",
                "text-red-900",
                "border",
                "border-red-200"
            )}
            role="alert"
            aria-live="assertive"
        >
            <div class="flex-1 space-y-1">
                <p class="font-semibold text-base">{ t::TITLE }</p>
                <p class="font-mono break-words">{ props.message.to_string() }</p>
            </div>
            <button
                type="button"
                class="inline-flex h-8 w-8 items-center justify-center rounded-full text-lg hover:bg-black/10"
                aria-label={t::CLOSE_ARIA}
                {onclick}
            >
                {"×"}
            </button>
        </div>
    }
}
