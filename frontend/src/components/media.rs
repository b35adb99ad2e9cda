use launchpad_shared::Media;
use yew::prelude::*;

use crate::config::asset_path;

#[derive(Properties, PartialEq)]
pub struct MediaViewProps {
    pub media: Media,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(MediaView)]
pub fn media_view(props: &MediaViewProps) -> Html {
    let class = classes!("w-full", "h-auto", "rounded-2xl", "object-cover", props.class.clone());
    match &props.media {
        Media::Image { src, alt } => html! {
            <img class={class} src={asset_path(src)} alt={alt.clone()} loading="lazy" />
        },
        Media::Video { src } => html! {
            <video class={class} src={asset_path(src)} controls=true playsinline=true />
        },
    }
}

/// Decorative layer painted behind a section's content.
#[derive(Properties, PartialEq)]
pub struct DecorationProps {
    pub class: AttrValue,
}

#[function_component(Decoration)]
pub fn decoration(props: &DecorationProps) -> Html {
    html! {
        <div
            class={classes!("pointer-events-none", "absolute", "inset-0", "-z-10", props.class.to_string())}
            aria-hidden="true"
        />
    }
}
