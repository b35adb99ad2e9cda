use yew::prelude::*;

use super::layout::{Layout, LayoutPage};

#[function_component(ShowcasePage)]
pub fn showcase_page() -> Html {
    html! { <LayoutPage layout={Layout::Showcase} /> }
}
