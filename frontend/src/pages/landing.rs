use yew::prelude::*;

use super::layout::{Layout, LayoutPage};

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    html! { <LayoutPage layout={Layout::Landing} /> }
}
