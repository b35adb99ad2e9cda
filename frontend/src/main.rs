//! Launchpad marketing site: section components rendered from bundled page
//! configurations.

mod components;
mod config;
pub mod hooks;
mod i18n;
mod pages;
mod router;
mod sections;
mod theme;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <theme::ThemeProvider>
                <router::AppRouter />
            </theme::ThemeProvider>
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
