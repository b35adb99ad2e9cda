use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages;

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[cfg(not(feature = "subpath"))]
    #[at("/")]
    Home,
    #[cfg(feature = "subpath")]
    #[at("/launchpad/")]
    Home,

    #[cfg(not(feature = "subpath"))]
    #[at("/showcase")]
    Showcase,
    #[cfg(feature = "subpath")]
    #[at("/launchpad/showcase")]
    Showcase,

    #[not_found]
    #[cfg(not(feature = "subpath"))]
    #[at("/404")]
    NotFound,
    #[not_found]
    #[cfg(feature = "subpath")]
    #[at("/launchpad/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <pages::landing::LandingPage /> },
        Route::Showcase => html! { <pages::showcase::ShowcasePage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
