use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{hooks::use_document_title, i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    use_document_title(t::TITLE.to_string());

    html! {
        <main class="flex min-h-screen flex-col items-center justify-center gap-4 px-6 text-center">
            <h2 class="text-3xl font-bold">{ t::TITLE }</h2>
            <p class="text-[var(--text-muted)]">{ t::BODY }</p>
            <Link<Route> to={Route::Home} classes="rounded-lg bg-[var(--primary)] px-6 py-3 font-semibold text-white">
                { t::BACK_HOME }
            </Link<Route>>
        </main>
    }
}
