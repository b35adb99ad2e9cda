use launchpad_shared::{sections::contact::FormPayload, ConfigError, PageConfig};
use wasm_bindgen::JsValue;
use web_sys::console;
use yew::prelude::*;

use super::page_view::PageView;
use crate::{
    components::error_banner::ErrorBanner,
    hooks::{use_document_title, use_scroll_to_top},
    i18n::current::error_banner as t,
};

/// Bundled page configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Landing,
    Showcase,
}

impl Layout {
    fn load(self) -> Result<PageConfig, ConfigError> {
        match self {
            Layout::Landing => PageConfig::landing(),
            Layout::Showcase => PageConfig::showcase(),
        }
    }

    /// The showcase footer carries the newsletter form.
    fn wires_newsletter(self) -> bool {
        self == Layout::Showcase
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutPageProps {
    pub layout: Layout,
}

fn log_contact(payload: FormPayload) {
    match serde_json::to_string(&payload) {
        Ok(json) => console::log_2(&JsValue::from_str("contact form submitted"), &JsValue::from_str(&json)),
        Err(err) => console::error_1(&JsValue::from_str(&err.to_string())),
    }
}

fn log_subscribe(email: String) {
    console::log_2(&JsValue::from_str("newsletter signup"), &JsValue::from_str(&email));
}

/// Loads a page configuration once and renders it, or reports why it failed.
#[function_component(LayoutPage)]
pub fn layout_page(props: &LayoutPageProps) -> Html {
    use_scroll_to_top();
    let page = use_memo(props.layout, |layout| layout.load().map_err(|err| err.to_string()));

    let title = match &*page {
        Ok(page) => page.title.clone(),
        Err(_) => t::TITLE.to_string(),
    };
    use_document_title(title);

    use_effect_with(page.clone(), |page| {
        if let Err(message) = &**page {
            console::error_1(&JsValue::from_str(message));
        }
    });

    match &*page {
        Ok(page) => html! {
            <PageView
                page={page.clone()}
                on_contact={Callback::from(log_contact)}
                on_subscribe={props.layout.wires_newsletter().then(|| Callback::from(log_subscribe))}
            />
        },
        Err(message) => html! {
            <main class="min-h-screen">
                <ErrorBanner message={message.clone()} />
            </main>
        },
    }
}
