use std::{cell::RefCell, rc::Rc};

use launchpad_shared::{
    theme::{THEME_ATTRIBUTE, THEME_STORAGE_KEY},
    Theme, ThemeBackend, ThemeController,
};
use web_sys::console;
use yew::prelude::*;

/// `localStorage` plus the `data-theme` attribute on `<html>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTheme;

impl ThemeBackend for BrowserTheme {
    fn read_stored(&self) -> Option<String> {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
    }

    fn write_stored(&mut self, value: &str) {
        let stored = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .map(|storage| storage.set_item(THEME_STORAGE_KEY, value).is_ok())
            .unwrap_or(false);
        if !stored {
            console::warn_1(&"theme preference could not be persisted".into());
        }
    }

    fn apply_attribute(&mut self, theme: Theme) {
        let root = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.document_element());
        if let Some(root) = root {
            if let Err(err) = root.set_attribute(THEME_ATTRIBUTE, theme.as_str()) {
                console::error_1(&err);
            }
        }
    }
}

/// The page's single theme controller and the theme it last applied.
#[derive(Debug, Clone)]
pub struct ThemeState {
    controller: Rc<RefCell<ThemeController<BrowserTheme>>>,
    theme: Theme,
}

impl ThemeState {
    pub fn theme(&self) -> Theme {
        self.theme
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        let controller = ThemeController::load(BrowserTheme);
        let theme = controller.theme();
        Self {
            controller: Rc::new(RefCell::new(controller)),
            theme,
        }
    }
}

impl PartialEq for ThemeState {
    fn eq(&self, other: &Self) -> bool {
        self.theme == other.theme
    }
}

pub enum ThemeAction {
    Toggle,
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ThemeAction::Toggle => {
                let theme = self.controller.borrow_mut().toggle();
                Rc::new(Self {
                    controller: Rc::clone(&self.controller),
                    theme,
                })
            },
        }
    }
}

pub type ThemeContext = UseReducerHandle<ThemeState>;

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Html,
}

/// Applies the stored theme on first render and shares it with every toggle.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let state = use_reducer(ThemeState::default);
    html! {
        <ContextProvider<ThemeContext> context={state}>
            {props.children.clone()}
        </ContextProvider<ThemeContext>>
    }
}
