//! Top navigation bar and its menu/scroll state.

use serde::{Deserialize, Serialize};

use crate::{
    content::{CallToAction, NavLink},
    outline::{Block, Outline, Section},
    variant::closed_variant,
};

/// Scroll offset (px) after which the navbar counts as scrolled.
pub const SCROLL_THRESHOLD: f64 = 20.0;

closed_variant! {
    /// Navbar layouts.
    pub enum NavbarVariant for "navbar" default Standard {
        /// White bar with a light shadow.
        Standard => "default",
        /// See-through until the page scrolls.
        Transparent => "transparent",
        /// Pinned to the top of the viewport.
        Sticky => "sticky",
        /// Compact, no shadow.
        Minimal => "minimal",
        /// Logo centred over the links.
        CenteredLogo => "centered-logo",
    }
}

impl NavbarVariant {
    /// Arrangement of logo, links and actions inside the bar.
    pub fn layout_class(self) -> &'static str {
        match self {
            NavbarVariant::CenteredLogo => "relative flex items-center justify-between md:justify-center",
            NavbarVariant::Minimal => "flex items-center justify-between max-w-5xl",
            NavbarVariant::Standard | NavbarVariant::Transparent | NavbarVariant::Sticky => {
                "flex items-center justify-between"
            },
        }
    }

    /// Surface classes; only the transparent bar reacts to scrolling.
    pub fn surface_class(self, scrolled: bool) -> &'static str {
        match self {
            NavbarVariant::Standard => "bg-white shadow-sm",
            NavbarVariant::Transparent if scrolled => "bg-white shadow-md",
            NavbarVariant::Transparent => "bg-transparent",
            NavbarVariant::Sticky => "fixed top-0 left-0 bg-white shadow-md",
            NavbarVariant::Minimal => "bg-white shadow-none py-2",
            NavbarVariant::CenteredLogo => "bg-white shadow-md justify-center",
        }
    }

    /// Extra classes for the logo wrapper.
    pub fn logo_class(self) -> &'static str {
        match self {
            NavbarVariant::CenteredLogo => "absolute left-1/2 -translate-x-1/2",
            _ => "",
        }
    }
}

/// Navbar content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavbarContent {
    /// Brand text shown as the logo.
    #[serde(default)]
    pub logo: Option<String>,
    /// Navigation links, shown on desktop and in the mobile menu.
    #[serde(default)]
    pub links: Vec<NavLink>,
    /// Call-to-action button at the end of the bar.
    #[serde(default)]
    pub cta: Option<CallToAction>,
}

impl Section for NavbarContent {
    type Variant = NavbarVariant;

    fn outline(&self, _variant: NavbarVariant) -> Outline {
        let mut outline = Outline::new();
        outline
            .push_if(self.logo.is_some(), Block::Headline)
            .push(Block::Links)
            .push_if(self.cta.is_some(), Block::Actions);
        outline
    }
}

/// Mobile menu and scroll-shadow flags of one navbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavbarState {
    /// Mobile menu is expanded.
    pub menu_open: bool,
    /// Page has scrolled past [`SCROLL_THRESHOLD`].
    pub scrolled: bool,
}

impl NavbarState {
    /// Flips the mobile menu.
    pub fn toggle_menu(self) -> Self {
        Self {
            menu_open: !self.menu_open,
            ..self
        }
    }

    /// Collapses the mobile menu, e.g. after a link was followed.
    pub fn close_menu(self) -> Self {
        Self {
            menu_open: false,
            ..self
        }
    }

    /// Records the current vertical scroll offset.
    pub fn scrolled_to(self, scroll_y: f64) -> Self {
        Self {
            scrolled: scroll_y > SCROLL_THRESHOLD,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transparent_bar_gains_background_after_threshold() {
        let state = NavbarState::default().scrolled_to(SCROLL_THRESHOLD);
        assert!(!state.scrolled);
        assert_eq!(NavbarVariant::Transparent.surface_class(state.scrolled), "bg-transparent");

        let state = state.scrolled_to(SCROLL_THRESHOLD + 1.0);
        assert!(state.scrolled);
        assert_eq!(NavbarVariant::Transparent.surface_class(state.scrolled), "bg-white shadow-md");
        assert_eq!(NavbarVariant::Sticky.surface_class(false), NavbarVariant::Sticky.surface_class(true));
    }

    #[test]
    fn menu_toggles_and_closes() {
        let state = NavbarState::default().toggle_menu();
        assert!(state.menu_open);
        assert!(!state.toggle_menu().menu_open);
        assert!(!state.close_menu().menu_open);
        assert!(!NavbarState::default().close_menu().menu_open);
    }

    #[test]
    fn default_tag_maps_to_standard() {
        assert_eq!("default".parse::<NavbarVariant>().ok(), Some(NavbarVariant::Standard));
        assert_eq!(NavbarVariant::default().as_str(), "default");
    }
}
