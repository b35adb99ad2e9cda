//! Light/dark theme flag persisted to client storage.

use std::fmt;

/// Storage key holding the chosen theme.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Document attribute mirroring the active theme.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light scheme; used when nothing is stored.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl Theme {
    /// Stored and attribute value.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The opposite scheme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Scheme for a stored value; anything but `dark` is light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    /// Whether this is the dark scheme.
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the theme is persisted and displayed.
pub trait ThemeBackend {
    /// Value under [`THEME_STORAGE_KEY`], if any.
    fn read_stored(&self) -> Option<String>;

    /// Persists `value` under [`THEME_STORAGE_KEY`].
    fn write_stored(&mut self, value: &str);

    /// Sets [`THEME_ATTRIBUTE`] on the document.
    fn apply_attribute(&mut self, theme: Theme);
}

/// Two-state theme machine over a [`ThemeBackend`].
#[derive(Debug)]
pub struct ThemeController<B> {
    backend: B,
    theme: Theme,
}

impl<B: ThemeBackend> ThemeController<B> {
    /// Reads the stored theme (light when absent) and applies it to the
    /// document.
    pub fn load(mut backend: B) -> Self {
        let theme = Theme::from_stored(backend.read_stored().as_deref());
        backend.apply_attribute(theme);
        tracing::debug!(%theme, "theme loaded");
        Self {
            backend,
            theme,
        }
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Flips the stored theme, persists it and mirrors it to the document.
    ///
    /// Storage wins over the cached value, so controllers sharing one
    /// backend never write the same theme twice.
    pub fn toggle(&mut self) -> Theme {
        if let Some(stored) = self.backend.read_stored() {
            self.theme = Theme::from_stored(Some(&stored));
        }
        self.theme = self.theme.toggled();
        self.backend.write_stored(self.theme.as_str());
        self.backend.apply_attribute(self.theme);
        tracing::debug!(theme = %self.theme, "theme toggled");
        self.theme
    }

    /// The underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// In-memory backend for rendering outside a browser and for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryThemeBackend {
    /// Value under the storage key.
    pub stored: Option<String>,
    /// Value of the document attribute.
    pub attribute: Option<String>,
}

impl MemoryThemeBackend {
    /// Backend with `value` already stored.
    pub fn with_stored(value: &str) -> Self {
        Self {
            stored: Some(value.to_string()),
            attribute: None,
        }
    }
}

impl ThemeBackend for MemoryThemeBackend {
    fn read_stored(&self) -> Option<String> {
        self.stored.clone()
    }

    fn write_stored(&mut self, value: &str) {
        self.stored = Some(value.to_string());
    }

    fn apply_attribute(&mut self, theme: Theme) {
        self.attribute = Some(theme.as_str().to_string());
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[derive(Clone, Default)]
    struct SharedBackend(Rc<RefCell<MemoryThemeBackend>>);

    impl ThemeBackend for SharedBackend {
        fn read_stored(&self) -> Option<String> {
            self.0.borrow().read_stored()
        }

        fn write_stored(&mut self, value: &str) {
            self.0.borrow_mut().write_stored(value);
        }

        fn apply_attribute(&mut self, theme: Theme) {
            self.0.borrow_mut().apply_attribute(theme);
        }
    }

    #[test]
    fn missing_or_unknown_value_loads_light() {
        let controller = ThemeController::load(MemoryThemeBackend::default());
        assert_eq!(controller.theme(), Theme::Light);
        assert_eq!(controller.backend().attribute.as_deref(), Some("light"));
        // loading never writes storage
        assert_eq!(controller.backend().stored, None);

        let controller = ThemeController::load(MemoryThemeBackend::with_stored("sepia"));
        assert_eq!(controller.theme(), Theme::Light);
    }

    #[test]
    fn double_toggle_restores_theme_and_storage_tracks_attribute() {
        let mut controller = ThemeController::load(MemoryThemeBackend::with_stored("dark"));
        assert_eq!(controller.theme(), Theme::Dark);

        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(controller.backend().stored, controller.backend().attribute);

        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.backend().stored.as_deref(), Some("dark"));
        assert_eq!(controller.backend().stored, controller.backend().attribute);
    }

    #[test]
    fn toggles_sharing_storage_always_flip_the_page() {
        let backend = SharedBackend::default();
        let mut desktop = ThemeController::load(backend.clone());
        let mut mobile = ThemeController::load(backend.clone());

        assert_eq!(mobile.toggle(), Theme::Dark);
        assert_eq!(backend.0.borrow().attribute.as_deref(), Some("dark"));

        // desktop still caches light but must flip what the page shows
        assert_eq!(desktop.toggle(), Theme::Light);
        assert_eq!(backend.0.borrow().attribute.as_deref(), Some("light"));
        assert_eq!(backend.0.borrow().stored.as_deref(), Some("light"));

        assert_eq!(mobile.toggle(), Theme::Dark);
        assert_eq!(backend.0.borrow().attribute.as_deref(), Some("dark"));
    }
}
