//! Light/dark theme preference.
//!
//! The theme is a marker on the document root (the `light` class) backed by
//! a single-key preference store. Both sides are injected so the toggle
//! logic runs without a browser.

use std::fmt;

use crate::error::Result;

/// Marker class applied to the document root in light mode.
pub const LIGHT_CLASS: &str = "light";

/// Page colour theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Light marker present on the document root.
    Light,
    /// No marker; the stylesheet default.
    #[default]
    Dark,
}

impl Theme {
    /// Stored representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Interpret a stored value; anything but `"light"` means dark.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Single-key durable preference store.
pub trait Preferences {
    /// Read the stored value.
    fn get(&self) -> Option<String>;

    /// Persist a new value.
    fn set(&self, value: &str) -> Result<()>;
}

/// The structural light-mode marker on the document.
pub trait ThemeSurface {
    /// Whether the light marker is currently applied.
    fn is_light(&self) -> bool;

    /// Apply or remove the light marker.
    fn set_light(&self, light: bool);
}

impl<T: Preferences + ?Sized> Preferences for &T {
    fn get(&self) -> Option<String> {
        (**self).get()
    }

    fn set(&self, value: &str) -> Result<()> {
        (**self).set(value)
    }
}

impl<T: ThemeSurface + ?Sized> ThemeSurface for &T {
    fn is_light(&self) -> bool {
        (**self).is_light()
    }

    fn set_light(&self, light: bool) {
        (**self).set_light(light)
    }
}

/// Restores and toggles the page theme.
#[derive(Debug, Clone)]
pub struct ThemeController<P, S> {
    prefs: P,
    surface: S,
}

impl<P: Preferences, S: ThemeSurface> ThemeController<P, S> {
    /// Create a controller over a preference store and a document surface.
    pub fn new(prefs: P, surface: S) -> Self {
        Self { prefs, surface }
    }

    /// Apply the stored preference. Only a stored `"light"` changes the page.
    pub fn restore(&self) -> Theme {
        let theme = Theme::from_stored(self.prefs.get().as_deref());
        if theme == Theme::Light {
            self.surface.set_light(true);
        }
        theme
    }

    /// Theme currently shown, read from the document marker.
    pub fn current(&self) -> Theme {
        if self.surface.is_light() {
            Theme::Light
        } else {
            Theme::Dark
        }
    }

    /// Flip the marker and persist the new value.
    ///
    /// A failed write still flips the page for this visit.
    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.surface.set_light(next == Theme::Light);
        if let Err(err) = self.prefs.set(next.as_str()) {
            log::warn!("could not persist theme preference: {err}");
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::error::CoreError;

    #[derive(Default)]
    struct MemoryPrefs {
        value: RefCell<Option<String>>,
        read_only: bool,
    }

    impl Preferences for MemoryPrefs {
        fn get(&self) -> Option<String> {
            self.value.borrow().clone()
        }

        fn set(&self, value: &str) -> Result<()> {
            if self.read_only {
                return Err(CoreError::storage("quota exceeded"));
            }
            *self.value.borrow_mut() = Some(value.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct Root {
        light: Cell<bool>,
    }

    impl ThemeSurface for Root {
        fn is_light(&self) -> bool {
            self.light.get()
        }

        fn set_light(&self, light: bool) {
            self.light.set(light);
        }
    }

    #[test]
    fn test_theme_from_stored() {
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("Light")), Theme::Dark);
        assert_eq!(Theme::from_stored(None), Theme::Dark);
    }

    #[test]
    fn test_restore_without_preference_keeps_dark() {
        let controller = ThemeController::new(MemoryPrefs::default(), Root::default());
        assert_eq!(controller.restore(), Theme::Dark);
        assert!(!controller.surface.is_light());
    }

    #[test]
    fn test_restore_light_preference() {
        let prefs = MemoryPrefs::default();
        prefs.set("light").unwrap();
        let controller = ThemeController::new(prefs, Root::default());
        assert_eq!(controller.restore(), Theme::Light);
        assert!(controller.surface.is_light());
    }

    #[test]
    fn test_toggle_round_trip_persists() {
        let controller = ThemeController::new(MemoryPrefs::default(), Root::default());
        controller.restore();

        assert_eq!(controller.toggle(), Theme::Light);
        assert!(controller.surface.is_light());
        assert_eq!(controller.prefs.get().as_deref(), Some("light"));

        assert_eq!(controller.toggle(), Theme::Dark);
        assert!(!controller.surface.is_light());
        assert_eq!(controller.prefs.get().as_deref(), Some("dark"));
    }

    #[test]
    fn test_toggle_follows_marker_not_store() {
        let prefs = MemoryPrefs::default();
        prefs.set("light").unwrap();
        let controller = ThemeController::new(prefs, Root::default());

        // marker not restored yet, so the page is dark
        assert_eq!(controller.toggle(), Theme::Light);
    }

    #[test]
    fn test_failed_write_still_flips() {
        let prefs = MemoryPrefs {
            read_only: true,
            ..MemoryPrefs::default()
        };
        let controller = ThemeController::new(prefs, Root::default());
        assert_eq!(controller.toggle(), Theme::Light);
        assert!(controller.surface.is_light());
        assert!(controller.prefs.get().is_none());
    }
}
