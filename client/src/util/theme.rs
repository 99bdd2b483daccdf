//! Theme initialization and toggle.
//!
//! Reads the stored theme through `wheel::storage` and applies a
//! `data-theme` attribute to the `<html>` element. Selecting a theme writes
//! back to `localStorage` and updates that attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; native builds
//! no-op so tests stay deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use wheel::palette::Theme;

/// Read the theme preference. Falls back to [`Theme::default`].
pub fn read_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        match wheel::storage::LocalStore::open() {
            Ok(store) => wheel::storage::load_theme(&store).unwrap_or_default(),
            Err(err) => {
                log::warn!("theme preference unavailable: {err}");
                Theme::default()
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::default()
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            if let Err(err) = el.set_attribute("data-theme", theme.as_str()) {
                log::warn!("failed to apply theme: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Apply `theme` and remember it for the next visit.
pub fn select(theme: Theme) {
    apply(theme);
    #[cfg(feature = "csr")]
    {
        let saved = wheel::storage::LocalStore::open()
            .and_then(|mut store| wheel::storage::save_theme(&mut store, theme));
        if let Err(err) = saved {
            log::warn!("failed to save theme: {err}");
        }
    }
}
