//! Language detection, persistence and document metadata.
//!
//! Detection order is the stored choice, then the browser's language prefix,
//! then English. Native builds only see the fallback.

#[cfg(test)]
#[path = "language_test.rs"]
mod language_test;

use wheel::i18n::Language;

/// Pick the startup language.
pub fn detect() -> Language {
    #[cfg(feature = "csr")]
    {
        let stored = match wheel::storage::LocalStore::open() {
            Ok(store) => wheel::storage::load_language(&store),
            Err(err) => {
                log::warn!("language preference unavailable: {err}");
                None
            }
        };
        let browser = web_sys::window().and_then(|w| w.navigator().language());
        Language::detect(stored.as_deref(), browser.as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        Language::detect(None, None)
    }
}

/// Set `document.title` and the `<html lang>` attribute.
pub fn apply(language: Language) {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        doc.set_title(language.strings().page_title);
        if let Some(el) = doc.document_element() {
            if let Err(err) = el.set_attribute("lang", language.code()) {
                log::warn!("failed to set document language: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = language;
    }
}

/// Apply `language` and remember it for the next visit.
pub fn select(language: Language) {
    apply(language);
    #[cfg(feature = "csr")]
    {
        let saved = wheel::storage::LocalStore::open()
            .and_then(|mut store| wheel::storage::save_language(&mut store, language));
        if let Err(err) = saved {
            log::warn!("failed to save language: {err}");
        }
    }
}
