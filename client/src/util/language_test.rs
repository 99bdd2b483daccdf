#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn detect_falls_back_to_english_without_browser() {
    assert_eq!(detect(), Language::En);
}

#[test]
fn select_is_callable_for_every_language() {
    for language in Language::ALL {
        select(language);
    }
}
