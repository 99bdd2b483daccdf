#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn read_preference_is_default_without_browser() {
    assert_eq!(read_preference(), Theme::Dark);
}

#[test]
fn select_is_callable_for_both_themes() {
    select(Theme::Light);
    select(Theme::Dark);
}

#[test]
fn apply_is_noop_but_callable() {
    apply(Theme::Dark);
    apply(Theme::Light);
}
