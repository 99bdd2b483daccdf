//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome and controls while reading/writing
//! shared state from Leptos context providers.

pub mod actions_panel;
pub mod header;
pub mod option_panel;
pub mod wheel_host;
