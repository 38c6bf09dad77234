//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and interaction surfaces while reading and
//! writing shared state from Leptos context providers.

pub mod basement_map;
pub mod contact_form;
pub mod game_host;
pub mod navigation;
pub mod terminal_menu;
pub mod tracker_panel;
