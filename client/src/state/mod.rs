//! Client-side UI state.
//!
//! ARCHITECTURE
//! ============
//! Each module is a plain struct with pure transition methods. Components wrap
//! them in `RwSignal`s and provide them through context, so the logic stays
//! testable without a browser.

pub mod contact;
pub mod menu;
pub mod tracker;
