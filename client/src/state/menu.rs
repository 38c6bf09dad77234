//! Terminal menu state machine for the home page.
//!
//! DESIGN
//! ======
//! The menu is either on the main list or inside one submenu. All transitions
//! are plain methods returning what the host should do next (usually a
//! [`Destination`]), so the component only wires DOM events and performs
//! navigation side effects.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::util::menu_catalog::{self, LOGIN_ID, MAIN_INSTRUCTIONS, MAIN_ITEMS, MainItem, SubOption, Submenu, SubmenuConfig};

/// Which list is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuMode {
    #[default]
    Main,
    Sub(Submenu),
}

/// Where a selection leads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    /// Open in a new tab.
    External(String),
    /// Scroll to an element id on this page and update the location hash.
    Hash(String),
    /// Client-side route change.
    Route(String),
    /// Same-window navigation the router does not own (`mailto:` and friends).
    Location(String),
    /// Nothing happens.
    Inert,
}

impl Destination {
    /// Classify a link target.
    #[must_use]
    pub fn from_href(href: &str, external: bool) -> Self {
        if external || href.starts_with("http") {
            return Self::External(href.to_owned());
        }
        if href == "#" || href.is_empty() {
            return Self::Inert;
        }
        if let Some(id) = href.strip_prefix('#') {
            return Self::Hash(id.to_owned());
        }
        if href.starts_with('/') {
            return Self::Route(href.to_owned());
        }
        Self::Location(href.to_owned())
    }
}

/// Colour family for a status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusTone {
    Online,
    Classified,
    Caution,
}

impl StatusTone {
    /// Pick a tone from free-form status text.
    #[must_use]
    pub fn of(status: &str) -> Self {
        let normalized = status.to_lowercase();
        if normalized.contains("online") {
            Self::Online
        } else if normalized.contains("classified") {
            Self::Classified
        } else {
            Self::Caution
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Online => "tone-online",
            Self::Classified => "tone-classified",
            Self::Caution => "tone-caution",
        }
    }
}

/// Category slugs are shown with spaces instead of dashes.
#[must_use]
pub fn format_category(category: &str) -> String {
    category.replace('-', " ")
}

/// Whether a key event target is a text entry field. Menu keys are not
/// intercepted there so typing in the contact form keeps working.
#[must_use]
pub fn is_text_entry(tag_name: &str, content_editable: bool) -> bool {
    content_editable || ["INPUT", "TEXTAREA", "SELECT"].iter().any(|tag| tag_name.eq_ignore_ascii_case(tag))
}

/// Contents of the briefing panel on the right.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Display {
    pub label: String,
    pub description: String,
    pub detail: String,
    pub status: String,
}

/// Result of a key press while the menu is focused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not a menu key; leave the event alone.
    Ignored,
    /// Consumed; prevent the browser default.
    Handled,
    /// Consumed and the host should navigate.
    Navigate(Destination),
}

/// Terminal menu state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuState {
    pub mode: MenuMode,
    /// Highlighted main item id.
    pub active_id: &'static str,
    /// Highlighted row inside the open submenu.
    pub selection: usize,
}

impl Default for MenuState {
    fn default() -> Self {
        Self { mode: MenuMode::Main, active_id: MAIN_ITEMS[0].id, selection: 0 }
    }
}

impl MenuState {
    /// The open submenu, if any.
    #[must_use]
    pub fn submenu(&self) -> Option<&'static SubmenuConfig> {
        match self.mode {
            MenuMode::Main => None,
            MenuMode::Sub(kind) => Some(menu_catalog::submenu(kind)),
        }
    }

    /// The highlighted main item.
    #[must_use]
    pub fn active_item(&self) -> &'static MainItem {
        menu_catalog::main_item(self.active_id).unwrap_or(&MAIN_ITEMS[0])
    }

    /// The highlighted submenu row, falling back to the first.
    #[must_use]
    pub fn selected_option(&self) -> Option<&'static SubOption> {
        let options = self.submenu()?.options;
        options.get(self.selection).or_else(|| options.first())
    }

    /// Pointer hover or keyboard focus on a main item.
    pub fn hover_main(&mut self, id: &'static str) {
        self.active_id = id;
    }

    /// Pointer hover or keyboard focus on a submenu row.
    pub fn hover_option(&mut self, index: usize) {
        if self.submenu().is_some_and(|config| index < config.options.len()) {
            self.selection = index;
        }
    }

    /// Click on a main item. Opens its submenu, or classifies its link.
    pub fn click_main(&mut self, id: &'static str) -> Destination {
        self.active_id = id;
        let Some(item) = menu_catalog::main_item(id) else {
            return Destination::Inert;
        };
        if item.id == LOGIN_ID {
            self.mode = MenuMode::Main;
            return Destination::Inert;
        }
        if let Some(kind) = item.opens {
            self.open(kind);
            return Destination::Inert;
        }
        self.mode = MenuMode::Main;
        item.href.map_or(Destination::Inert, |href| Destination::from_href(href, false))
    }

    /// Open a submenu with the first row selected.
    pub fn open(&mut self, kind: Submenu) {
        self.mode = MenuMode::Sub(kind);
        self.selection = 0;
        self.active_id = menu_catalog::submenu(kind).parent_id;
    }

    /// Return to the main list, highlighting the submenu's parent.
    pub fn back(&mut self) {
        if let Some(config) = self.submenu() {
            self.active_id = config.parent_id;
        }
        self.mode = MenuMode::Main;
    }

    /// Choose a submenu row. Always returns to the main list.
    pub fn select_option(&mut self, index: usize) -> Destination {
        let Some(config) = self.submenu() else {
            return Destination::Inert;
        };
        let destination = config
            .options
            .get(index)
            .or_else(|| config.options.first())
            .map_or(Destination::Inert, |option| Destination::from_href(option.href, option.external));
        self.back();
        destination
    }

    /// Keyboard navigation. Only active while a submenu is open.
    pub fn key(&mut self, key: &str) -> KeyOutcome {
        let Some(config) = self.submenu() else {
            return KeyOutcome::Ignored;
        };
        let len = config.options.len();
        if len == 0 {
            return KeyOutcome::Ignored;
        }
        match key.to_lowercase().as_str() {
            "arrowdown" | "s" => {
                self.selection = (self.selection + 1) % len;
                KeyOutcome::Handled
            }
            "arrowup" | "w" => {
                self.selection = (self.selection + len - 1) % len;
                KeyOutcome::Handled
            }
            "enter" => KeyOutcome::Navigate(self.select_option(self.selection)),
            "escape" => {
                self.back();
                KeyOutcome::Handled
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// What the briefing panel shows.
    #[must_use]
    pub fn display(&self) -> Display {
        let (Some(config), Some(option)) = (self.submenu(), self.selected_option()) else {
            let item = self.active_item();
            return Display {
                label: item.label.to_owned(),
                description: item.description.to_owned(),
                detail: item.detail.to_owned(),
                status: item.status.to_owned(),
            };
        };
        let parent = menu_catalog::main_item(config.parent_id).map_or("SUBMENU", |item| item.label);
        let detail = match config.parent_id {
            "connected-systems" => format!("[ {} ]", format_category(option.category.unwrap_or("system"))),
            "communication-channels" => format!("Channel mode: {}", format_category(option.category.unwrap_or("uplink"))),
            _ => "Mission Directive: Confirm infiltration plan.".to_owned(),
        };
        Display {
            label: format!("{parent} // {}", option.label),
            description: option.description.to_owned(),
            detail,
            status: option.status.to_owned(),
        }
    }

    /// Footer hint line.
    #[must_use]
    pub fn instructions(&self) -> &'static str {
        self.submenu().map_or(MAIN_INSTRUCTIONS, |config| config.instructions)
    }
}
