use super::*;

// =============================================================
// Destination
// =============================================================

#[test]
fn destination_classifies_links() {
    assert_eq!(Destination::from_href("https://dos.zone/q3/", true), Destination::External("https://dos.zone/q3/".into()));
    assert_eq!(Destination::from_href("https://x.test", false), Destination::External("https://x.test".into()));
    assert_eq!(Destination::from_href("#", false), Destination::Inert);
    assert_eq!(Destination::from_href("#home", false), Destination::Hash("home".into()));
    assert_eq!(Destination::from_href("/basement", false), Destination::Route("/basement".into()));
    assert_eq!(
        Destination::from_href("mailto:someone@example.com", false),
        Destination::Location("mailto:someone@example.com".into())
    );
}

#[test]
fn status_tone_matches_keywords() {
    assert_eq!(StatusTone::of("Simulation: Online"), StatusTone::Online);
    assert_eq!(StatusTone::of("CLASSIFIED"), StatusTone::Classified);
    assert_eq!(StatusTone::of("MAINTENANCE"), StatusTone::Caution);
    assert_eq!(StatusTone::of("SECURE"), StatusTone::Caution);
}

#[test]
fn format_category_replaces_dashes() {
    assert_eq!(format_category("front-end-relay"), "front end relay");
}

// =============================================================
// Main list
// =============================================================

#[test]
fn default_highlights_first_item() {
    let menu = MenuState::default();
    assert_eq!(menu.mode, MenuMode::Main);
    assert_eq!(menu.active_id, "new-game");
    assert_eq!(menu.instructions(), MAIN_INSTRUCTIONS);
}

#[test]
fn hover_changes_briefing() {
    let mut menu = MenuState::default();
    menu.hover_main("botnet");
    let display = menu.display();
    assert_eq!(display.label, "BOTNET");
    assert_eq!(display.status, "Grid Status: ACTIVE");
}

#[test]
fn clicking_games_opens_submenu_at_first_row() {
    let mut menu = MenuState::default();
    menu.selection = 4;
    assert_eq!(menu.click_main("new-game"), Destination::Inert);
    assert_eq!(menu.mode, MenuMode::Sub(Submenu::Games));
    assert_eq!(menu.selection, 0);
}

#[test]
fn login_is_inert() {
    let mut menu = MenuState::default();
    assert_eq!(menu.click_main(LOGIN_ID), Destination::Inert);
    assert_eq!(menu.mode, MenuMode::Main);
    assert_eq!(menu.active_id, LOGIN_ID);
}

#[test]
fn readme_opens_externally() {
    let mut menu = MenuState::default();
    assert_eq!(menu.click_main("view-readme"), Destination::External("https://github.com/k9Doge3".into()));
}

// =============================================================
// Submenus
// =============================================================

#[test]
fn arrow_keys_wrap_around() {
    let mut menu = MenuState::default();
    menu.open(Submenu::Botnet);
    assert_eq!(menu.key("ArrowUp"), KeyOutcome::Handled);
    assert_eq!(menu.selection, 3);
    assert_eq!(menu.key("s"), KeyOutcome::Handled);
    assert_eq!(menu.selection, 0);
    assert_eq!(menu.key("W"), KeyOutcome::Handled);
    assert_eq!(menu.selection, 3);
}

#[test]
fn enter_on_basement_routes_and_returns_to_main() {
    let mut menu = MenuState::default();
    menu.open(Submenu::Games);
    assert_eq!(menu.key("Enter"), KeyOutcome::Navigate(Destination::Route("/basement".into())));
    assert_eq!(menu.mode, MenuMode::Main);
    assert_eq!(menu.active_id, "new-game");
}

#[test]
fn escape_backs_out_to_parent() {
    let mut menu = MenuState::default();
    menu.open(Submenu::Comms);
    menu.key("ArrowDown");
    assert_eq!(menu.key("Escape"), KeyOutcome::Handled);
    assert_eq!(menu.mode, MenuMode::Main);
    assert_eq!(menu.active_id, "communication-channels");
}

#[test]
fn keys_are_ignored_on_main_list() {
    let mut menu = MenuState::default();
    assert_eq!(menu.key("ArrowDown"), KeyOutcome::Ignored);
    assert_eq!(menu.key("Enter"), KeyOutcome::Ignored);
}

#[test]
fn unrelated_keys_are_ignored_in_submenu() {
    let mut menu = MenuState::default();
    menu.open(Submenu::Games);
    assert_eq!(menu.key("x"), KeyOutcome::Ignored);
    assert_eq!(menu.mode, MenuMode::Sub(Submenu::Games));
}

#[test]
fn hover_option_out_of_range_is_ignored() {
    let mut menu = MenuState::default();
    menu.open(Submenu::Comms);
    menu.hover_option(99);
    assert_eq!(menu.selection, 0);
    menu.hover_option(2);
    assert_eq!(menu.selection, 2);
}

#[test]
fn hash_option_scrolls_to_anchor() {
    let mut menu = MenuState::default();
    menu.open(Submenu::Botnet);
    assert_eq!(menu.select_option(1), Destination::Hash("home".into()));
}

#[test]
fn systems_briefing_shows_bracketed_category() {
    let mut menu = MenuState::default();
    menu.open(Submenu::Systems);
    let display = menu.display();
    assert_eq!(display.label, "CONNECTED SYSTEMS // Photo Gallery");
    assert_eq!(display.detail, "[ media ]");
    assert_eq!(display.status, "ONLINE");
}

#[test]
fn comms_briefing_shows_channel_mode() {
    let mut menu = MenuState::default();
    menu.open(Submenu::Comms);
    menu.hover_option(1);
    assert_eq!(menu.display().detail, "Channel mode: direct");
}

#[test]
fn games_briefing_shows_directive() {
    let mut menu = MenuState::default();
    menu.open(Submenu::Games);
    assert_eq!(menu.display().detail, "Mission Directive: Confirm infiltration plan.");
    assert!(menu.instructions().contains("enter to deploy"));
}

// =============================================================
// Key targets
// =============================================================

#[test]
fn form_fields_are_text_entry() {
    assert!(is_text_entry("INPUT", false));
    assert!(is_text_entry("TEXTAREA", false));
    assert!(is_text_entry("select", false));
}

#[test]
fn content_editable_is_text_entry() {
    assert!(is_text_entry("DIV", true));
}

#[test]
fn buttons_and_body_are_not_text_entry() {
    assert!(!is_text_entry("BUTTON", false));
    assert!(!is_text_entry("BODY", false));
}
