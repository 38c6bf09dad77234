//! Static content for the home page terminal menu.
//!
//! Entries are `'static` tables so the menu state machine can hand out
//! borrowed labels without cloning on every hover.

#[cfg(test)]
#[path = "menu_catalog_test.rs"]
mod menu_catalog_test;

/// Which submenu a main item opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submenu {
    Games,
    Systems,
    Comms,
    Botnet,
}

/// A top-level menu entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MainItem {
    pub id: &'static str,
    pub label: &'static str,
    pub href: Option<&'static str>,
    pub description: &'static str,
    pub detail: &'static str,
    pub status: &'static str,
    pub opens: Option<Submenu>,
}

/// One row inside a submenu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubOption {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub href: &'static str,
    pub status: &'static str,
    pub category: Option<&'static str>,
    pub external: bool,
}

/// Header, footer and rows of a submenu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmenuConfig {
    pub key: &'static str,
    pub title: &'static str,
    pub instructions: &'static str,
    pub parent_id: &'static str,
    pub options: &'static [SubOption],
    /// Filter chips shown above the rows; the first one is highlighted.
    pub categories: &'static [&'static str],
}

/// Id of the inert authentication entry.
pub const LOGIN_ID: &str = "login";

/// Footer hint while no submenu is open.
pub const MAIN_INSTRUCTIONS: &str = "[ press enter to confirm selection // click option to continue ]";

pub const MAIN_ITEMS: [MainItem; 6] = [
    MainItem {
        id: "new-game",
        label: "GAMES",
        href: None,
        description: "Enter the interactive facility map and begin infiltration of every room, console, and exit.",
        detail: "Mission: Chart all six sectors without tripping alarms.",
        status: "Difficulty: LEVEL SEVEN",
        opens: Some(Submenu::Games),
    },
    MainItem {
        id: "connected-systems",
        label: "CONNECTED SYSTEMS",
        href: None,
        description: "Audit every networked subsystem, authentication pipeline, and cross-link powering KyLife.",
        detail: "Objective: Validate uplinks \u{b7} Clearance: Level 3 // Ops Lead Required.",
        status: "Channel Integrity: STABLE",
        opens: Some(Submenu::Systems),
    },
    MainItem {
        id: "communication-channels",
        label: "COMMUNICATION CHANNELS",
        href: None,
        description: "Open secure frequencies, direct transmissions, and broadcast relays for the ops team.",
        detail: "Routing Matrix: Multi-spectrum uplink // Response Window: Active",
        status: "Signal Status: OPERATIONAL",
        opens: Some(Submenu::Comms),
    },
    MainItem {
        id: "view-readme",
        label: "VIEW README.TXT",
        href: Some("https://github.com/k9Doge3"),
        description: "Inspect documentation, changelogs, and build notes recovered from the archives.",
        detail: "External Mirror: GitHub Operations Log",
        status: "OpSec: PUBLIC",
        opens: None,
    },
    MainItem {
        id: LOGIN_ID,
        label: "LOGIN",
        href: Some("#"),
        description: "Authenticate (im stealing your pass).",
        detail: "Credential Gate: Multi-factor // Session Window: 5 Minutes",
        status: "Access Protocol: STANDBY",
        opens: None,
    },
    MainItem {
        id: "botnet",
        label: "BOTNET",
        href: None,
        description: "Issue coordinated commands to every remote node inside the operations lattice.",
        detail: "Operation: Synchronize distributed agents \u{b7} Clearance: Level 4 // Network Ops Required.",
        status: "Grid Status: ACTIVE",
        opens: Some(Submenu::Botnet),
    },
];

const fn online_game(id: &'static str, label: &'static str, description: &'static str, href: &'static str) -> SubOption {
    SubOption { id, label, description, href, status: "Simulation: Online", category: None, external: true }
}

const GAME_OPTIONS: [SubOption; 11] = [
    SubOption {
        id: "basement-descent",
        label: "BASEMENT DESCENT",
        description: "Dive directly into the Basement simulation to inspect subterranean anomalies.",
        href: "/basement",
        status: "Simulation: Active",
        category: None,
        external: false,
    },
    online_game(
        "half-life-1",
        "HALF-LIFE 1",
        "Launch the original Black Mesa incident with multiplayer access.",
        "https://dos.zone/hldm/",
    ),
    online_game(
        "quake-iii-arena",
        "QUAKE III ARENA",
        "Enter the arena and test reflexes in a high-speed frag simulation.",
        "https://dos.zone/q3/",
    ),
    online_game(
        "comanche-2",
        "COMANCHE 2",
        "Pilot advanced rotorcraft through classified combat exercises.",
        "https://dos.zone/comanche2/",
    ),
    online_game(
        "age-of-empires-ii",
        "AGE OF EMPIRES II",
        "Command your civilization through a full-scale strategy simulation.",
        "https://dos.zone/age-of-empires2/",
    ),
    online_game(
        "need-for-speed",
        "NEED FOR SPEED",
        "Deploy to high-speed pursuit scenarios across global circuits.",
        "https://dos.zone/the-need-for-speed-sep-1995/",
    ),
    online_game(
        "doom-2",
        "DOOM 2",
        "Clear hostile sectors and secure the exit point.",
        "https://dos.zone/doom-ii-oct-10-1994/",
    ),
    online_game(
        "red-baron",
        "RED BARON",
        "Engage in aerial dogfights across historic war zones.",
        "https://dos.zone/red-baron-eng/",
    ),
    online_game(
        "gta-2",
        "GTA 2",
        "Navigate urban operations with full tactical freedom.",
        "https://dos.zone/grand-theft-auto2/",
    ),
    online_game(
        "pinball-space-cadet",
        "PINBALL: SPACE CADET",
        "Enter orbital pinball trials for morale and reflex calibration.",
        "https://dos.zone/microsoft-3d-pinball-space-cadet/",
    ),
    online_game(
        "unreal-tournament-99",
        "UNREAL TOURNAMENT 99",
        "Compete in a live-fire arena tournament.",
        "https://dos.zone/ut99/",
    ),
];

const BOTNET_OPTIONS: [SubOption; 4] = [
    SubOption {
        id: "qt314-node",
        label: "QT314 NODE",
        description: "Qt314.ca live feed \u{2013} kawaii-zone front-end relay.",
        href: "https://qt314.ca",
        status: "ONLINE",
        category: Some("entertainment"),
        external: true,
    },
    SubOption {
        id: "half-life-grid",
        label: "HALF-LIFE GRID",
        description: "Main kylife.ca deployment controls and console uplink.",
        href: "#home",
        status: "SECURE",
        category: Some("core"),
        external: false,
    },
    SubOption {
        id: "cloudflare-tunnel",
        label: "CLOUDFLARE TUNNEL",
        description: "Inspect tunnel routes and active ingress rules.",
        href: "https://dash.cloudflare.com",
        status: "MAINTENANCE",
        category: Some("ops"),
        external: true,
    },
    SubOption {
        id: "espocrm-node",
        label: "CRM NODE",
        description: "EspoCRM operations node for wildrosepainters.ca.",
        href: "https://crm.wildrosepainters.ca",
        status: "ONLINE",
        category: Some("business"),
        external: true,
    },
];

const SYSTEM_OPTIONS: [SubOption; 7] = [
    SubOption {
        id: "photos",
        label: "Photo Gallery",
        description: "PhotoPrism gallery instance with AI-powered organization.",
        href: "https://gallery.kylife.ca",
        status: "ONLINE",
        category: Some("media"),
        external: true,
    },
    SubOption {
        id: "private",
        label: "Admin Gallery",
        description: "Private PhotoPrism management dashboard.",
        href: "https://admin.kylife.ca",
        status: "ONLINE",
        category: Some("admin"),
        external: true,
    },
    SubOption {
        id: "espo-crm",
        label: "EspoCRM",
        description: "Customer relationship management system.",
        href: "https://crm.wildrosepainters.ca",
        status: "ONLINE",
        category: Some("business"),
        external: true,
    },
    SubOption {
        id: "github-projects",
        label: "GitHub Projects",
        description: "Open source repositories and contributions.",
        href: "https://github.com/k9Doge3",
        status: "ONLINE",
        category: Some("development"),
        external: true,
    },
    SubOption {
        id: "ai-chat-interface",
        label: "AI Chat Interface",
        description: "Anthropic Claude integration with Qdrant vector storage.",
        href: "#",
        status: "CLASSIFIED",
        category: Some("ai"),
        external: false,
    },
    SubOption {
        id: "spotify-connect",
        label: "Spotify Connect",
        description: "Music integration and playlist management.",
        href: "#",
        status: "CLASSIFIED",
        category: Some("social"),
        external: false,
    },
    SubOption {
        id: "tiktok-profile",
        label: "TikTok",
        description: "",
        href: "#",
        status: "CLASSIFIED",
        category: Some("social"),
        external: false,
    },
];

const COMMS_OPTIONS: [SubOption; 4] = [
    SubOption {
        id: "github",
        label: "GitHub Uplink",
        description: "Open source projects and contributions.",
        href: "https://github.com/k9Doge3",
        status: "ONLINE",
        category: Some("code"),
        external: true,
    },
    SubOption {
        id: "email",
        label: "email",
        description: "Encrypted direct transmission channel.",
        href: "mailto:ky.group.solutions@gmail.com",
        status: "ENCRYPTED",
        category: Some("direct"),
        external: false,
    },
    SubOption {
        id: "spotify-briefing",
        label: "Spotify Briefing",
        description: "Music preferences and morale playlists.",
        href: "#",
        status: "CLASSIFIED",
        category: Some("audio"),
        external: false,
    },
    SubOption {
        id: "tiktok",
        label: "Tiktok",
        description: "just my goofy tiktok",
        href: "#",
        status: "CLASSIFIED",
        category: Some("video"),
        external: false,
    },
];

const GAMES_MENU: SubmenuConfig = SubmenuConfig {
    key: "new-game-menu",
    title: "Select Game",
    instructions: "[ use \u{2191} / \u{2193} or W / S to navigate // enter to deploy // esc to abort ]",
    parent_id: "new-game",
    options: &GAME_OPTIONS,
    categories: &[],
};

const BOTNET_MENU: SubmenuConfig = SubmenuConfig {
    key: "botnet-menu",
    title: "BOTNET CONTROL MATRIX",
    instructions: "[ use \u{2191} / \u{2193} or W / S to cycle nodes // enter to engage // esc to abort ]",
    parent_id: "botnet",
    options: &BOTNET_OPTIONS,
    categories: &["All", "Core", "Ops", "Business", "Entertainment"],
};

const SYSTEMS_MENU: SubmenuConfig = SubmenuConfig {
    key: "connected-systems-menu",
    title: "SEARCH SYSTEMS...",
    instructions: "[ use \u{2191} / \u{2193} or W / S to navigate // enter to open // esc to abort ]",
    parent_id: "connected-systems",
    options: &SYSTEM_OPTIONS,
    categories: &["All", "Media", "Admin", "Business", "Platform", "Development", "Ai", "Social"],
};

const COMMS_MENU: SubmenuConfig = SubmenuConfig {
    key: "communication-channels-menu",
    title: "COMMUNICATION CHANNELS",
    instructions: "[ use \u{2191} / \u{2193} or W / S to tune // enter to connect // esc to abort ]",
    parent_id: "communication-channels",
    options: &COMMS_OPTIONS,
    categories: &[],
};

/// Configuration for `kind`.
#[must_use]
pub fn submenu(kind: Submenu) -> &'static SubmenuConfig {
    match kind {
        Submenu::Games => &GAMES_MENU,
        Submenu::Systems => &SYSTEMS_MENU,
        Submenu::Comms => &COMMS_MENU,
        Submenu::Botnet => &BOTNET_MENU,
    }
}

/// Look up a main item by id.
#[must_use]
pub fn main_item(id: &str) -> Option<&'static MainItem> {
    MAIN_ITEMS.iter().find(|item| item.id == id)
}
