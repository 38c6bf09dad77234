//! Sandbox chrome state for the basement page.
//!
//! DESIGN
//! ======
//! The engine owns the simulation; this state owns everything drawn around
//! the canvas: the map overlay, the rotating status feed and mirrored values
//! (money, car, hint) that the game host copies out of engine actions. The
//! overlay flag lives here and the host forwards it to the engine as pause.

#[cfg(test)]
#[path = "tracker_test.rs"]
mod tracker_test;

/// Milliseconds between status feed rotations.
pub const STATUS_ROTATE_MS: u32 = 5_000;

/// A labelled area on the floor plan overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    pub id: &'static str,
    pub name: &'static str,
    pub summary: &'static str,
    pub detail: &'static str,
    /// Left, top, width, height as percentages of the plan.
    pub area: [f64; 4],
}

impl Region {
    /// Inline CSS placing the region on the plan.
    #[must_use]
    pub fn style(&self) -> String {
        let [left, top, width, height] = self.area;
        format!("left: {left}%; top: {top}%; width: {width}%; height: {height}%;")
    }
}

pub const REGIONS: [Region; 5] = [
    Region {
        id: "command-deck",
        name: "Command Deck",
        summary: "Mission desk + tracker wall",
        detail: "Primary ops station with dual displays, Basement Tracker feed, and uplink console. Used for logging runs and dispatching tasks.",
        area: [6.0, 10.0, 38.0, 30.0],
    },
    Region {
        id: "workshop",
        name: "Workshop Corridor",
        summary: "3D printer + fabrication",
        detail: "Fabrication lane for props, camera rigs, and LED assemblies. Houses the 3D printer, soldering station, and modular shelving.",
        area: [50.0, 14.0, 40.0, 24.0],
    },
    Region {
        id: "server-rack",
        name: "Server Rack",
        summary: "NAS + VR gear",
        detail: "Network spine with NAS arrays, off-site backup gateway, and VR kit for testing spatial UI flows inside the simulation.",
        area: [60.0, 44.0, 28.0, 26.0],
    },
    Region {
        id: "music-bay",
        name: "Music Bay",
        summary: "Synths and loopers",
        detail: "Sound design corner piping ambience into the level. Doubles as podcast nook for narrative logs and mission briefings.",
        area: [12.0, 48.0, 30.0, 26.0],
    },
    Region {
        id: "storage",
        name: "Storage Lift",
        summary: "Cargo lift + stairs",
        detail: "Access point to street level and staging zone for gear heading to shoots. Serves as the ingress/egress checkpoint.",
        area: [44.0, 72.0, 22.0, 18.0],
    },
];

pub const STATUS_LINES: [&str; 30] = [
    "Still here. Mom brought pizza rolls.",
    "Day 847: The WiFi is strong with this one.",
    "Living the dream (mom's dream that I move out).",
    "Update: Just beat my high score in being unemployed.",
    "Mom asked if I'm 'winning' again. I said yes.",
    "The basement is my kingdom. The laundry room is my throne.",
    "Rent: $0. Dignity: Also $0.",
    "Breaking News: Still in basement. More at 11.",
    "Mom's basement > Your penthouse (it's warmer here).",
    "Status: Professional basement dweller.",
    "Achievement Unlocked: 1000 hours in mom's basement.",
    "The outside world is overrated anyway.",
    "Mom says I need vitamin D. I said I have RGB lighting.",
    "Living my best life (according to no one).",
    "Update: Mom's doing laundry. I'm in the way again.",
    "The mini-fridge is my only friend. It's cold but reliable.",
    "Pizza box count: Lost track after 47.",
    "Mom's calling from upstairs. Pretending I can't hear.",
    "Sunlight is just aggressive moonlight anyway.",
    "My gaming chair has a permanent butt groove. It's art.",
    "The spiders and I have an understanding now.",
    "Showered this week. Feeling fancy.",
    "Mom threatened to charge rent. I laughed. She didn't.",
    "The basement ceiling is my Sistine Chapel.",
    "Update: Found a Cheeto from 2019. Still good.",
    "My sleep schedule is a work of abstract art.",
    "Went upstairs today. Regretted it immediately.",
    "The WiFi router is my life support system.",
    "Mom says I need a job. I said I'm a 'content creator'.",
    "Living off pizza and broken dreams.",
];

/// Controls legend shown under the canvas.
pub const CONTROLS_LEGEND: &str = "Click to lock mouse \u{2022} WASD to move \u{2022} SHIFT to sprint \u{2022} SPACE to jump \u{2022} E to enter/exit car \u{2022} ESC to unlock \u{2022} Press M for map overlay";

/// What a key press did to the chrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChromeKey {
    /// Not ours.
    Ignored,
    /// Consumed; the overlay flag may have changed.
    Handled,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrackerState {
    pub map_open: bool,
    pub focused_region: &'static str,
    pub money: u32,
    pub in_car: bool,
    pub hint: Option<&'static str>,
    pub status_index: usize,
    /// Wall-clock label of the last status rotation.
    pub last_update: String,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self {
            map_open: false,
            focused_region: REGIONS[0].id,
            money: 0,
            in_car: false,
            hint: None,
            status_index: 0,
            last_update: String::new(),
        }
    }
}

impl TrackerState {
    /// Window-level key handling. `M` toggles the overlay; `Escape` closes it.
    /// Auto-repeat never toggles.
    pub fn on_key(&mut self, key: &str, repeat: bool) -> ChromeKey {
        match key.to_lowercase().as_str() {
            "m" => {
                if !repeat {
                    self.map_open = !self.map_open;
                }
                ChromeKey::Handled
            }
            "escape" if self.map_open => {
                self.map_open = false;
                ChromeKey::Handled
            }
            _ => ChromeKey::Ignored,
        }
    }

    pub fn toggle_map(&mut self) {
        self.map_open = !self.map_open;
    }

    pub fn close_map(&mut self) {
        self.map_open = false;
    }

    /// Focus a region by id; unknown ids are ignored.
    pub fn focus_region(&mut self, id: &str) {
        if let Some(region) = REGIONS.iter().find(|r| r.id == id) {
            self.focused_region = region.id;
        }
    }

    /// The region whose briefing is pinned, falling back to the first.
    #[must_use]
    pub fn active_region(&self) -> &'static Region {
        REGIONS.iter().find(|r| r.id == self.focused_region).unwrap_or(&REGIONS[0])
    }

    /// Pick the next status line from a uniform roll in `[0, 1)`.
    pub fn rotate_status(&mut self, roll: f64, stamp: String) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
        let index = (roll.clamp(0.0, 1.0) * STATUS_LINES.len() as f64) as usize;
        self.status_index = index.min(STATUS_LINES.len() - 1);
        self.last_update = stamp;
    }

    #[must_use]
    pub fn status_line(&self) -> &'static str {
        STATUS_LINES.get(self.status_index).copied().unwrap_or(STATUS_LINES[0])
    }

    #[must_use]
    pub fn cash_label(&self) -> String {
        format!("${}", self.money)
    }
}
