//! Interact-key resolution and the contextual hint shown above the controls.
//!
//! Both answer the same question ("what would E do right now?") so they share
//! one priority order: the car first, then the NPC.

#[cfg(test)]
#[path = "interact_test.rs"]
mod interact_test;

use glam::Vec3;

use crate::consts::VEHICLE_REACH;
use crate::npc::Npc;

/// What the interact key does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    EnterVehicle,
    ExitVehicle,
    TalkToNpc,
}

/// Contextual prompt for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    Paused,
    ExitVehicle,
    EnterVehicle,
    Talk,
}

impl Hint {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Paused => "Map open \u{b7} input paused",
            Self::ExitVehicle => "Press E to exit car",
            Self::EnterVehicle => "Press E to enter car",
            Self::Talk => "Press E to talk",
        }
    }
}

/// Resolve a press of the interact key.
///
/// `player` is the player's feet (or seat point while driving).
#[must_use]
pub fn resolve(player: Vec3, in_car: bool, vehicle: Vec3, npc: &Npc) -> Option<Interaction> {
    if in_car {
        return Some(Interaction::ExitVehicle);
    }
    if player.distance(vehicle) < VEHICLE_REACH {
        return Some(Interaction::EnterVehicle);
    }
    if npc.in_reach(player) {
        return Some(Interaction::TalkToNpc);
    }
    None
}

/// The hint to show for the current state.
#[must_use]
pub fn hint(paused: bool, player: Vec3, in_car: bool, vehicle: Vec3, npc: &Npc) -> Option<Hint> {
    if paused {
        return Some(Hint::Paused);
    }
    resolve(player, in_car, vehicle, npc).map(|action| match action {
        Interaction::ExitVehicle => Hint::ExitVehicle,
        Interaction::EnterVehicle => Hint::EnterVehicle,
        Interaction::TalkToNpc => Hint::Talk,
    })
}
