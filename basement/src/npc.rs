#[cfg(test)]
#[path = "npc_test.rs"]
mod npc_test;

use glam::Vec3;

use crate::consts::{NPC_ANCHOR, NPC_BOB_AMPLITUDE, NPC_BOB_RATE, NPC_REACH};

/// The basement NPC: stands at a fixed anchor, bobs while idle, and notices
/// when the player walks up.
#[derive(Debug, Clone, Copy)]
pub struct Npc {
    pub anchor: Vec3,
    /// Seconds of idle animation accumulated.
    pub phase: f32,
    /// Whether the player was within reach on the last step.
    pub near: bool,
}

impl Default for Npc {
    fn default() -> Self {
        Self { anchor: NPC_ANCHOR, phase: 0.0, near: false }
    }
}

impl Npc {
    /// Advance the idle animation and proximity tracking.
    ///
    /// Returns `true` on the frame the player comes within reach.
    pub fn step(&mut self, player_feet: Vec3, dt: f32) -> bool {
        self.phase += dt;
        let near = self.in_reach(player_feet);
        let approached = near && !self.near;
        self.near = near;
        approached
    }

    /// Whether `point` is close enough to talk.
    #[must_use]
    pub fn in_reach(&self, point: Vec3) -> bool {
        point.distance(self.anchor) < NPC_REACH
    }

    /// Current rendered position, including the idle bob.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.anchor + Vec3::Y * (self.phase * NPC_BOB_RATE).sin() * NPC_BOB_AMPLITUDE
    }
}
