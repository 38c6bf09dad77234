#![allow(clippy::float_cmp)]

use super::*;

const DT: f32 = 1.0 / 60.0;

#[test]
fn default_npc_rests_at_anchor() {
    let npc = Npc::default();
    assert_eq!(npc.anchor, NPC_ANCHOR);
    assert_eq!(npc.position(), NPC_ANCHOR);
    assert!(!npc.near);
}

#[test]
fn bob_stays_within_amplitude() {
    let mut npc = Npc::default();
    let far = Vec3::new(50.0, 0.0, 50.0);
    for _ in 0..600 {
        npc.step(far, DT);
        let offset = npc.position().y - npc.anchor.y;
        assert!(offset.abs() <= NPC_BOB_AMPLITUDE + 1e-6);
    }
}

#[test]
fn bob_is_sinusoidal_in_phase() {
    let npc = Npc { phase: std::f32::consts::FRAC_PI_4, ..Npc::default() };
    let offset = npc.position().y - npc.anchor.y;
    assert!((offset - NPC_BOB_AMPLITUDE).abs() < 1e-6);
}

#[test]
fn approach_fires_once_per_visit() {
    let mut npc = Npc::default();
    let close = NPC_ANCHOR + Vec3::new(1.0, 0.4, 0.0);
    let far = NPC_ANCHOR + Vec3::new(10.0, 0.0, 0.0);

    assert!(!npc.step(far, DT));
    assert!(npc.step(close, DT));
    assert!(!npc.step(close, DT));
    assert!(!npc.step(far, DT));
    assert!(npc.step(close, DT));
}

#[test]
fn reach_boundary_is_exclusive() {
    let npc = Npc::default();
    assert!(!npc.in_reach(NPC_ANCHOR + Vec3::new(NPC_REACH, 0.0, 0.0)));
    assert!(npc.in_reach(NPC_ANCHOR + Vec3::new(NPC_REACH - 0.01, 0.0, 0.0)));
}
