use super::*;

#[test]
fn car_is_louder_than_walking() {
    assert!(target_volume(true) > target_volume(false));
    assert!((target_volume(true) - 0.08).abs() < f32::EPSILON);
    assert!((target_volume(false) - 0.05).abs() < f32::EPSILON);
}

#[test]
fn second_voice_is_an_octave_up() {
    assert!((VOICES[1].0 - VOICES[0].0 * 2.0).abs() < f32::EPSILON);
}
