//! Input model: key bindings, held-key state, and the intents derived from it.
//!
//! The host passes raw `KeyboardEvent.key` strings through [`Key::from_browser`].
//! Held movement keys live in [`KeyState`]; the integrators never see keys
//! directly, only the [`MoveIntent`] or [`DriveIntent`] built from them.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// A bound key in the sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// `W`: walk forward or throttle.
    Forward,
    /// `S`: walk backward or reverse.
    Back,
    /// `A`: strafe left or steer left.
    Left,
    /// `D`: strafe right or steer right.
    Right,
    /// `Shift`: sprint.
    Sprint,
    /// `Space`: jump on foot, handbrake in the car.
    Jump,
    /// `E`: enter/exit the car or talk.
    Interact,
    /// `M`: toggle the map overlay.
    ToggleMap,
    /// `Escape`: close the map overlay.
    Escape,
}

impl Key {
    /// Map a browser `KeyboardEvent.key` value to a binding, case-insensitively.
    #[must_use]
    pub fn from_browser(key: &str) -> Option<Self> {
        match key.to_ascii_lowercase().as_str() {
            "w" => Some(Self::Forward),
            "s" => Some(Self::Back),
            "a" => Some(Self::Left),
            "d" => Some(Self::Right),
            "shift" => Some(Self::Sprint),
            " " => Some(Self::Jump),
            "e" => Some(Self::Interact),
            "m" => Some(Self::ToggleMap),
            "escape" => Some(Self::Escape),
            _ => None,
        }
    }

    /// Whether the key is tracked as held between keydown and keyup.
    #[must_use]
    pub fn is_held_control(self) -> bool {
        matches!(self, Self::Forward | Self::Back | Self::Left | Self::Right | Self::Sprint | Self::Jump)
    }
}

/// Which movement keys are currently held down.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    pub sprint: bool,
    pub jump: bool,
}

impl KeyState {
    /// Mark a key held. Non-movement keys are ignored.
    pub fn press(&mut self, key: Key) {
        self.set(key, true);
    }

    /// Mark a key released.
    pub fn release(&mut self, key: Key) {
        self.set(key, false);
    }

    /// Release everything, e.g. on window blur.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn is_held(&self, key: Key) -> bool {
        match key {
            Key::Forward => self.forward,
            Key::Back => self.back,
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Sprint => self.sprint,
            Key::Jump => self.jump,
            Key::Interact | Key::ToggleMap | Key::Escape => false,
        }
    }

    /// Whether no key is held.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }

    fn set(&mut self, key: Key, down: bool) {
        match key {
            Key::Forward => self.forward = down,
            Key::Back => self.back = down,
            Key::Left => self.left = down,
            Key::Right => self.right = down,
            Key::Sprint => self.sprint = down,
            Key::Jump => self.jump = down,
            Key::Interact | Key::ToggleMap | Key::Escape => {}
        }
    }

    /// On-foot intent: axes in {-1, 0, 1}.
    #[must_use]
    pub fn move_intent(&self) -> MoveIntent {
        MoveIntent {
            forward: axis(self.forward, self.back),
            right: axis(self.right, self.left),
            sprint: self.sprint,
            jump: self.jump,
        }
    }

    /// In-car intent: axes in {-1, 0, 1}.
    #[must_use]
    pub fn drive_intent(&self) -> DriveIntent {
        DriveIntent {
            throttle: axis(self.forward, self.back),
            steer: axis(self.right, self.left),
            handbrake: self.jump,
        }
    }
}

fn axis(positive: bool, negative: bool) -> f32 {
    f32::from(u8::from(positive)) - f32::from(u8::from(negative))
}

/// Desired on-foot motion for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MoveIntent {
    /// +1 forward, -1 backward.
    pub forward: f32,
    /// +1 right, -1 left.
    pub right: f32,
    pub sprint: bool,
    pub jump: bool,
}

impl MoveIntent {
    /// Whether any horizontal movement is requested.
    #[must_use]
    pub fn has_input(&self) -> bool {
        self.forward != 0.0 || self.right != 0.0
    }
}

/// Desired car controls for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DriveIntent {
    /// +1 accelerate forward, -1 reverse.
    pub throttle: f32,
    /// +1 steer right, -1 steer left.
    pub steer: f32,
    pub handbrake: bool,
}
