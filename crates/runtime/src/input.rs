//! Per-frame input state.
//!
//! The host samples its input devices and writes the result here once per
//! frame; the behavior engine reads it through [`InputOracle`].

use glam::Vec2;

use game_core::InputOracle;

#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    pub axis: Vec2,
    pub sprint: bool,
    /// Crouch intent; the host ORs both of its crouch bindings before
    /// writing this.
    pub crouch: bool,
}

impl FrameInput {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl InputOracle for FrameInput {
    fn axis(&self) -> Vec2 {
        self.axis
    }

    fn sprint(&self) -> bool {
        self.sprint
    }

    fn crouch(&self) -> bool {
        self.crouch
    }
}
