//! Animation sink.
//!
//! [`AnimatorLog`] records the behavior engine's animation intents so a
//! renderer (or a test) can read back what should be playing. Clip
//! completion is approximated with fixed clip lengths advanced by the world
//! clock.

use game_core::{AnimState, AnimTrigger, AnimatorHandle};

const ATTACK_CLIP_SECONDS: f32 = 0.8;
const DEATH_CLIP_SECONDS: f32 = 2.0;

#[derive(Clone, Debug, Default)]
pub struct AnimatorLog {
    state: AnimState,
    speed: f32,
    crouched: bool,
    triggers: Vec<AnimTrigger>,
    attack_remaining: f32,
    death_remaining: f32,
}

impl AnimatorLog {
    pub fn state(&self) -> AnimState {
        self.state
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_crouched(&self) -> bool {
        self.crouched
    }

    /// All triggers fired since construction, in order.
    pub fn triggers(&self) -> &[AnimTrigger] {
        &self.triggers
    }

    /// Advance clip playback by one tick.
    pub fn advance(&mut self, dt: f32) {
        self.attack_remaining = (self.attack_remaining - dt).max(0.0);
        self.death_remaining = (self.death_remaining - dt).max(0.0);
    }
}

impl AnimatorHandle for AnimatorLog {
    fn set_state(&mut self, state: AnimState) {
        self.state = state;
    }

    fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    fn set_crouched(&mut self, crouched: bool) {
        self.crouched = crouched;
    }

    fn fire_trigger(&mut self, trigger: AnimTrigger) {
        match trigger {
            AnimTrigger::Attack => self.attack_remaining = ATTACK_CLIP_SECONDS,
            AnimTrigger::Death => self.death_remaining = DEATH_CLIP_SECONDS,
            AnimTrigger::LookAround => {}
        }
        self.triggers.push(trigger);
    }

    fn is_attack_finished(&self) -> bool {
        self.attack_remaining <= 0.0
    }

    fn is_death_finished(&self) -> bool {
        self.death_remaining <= 0.0
    }
}
