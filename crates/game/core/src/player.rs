//! Player locomotion.
//!
//! The player is tick-driven like every other agent: input is sampled
//! through the [`InputOracle`], mapped into camera-relative world space, and
//! integrated with acceleration-limited speed changes. There is no physics
//! here; the runtime decides whether the resulting position is valid.

use glam::{Vec2, Vec3};
use tracing::debug;

use crate::config::GameConfig;
use crate::env::{AgentEnv, AnimState, AnimTrigger};
use crate::math;

/// Locomotion tuning for the player.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerConfig {
    pub max_health: f32,
    /// Walking speed in world units per second.
    pub move_speed: f32,
    /// Speed while sprinting.
    pub sprint_speed: f32,
    /// Speed while crouched. Crouch wins over sprint when both are held.
    pub crouch_speed: f32,
    /// Speed gained per second while below the target speed.
    pub acceleration: f32,
    /// Speed lost per second while above the target speed.
    pub deceleration: f32,
    /// Turn rate toward the movement direction, radians per second.
    pub rotation_speed: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            move_speed: 5.0,
            sprint_speed: 15.0,
            crouch_speed: 2.5,
            acceleration: 5.0,
            deceleration: 10.0,
            rotation_speed: 10.0,
        }
    }
}

/// Player locomotion state.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum PlayerState {
    #[default]
    Idle,
    Move,
    Dead,
}

/// The player agent.
pub struct Player {
    config: PlayerConfig,
    position: Vec3,
    forward: Vec3,
    speed: f32,
    crouched: bool,
    health: f32,
    state: PlayerState,
}

impl Player {
    pub fn new(config: PlayerConfig, position: Vec3, forward: Vec3) -> Self {
        Self {
            position,
            forward: math::flatten(forward).normalize_or_zero(),
            speed: 0.0,
            crouched: false,
            health: config.max_health,
            state: PlayerState::Idle,
            config,
        }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Current scalar speed along the movement direction.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_crouched(&self) -> bool {
        self.crouched
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_dead(&self) -> bool {
        self.state == PlayerState::Dead
    }

    /// Apply damage; dropping to zero enters the terminal Dead state on the
    /// next tick.
    pub fn take_damage(&mut self, amount: f32) {
        if self.is_dead() {
            return;
        }
        self.health = (self.health - amount).max(0.0);
        debug!(health = self.health, "player took damage");
    }

    /// Advance the player by one simulation tick.
    pub fn tick(&mut self, env: &mut AgentEnv<'_>, dt: f32) {
        if self.is_dead() {
            return;
        }
        if self.health <= 0.0 {
            self.state = PlayerState::Dead;
            debug!("player died");
            if let Ok(anim) = env.animator() {
                anim.set_state(AnimState::Dead);
                anim.set_speed(0.0);
                anim.fire_trigger(AnimTrigger::Death);
            }
            return;
        }

        let (axis, sprint, crouch) = match env.input() {
            Ok(input) => (input.axis(), input.sprint(), input.crouch()),
            // No input device attached: coast to a stop.
            Err(_) => (Vec2::ZERO, false, false),
        };
        let axis = Self::sanitize_axis(axis);
        self.crouched = crouch;

        let direction = self.world_direction(axis, env);
        let moving = direction.length_squared() > f32::EPSILON;

        let target_speed = if !moving {
            0.0
        } else if crouch {
            self.config.crouch_speed
        } else if sprint {
            self.config.sprint_speed
        } else {
            self.config.move_speed
        };
        let rate = if target_speed > self.speed {
            self.config.acceleration
        } else {
            self.config.deceleration
        };
        self.speed = math::move_toward(self.speed, target_speed, rate * dt);

        if moving {
            self.position += direction * self.speed * dt;
            self.forward =
                math::rotate_toward(self.forward, direction, self.config.rotation_speed * dt);
        }

        self.state = if moving { PlayerState::Move } else { PlayerState::Idle };

        if let Ok(anim) = env.animator() {
            anim.set_state(match self.state {
                PlayerState::Move => AnimState::Move,
                _ => AnimState::Idle,
            });
            anim.set_speed(self.speed);
            anim.set_crouched(self.crouched);
        }
    }

    /// Apply the dead zone and cap diagonal input at unit magnitude.
    fn sanitize_axis(axis: Vec2) -> Vec2 {
        if axis.length() < GameConfig::INPUT_DEADZONE {
            return Vec2::ZERO;
        }
        if axis.length_squared() > 1.0 {
            axis.normalize()
        } else {
            axis
        }
    }

    /// Map the input axis into a horizontal world-space direction relative
    /// to the camera, falling back to the world axes without one.
    fn world_direction(&self, axis: Vec2, env: &AgentEnv<'_>) -> Vec3 {
        if axis == Vec2::ZERO {
            return Vec3::ZERO;
        }
        let (forward, right) = match env.camera() {
            Ok(camera) => (
                math::flatten(camera.forward()).normalize_or_zero(),
                math::flatten(camera.right()).normalize_or_zero(),
            ),
            Err(_) => (Vec3::Z, Vec3::X),
        };
        math::flatten(forward * axis.y + right * axis.x).normalize_or_zero()
    }
}
