//! Agent spawners.
//!
//! A spawner owns a spawn point plus the template needed to build its agent
//! and tracks at most one live instance. Enemy spawners support an initial
//! delay and optional respawn after the previous instance is despawned; the
//! world drives them once per tick.

use std::sync::Arc;

use countdown_timer::Timer;
use glam::Vec3;

use game_core::{AgentId, Enemy, EnemyConfig, PatrolRoute, Player, PlayerConfig};

use crate::camera::FollowCamera;

/// Spawn point for one enemy.
#[derive(Clone, Debug)]
pub struct EnemySpawner {
    archetype: EnemyConfig,
    position: Vec3,
    forward: Vec3,
    route: Option<Arc<PatrolRoute>>,
    spawn_delay: f32,
    respawn: bool,
    delay: Timer,
    waiting: bool,
    spawned_once: bool,
    live: Option<AgentId>,
}

impl EnemySpawner {
    pub fn new(archetype: EnemyConfig, position: Vec3, forward: Vec3) -> Self {
        Self {
            archetype,
            position,
            forward,
            route: None,
            spawn_delay: 0.0,
            respawn: false,
            delay: Timer::new(0.0),
            waiting: false,
            spawned_once: false,
            live: None,
        }
    }

    /// Route handed to every instance this spawner builds.
    pub fn with_route(mut self, route: Arc<PatrolRoute>) -> Self {
        self.route = Some(route);
        self
    }

    /// Seconds to wait before the first spawn and before each respawn.
    pub fn with_delay(mut self, seconds: f32) -> Self {
        self.spawn_delay = seconds.max(0.0);
        self
    }

    /// Spawn a replacement after the live instance is despawned.
    pub fn with_respawn(mut self) -> Self {
        self.respawn = true;
        self
    }

    /// Id of the live instance, if one exists.
    pub fn live(&self) -> Option<AgentId> {
        self.live
    }

    /// Advance the spawn delay; true when a new instance should be built
    /// this tick.
    pub(crate) fn wants_spawn(&mut self, dt: f32) -> bool {
        if self.live.is_some() || (self.spawned_once && !self.respawn) {
            return false;
        }
        if !self.waiting {
            self.waiting = true;
            self.delay.start_with(self.spawn_delay);
        }
        self.delay.tick(dt);
        if self.delay.is_finished() {
            self.waiting = false;
            return true;
        }
        false
    }

    /// Build a fresh instance at the spawn point.
    pub(crate) fn build(&self, id: AgentId) -> Enemy {
        let mut enemy = Enemy::new(id, self.archetype, self.position, self.forward);
        enemy.set_route(self.route.clone());
        enemy
    }

    pub(crate) fn mark_spawned(&mut self, id: AgentId) {
        self.live = Some(id);
        self.spawned_once = true;
    }

    pub(crate) fn mark_despawned(&mut self, id: AgentId) {
        if self.live == Some(id) {
            self.live = None;
        }
    }
}

/// Spawn point for the player, plus the follow-camera rig to attach.
#[derive(Clone, Copy, Debug)]
pub struct PlayerSpawner {
    config: PlayerConfig,
    position: Vec3,
    forward: Vec3,
    camera_offset: Option<Vec3>,
}

impl PlayerSpawner {
    pub fn new(config: PlayerConfig, position: Vec3, forward: Vec3) -> Self {
        Self {
            config,
            position,
            forward,
            camera_offset: None,
        }
    }

    /// Attach a follow camera at this offset when the player spawns.
    pub fn with_follow_camera(mut self, offset: Vec3) -> Self {
        self.camera_offset = Some(offset);
        self
    }

    pub(crate) fn build(&self) -> (Player, Option<FollowCamera>) {
        let player = Player::new(self.config, self.position, self.forward);
        let camera = self.camera_offset.map(|offset| {
            let mut rig = FollowCamera::new(offset);
            rig.follow(self.position);
            rig
        });
        (player, camera)
    }
}
