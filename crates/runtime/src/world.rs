//! The world orchestrator.
//!
//! [`World`] owns every live agent together with the concrete services
//! backing its collaborator traits, and advances the whole simulation one
//! fixed tick at a time. Tick order is deliberate: the player moves first,
//! the camera re-aims, then each enemy perceives the already-updated player
//! position. Finished corpses are despawned and spawners run last, so a new
//! instance never ticks on the frame it appears.

use glam::Vec3;
use tracing::info;

use game_core::{
    AgentEnv, AgentId, AgentSnapshot, AnimatorHandle, CameraOracle, Enemy, InputOracle, NavHandle,
    ObstructionOracle, Player, PlayerSnapshot, TargetOracle,
};

use crate::animator::AnimatorLog;
use crate::camera::CameraRig;
use crate::error::{Result, RuntimeError};
use crate::input::FrameInput;
use crate::nav::KinematicNav;
use crate::sight::StaticBlockers;
use crate::spawner::{EnemySpawner, PlayerSpawner};

/// Presentation output of one tick.
#[derive(Clone, Debug, Default)]
pub struct WorldFrame {
    pub player: Option<PlayerSnapshot>,
    pub agents: Vec<AgentSnapshot>,
}

/// The tracked player is the enemies' target while alive; a dead player
/// vanishes from every detector.
struct PlayerTarget(Option<Vec3>);

impl TargetOracle for PlayerTarget {
    fn target_position(&self) -> Option<Vec3> {
        self.0
    }
}

struct AgentSlot {
    enemy: Enemy,
    nav: KinematicNav,
    animator: AnimatorLog,
}

struct PlayerSlot {
    player: Player,
    animator: AnimatorLog,
}

#[derive(Default)]
pub struct World {
    player: Option<PlayerSlot>,
    agents: Vec<AgentSlot>,
    spawners: Vec<EnemySpawner>,
    input: FrameInput,
    camera: CameraRig,
    blockers: StaticBlockers,
    next_id: u32,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the level's line-of-sight blockers.
    pub fn set_blockers(&mut self, blockers: StaticBlockers) {
        self.blockers = blockers;
    }

    pub fn set_camera(&mut self, camera: CameraRig) {
        self.camera = camera;
    }

    /// Input state consumed by the next tick; the host writes here once per
    /// frame.
    pub fn input_mut(&mut self) -> &mut FrameInput {
        &mut self.input
    }

    /// Spawn the player, replacing any previous one, and attach the
    /// spawner's follow camera if it carries one.
    pub fn spawn_player(&mut self, spawner: &PlayerSpawner) {
        let (player, camera) = spawner.build();
        info!(position = ?player.position(), "player spawned");
        if let Some(rig) = camera {
            self.camera = CameraRig::Follow(rig);
        }
        self.player = Some(PlayerSlot {
            player,
            animator: AnimatorLog::default(),
        });
    }

    /// Register an enemy spawner; its first instance appears after the
    /// configured delay.
    pub fn add_spawner(&mut self, spawner: EnemySpawner) {
        self.spawners.push(spawner);
    }

    /// Spawn an enemy directly, bypassing any spawner.
    pub fn spawn_enemy(&mut self, enemy_for: impl FnOnce(AgentId) -> Enemy) -> AgentId {
        let id = self.alloc_id();
        let enemy = enemy_for(id);
        self.insert(enemy);
        id
    }

    pub fn player(&self) -> Option<&Player> {
        self.player.as_ref().map(|slot| &slot.player)
    }

    pub fn agent(&self, id: AgentId) -> Option<&Enemy> {
        self.agents
            .iter()
            .find(|slot| slot.enemy.id() == id)
            .map(|slot| &slot.enemy)
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn damage_enemy(&mut self, id: AgentId, amount: f32) -> Result<()> {
        let slot = self
            .agents
            .iter_mut()
            .find(|slot| slot.enemy.id() == id)
            .ok_or(RuntimeError::UnknownAgent(id))?;
        slot.enemy.take_damage(amount);
        Ok(())
    }

    pub fn damage_player(&mut self, amount: f32) -> Result<()> {
        let slot = self.player.as_mut().ok_or(RuntimeError::PlayerNotSpawned)?;
        slot.player.take_damage(amount);
        Ok(())
    }

    /// Advance the whole world by one fixed tick.
    pub fn tick(&mut self, dt: f32) {
        if let Some(PlayerSlot { player, animator }) = self.player.as_mut() {
            animator.advance(dt);
            let mut env = AgentEnv::new(
                None,
                Some(animator as &mut dyn AnimatorHandle),
                None,
                None,
                Some(&self.input as &dyn InputOracle),
                Some(&self.camera as &dyn CameraOracle),
            );
            player.tick(&mut env, dt);
            if let CameraRig::Follow(rig) = &mut self.camera {
                rig.follow(player.position());
            }
        }

        let target = PlayerTarget(
            self.player
                .as_ref()
                .filter(|slot| !slot.player.is_dead())
                .map(|slot| slot.player.position()),
        );
        for slot in &mut self.agents {
            slot.nav.sync(slot.enemy.position(), dt);
            slot.animator.advance(dt);
            let mut env = AgentEnv::new(
                Some(&mut slot.nav as &mut dyn NavHandle),
                Some(&mut slot.animator as &mut dyn AnimatorHandle),
                Some(&self.blockers as &dyn ObstructionOracle),
                Some(&target as &dyn TargetOracle),
                None,
                None,
            );
            slot.enemy.tick(&mut env, dt);
        }

        self.despawn_finished();
        self.run_spawners(dt);
    }

    /// Presentation view of the current world state.
    pub fn frame(&self) -> WorldFrame {
        WorldFrame {
            player: self
                .player
                .as_ref()
                .map(|slot| PlayerSnapshot::of(&slot.player)),
            agents: self
                .agents
                .iter()
                .map(|slot| AgentSnapshot::of(&slot.enemy))
                .collect(),
        }
    }

    fn alloc_id(&mut self) -> AgentId {
        let id = AgentId(self.next_id);
        self.next_id += 1;
        id
    }

    fn insert(&mut self, enemy: Enemy) {
        info!(agent = %enemy.id(), position = ?enemy.position(), "enemy spawned");
        let nav = KinematicNav::new(enemy.position());
        self.agents.push(AgentSlot {
            enemy,
            nav,
            animator: AnimatorLog::default(),
        });
    }

    /// Remove corpses whose death animation has played out.
    fn despawn_finished(&mut self) {
        let mut removed = Vec::new();
        self.agents.retain(|slot| {
            let done = slot.enemy.is_dead() && slot.animator.is_death_finished();
            if done {
                removed.push(slot.enemy.id());
            }
            !done
        });
        for id in removed {
            info!(agent = %id, "enemy despawned");
            for spawner in &mut self.spawners {
                spawner.mark_despawned(id);
            }
        }
    }

    fn run_spawners(&mut self, dt: f32) {
        let due: Vec<usize> = self
            .spawners
            .iter_mut()
            .enumerate()
            .filter_map(|(i, spawner)| spawner.wants_spawn(dt).then_some(i))
            .collect();
        for index in due {
            let id = self.alloc_id();
            let enemy = self.spawners[index].build(id);
            self.spawners[index].mark_spawned(id);
            self.insert(enemy);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{EnemyConfig, EnemyStateKind, PlayerConfig};

    fn immediate_spawner() -> EnemySpawner {
        EnemySpawner::new(EnemyConfig::default(), Vec3::X * 3.0, Vec3::Z)
    }

    #[test]
    fn spawner_delay_defers_the_first_instance() {
        let mut world = World::new();
        world.add_spawner(immediate_spawner().with_delay(1.0));
        world.tick(0.5);
        assert_eq!(world.agent_count(), 0);
        world.tick(0.6);
        assert_eq!(world.agent_count(), 1);
    }

    #[test]
    fn respawn_replaces_a_finished_corpse() {
        let mut world = World::new();
        world.add_spawner(immediate_spawner().with_respawn());
        world.tick(0.1);
        let first = world.frame().agents[0].id;

        world.damage_enemy(first, 1000.0).unwrap();
        // One tick to enter Dead, then enough for the death clip to finish.
        for _ in 0..30 {
            world.tick(0.1);
        }
        let frame = world.frame();
        assert_eq!(frame.agents.len(), 1);
        assert_ne!(frame.agents[0].id, first);
    }

    #[test]
    fn one_shot_spawner_never_refills() {
        let mut world = World::new();
        world.add_spawner(immediate_spawner());
        world.tick(0.1);
        let id = world.frame().agents[0].id;
        world.damage_enemy(id, 1000.0).unwrap();
        for _ in 0..50 {
            world.tick(0.1);
        }
        assert_eq!(world.agent_count(), 0);
    }

    #[test]
    fn dead_player_disappears_from_detectors() {
        let mut world = World::new();
        world.spawn_player(&PlayerSpawner::new(
            PlayerConfig::default(),
            Vec3::Z * 3.0,
            Vec3::Z,
        ));
        let id = world.spawn_enemy(|id| {
            Enemy::new(id, EnemyConfig::default(), Vec3::ZERO, Vec3::Z)
        });

        world.tick(0.1);
        assert_eq!(world.agent(id).unwrap().state_kind(), EnemyStateKind::Alert);

        world.damage_player(1000.0).unwrap();
        world.tick(0.1);
        // The dead player is no longer a target, so the meter only decays.
        let before = world.agent(id).unwrap().meter().level();
        world.tick(0.1);
        assert!(world.agent(id).unwrap().meter().level() < before);
    }

    #[test]
    fn damage_unknown_agent_is_an_error() {
        let mut world = World::new();
        assert!(matches!(
            world.damage_enemy(AgentId(42), 1.0),
            Err(RuntimeError::UnknownAgent(_))
        ));
        assert!(matches!(
            world.damage_player(1.0),
            Err(RuntimeError::PlayerNotSpawned)
        ));
    }
}
