//! End-to-end stealth scenarios driving a full [`World`].

use glam::{Vec2, Vec3};

use game_core::{Enemy, EnemyConfig, EnemyStateKind, PlayerConfig};
use runtime::{EnemySpawner, PlayerSpawner, SphereBlocker, StaticBlockers, World};

const DT: f32 = 0.1;

fn tick_until(world: &mut World, max_ticks: usize, mut done: impl FnMut(&World) -> bool) {
    for _ in 0..max_ticks {
        if done(world) {
            return;
        }
        world.tick(DT);
    }
    panic!("condition not reached within {max_ticks} ticks");
}

fn guard_at_origin(world: &mut World) -> game_core::AgentId {
    world.spawn_enemy(|id| Enemy::new(id, EnemyConfig::default(), Vec3::ZERO, Vec3::Z))
}

/// Patrol -> Alert -> Pursue -> Alert -> Patrol, driven purely through
/// input, perception, and time.
#[test]
fn full_alert_cycle() {
    runtime::logging::init("info");
    let mut world = World::new();
    // Camera trails behind the player, so pushing the stick forward walks
    // the player down -Z, toward the guard.
    world.spawn_player(
        &PlayerSpawner::new(PlayerConfig::default(), Vec3::Z * 20.0, -Vec3::Z)
            .with_follow_camera(Vec3::new(0.0, 5.0, 6.0)),
    );
    let guard = guard_at_origin(&mut world);

    assert_eq!(world.agent(guard).unwrap().state_kind(), EnemyStateKind::Patrol);

    // Walk into view; the guard notices before the meter is full.
    world.input_mut().axis = Vec2::new(0.0, 1.0);
    tick_until(&mut world, 300, |w| {
        w.agent(guard).unwrap().state_kind() == EnemyStateKind::Alert
    });
    let meter = world.agent(guard).unwrap().meter().level();
    assert!(meter > 0.0 && meter < 1.0);

    // Stop a few units away and stand in the open until confidence is full.
    tick_until(&mut world, 300, |w| w.player().unwrap().position().z <= 4.0);
    world.input_mut().clear();
    tick_until(&mut world, 300, |w| {
        w.agent(guard).unwrap().state_kind() == EnemyStateKind::Pursue
    });
    assert!(world.agent(guard).unwrap().meter().is_fully_alerted());

    // Eliminating the player removes the target; pursuit collapses back to
    // an investigation, which times out into patrol with a cleared meter.
    world.damage_player(1000.0).unwrap();
    world.tick(DT);
    assert_eq!(world.agent(guard).unwrap().state_kind(), EnemyStateKind::Alert);

    tick_until(&mut world, 300, |w| {
        w.agent(guard).unwrap().state_kind() == EnemyStateKind::Patrol
    });
    assert_eq!(world.agent(guard).unwrap().meter().level(), 0.0);
}

/// A wall between guard and player blocks the sight ray entirely.
#[test]
fn wall_blocks_line_of_sight() {
    let mut world = World::new();
    world.set_blockers(StaticBlockers::new(vec![SphereBlocker {
        center: Vec3::new(0.0, 1.25, 5.0),
        radius: 2.0,
    }]));
    world.spawn_player(&PlayerSpawner::new(
        PlayerConfig::default(),
        Vec3::Z * 9.0,
        -Vec3::Z,
    ));
    let guard = guard_at_origin(&mut world);

    for _ in 0..100 {
        world.tick(DT);
    }
    let enemy = world.agent(guard).unwrap();
    assert_eq!(enemy.state_kind(), EnemyStateKind::Patrol);
    assert_eq!(enemy.meter().level(), 0.0);
    assert!(!enemy.detector().sees_target());
}

/// Frames expose the state a HUD needs without touching live agents.
#[test]
fn frames_reflect_the_simulation() {
    let mut world = World::new();
    world.spawn_player(&PlayerSpawner::new(
        PlayerConfig::default(),
        Vec3::Z * 3.0,
        -Vec3::Z,
    ));
    world.add_spawner(EnemySpawner::new(EnemyConfig::default(), Vec3::ZERO, Vec3::Z));
    world.tick(DT);
    world.tick(DT);

    let frame = world.frame();
    assert_eq!(frame.agents.len(), 1);
    assert_eq!(frame.agents[0].state, EnemyStateKind::Alert);
    assert!(frame.agents[0].alert_level > 0.0);
    assert!(frame.agents[0].sees_target);
    assert_eq!(frame.player.unwrap().position, Vec3::Z * 3.0);
}
