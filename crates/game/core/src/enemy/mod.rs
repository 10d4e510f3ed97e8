//! Enemy agent: perception, alert accumulation, and the behavior state
//! machine.
//!
//! Each simulation tick runs three stages in a fixed order: the detector
//! re-evaluates visibility, the alert meter integrates the detector's
//! output, and the state machine decides whether to hold or transition and
//! emits navigation/animation intents. Entry and exit side effects are
//! state-local; exiting a state unconditionally halts motion.

mod state;

pub use state::{EnemyState, EnemyStateKind};

use std::sync::Arc;

use countdown_timer::Timer;
use glam::Vec3;
use tracing::{debug, warn};

use crate::alert::{AlertMeter, AlertTuning};
use crate::config::GameConfig;
use crate::detection::{DetectionParams, Sighting, VisionDetector};
use crate::env::{AgentEnv, AnimState, AnimTrigger};
use crate::math;
use crate::patrol::{PatrolCursor, PatrolRoute};
use crate::types::AgentId;

/// Per-archetype tuning for one enemy.
///
/// Each behavior state installs its own detection cone on entry; Patrol is
/// the "normal" cone, Alert trades range for width, Pursue is widest.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyConfig {
    pub max_health: f32,
    pub patrol_speed: f32,
    pub alert_speed: f32,
    pub pursue_speed: f32,
    /// Height above the feet that vision originates from.
    pub view_height: f32,
    pub patrol_detection: DetectionParams,
    pub alert_detection: DetectionParams,
    pub pursue_detection: DetectionParams,
    /// Seconds spent looking around at an investigation point before giving
    /// up and returning to patrol.
    pub investigation_duration: f32,
    pub alert_tuning: AlertTuning,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            patrol_speed: 2.0,
            alert_speed: 3.0,
            pursue_speed: 5.0,
            view_height: 1.5,
            patrol_detection: DetectionParams {
                range: 10.0,
                fov_degrees: 90.0,
            },
            alert_detection: DetectionParams {
                range: 8.0,
                fov_degrees: 120.0,
            },
            pursue_detection: DetectionParams {
                range: 14.0,
                fov_degrees: 150.0,
            },
            investigation_duration: 3.0,
            alert_tuning: AlertTuning::default(),
        }
    }
}

/// One enemy instance.
///
/// Owns exactly one detector, one alert meter, an optional shared patrol
/// route ("no route" is a valid resting configuration), and its behavior
/// state. Created by the spawner at full health; never destroys itself.
pub struct Enemy {
    id: AgentId,
    config: EnemyConfig,
    position: Vec3,
    forward: Vec3,
    health: f32,
    detector: VisionDetector,
    meter: AlertMeter,
    route: Option<Arc<PatrolRoute>>,
    state: EnemyState,
}

impl Enemy {
    pub fn new(id: AgentId, config: EnemyConfig, position: Vec3, forward: Vec3) -> Self {
        let detector = VisionDetector::new(config.patrol_detection, config.view_height);
        let meter = AlertMeter::new(config.alert_tuning);
        Self {
            id,
            position,
            forward: math::flatten(forward).normalize_or_zero(),
            health: config.max_health,
            detector,
            meter,
            route: None,
            state: EnemyState::Patrol {
                cursor: PatrolCursor::default(),
                wait_timer: Timer::new(0.0),
                waiting: false,
            },
            config,
        }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn config(&self) -> &EnemyConfig {
        &self.config
    }

    pub fn state(&self) -> &EnemyState {
        &self.state
    }

    pub fn state_kind(&self) -> EnemyStateKind {
        self.state.kind()
    }

    pub fn is_dead(&self) -> bool {
        self.state.is_dead()
    }

    pub fn detector(&self) -> &VisionDetector {
        &self.detector
    }

    pub fn meter(&self) -> &AlertMeter {
        &self.meter
    }

    pub fn meter_mut(&mut self) -> &mut AlertMeter {
        &mut self.meter
    }

    pub fn route(&self) -> Option<&PatrolRoute> {
        self.route.as_deref()
    }

    /// Assign (or clear) the patrol route. The spawner calls this after
    /// construction; an active patrol restarts from the first waypoint.
    pub fn set_route(&mut self, route: Option<Arc<PatrolRoute>>) {
        self.route = route;
        if let EnemyState::Patrol {
            cursor,
            wait_timer,
            waiting,
        } = &mut self.state
        {
            *cursor = PatrolCursor::default();
            *waiting = false;
            wait_timer.stop();
        }
    }

    /// Apply damage. Crossing zero makes the next tick enter the terminal
    /// Dead state; the spawner owns destruction and respawn.
    pub fn take_damage(&mut self, amount: f32) {
        if self.state.is_dead() {
            return;
        }
        self.health = (self.health - amount).max(0.0);
        debug!(agent = %self.id, health = self.health, "took damage");
    }

    /// Advance the agent by one simulation tick.
    ///
    /// Stage order is fixed: detector, then meter, then state step. The
    /// meter consumes the detector's just-computed output and the state
    /// machine consumes the meter's just-computed confidence.
    pub fn tick(&mut self, env: &mut AgentEnv<'_>, dt: f32) {
        if self.state.is_dead() {
            return;
        }
        if self.health <= 0.0 {
            self.change_state(EnemyStateKind::Dead, env);
            return;
        }

        let target = env.target().ok().and_then(|t| t.target_position());
        let sighting = self.detector.evaluate(
            self.position,
            self.forward,
            target,
            env.obstructions().ok(),
        );
        self.meter
            .tick(sighting.visible, sighting.distance, self.detector.range(), dt);

        if let Some(next) = self.step(&sighting, target, env, dt) {
            self.change_state(next, env);
        }

        self.integrate(env, dt);
    }

    /// Run the active state for one tick; returns a requested transition.
    fn step(
        &mut self,
        sighting: &Sighting,
        target: Option<Vec3>,
        env: &mut AgentEnv<'_>,
        dt: f32,
    ) -> Option<EnemyStateKind> {
        match &mut self.state {
            EnemyState::Patrol {
                cursor,
                wait_timer,
                waiting,
            } => {
                // Sighting alone is not enough: the meter must have started
                // filling, which rules out zero-length glimpses.
                if sighting.visible && self.meter.level() > 0.0 {
                    return Some(EnemyStateKind::Alert);
                }

                let Some(route) = self.route.as_deref() else {
                    // No route: stand and watch.
                    if let Ok(anim) = env.animator() {
                        anim.set_speed(0.0);
                    }
                    return None;
                };
                let Some(node) = route.waypoint(cursor.index) else {
                    return None;
                };

                if *waiting {
                    wait_timer.tick(dt);
                    if let Ok(anim) = env.animator() {
                        anim.set_speed(0.0);
                    }
                    if wait_timer.is_finished() {
                        *waiting = false;
                        route.advance(cursor);
                    }
                    return None;
                }

                let remaining = math::flatten(node.position - self.position).length();
                if remaining < GameConfig::WAYPOINT_RADIUS {
                    *waiting = true;
                    wait_timer.start_with(node.wait_duration);
                    if node.look_around {
                        if let Ok(anim) = env.animator() {
                            anim.fire_trigger(AnimTrigger::LookAround);
                        }
                    }
                    if let Ok(nav) = env.nav() {
                        nav.stop();
                    }
                } else {
                    if let Ok(nav) = env.nav() {
                        nav.resume();
                        nav.set_speed(self.config.patrol_speed);
                        nav.set_destination(node.position);
                    }
                    if let Ok(anim) = env.animator() {
                        anim.set_speed(self.config.patrol_speed);
                    }
                }
                None
            }

            EnemyState::Alert {
                investigation_point,
                investigation_timer,
                investigating,
            } => {
                // A full meter wins over timeout and investigation logic,
                // checked every tick.
                if self.meter.is_fully_alerted() {
                    return Some(EnemyStateKind::Pursue);
                }

                // Reacquisition: restart the investigation only when the
                // target has materially moved from the stored point.
                if sighting.visible {
                    if let Some(seen) = self.detector.last_known_position() {
                        let moved = investigation_point.map_or(true, |p| {
                            p.distance(seen) > GameConfig::INVESTIGATION_MOVE_THRESHOLD
                        });
                        if moved {
                            *investigation_point = Some(seen);
                            *investigating = false;
                            investigation_timer.stop();
                        }
                    }
                }

                if *investigating {
                    investigation_timer.tick(dt);
                    if let Ok(anim) = env.animator() {
                        anim.set_speed(0.0);
                    }
                    if investigation_timer.is_finished() {
                        return Some(EnemyStateKind::Patrol);
                    }
                    return None;
                }

                let reached = investigation_point.map_or(true, |p| {
                    math::flatten(p - self.position).length() < GameConfig::WAYPOINT_RADIUS
                });
                if reached {
                    *investigating = true;
                    investigation_timer.start_with(self.config.investigation_duration);
                    if let Ok(nav) = env.nav() {
                        nav.stop();
                    }
                    if let Ok(anim) = env.animator() {
                        anim.set_speed(0.0);
                    }
                } else if let Some(point) = *investigation_point {
                    if let Ok(nav) = env.nav() {
                        nav.resume();
                        nav.set_speed(self.config.alert_speed);
                        nav.set_destination(point);
                    }
                    if let Ok(anim) = env.animator() {
                        anim.set_speed(self.config.alert_speed);
                    }
                }
                None
            }

            EnemyState::Pursue => {
                // Losing the target drops straight back to Alert, no grace
                // timer.
                if !sighting.visible {
                    return Some(EnemyStateKind::Alert);
                }
                // Chase the live position, re-issued every tick.
                if let Some(point) = target {
                    if let Ok(nav) = env.nav() {
                        nav.set_destination(point);
                    }
                }
                if let Ok(anim) = env.animator() {
                    anim.set_speed(self.config.pursue_speed);
                }
                None
            }

            EnemyState::Dead => None,
        }
    }

    /// Perform a transition: exit side effects, meter bookkeeping, working
    /// data for the new state, then entry side effects.
    fn change_state(&mut self, next: EnemyStateKind, env: &mut AgentEnv<'_>) {
        let from = self.state.kind();
        if from == next {
            return;
        }

        // Exit unconditionally halts motion, regardless of why we left.
        if let Ok(nav) = env.nav() {
            nav.stop();
        }
        if let Ok(anim) = env.animator() {
            anim.set_speed(0.0);
        }

        // Giving up an investigation is the only transition that clears the
        // meter; entering Pursue must keep it full.
        if from == EnemyStateKind::Alert && next == EnemyStateKind::Patrol {
            self.meter.reset();
        }

        debug!(agent = %self.id, %from, to = %next, "behavior transition");

        self.state = match next {
            EnemyStateKind::Patrol => EnemyState::Patrol {
                cursor: PatrolCursor::default(),
                wait_timer: Timer::new(0.0),
                waiting: false,
            },
            EnemyStateKind::Alert => EnemyState::Alert {
                investigation_point: self.detector.last_known_position(),
                investigation_timer: Timer::new(self.config.investigation_duration),
                investigating: false,
            },
            EnemyStateKind::Pursue => EnemyState::Pursue,
            EnemyStateKind::Dead => EnemyState::Dead,
        };

        match next {
            EnemyStateKind::Patrol => {
                self.detector.set_parameters(self.config.patrol_detection);
                if let Ok(anim) = env.animator() {
                    anim.set_state(AnimState::Idle);
                }
                if self.route.as_deref().is_none_or(PatrolRoute::is_empty) {
                    warn!(agent = %self.id, "no patrol route assigned; holding position");
                }
            }
            EnemyStateKind::Alert => {
                self.detector.set_parameters(self.config.alert_detection);
                if let Ok(anim) = env.animator() {
                    anim.set_state(AnimState::Alert);
                }
                if let EnemyState::Alert {
                    investigation_point: Some(point),
                    ..
                } = &self.state
                {
                    if let Ok(nav) = env.nav() {
                        nav.resume();
                        nav.set_speed(self.config.alert_speed);
                        nav.set_destination(*point);
                    }
                }
            }
            EnemyStateKind::Pursue => {
                self.detector.set_parameters(self.config.pursue_detection);
                if let Ok(anim) = env.animator() {
                    anim.set_state(AnimState::Pursue);
                    anim.set_speed(self.config.pursue_speed);
                }
                if let Ok(nav) = env.nav() {
                    nav.resume();
                    nav.set_speed(self.config.pursue_speed);
                    if let Some(point) = self.detector.last_known_position() {
                        nav.set_destination(point);
                    }
                }
            }
            EnemyStateKind::Dead => {
                if let Ok(anim) = env.animator() {
                    anim.set_state(AnimState::Dead);
                    anim.fire_trigger(AnimTrigger::Death);
                }
                if let Ok(nav) = env.nav() {
                    nav.stop();
                }
            }
        }
    }

    /// Apply the navigation collaborator's velocity for this tick and turn
    /// toward the direction of travel. No handle means no movement.
    fn integrate(&mut self, env: &mut AgentEnv<'_>, dt: f32) {
        let Ok(nav) = env.nav() else {
            return;
        };
        let velocity = nav.current_velocity();
        if velocity.length_squared() <= f32::EPSILON {
            return;
        }
        self.position += velocity * dt;
        self.forward =
            math::rotate_toward(self.forward, velocity, GameConfig::FACING_TURN_RATE * dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{AnimatorHandle, NavHandle, TargetOracle};
    use crate::patrol::{TraversalPolicy, Waypoint};

    #[derive(Default)]
    struct TestNav {
        destination: Option<Vec3>,
        speed: f32,
        stopped: bool,
        velocity: Vec3,
    }

    impl NavHandle for TestNav {
        fn set_destination(&mut self, point: Vec3) {
            self.destination = Some(point);
        }
        fn stop(&mut self) {
            self.stopped = true;
            self.velocity = Vec3::ZERO;
        }
        fn resume(&mut self) {
            self.stopped = false;
        }
        fn set_speed(&mut self, speed: f32) {
            self.speed = speed;
        }
        fn current_velocity(&self) -> Vec3 {
            if self.stopped { Vec3::ZERO } else { self.velocity }
        }
        fn is_on_navigable_surface(&self) -> bool {
            true
        }
    }

    #[derive(Default)]
    struct TestAnimator {
        state: Option<AnimState>,
        speed: f32,
        triggers: Vec<AnimTrigger>,
    }

    impl AnimatorHandle for TestAnimator {
        fn set_state(&mut self, state: AnimState) {
            self.state = Some(state);
        }
        fn set_speed(&mut self, speed: f32) {
            self.speed = speed;
        }
        fn set_crouched(&mut self, _crouched: bool) {}
        fn fire_trigger(&mut self, trigger: AnimTrigger) {
            self.triggers.push(trigger);
        }
        fn is_attack_finished(&self) -> bool {
            true
        }
        fn is_death_finished(&self) -> bool {
            true
        }
    }

    struct StaticTarget(Option<Vec3>);

    impl TargetOracle for StaticTarget {
        fn target_position(&self) -> Option<Vec3> {
            self.0
        }
    }

    fn enemy() -> Enemy {
        Enemy::new(AgentId(1), EnemyConfig::default(), Vec3::ZERO, Vec3::Z)
    }

    fn tick(enemy: &mut Enemy, nav: &mut TestNav, anim: &mut TestAnimator, target: Option<Vec3>, dt: f32) {
        let target = StaticTarget(target);
        let mut env = AgentEnv::new(
            Some(nav as &mut dyn NavHandle),
            Some(anim as &mut dyn AnimatorHandle),
            None,
            Some(&target as &dyn TargetOracle),
            None,
            None,
        );
        enemy.tick(&mut env, dt);
    }

    // Directly ahead, well inside the default 10-unit/90-degree cone.
    const SEEN: Vec3 = Vec3::new(0.0, 0.0, 4.0);

    #[test]
    fn patrol_to_alert_needs_meter_above_zero() {
        let mut e = enemy();
        let (mut nav, mut anim) = (TestNav::default(), TestAnimator::default());

        // Zero-length glimpse: visible but the meter stays at exactly 0.
        tick(&mut e, &mut nav, &mut anim, Some(SEEN), 0.0);
        assert_eq!(e.state_kind(), EnemyStateKind::Patrol);

        tick(&mut e, &mut nav, &mut anim, Some(SEEN), 0.1);
        assert_eq!(e.state_kind(), EnemyStateKind::Alert);
    }

    #[test]
    fn alert_entry_installs_wider_cone() {
        let mut e = enemy();
        let (mut nav, mut anim) = (TestNav::default(), TestAnimator::default());
        tick(&mut e, &mut nav, &mut anim, Some(SEEN), 0.1);
        assert_eq!(e.state_kind(), EnemyStateKind::Alert);
        assert_eq!(e.detector().range(), e.config().alert_detection.range);
        assert_eq!(
            e.detector().fov_degrees(),
            e.config().alert_detection.fov_degrees
        );
        assert_eq!(anim.state, Some(AnimState::Alert));
    }

    #[test]
    fn alert_to_pursue_the_tick_the_meter_fills() {
        let mut e = enemy();
        let (mut nav, mut anim) = (TestNav::default(), TestAnimator::default());
        tick(&mut e, &mut nav, &mut anim, Some(SEEN), 0.1);
        assert_eq!(e.state_kind(), EnemyStateKind::Alert);

        e.meter_mut().set_level(0.999);
        tick(&mut e, &mut nav, &mut anim, Some(SEEN), 1.0);
        assert_eq!(e.state_kind(), EnemyStateKind::Pursue);
        // Entering Pursue leaves the meter untouched.
        assert!(e.meter().is_fully_alerted());
    }

    #[test]
    fn pursue_reissues_live_destination_every_tick() {
        let mut e = enemy();
        let (mut nav, mut anim) = (TestNav::default(), TestAnimator::default());
        tick(&mut e, &mut nav, &mut anim, Some(SEEN), 0.1);
        e.meter_mut().set_level(1.0);
        tick(&mut e, &mut nav, &mut anim, Some(SEEN), 0.1);
        assert_eq!(e.state_kind(), EnemyStateKind::Pursue);

        let moved = Vec3::new(1.0, 0.0, 5.0);
        tick(&mut e, &mut nav, &mut anim, Some(moved), 0.1);
        assert_eq!(nav.destination, Some(moved));
        assert_eq!(nav.speed, e.config().pursue_speed);
    }

    #[test]
    fn pursue_drops_to_alert_immediately_when_sight_lost() {
        let mut e = enemy();
        let (mut nav, mut anim) = (TestNav::default(), TestAnimator::default());
        tick(&mut e, &mut nav, &mut anim, Some(SEEN), 0.1);
        e.meter_mut().set_level(1.0);
        tick(&mut e, &mut nav, &mut anim, Some(SEEN), 0.1);
        assert_eq!(e.state_kind(), EnemyStateKind::Pursue);

        tick(&mut e, &mut nav, &mut anim, None, 0.1);
        assert_eq!(e.state_kind(), EnemyStateKind::Alert);
    }

    #[test]
    fn alert_times_out_back_to_patrol_and_resets_meter() {
        let mut e = enemy();
        let (mut nav, mut anim) = (TestNav::default(), TestAnimator::default());
        tick(&mut e, &mut nav, &mut anim, Some(SEEN), 0.1);
        assert_eq!(e.state_kind(), EnemyStateKind::Alert);

        // Walk to the investigation point, then wait out the timer with the
        // target gone.
        nav.velocity = Vec3::Z * 4.0;
        tick(&mut e, &mut nav, &mut anim, None, 1.0);
        for _ in 0..40 {
            tick(&mut e, &mut nav, &mut anim, None, 0.1);
        }
        assert_eq!(e.state_kind(), EnemyStateKind::Patrol);
        assert_eq!(e.meter().level(), 0.0);
        assert_eq!(e.detector().range(), e.config().patrol_detection.range);
    }

    #[test]
    fn reacquisition_restarts_investigation_only_on_material_move() {
        let mut e = enemy();
        let (mut nav, mut anim) = (TestNav::default(), TestAnimator::default());
        tick(&mut e, &mut nav, &mut anim, Some(SEEN), 0.1);
        assert_eq!(e.state_kind(), EnemyStateKind::Alert);

        // A wiggle below the threshold keeps the stored point.
        let wiggle = SEEN + Vec3::new(0.3, 0.0, 0.0);
        tick(&mut e, &mut nav, &mut anim, Some(wiggle), 0.1);
        assert_eq!(nav.destination, Some(SEEN));

        // A material move replaces it.
        let moved = SEEN + Vec3::new(2.0, 0.0, 0.0);
        tick(&mut e, &mut nav, &mut anim, Some(moved), 0.1);
        assert_eq!(nav.destination, Some(moved));
    }

    #[test]
    fn patrol_without_route_holds_position() {
        let mut e = enemy();
        let (mut nav, mut anim) = (TestNav::default(), TestAnimator::default());
        for _ in 0..10 {
            tick(&mut e, &mut nav, &mut anim, None, 0.1);
        }
        assert_eq!(e.state_kind(), EnemyStateKind::Patrol);
        assert_eq!(e.position(), Vec3::ZERO);
        assert_eq!(nav.destination, None);
    }

    #[test]
    fn patrol_waits_then_advances_to_next_waypoint() {
        let mut e = enemy();
        let first = Waypoint {
            position: Vec3::new(0.0, 0.0, 0.2),
            wait_duration: 1.0,
            look_around: true,
        };
        let second = Waypoint::at(Vec3::new(6.0, 0.0, 0.0));
        let route = Arc::new(PatrolRoute::new(
            vec![first, second],
            TraversalPolicy::Loop,
        ));
        e.set_route(Some(route));

        let (mut nav, mut anim) = (TestNav::default(), TestAnimator::default());
        // Already within the waypoint radius: start waiting, honor the
        // look-around flag.
        tick(&mut e, &mut nav, &mut anim, None, 0.1);
        assert!(nav.stopped);
        assert!(anim.triggers.contains(&AnimTrigger::LookAround));

        // Wait out the timer, then head for the next waypoint.
        for _ in 0..12 {
            tick(&mut e, &mut nav, &mut anim, None, 0.1);
        }
        assert_eq!(nav.destination, Some(second.position));
        assert_eq!(nav.speed, e.config().patrol_speed);
    }

    #[test]
    fn death_is_terminal_and_triggers_once() {
        let mut e = enemy();
        let (mut nav, mut anim) = (TestNav::default(), TestAnimator::default());
        e.take_damage(150.0);
        tick(&mut e, &mut nav, &mut anim, Some(SEEN), 0.1);
        assert_eq!(e.state_kind(), EnemyStateKind::Dead);
        assert!(nav.stopped);
        assert_eq!(anim.triggers, vec![AnimTrigger::Death]);

        // Further ticks and damage are inert.
        tick(&mut e, &mut nav, &mut anim, Some(SEEN), 0.1);
        e.take_damage(10.0);
        assert_eq!(e.state_kind(), EnemyStateKind::Dead);
        assert_eq!(anim.triggers, vec![AnimTrigger::Death]);
        assert_eq!(e.health(), 0.0);
    }

    #[test]
    fn missing_collaborators_never_panic() {
        let mut e = enemy();
        let mut env = AgentEnv::empty();
        for _ in 0..5 {
            e.tick(&mut env, 0.1);
        }
        assert_eq!(e.state_kind(), EnemyStateKind::Patrol);
    }
}
