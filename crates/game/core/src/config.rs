/// Tuning constants shared across the behavior engine.
///
/// Per-archetype numbers (speeds, detection cones, alert tuning) live in
/// [`crate::enemy::EnemyConfig`] and [`crate::player::PlayerConfig`] and are
/// usually loaded from data files; the constants here are structural knobs
/// that every agent shares.
pub struct GameConfig;

impl GameConfig {
    /// Radius within which a navigation destination counts as reached.
    pub const WAYPOINT_RADIUS: f32 = 0.5;

    /// Minimum displacement of a reacquired target from the stored
    /// investigation point before the investigation restarts.
    pub const INVESTIGATION_MOVE_THRESHOLD: f32 = 0.5;

    /// Input axis magnitude below which the player counts as not moving.
    pub const INPUT_DEADZONE: f32 = 0.1;

    /// Height above the target's feet that line-of-sight rays aim for.
    pub const TARGET_AIM_HEIGHT: f32 = 1.0;

    /// Angular rate (radians per second) at which agents turn toward their
    /// direction of travel.
    pub const FACING_TURN_RATE: f32 = 5.0;
}
