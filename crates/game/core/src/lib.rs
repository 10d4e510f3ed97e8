//! Deterministic gameplay-AI logic shared across runtime and offline tools.
//!
//! `game-core` defines the behavior engine of the stealth game: the vision
//! detector, the alert meter, patrol routes, and the enemy and player state
//! machines. Everything is tick-driven with an explicit `dt` parameter, so
//! sequences of updates are deterministic and replayable in tests. Engine
//! services (navigation, animation playback, input devices, raycasts) are
//! consumed through the narrow collaborator traits in [`env`] and never
//! reimplemented here.
pub mod alert;
pub mod config;
pub mod detection;
pub mod enemy;
pub mod env;
pub mod math;
pub mod patrol;
pub mod player;
pub mod snapshot;
pub mod types;

pub use alert::{AlertMeter, AlertTuning};
pub use config::GameConfig;
pub use detection::{DetectionParams, Sighting, VisionDetector};
pub use enemy::{Enemy, EnemyConfig, EnemyState, EnemyStateKind};
pub use env::{
    AgentEnv, AnimState, AnimTrigger, AnimatorHandle, CameraOracle, Env, InputOracle, NavHandle,
    ObstructionOracle, OracleError, TargetOracle,
};
pub use patrol::{PatrolCursor, PatrolRoute, TraversalPolicy, Waypoint};
pub use player::{Player, PlayerConfig, PlayerState};
pub use snapshot::{AgentSnapshot, PlayerSnapshot};
pub use types::AgentId;
