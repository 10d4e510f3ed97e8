//! Runtime orchestration for the stealth simulation.
//!
//! This crate wires the behavior engine from `game-core` to concrete
//! engine-side services and drives everything on a fixed tick. Consumers
//! embed [`World`], feed it input, and read presentation snapshots back out.
//!
//! Modules are organized by responsibility:
//! - [`world`] hosts the orchestrator and the per-agent service slots
//! - [`level`] loads a map's content and resolves spawners by name
//! - [`spawner`] instantiates agents from archetypes, with delay and respawn
//! - [`nav`], [`animator`], [`input`], [`camera`], [`sight`] implement the
//!   collaborator traits the behavior engine consumes
pub mod animator;
pub mod camera;
pub mod error;
pub mod input;
pub mod level;
pub mod logging;
pub mod nav;
pub mod sight;
pub mod spawner;
pub mod world;

pub use animator::AnimatorLog;
pub use camera::{CameraRig, FollowCamera};
pub use error::{Result, RuntimeError};
pub use input::FrameInput;
pub use level::Level;
pub use nav::KinematicNav;
pub use sight::{SphereBlocker, StaticBlockers};
pub use spawner::{EnemySpawner, PlayerSpawner};
pub use world::{World, WorldFrame};
