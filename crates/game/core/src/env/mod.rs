//! Traits describing the engine services the behavior engine consumes.
//!
//! The engine proper (pathfinding, animation playback, input devices,
//! physics raycasts) lives outside this crate. Each service is a narrow
//! trait, and the [`Env`] aggregate bundles them so agent ticks can access
//! everything they need without hard coupling to concrete implementations.
//! Every slot is optional: a missing collaborator degrades to a safe
//! fallback at the call site and is never a fatal condition.
mod animator;
mod camera;
mod error;
mod input;
mod nav;
mod sight;
mod target;

pub use animator::{AnimState, AnimTrigger, AnimatorHandle};
pub use camera::CameraOracle;
pub use error::OracleError;
pub use input::InputOracle;
pub use nav::NavHandle;
pub use sight::ObstructionOracle;
pub use target::TargetOracle;

/// Aggregates the collaborator handles one agent tick may touch.
///
/// Sinks (navigation, animation) are held mutably; read-only oracles are
/// held by shared reference. Accessors return [`OracleError`] for missing
/// slots so call sites can fall back explicitly.
pub struct Env<'a, N, A, O, T, I, C>
where
    N: NavHandle + ?Sized,
    A: AnimatorHandle + ?Sized,
    O: ObstructionOracle + ?Sized,
    T: TargetOracle + ?Sized,
    I: InputOracle + ?Sized,
    C: CameraOracle + ?Sized,
{
    nav: Option<&'a mut N>,
    animator: Option<&'a mut A>,
    obstructions: Option<&'a O>,
    target: Option<&'a T>,
    input: Option<&'a I>,
    camera: Option<&'a C>,
}

/// The trait-object form used by agent tick functions.
pub type AgentEnv<'a> = Env<
    'a,
    dyn NavHandle + 'a,
    dyn AnimatorHandle + 'a,
    dyn ObstructionOracle + 'a,
    dyn TargetOracle + 'a,
    dyn InputOracle + 'a,
    dyn CameraOracle + 'a,
>;

impl<'a, N, A, O, T, I, C> Env<'a, N, A, O, T, I, C>
where
    N: NavHandle + ?Sized,
    A: AnimatorHandle + ?Sized,
    O: ObstructionOracle + ?Sized,
    T: TargetOracle + ?Sized,
    I: InputOracle + ?Sized,
    C: CameraOracle + ?Sized,
{
    pub fn new(
        nav: Option<&'a mut N>,
        animator: Option<&'a mut A>,
        obstructions: Option<&'a O>,
        target: Option<&'a T>,
        input: Option<&'a I>,
        camera: Option<&'a C>,
    ) -> Self {
        Self {
            nav,
            animator,
            obstructions,
            target,
            input,
            camera,
        }
    }

    pub fn empty() -> Self {
        Self {
            nav: None,
            animator: None,
            obstructions: None,
            target: None,
            input: None,
            camera: None,
        }
    }

    /// Returns the navigation handle, or an error if not attached.
    pub fn nav(&mut self) -> Result<&mut N, OracleError> {
        self.nav.as_deref_mut().ok_or(OracleError::NavNotAvailable)
    }

    /// Returns the animator handle, or an error if not attached.
    pub fn animator(&mut self) -> Result<&mut A, OracleError> {
        self.animator
            .as_deref_mut()
            .ok_or(OracleError::AnimatorNotAvailable)
    }

    /// Returns the obstruction (line-of-sight) oracle, or an error if not
    /// attached. Detection treats a missing oracle as "nothing blocks".
    pub fn obstructions(&self) -> Result<&'a O, OracleError> {
        self.obstructions
            .ok_or(OracleError::ObstructionsNotAvailable)
    }

    /// Returns the tracked-target oracle, or an error if not attached.
    pub fn target(&self) -> Result<&'a T, OracleError> {
        self.target.ok_or(OracleError::TargetNotAvailable)
    }

    /// Returns the input oracle, or an error if not attached.
    pub fn input(&self) -> Result<&'a I, OracleError> {
        self.input.ok_or(OracleError::InputNotAvailable)
    }

    /// Returns the camera oracle, or an error if not attached.
    pub fn camera(&self) -> Result<&'a C, OracleError> {
        self.camera.ok_or(OracleError::CameraNotAvailable)
    }
}
