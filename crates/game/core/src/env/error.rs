/// Signals that an optional collaborator slot was not attached.
///
/// These are never fatal: the behavior engine absorbs them at the point of
/// detection and falls back to a safe default (hold position, treat the
/// target as unseen, skip the animation update).
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OracleError {
    #[error("navigation handle not available")]
    NavNotAvailable,

    #[error("animator handle not available")]
    AnimatorNotAvailable,

    #[error("obstruction oracle not available")]
    ObstructionsNotAvailable,

    #[error("tracked target not available")]
    TargetNotAvailable,

    #[error("input source not available")]
    InputNotAvailable,

    #[error("camera rig not available")]
    CameraNotAvailable,
}
