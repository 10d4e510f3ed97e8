use glam::Vec3;

/// Read-only view of the active camera's orientation.
///
/// Player locomotion maps the raw input axis onto these basis vectors so
/// "up" on the stick always means "away from the camera".
pub trait CameraOracle {
    fn forward(&self) -> Vec3;

    fn right(&self) -> Vec3;
}
