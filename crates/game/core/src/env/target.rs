use glam::Vec3;

/// Read-only locator for the single tracked target (the player).
pub trait TargetOracle {
    /// Current target position, or `None` when no target exists in the
    /// scene. Absence is indistinguishable from "not visible" downstream.
    fn target_position(&self) -> Option<Vec3>;
}
