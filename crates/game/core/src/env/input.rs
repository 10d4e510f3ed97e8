use glam::Vec2;

/// Read-only view of the player input device.
///
/// The device abstraction lives in the engine; by the time values arrive
/// here the crouch keys have been ORed together and the axis clamped to the
/// unit square. [`InputOracle::axis`] implementations must still normalize
/// vectors whose magnitude exceeds 1 to keep diagonals honest.
pub trait InputOracle {
    /// Raw 2D movement axis in `[-1, 1]^2`.
    fn axis(&self) -> Vec2;

    fn sprint(&self) -> bool;

    fn crouch(&self) -> bool;
}
