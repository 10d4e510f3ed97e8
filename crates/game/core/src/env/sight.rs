use glam::Vec3;

/// Raycast query against vision-blocking geometry.
pub trait ObstructionOracle {
    /// Distance to the first obstruction hit along `direction` from
    /// `origin`, or `None` if nothing is struck within `max_distance`.
    /// `direction` need not be normalized.
    fn first_hit(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<f32>;
}
