use glam::Vec3;

/// Handle onto the engine's navigation agent for one character.
///
/// The behavior engine only issues destinations and speed intents; the
/// engine owns pathfinding and steering. Position updates flow back through
/// [`NavHandle::current_velocity`], which agent ticks integrate explicitly.
pub trait NavHandle {
    /// Replace the active destination request.
    fn set_destination(&mut self, point: Vec3);

    /// Halt all movement immediately.
    fn stop(&mut self);

    /// Resume movement toward the active destination.
    fn resume(&mut self);

    /// Set the steering speed in units per second.
    fn set_speed(&mut self, speed: f32);

    /// Velocity the agent is currently moving with.
    fn current_velocity(&self) -> Vec3;

    /// Whether the agent currently stands on the navigation mesh.
    fn is_on_navigable_surface(&self) -> bool;
}
