//! Camera rigs backing the [`CameraOracle`].
//!
//! Player movement is camera-relative, so the world always carries a rig.
//! A fixed rig gives a constant basis; a follow rig trails a target at an
//! offset and is re-aimed by the world after every player tick.

use glam::Vec3;

use game_core::CameraOracle;

/// Follow rig: sits at `target + offset` and looks at the target.
#[derive(Clone, Copy, Debug)]
pub struct FollowCamera {
    offset: Vec3,
    position: Vec3,
    target: Vec3,
}

impl FollowCamera {
    pub fn new(offset: Vec3) -> Self {
        Self {
            offset,
            position: offset,
            target: Vec3::ZERO,
        }
    }

    /// Re-aim at a new target position.
    pub fn follow(&mut self, target: Vec3) {
        self.target = target;
        self.position = target + self.offset;
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}

impl CameraOracle for FollowCamera {
    fn forward(&self) -> Vec3 {
        let flat = Vec3::new(
            self.target.x - self.position.x,
            0.0,
            self.target.z - self.position.z,
        );
        // A top-down offset has no horizontal component; default to +Z.
        flat.try_normalize().unwrap_or(Vec3::Z)
    }

    fn right(&self) -> Vec3 {
        Vec3::Y.cross(self.forward())
    }
}

/// The world's active camera.
#[derive(Clone, Copy, Debug)]
pub enum CameraRig {
    /// Constant basis, used before a player exists or for overhead views.
    Fixed { forward: Vec3 },
    Follow(FollowCamera),
}

impl CameraRig {
    pub fn fixed_looking(forward: Vec3) -> Self {
        Self::Fixed {
            forward: Vec3::new(forward.x, 0.0, forward.z)
                .try_normalize()
                .unwrap_or(Vec3::Z),
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::fixed_looking(Vec3::Z)
    }
}

impl CameraOracle for CameraRig {
    fn forward(&self) -> Vec3 {
        match self {
            Self::Fixed { forward } => *forward,
            Self::Follow(rig) => rig.forward(),
        }
    }

    fn right(&self) -> Vec3 {
        match self {
            Self::Fixed { forward } => Vec3::Y.cross(*forward),
            Self::Follow(rig) => rig.right(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn follow_rig_trails_its_target() {
        let mut rig = FollowCamera::new(Vec3::new(0.0, 5.0, -6.0));
        rig.follow(Vec3::new(10.0, 0.0, 10.0));
        assert_eq!(rig.position(), Vec3::new(10.0, 5.0, 4.0));
        assert_relative_eq!(rig.forward().z, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn top_down_offset_defaults_forward() {
        let mut rig = FollowCamera::new(Vec3::Y * 8.0);
        rig.follow(Vec3::X);
        assert_eq!(rig.forward(), Vec3::Z);
    }

    #[test]
    fn fixed_rig_basis_is_orthogonal() {
        let rig = CameraRig::fixed_looking(Vec3::new(1.0, 0.3, 0.0));
        assert_relative_eq!(rig.forward().dot(rig.right()), 0.0, epsilon = 1e-5);
        assert_eq!(rig.forward().y, 0.0);
    }
}
