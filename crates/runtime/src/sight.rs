//! Line-of-sight blockers.
//!
//! [`StaticBlockers`] answers the behavior engine's sight-ray queries
//! against a set of sphere volumes. Spheres are a deliberately coarse
//! stand-in for level geometry; the containing host can swap in a real
//! physics query by implementing [`ObstructionOracle`] itself.

use glam::Vec3;

use game_core::ObstructionOracle;

/// One blocking volume.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereBlocker {
    pub center: Vec3,
    pub radius: f32,
}

impl SphereBlocker {
    /// Distance along the ray to the first intersection, if any.
    fn hit(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<f32> {
        let dir = direction.try_normalize()?;
        let to_center = self.center - origin;
        let along = to_center.dot(dir);
        if along < 0.0 {
            return None;
        }
        let closest_sq = to_center.length_squared() - along * along;
        let radius_sq = self.radius * self.radius;
        if closest_sq > radius_sq {
            return None;
        }
        let t = along - (radius_sq - closest_sq).sqrt();
        (t >= 0.0 && t <= max_distance).then_some(t)
    }
}

/// Immutable set of blocking volumes for one level.
#[derive(Clone, Debug, Default)]
pub struct StaticBlockers {
    spheres: Vec<SphereBlocker>,
}

impl StaticBlockers {
    pub fn new(spheres: Vec<SphereBlocker>) -> Self {
        Self { spheres }
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty()
    }
}

impl ObstructionOracle for StaticBlockers {
    fn first_hit(&self, origin: Vec3, direction: Vec3, max_distance: f32) -> Option<f32> {
        self.spheres
            .iter()
            .filter_map(|s| s.hit(origin, direction, max_distance))
            .min_by(|a, b| a.total_cmp(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn wall_at(z: f32) -> SphereBlocker {
        SphereBlocker {
            center: Vec3::Z * z,
            radius: 1.0,
        }
    }

    #[test]
    fn reports_nearest_hit() {
        let blockers = StaticBlockers::new(vec![wall_at(8.0), wall_at(4.0)]);
        let hit = blockers.first_hit(Vec3::ZERO, Vec3::Z, 20.0);
        assert_relative_eq!(hit.unwrap(), 3.0, epsilon = 1e-4);
    }

    #[test]
    fn ignores_hits_beyond_the_ray() {
        let blockers = StaticBlockers::new(vec![wall_at(10.0)]);
        assert_eq!(blockers.first_hit(Vec3::ZERO, Vec3::Z, 5.0), None);
    }

    #[test]
    fn ignores_spheres_behind_the_origin() {
        let blockers = StaticBlockers::new(vec![wall_at(-5.0)]);
        assert_eq!(blockers.first_hit(Vec3::ZERO, Vec3::Z, 20.0), None);
    }

    #[test]
    fn misses_to_the_side() {
        let blockers = StaticBlockers::new(vec![SphereBlocker {
            center: Vec3::new(5.0, 0.0, 5.0),
            radius: 1.0,
        }]);
        assert_eq!(blockers.first_hit(Vec3::ZERO, Vec3::Z, 20.0), None);
    }
}
