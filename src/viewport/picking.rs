//! World-point resolution for viewport clicks.

use glam::DVec3;

/// Distance along the ray used when neither the scene nor the ground is hit.
pub const FALLBACK_DISTANCE: f64 = 10.0;

/// Rays nearly parallel to the ground plane skip the plane test.
const GROUND_EPSILON: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: DVec3,
    /// Unit direction.
    pub dir: DVec3,
}

impl Ray {
    pub fn new(origin: DVec3, dir: DVec3) -> Self {
        Self {
            origin,
            dir: dir.normalize_or_zero(),
        }
    }

    pub fn at(&self, t: f64) -> DVec3 {
        self.origin + self.dir * t
    }
}

/// Scene geometry that can be hit by a ray.
pub trait SceneRaycast {
    /// Distance along `ray` to the nearest hit in front of the origin.
    fn raycast(&self, ray: &Ray) -> Option<f64>;
}

/// Scene hit, else the `y = 0` ground plane, else a point
/// [`FALLBACK_DISTANCE`] along the ray.
pub fn resolve_world_point(ray: &Ray, scene: Option<&dyn SceneRaycast>) -> DVec3 {
    if let Some(t) = scene.and_then(|s| s.raycast(ray)) {
        return ray.at(t);
    }
    if ray.dir.y.abs() > GROUND_EPSILON {
        let t = -ray.origin.y / ray.dir.y;
        if t > 0.0 {
            return ray.at(t);
        }
    }
    ray.at(FALLBACK_DISTANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Wall(f64);

    impl SceneRaycast for Wall {
        fn raycast(&self, ray: &Ray) -> Option<f64> {
            // Plane x = self.0
            if ray.dir.x.abs() < 1e-9 {
                return None;
            }
            let t = (self.0 - ray.origin.x) / ray.dir.x;
            (t > 0.0).then_some(t)
        }
    }

    #[test]
    fn scene_hit_wins() {
        let ray = Ray::new(DVec3::new(0.0, 5.0, 0.0), DVec3::new(1.0, -1.0, 0.0));
        let p = resolve_world_point(&ray, Some(&Wall(2.0)));
        assert!((p - DVec3::new(2.0, 3.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn falls_back_to_ground_plane() {
        let ray = Ray::new(DVec3::new(0.0, 5.0, 0.0), DVec3::new(1.0, -1.0, 0.0));
        let p = resolve_world_point(&ray, None);
        assert!((p - DVec3::new(5.0, 0.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn upward_ray_uses_fixed_distance() {
        let ray = Ray::new(DVec3::new(0.0, 5.0, 0.0), DVec3::Y);
        let p = resolve_world_point(&ray, None);
        assert!((p - DVec3::new(0.0, 15.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn horizontal_ray_uses_fixed_distance() {
        let ray = Ray::new(DVec3::new(0.0, 1.0, 0.0), DVec3::Z);
        let p = resolve_world_point(&ray, None);
        assert!((p - DVec3::new(0.0, 1.0, FALLBACK_DISTANCE)).length() < 1e-9);
    }
}
