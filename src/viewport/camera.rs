//! Orbit camera with perspective projection and screen-to-ray conversion.

use egui::{Pos2, Rect, Vec2};
use glam::DVec3;

use super::picking::Ray;

const NEAR: f64 = 0.01;
const MIN_DISTANCE: f64 = 1.0;
const MAX_DISTANCE: f64 = 200.0;
const PITCH_LIMIT: f64 = 1.5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub target: DVec3,
    pub distance: f64,
    pub yaw: f64,
    pub pitch: f64,
    /// Vertical field of view in radians.
    pub fovy: f64,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            target: DVec3::ZERO,
            distance: 14.0,
            yaw: 0.7,
            pitch: 0.45,
            fovy: 45f64.to_radians(),
        }
    }
}

impl OrbitCamera {
    pub fn eye(&self) -> DVec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + DVec3::new(cp * sy, sp, cp * cy) * self.distance
    }

    /// Forward, right and up unit vectors.
    pub fn basis(&self) -> (DVec3, DVec3, DVec3) {
        let forward = (self.target - self.eye()).normalize_or_zero();
        let right = forward.cross(DVec3::Y).normalize_or_zero();
        let up = right.cross(forward);
        (forward, right, up)
    }

    pub fn orbit(&mut self, drag: Vec2) {
        self.yaw -= drag.x as f64 * 0.01;
        self.pitch = (self.pitch + drag.y as f64 * 0.01).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    pub fn zoom(&mut self, scroll: f32) {
        let factor = 1.0 - scroll as f64 * 0.002;
        self.distance = (self.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    fn half_extents(&self, rect: Rect) -> (f64, f64) {
        let aspect = if rect.height() > 1.0 {
            (rect.width() / rect.height()) as f64
        } else {
            1.0
        };
        let half_h = (0.5 * self.fovy).tan();
        (half_h * aspect, half_h)
    }

    /// Project a world point into `rect`; `None` when it lies behind the camera.
    pub fn project(&self, p: DVec3, rect: Rect) -> Option<Pos2> {
        let (forward, right, up) = self.basis();
        let d = p - self.eye();
        let z = d.dot(forward);
        if z < NEAR {
            return None;
        }
        let (half_w, half_h) = self.half_extents(rect);
        let x_ndc = d.dot(right) / (z * half_w);
        let y_ndc = d.dot(up) / (z * half_h);
        Some(Pos2::new(
            rect.center().x + (x_ndc as f32) * rect.width() * 0.5,
            rect.center().y - (y_ndc as f32) * rect.height() * 0.5,
        ))
    }

    /// Screen points per world unit at the depth of `p`.
    pub fn pixels_per_unit(&self, p: DVec3, rect: Rect) -> Option<f32> {
        let (forward, _, _) = self.basis();
        let z = (p - self.eye()).dot(forward);
        if z < NEAR {
            return None;
        }
        let (_, half_h) = self.half_extents(rect);
        Some((rect.height() as f64 * 0.5 / (z * half_h)) as f32)
    }

    /// Ray through a screen position inside `rect`.
    pub fn ray(&self, pos: Pos2, rect: Rect) -> Option<Ray> {
        if rect.width() <= 1.0 || rect.height() <= 1.0 {
            return None;
        }
        let x_ndc = ((pos.x - rect.min.x) / rect.width() * 2.0 - 1.0) as f64;
        let y_ndc = (1.0 - (pos.y - rect.min.y) / rect.height() * 2.0) as f64;
        let (forward, right, up) = self.basis();
        let (half_w, half_h) = self.half_extents(rect);
        let dir = forward + right * (x_ndc * half_w) + up * (y_ndc * half_h);
        Some(Ray::new(self.eye(), dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> Rect {
        Rect::from_min_size(Pos2::ZERO, Vec2::new(800.0, 600.0))
    }

    #[test]
    fn target_projects_to_center() {
        let cam = OrbitCamera::default();
        let p = cam.project(cam.target, rect()).unwrap();
        assert!((p.x - 400.0).abs() < 1e-3);
        assert!((p.y - 300.0).abs() < 1e-3);
    }

    #[test]
    fn ray_through_projection_hits_point() {
        let cam = OrbitCamera::default();
        let world = DVec3::new(1.5, 0.5, -2.0);
        let screen = cam.project(world, rect()).unwrap();
        let ray = cam.ray(screen, rect()).unwrap();
        let t = (world - ray.origin).dot(ray.dir);
        assert!((ray.at(t) - world).length() < 1e-3);
    }

    #[test]
    fn points_behind_camera_are_culled() {
        let cam = OrbitCamera::default();
        let behind = cam.eye() + (cam.eye() - cam.target);
        assert!(cam.project(behind, rect()).is_none());
    }

    #[test]
    fn degenerate_viewport_has_no_ray() {
        let cam = OrbitCamera::default();
        let tiny = Rect::from_min_size(Pos2::ZERO, Vec2::new(1.0, 1.0));
        assert!(cam.ray(Pos2::ZERO, tiny).is_none());
    }
}
