//! A small static scene of boxes to measure against.

use egui::{Color32, Painter, Rect, Stroke};
use glam::DVec3;

use super::camera::OrbitCamera;
use super::picking::{Ray, SceneRaycast};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec3,
    pub max: DVec3,
}

impl Aabb {
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Slab test; returns the entry distance, or the exit distance when the
    /// origin is inside the box.
    pub fn intersect(&self, ray: &Ray) -> Option<f64> {
        let (origin, dir) = (ray.origin.to_array(), ray.dir.to_array());
        let (min, max) = (self.min.to_array(), self.max.to_array());
        let mut t_near = f64::NEG_INFINITY;
        let mut t_far = f64::INFINITY;
        for axis in 0..3 {
            if dir[axis] == 0.0 {
                // Parallel to this slab: inside it everywhere or nowhere.
                if origin[axis] < min[axis] || origin[axis] > max[axis] {
                    return None;
                }
                continue;
            }
            let t1 = (min[axis] - origin[axis]) / dir[axis];
            let t2 = (max[axis] - origin[axis]) / dir[axis];
            t_near = t_near.max(t1.min(t2));
            t_far = t_far.min(t1.max(t2));
        }
        if t_far < 0.0 || t_near > t_far || !t_far.is_finite() {
            return None;
        }
        Some(if t_near >= 0.0 { t_near } else { t_far })
    }

    fn corners(&self) -> [DVec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            DVec3::new(a.x, a.y, a.z),
            DVec3::new(b.x, a.y, a.z),
            DVec3::new(b.x, a.y, b.z),
            DVec3::new(a.x, a.y, b.z),
            DVec3::new(a.x, b.y, a.z),
            DVec3::new(b.x, b.y, a.z),
            DVec3::new(b.x, b.y, b.z),
            DVec3::new(a.x, b.y, b.z),
        ]
    }
}

#[rustfmt::skip]
const BOX_EDGES: [(usize, usize); 12] = [
    (0, 1), (1, 2), (2, 3), (3, 0),
    (4, 5), (5, 6), (6, 7), (7, 4),
    (0, 4), (1, 5), (2, 6), (3, 7),
];

#[derive(Debug, Clone)]
pub struct DemoScene {
    pub boxes: Vec<Aabb>,
    pub grid_half_extent: i32,
}

impl Default for DemoScene {
    fn default() -> Self {
        Self {
            boxes: vec![
                Aabb::new(DVec3::new(-3.0, 0.0, -1.0), DVec3::new(-1.0, 2.0, 1.0)),
                Aabb::new(DVec3::new(1.5, 0.0, -2.5), DVec3::new(3.5, 1.0, -0.5)),
                Aabb::new(DVec3::new(0.5, 0.0, 1.5), DVec3::new(1.5, 3.0, 2.5)),
            ],
            grid_half_extent: 10,
        }
    }
}

impl SceneRaycast for DemoScene {
    fn raycast(&self, ray: &Ray) -> Option<f64> {
        self.boxes
            .iter()
            .filter_map(|b| b.intersect(ray))
            .min_by(|a, b| a.total_cmp(b))
    }
}

impl DemoScene {
    pub fn draw(&self, painter: &Painter, camera: &OrbitCamera, rect: Rect) {
        let grid = Stroke::new(1.0, Color32::from_gray(60));
        let n = self.grid_half_extent as f64;
        for i in -self.grid_half_extent..=self.grid_half_extent {
            let k = i as f64;
            segment(painter, camera, rect, DVec3::new(k, 0.0, -n), DVec3::new(k, 0.0, n), grid);
            segment(painter, camera, rect, DVec3::new(-n, 0.0, k), DVec3::new(n, 0.0, k), grid);
        }
        // Axis lines
        segment(painter, camera, rect, DVec3::ZERO, DVec3::X * n, Stroke::new(1.5, Color32::from_rgb(160, 60, 60)));
        segment(painter, camera, rect, DVec3::ZERO, DVec3::Z * n, Stroke::new(1.5, Color32::from_rgb(60, 60, 160)));

        let edge = Stroke::new(1.5, Color32::from_gray(170));
        for b in &self.boxes {
            let c = b.corners();
            for (i, j) in BOX_EDGES {
                segment(painter, camera, rect, c[i], c[j], edge);
            }
        }
    }
}

fn segment(painter: &Painter, camera: &OrbitCamera, rect: Rect, a: DVec3, b: DVec3, stroke: Stroke) {
    if let (Some(pa), Some(pb)) = (camera.project(a, rect), camera.project(b, rect)) {
        painter.line_segment([pa, pb], stroke);
    }
}
