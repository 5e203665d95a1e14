use crate::GizmoDraw;
use geom3::{vec3, Color, Plane, Vec3};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Which plane query to overlay on top of the plane itself.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    #[default]
    None,
    IsInFront,
    ProjectPoint,
    ProjectVector,
}

/// The tweakable inputs: three anchor points, a query point and the overlay to show.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct VisualizerParams {
    pub p1: Vec3,
    pub p2: Vec3,
    pub p3: Vec3,
    pub point: Vec3,
    pub operation: Operation,
}

impl Default for VisualizerParams {
    fn default() -> Self {
        Self {
            p1: Vec3::ZERO,
            p2: Vec3::X,
            p3: Vec3::Y,
            point: vec3(0.5, 0.5, 1.0),
            operation: Operation::None,
        }
    }
}

const VEC_THICKNESS: f32 = 5.0;
const SPHERE_RADIUS: f32 = 0.1;

/// Emits gizmo orders for a plane built from three points and a query against it.
pub struct PlaneVisualizer {
    pub params: VisualizerParams,
}

impl PlaneVisualizer {
    pub fn new(params: VisualizerParams) -> Self {
        Self { params }
    }

    pub fn draw(&self, gizmos: &mut GizmoDraw) {
        let VisualizerParams { p1, p2, p3, .. } = self.params;

        draw_base(gizmos);

        let Some(plane) = Plane::try_from_points(p1, p2, p3) else {
            log::warn!("degenerate plane from {:?} {:?} {:?}, drawing base only", p1, p2, p3);
            return;
        };

        // painter's ordering: whatever is behind the plane gets drawn first
        if plane.is_in_front(self.params.point) {
            self.draw_plane(&plane, gizmos);
            self.draw_operation(&plane, gizmos);
        } else {
            self.draw_operation(&plane, gizmos);
            self.draw_plane(&plane, gizmos);
        }
    }

    fn draw_operation(&self, plane: &Plane, gizmos: &mut GizmoDraw) {
        match self.params.operation {
            Operation::IsInFront => self.draw_is_in_front(plane, gizmos),
            Operation::ProjectVector => self.draw_project_vector(plane, gizmos),
            Operation::ProjectPoint => self.draw_project_point(plane, gizmos),
            Operation::None => {}
        }
    }

    fn draw_is_in_front(&self, plane: &Plane, gizmos: &mut GizmoDraw) {
        let col = if plane.is_in_front(self.params.point) {
            Color::RED
        } else {
            Color::GREEN
        };
        gizmos.sphere(self.params.point, SPHERE_RADIUS).color(col);
    }

    fn draw_project_vector(&self, plane: &Plane, gizmos: &mut GizmoDraw) {
        let VisualizerParams { p1, point, .. } = self.params;

        gizmos.vector(p1, point, VEC_THICKNESS).color(Color::CYAN);

        let projected = plane.project_vector(point);
        gizmos.vector(p1, projected, VEC_THICKNESS).color(Color::BLUE);

        let residual = projected - point;
        gizmos
            .vector(p1 + point, residual, SPHERE_RADIUS)
            .color(Color::CYAN);
    }

    fn draw_project_point(&self, plane: &Plane, gizmos: &mut GizmoDraw) {
        let point = self.params.point;

        gizmos.sphere(point, SPHERE_RADIUS).color(Color::CYAN);

        let projected = plane.project_point(point);
        gizmos
            .vector_at_origin(projected, VEC_THICKNESS * 0.5)
            .color(Color::BLUE);
        gizmos.sphere(projected, SPHERE_RADIUS).color(Color::BLUE);

        let residual = projected - point;
        gizmos.vector(point, residual, 0.1).color(Color::CYAN);
    }

    fn draw_plane(&self, plane: &Plane, gizmos: &mut GizmoDraw) {
        let VisualizerParams { p1, p2, p3, .. } = self.params;

        let offset_vec = plane.o * plane.n;
        gizmos.vector_at_origin(offset_vec, 0.1).color(Color::WHITE);

        let size = *[(p2 - p1).mag(), (p3 - p1).mag()]
            .iter()
            .max_by_key(|&&m| OrderedFloat(m))
            .unwrap_or(&1.0);
        gizmos.quad(plane.p, plane.n, size * 2.0).color(Color::WHITE);

        gizmos.vector(p1, plane.n, VEC_THICKNESS).color(Color::MAGENTA);

        gizmos.sphere(p1, SPHERE_RADIUS).color(Color::BLACK);
        gizmos.sphere(p2, SPHERE_RADIUS).color(Color::BLACK);
        gizmos.sphere(p3, SPHERE_RADIUS).color(Color::BLACK);
    }
}

fn draw_base(gizmos: &mut GizmoDraw) {
    gizmos
        .vector_at_origin(Vec3::X, VEC_THICKNESS)
        .color(Color::RED);
    gizmos
        .vector_at_origin(Vec3::Y, VEC_THICKNESS)
        .color(Color::GREEN);
    gizmos
        .vector_at_origin(Vec3::Z, VEC_THICKNESS)
        .color(Color::BLUE);
}
