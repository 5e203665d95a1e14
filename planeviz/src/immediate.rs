use geom3::{LinearColor, Vec3};

/// Shapes a renderer knows how to draw. Pure data, no backend here.
#[derive(Clone, Debug)]
pub enum GizmoKind {
    Sphere {
        pos: Vec3,
        radius: f32,
    },
    Vector {
        from: Vec3,
        dir: Vec3,
        thickness: f32,
    },
    Quad {
        center: Vec3,
        normal: Vec3,
        /// Full edge length of the square.
        size: f32,
    },
}

#[derive(Clone, Debug)]
pub struct GizmoOrder {
    pub kind: GizmoKind,
    pub color: LinearColor,
}

/// Immediate-mode gizmo buffer: filled each frame, drained by whoever renders.
/// Orders are drawn in push order, so painter's ordering is up to the producer.
#[derive(Default)]
pub struct GizmoDraw {
    pub orders: Vec<GizmoOrder>,
}

pub struct GizmoBuilder<'a> {
    draw: &'a mut GizmoDraw,
    order: GizmoOrder,
}

impl<'a> GizmoBuilder<'a> {
    pub fn color(&mut self, col: impl Into<LinearColor>) -> &mut Self {
        self.order.color = col.into();
        self
    }
}

impl<'a> Drop for GizmoBuilder<'a> {
    fn drop(&mut self) {
        let order = std::mem::replace(
            &mut self.order,
            GizmoOrder {
                kind: GizmoKind::Sphere {
                    pos: Vec3::ZERO,
                    radius: 0.0,
                },
                color: LinearColor::TRANSPARENT,
            },
        );
        self.draw.orders.push(order);
    }
}

impl GizmoDraw {
    fn builder(&mut self, kind: GizmoKind) -> GizmoBuilder<'_> {
        GizmoBuilder {
            draw: self,
            order: GizmoOrder {
                kind,
                color: LinearColor::WHITE,
            },
        }
    }

    pub fn sphere(&mut self, pos: Vec3, radius: f32) -> GizmoBuilder<'_> {
        self.builder(GizmoKind::Sphere { pos, radius })
    }

    /// An arrow from `from` along `dir` (length included in `dir`).
    pub fn vector(&mut self, from: Vec3, dir: Vec3, thickness: f32) -> GizmoBuilder<'_> {
        self.builder(GizmoKind::Vector {
            from,
            dir,
            thickness,
        })
    }

    pub fn vector_at_origin(&mut self, dir: Vec3, thickness: f32) -> GizmoBuilder<'_> {
        self.builder(GizmoKind::Vector {
            from: Vec3::ZERO,
            dir,
            thickness,
        })
    }

    pub fn quad(&mut self, center: Vec3, normal: Vec3, size: f32) -> GizmoBuilder<'_> {
        self.builder(GizmoKind::Quad {
            center,
            normal,
            size,
        })
    }

    pub fn clear(&mut self) {
        self.orders.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geom3::Color;

    #[test]
    fn test_builder_pushes_on_drop() {
        let mut draw = GizmoDraw::default();
        draw.sphere(Vec3::X, 0.5).color(Color::RED);
        draw.vector(Vec3::ZERO, Vec3::Z, 1.0);

        assert_eq!(draw.orders.len(), 2);
        assert_eq!(draw.orders[0].color, LinearColor::from(Color::RED));
        // default color is white
        assert_eq!(draw.orders[1].color, LinearColor::WHITE);

        draw.clear();
        assert!(draw.orders.is_empty());
    }
}
