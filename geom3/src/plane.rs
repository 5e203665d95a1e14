use crate::Vec3;
use serde::{Deserialize, Serialize};

/// Plane defined by a unit normal, a reference point lying on it and a signed offset,
/// where the offset is the distance from the origin of any point on the plane projected
/// on the normal vector. Plane equation: `n · X = o`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct Plane {
    /// Unit normal vector. The zero vector if the plane was built from degenerate points.
    pub n: Vec3,
    /// Reference point on the plane (first anchor for `from_points`).
    pub p: Vec3,
    /// Signed offset, `o = n · p`.
    pub o: f32,
}

impl Plane {
    #[inline]
    pub fn new(n: Vec3, p: Vec3) -> Self {
        Self { n, p, o: n.dot(p) }
    }

    /// Builds the plane through three points, with the normal oriented by the right-hand
    /// winding of `(p2 - p1) × (p3 - p1)` and `p1` as the reference point.
    ///
    /// Collinear or coincident points leave the normal as the zero vector: every field
    /// stays finite but all queries degenerate (`is_in_front` is always true,
    /// projections are the identity). Use [`Plane::try_from_points`] to reject those
    /// inputs instead.
    pub fn from_points(p1: Vec3, p2: Vec3, p3: Vec3) -> Self {
        let n = (p2 - p1)
            .cross(p3 - p1)
            .try_normalize()
            .unwrap_or(Vec3::ZERO);
        Self {
            n,
            p: p1,
            o: n.dot(p1),
        }
    }

    /// Same as [`Plane::from_points`] but fails on degenerate input.
    pub fn try_from_points(p1: Vec3, p2: Vec3, p3: Vec3) -> Option<Self> {
        let n = (p2 - p1).cross(p3 - p1).try_normalize()?;
        Some(Self {
            n,
            p: p1,
            o: n.dot(p1),
        })
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.n == Vec3::ZERO
    }

    /// True iff the point lies on the side the normal points toward.
    /// Points exactly on the plane count as in front, so the reference point always does.
    #[inline]
    pub fn is_in_front(&self, point: Vec3) -> bool {
        self.n.dot(point) >= self.o
    }

    /// Distance to the plane along the normal, negative behind it.
    #[inline]
    pub fn signed_dist(&self, point: Vec3) -> f32 {
        self.n.dot(point) - self.o
    }

    /// Closest point on the plane: drops the point along the normal until it lands on
    /// the plane surface. Idempotent.
    #[inline]
    pub fn project_point(&self, point: Vec3) -> Vec3 {
        point - self.signed_dist(point) * self.n
    }

    /// Removes the normal component of `v` treated as a free vector. Unlike
    /// [`Plane::project_point`] there is no offset correction: the result is
    /// perpendicular to the normal, not necessarily on the plane. Vectors have no
    /// position, so the plane's distance from the origin does not apply.
    #[inline]
    pub fn project_vector(&self, v: Vec3) -> Vec3 {
        v - self.n.dot(v) * self.n
    }

    /// Where the ray `from + t * dir` (t >= 0) hits the plane, if it does.
    pub fn intersection_ray(&self, from: Vec3, dir: Vec3) -> Option<Vec3> {
        // assuming dir is normalized
        let denom = self.n.dot(dir);
        if denom.abs() > 1e-7 {
            let t = (self.p - from).dot(self.n) / denom;
            if t >= 0.0 {
                return Some(from + dir * t);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec3;

    #[test]
    fn test_new_derives_offset() {
        let p = Plane::new(Vec3::Z, vec3(3.0, -1.0, 2.0));
        assert_eq!(p.o, 2.0);
        assert_eq!(p, Plane::from_points(vec3(3.0, -1.0, 2.0), vec3(4.0, -1.0, 2.0), vec3(3.0, 0.0, 2.0)));
        assert!(p.is_in_front(p.p));
        assert!(p.project_point(vec3(0.0, 0.0, 7.0)).approx_eq(vec3(0.0, 0.0, 2.0)));
    }

    #[test]
    fn test_from_points_unit_normal() {
        let p = Plane::from_points(
            vec3(1.0, 2.0, 3.0),
            vec3(4.0, -1.0, 0.5),
            vec3(-2.0, 0.0, 7.0),
        );
        assert!((p.n.mag() - 1.0).abs() < 1e-5);
        assert!((p.o - p.n.dot(p.p)).abs() < 1e-5);
    }

    #[test]
    fn test_side() {
        let p = Plane::from_points(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert_eq!(p.n, Vec3::Z);
        assert_eq!(p.o, 0.0);
        assert!(p.is_in_front(vec3(0.0, 0.0, 5.0)));
        assert!(!p.is_in_front(vec3(0.0, 0.0, -5.0)));
        // exactly on the plane counts as in front
        assert!(p.is_in_front(p.p));
        assert!(p.is_in_front(vec3(7.0, -3.0, 0.0)));
    }

    #[test]
    fn test_project_point() {
        let p = Plane::from_points(Vec3::ZERO, Vec3::X, Vec3::Y);
        assert!(p.project_point(vec3(3.0, 4.0, 7.0)).approx_eq(vec3(3.0, 4.0, 0.0)));
        // with o == 0 both projections coincide
        assert!(p.project_vector(vec3(3.0, 4.0, 7.0)).approx_eq(vec3(3.0, 4.0, 0.0)));

        let q = vec3(-1.5, 2.0, -8.0);
        let proj = p.project_point(q);
        assert!((p.n.dot(proj) - p.o).abs() < 1e-5);
        assert!(p.project_point(proj).approx_eq(proj));
    }

    #[test]
    fn test_projection_asymmetry_on_offset_plane() {
        let p = Plane::from_points(vec3(0.0, 0.0, 2.0), vec3(1.0, 0.0, 2.0), vec3(0.0, 1.0, 2.0));
        assert_eq!(p.n, Vec3::Z);
        assert_eq!(p.o, 2.0);

        // point projection lands on the plane, vector projection ignores the offset
        assert!(p.project_point(vec3(5.0, 5.0, 9.0)).approx_eq(vec3(5.0, 5.0, 2.0)));
        assert!(p.project_vector(vec3(5.0, 5.0, 9.0)).approx_eq(vec3(5.0, 5.0, 0.0)));
        assert!(p.project_vector(vec3(5.0, 5.0, 9.0)).dot(p.n).abs() < 1e-5);
    }

    #[test]
    fn test_project_on_tilted_plane() {
        let p = Plane::from_points(vec3(1.0, 0.0, 0.0), vec3(0.0, 1.0, 0.0), vec3(0.0, 0.0, 1.0));
        let q = vec3(2.0, 2.0, 2.0);
        let proj = p.project_point(q);
        assert!((p.n.dot(proj) - p.o).abs() < 1e-5);
        // the residual is parallel to the normal
        let res = q - proj;
        assert!(res.cross(p.n).mag() < 1e-5);
        assert!(p.project_vector(q).dot(p.n).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate() {
        let coincident = Plane::from_points(Vec3::X, Vec3::X, Vec3::X);
        assert!(coincident.is_degenerate());
        assert!(coincident.n.is_finite());
        assert_eq!(coincident.o, 0.0);

        let collinear = Plane::from_points(Vec3::ZERO, Vec3::X, vec3(2.0, 0.0, 0.0));
        assert!(collinear.is_degenerate());
        assert!(collinear.n.is_finite());

        assert!(Plane::try_from_points(Vec3::ZERO, Vec3::X, vec3(2.0, 0.0, 0.0)).is_none());
        assert!(Plane::try_from_points(Vec3::ZERO, Vec3::X, Vec3::Y).is_some());
    }

    #[test]
    fn test_intersection_ray() {
        let p = Plane::from_points(vec3(0.0, 0.0, 2.0), vec3(1.0, 0.0, 2.0), vec3(0.0, 1.0, 2.0));
        let hit = p.intersection_ray(vec3(1.0, 1.0, 10.0), -Vec3::Z);
        assert_eq!(hit, Some(vec3(1.0, 1.0, 2.0)));
        // pointing away
        assert_eq!(p.intersection_ray(vec3(1.0, 1.0, 10.0), Vec3::Z), None);
        // parallel
        assert_eq!(p.intersection_ray(vec3(1.0, 1.0, 10.0), Vec3::X), None);
    }
}
