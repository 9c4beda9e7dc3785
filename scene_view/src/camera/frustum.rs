/// ViewFrustum — culling planes extracted from a projection-space matrix.
///
/// Each plane is a Vec4 (A, B, C, D) in Hessian normal form:
/// - (A, B, C) is the unit outward-pointing normal
/// - D is the signed distance term
/// - A point P is outside the plane if dot(plane, P_homogeneous) > 0
///
/// Plane order is left, right, bottom, top, then near and far when requested.
/// The source matrix must produce clip depth in [0, w] (canonical left-handed
/// projection); `ViewSetup::view_projection_frustum` is built that way.

use glam::{Mat4, Vec3, Vec4};
use super::aabb::AABB;

/// Result of a 3-way frustum classification.
///
/// - `Outside` → skip the object (and any children)
/// - `Inside` → accept without further testing
/// - `Intersecting` → straddles at least one plane; test finer or accept conservatively
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// Entirely outside at least one plane
    Outside,
    /// Entirely inside every plane
    Inside,
    /// Crosses or touches at least one plane
    Intersecting,
}

/// Identifies a frustum plane independently of its storage slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumPlane {
    Left,
    Right,
    Bottom,
    Top,
    Near,
    Far,
}

/// Storage slots of the side planes (always present)
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;

const MAX_PLANES: usize = 6;

/// Up to six outward-facing culling planes.
///
/// The default frustum has no planes and classifies everything as `Inside`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewFrustum {
    planes: [Vec4; MAX_PLANES],
    plane_count: usize,
    has_near: bool,
    has_far: bool,
}

impl ViewFrustum {
    /// Build a frustum from `matrix` (see [`ViewFrustum::update`]).
    pub fn new(matrix: &Mat4, include_near_plane: bool, include_far_plane: bool) -> Self {
        let mut frustum = Self::default();
        frustum.update(matrix, include_near_plane, include_far_plane);
        frustum
    }

    /// Build a frustum with all six planes.
    pub fn from_view_projection(matrix: &Mat4) -> Self {
        Self::new(matrix, true, true)
    }

    /// Re-extract every plane from `matrix`.
    ///
    /// Uses the Gribb & Hartmann method on the matrix rows for a [0, w] clip
    /// depth range. Previous planes are discarded.
    pub fn update(&mut self, matrix: &Mat4, include_near_plane: bool, include_far_plane: bool) {
        let row0 = matrix.row(0);
        let row1 = matrix.row(1);
        let row2 = matrix.row(2);
        let row3 = matrix.row(3);

        // Inward planes are negated so normals face out of the volume
        let mut planes = [Vec4::ZERO; MAX_PLANES];
        planes[PLANE_LEFT] = -(row3 + row0);
        planes[PLANE_RIGHT] = -(row3 - row0);
        planes[PLANE_BOTTOM] = -(row3 + row1);
        planes[PLANE_TOP] = -(row3 - row1);

        let mut count = 4;
        if include_near_plane {
            planes[count] = -row2;
            count += 1;
        }
        if include_far_plane {
            planes[count] = -(row3 - row2);
            count += 1;
        }

        for plane in &mut planes[..count] {
            let normal_len = plane.truncate().length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        self.planes = planes;
        self.plane_count = count;
        self.has_near = include_near_plane;
        self.has_far = include_far_plane;
    }

    // ===== ACCESSORS =====

    /// Active planes in storage order
    pub fn planes(&self) -> &[Vec4] {
        &self.planes[..self.plane_count]
    }

    pub fn plane_count(&self) -> usize {
        self.plane_count
    }

    pub fn has_near_plane(&self) -> bool {
        self.has_near
    }

    pub fn has_far_plane(&self) -> bool {
        self.has_far
    }

    /// Plane by role, `None` if it was not extracted.
    pub fn plane(&self, which: FrustumPlane) -> Option<Vec4> {
        if self.plane_count == 0 {
            return None;
        }
        let slot = match which {
            FrustumPlane::Left => PLANE_LEFT,
            FrustumPlane::Right => PLANE_RIGHT,
            FrustumPlane::Bottom => PLANE_BOTTOM,
            FrustumPlane::Top => PLANE_TOP,
            FrustumPlane::Near if self.has_near => 4,
            FrustumPlane::Far if self.has_far => if self.has_near { 5 } else { 4 },
            FrustumPlane::Near | FrustumPlane::Far => return None,
        };
        Some(self.planes[slot])
    }

    // ===== QUERIES =====

    /// Classify a point. Points exactly on a plane are `Intersecting`.
    pub fn test_point(&self, point: Vec3) -> FrustumTest {
        let mut on_boundary = false;

        for plane in self.planes() {
            let distance = signed_distance(plane, point);
            if distance > 0.0 {
                return FrustumTest::Outside;
            }
            if distance == 0.0 {
                on_boundary = true;
            }
        }

        if on_boundary { FrustumTest::Intersecting } else { FrustumTest::Inside }
    }

    /// Classify a sphere.
    pub fn test_sphere(&self, center: Vec3, radius: f32) -> FrustumTest {
        let mut all_inside = true;

        for plane in self.planes() {
            let distance = signed_distance(plane, center);
            if distance > radius {
                return FrustumTest::Outside;
            }
            if distance > -radius {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Intersecting }
    }

    /// Classify an AABB (3-way test).
    ///
    /// For each plane, the corner least along the outward normal decides
    /// `Outside`; the corner furthest along it decides whether the box
    /// straddles the plane.
    pub fn test_aabb(&self, aabb: &AABB) -> FrustumTest {
        let mut all_inside = true;

        for plane in self.planes() {
            let normal = plane.truncate();

            if signed_distance(plane, aabb.negative_vertex(normal)) > 0.0 {
                return FrustumTest::Outside;
            }
            if signed_distance(plane, aabb.positive_vertex(normal)) > 0.0 {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Intersecting }
    }

    /// Conservative visibility: `true` unless the box is fully outside.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.test_aabb(aabb) != FrustumTest::Outside
    }
}

#[inline]
fn signed_distance(plane: &Vec4, point: Vec3) -> f32 {
    plane.truncate().dot(point) + plane.w
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
