/// Depth-range conventions and depth linearization.
///
/// Projections are built canonically (left-handed, clip depth in [0, 1]).
/// A `DepthRange` is the platform adjustment applied on top of the canonical
/// projection; `device_z_to_world` recovers linear view depth from whatever
/// depth the adjusted projection writes.

use glam::{Mat4, Vec4};

/// Clip-space depth convention of the target device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthRange {
    /// Near maps to 0, far maps to 1 (D3D, Vulkan, wgpu)
    #[default]
    ZeroToOne,
    /// Near maps to 1, far maps to 0
    ReversedZ,
    /// Near maps to -1, far maps to 1 (OpenGL)
    NegativeOneToOne,
}

impl DepthRange {
    /// Matrix that remaps canonical [0, 1] clip depth to this convention.
    ///
    /// Applied on the left: `adjusted = remap * canonical`.
    pub fn remap_matrix(self) -> Mat4 {
        match self {
            DepthRange::ZeroToOne => Mat4::IDENTITY,
            // z' = w - z
            DepthRange::ReversedZ => Mat4::from_cols(
                Vec4::X,
                Vec4::Y,
                Vec4::new(0.0, 0.0, -1.0, 0.0),
                Vec4::new(0.0, 0.0, 1.0, 1.0),
            ),
            // z' = 2z - w
            DepthRange::NegativeOneToOne => Mat4::from_cols(
                Vec4::X,
                Vec4::Y,
                Vec4::new(0.0, 0.0, 2.0, 0.0),
                Vec4::new(0.0, 0.0, -1.0, 1.0),
            ),
        }
    }

    /// Apply the adjustment to a canonical projection.
    pub fn adjust(self, canonical: Mat4) -> Mat4 {
        self.remap_matrix() * canonical
    }
}

/// Smallest magnitude substituted for a zero depth offset.
const DEPTH_ADD_EPSILON: f32 = 1.0e-8;

/// Coefficients turning projected depth into linear view depth.
///
/// For projected depth `z` the linear depth is
/// `z * c.x + c.y + 1 / (z * c.z - c.w)` (see [`linearize_depth`]).
/// Perspective projections use the reciprocal term only; orthographic ones use
/// the linear term only (the reciprocal term is then constant 1 and folded
/// into `c.y`).
pub fn device_z_to_world(projection: &Mat4) -> Vec4 {
    let depth_mul = projection.z_axis.z;
    let depth_add = projection.w_axis.z;

    let is_perspective = projection.w_axis.w < 1.0;
    if is_perspective {
        let depth_add = if depth_add == 0.0 { DEPTH_ADD_EPSILON } else { depth_add };
        Vec4::new(0.0, 0.0, 1.0 / depth_add, depth_mul / depth_add)
    } else {
        Vec4::new(1.0 / depth_mul, -depth_add / depth_mul - 1.0, 0.0, -1.0)
    }
}

/// Evaluate the linearization expression for one depth sample.
pub fn linearize_depth(coefficients: Vec4, device_z: f32) -> f32 {
    device_z * coefficients.x + coefficients.y
        + 1.0 / (device_z * coefficients.z - coefficients.w)
}

#[cfg(test)]
#[path = "depth_tests.rs"]
mod tests;
