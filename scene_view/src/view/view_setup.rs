/// ViewSetup — every matrix a frame derives from one camera snapshot.
///
/// Two matrix families live side by side:
/// - world-space (`view`, `view_projection`, ...) with the camera position
///   baked into the translation,
/// - translated (`translated_view`, `translated_view_projection`, ...) that
///   operate on camera-relative positions `p - view_origin`.
///
/// Far from the world origin the translated family keeps full f32 precision
/// near the camera. Geometry must be fed to the family matching the space its
/// positions are expressed in; the two are not interchangeable.
///
/// Conventions: left-handed, +Z forward, canonical clip depth [0, w] before
/// the `DepthRange` adjustment.

use glam::{Mat4, Quat, Vec2, Vec3, Vec4};
use crate::camera::Camera;
use crate::math::{self, RigidTransform};
use super::config::ViewConfig;

/// Plain, copyable aggregate of view matrices and vectors.
///
/// `ViewSetup::default()` is all-identity with zero vectors.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewSetup {
    /// World → view
    pub view: Mat4,
    pub view_inverse: Mat4,

    /// World → clip, adjusted projection
    pub view_projection: Mat4,
    /// World → clip with the canonical projection, for plane extraction
    pub view_projection_frustum: Mat4,
    pub view_projection_inverse: Mat4,

    /// Camera-relative world → view (orientation only)
    pub translated_view: Mat4,
    pub translated_view_inverse: Mat4,

    /// Camera-relative world → clip
    pub translated_view_projection: Mat4,
    pub translated_view_projection_inverse: Mat4,

    /// Orientation-only view transform (skybox, environment lookups)
    pub rotation: Mat4,
    pub rotation_inverse: Mat4,

    /// `(ndc.x * w, ndc.y * w, w, 1)` → camera-relative world, `w` = view depth
    pub screen_to_translated_world: Mat4,
    pub screen_to_translated_world_inverse: Mat4,

    /// Camera local → world
    pub world: Mat4,
    pub world_inverse: Mat4,

    /// View → clip, adjusted to the configured depth range
    pub projection: Mat4,
    pub projection_inverse: Mat4,
    /// Adjusted projection with the far plane at infinity
    pub projection_far: Mat4,
    /// Canonical [0, 1] projection before depth-range adjustment
    pub projection_unadjusted: Mat4,

    pub view_origin: Vec3,
    pub view_focus: Vec3,
    pub view_up: Vec3,
    pub view_rotation: Quat,

    /// Coefficients for `math::linearize_depth`
    pub device_z_to_world: Vec4,
}

impl ViewSetup {
    /// Compute a setup from a camera snapshot.
    pub fn from_camera(camera: &dyn Camera, config: &ViewConfig) -> Self {
        let mut setup = Self::default();
        setup.update(camera, config);
        setup
    }

    /// Recompute every field from `camera`. Nothing is carried over from the
    /// previous contents.
    ///
    /// Camera values are not validated; degenerate input produces
    /// non-finite matrices (see [`ViewSetup::is_finite`]).
    pub fn update(&mut self, camera: &dyn Camera, config: &ViewConfig) {
        let origin = camera.position();
        let orientation = camera.rotation();
        let up = orientation * Vec3::Y;

        // World and view share one basis: view is the rigid inverse of world
        let world = Mat4::from_rotation_translation(orientation, origin);
        let view = world.rigid_inverse();
        let view_inverse = world;
        let world_inverse = view;

        // Projection family
        let fov_y = camera.fov_y();
        let aspect = camera.aspect_ratio();
        let near = camera.near();
        let projection_unadjusted = Mat4::perspective_lh(fov_y, aspect, near, camera.far());
        let projection = config.depth_range.adjust(projection_unadjusted);
        let projection_inverse = projection.inverse();
        let projection_far = config
            .depth_range
            .adjust(Mat4::perspective_infinite_lh(fov_y, aspect, near));

        // Translated family: same view without the camera translation
        let translated_view = view.without_translation();
        let translated_view_inverse = translated_view.rigid_inverse();
        let translated_view_projection = projection * translated_view;
        let translated_view_projection_inverse = translated_view_inverse * projection_inverse;

        let rotation = Mat4::from_quat(orientation.conjugate());
        let rotation_inverse = rotation.rigid_inverse();

        let screen_to_translated_world =
            translated_view_projection_inverse * screen_to_clip(&projection);
        let screen_to_translated_world_inverse =
            clip_to_screen(&projection) * translated_view_projection;

        *self = Self {
            view,
            view_inverse,
            view_projection: projection * view,
            view_projection_frustum: projection_unadjusted * view,
            view_projection_inverse: view_inverse * projection_inverse,
            translated_view,
            translated_view_inverse,
            translated_view_projection,
            translated_view_projection_inverse,
            rotation,
            rotation_inverse,
            screen_to_translated_world,
            screen_to_translated_world_inverse,
            world,
            world_inverse,
            projection,
            projection_inverse,
            projection_far,
            projection_unadjusted,
            view_origin: origin,
            view_focus: camera.focus(),
            view_up: up,
            view_rotation: orientation,
            device_z_to_world: math::device_z_to_world(&projection),
        };
    }

    // ===== DERIVED QUERIES =====

    /// World position → NDC through `view_projection`.
    pub fn project(&self, world_position: Vec3) -> Vec3 {
        self.view_projection.project_point3(world_position)
    }

    /// NDC → world position through `view_projection_inverse`.
    pub fn unproject(&self, ndc: Vec3) -> Vec3 {
        self.view_projection_inverse.project_point3(ndc)
    }

    /// Linear view depth for a projected depth value.
    pub fn linearize_depth(&self, device_z: f32) -> f32 {
        math::linearize_depth(self.device_z_to_world, device_z)
    }

    /// Camera-relative position seen at `ndc` at linear view depth `depth`.
    ///
    /// Add `view_origin` to get a world position.
    pub fn screen_to_translated_world_point(&self, ndc: Vec2, depth: f32) -> Vec3 {
        let h = self.screen_to_translated_world
            * Vec4::new(ndc.x * depth, ndc.y * depth, depth, 1.0);
        h.truncate() / h.w
    }

    /// `false` if any matrix holds NaN or infinity (degenerate camera input).
    pub fn is_finite(&self) -> bool {
        [
            &self.view,
            &self.view_inverse,
            &self.view_projection,
            &self.view_projection_inverse,
            &self.translated_view_projection,
            &self.translated_view_projection_inverse,
            &self.screen_to_translated_world,
            &self.screen_to_translated_world_inverse,
            &self.projection,
            &self.projection_inverse,
        ]
        .iter()
        .all(|m| m.is_finite())
            && self.device_z_to_world.is_finite()
    }
}

/// Maps `(x * w, y * w, w, 1)` to clip space using the projection's depth row.
fn screen_to_clip(projection: &Mat4) -> Mat4 {
    let depth_mul = projection.z_axis.z;
    let depth_add = projection.w_axis.z;

    Mat4::from_cols(
        Vec4::X,
        Vec4::Y,
        Vec4::new(0.0, 0.0, depth_mul, 1.0),
        Vec4::new(0.0, 0.0, depth_add, 0.0),
    )
}

/// Closed-form inverse of [`screen_to_clip`].
fn clip_to_screen(projection: &Mat4) -> Mat4 {
    let depth_mul = projection.z_axis.z;
    let depth_add = projection.w_axis.z;

    Mat4::from_cols(
        Vec4::X,
        Vec4::Y,
        Vec4::new(0.0, 0.0, 0.0, 1.0 / depth_add),
        Vec4::new(0.0, 0.0, 1.0, -depth_mul / depth_add),
    )
}

#[cfg(test)]
#[path = "view_setup_tests.rs"]
mod tests;
