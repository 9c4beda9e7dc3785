/// Camera — the read-only input a SceneView samples once per frame.
///
/// Conventions: left-handed, +Z forward, +Y up, +X right. The field of view
/// is vertical and in radians.
///
/// The view core does not validate camera values. Range checks belong to the
/// camera; `PerspectiveCamera` performs them in its constructors and setters.

use glam::{Mat3, Quat, Vec3};
use crate::error::Result;
use crate::{engine_bail, engine_err};

const SOURCE: &str = "scene_view::Camera";

/// Snapshot source for a view update.
pub trait Camera {
    /// World-space position
    fn position(&self) -> Vec3;

    /// Orientation (unit quaternion)
    fn rotation(&self) -> Quat;

    /// Vertical field of view in radians
    fn fov_y(&self) -> f32;

    /// Width / height
    fn aspect_ratio(&self) -> f32;

    /// Near clip distance
    fn near(&self) -> f32;

    /// Far clip distance
    fn far(&self) -> f32;

    /// World-space forward direction
    fn forward(&self) -> Vec3 {
        self.rotation() * Vec3::Z
    }

    /// World-space up direction
    fn up(&self) -> Vec3 {
        self.rotation() * Vec3::Y
    }

    /// World-space right direction
    fn right(&self) -> Vec3 {
        self.rotation() * Vec3::X
    }

    /// Look-at target
    fn focus(&self) -> Vec3 {
        self.position() + self.forward()
    }
}

/// Perspective camera with validated parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    position: Vec3,
    rotation: Quat,
    fov_y: f32,
    aspect_ratio: f32,
    near: f32,
    far: f32,
    focus_distance: f32,
}

impl PerspectiveCamera {
    /// Create a camera from a position and orientation.
    ///
    /// # Errors
    ///
    /// `Error::InvalidCamera` if the rotation is not normalized, the field of
    /// view is outside (0, π), the aspect ratio is not positive, or the clip
    /// distances do not satisfy `0 < near < far`.
    pub fn new(
        position: Vec3,
        rotation: Quat,
        fov_y: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Result<Self> {
        if !rotation.is_normalized() {
            engine_bail!(SOURCE, InvalidCamera, "Rotation {:?} is not normalized", rotation);
        }
        Self::validate_fov(fov_y)?;
        Self::validate_aspect(aspect_ratio)?;
        Self::validate_clip(near, far)?;

        Ok(Self {
            position,
            rotation,
            fov_y,
            aspect_ratio,
            near,
            far,
            focus_distance: 1.0,
        })
    }

    /// Create a camera at `position` looking at `target`.
    ///
    /// # Errors
    ///
    /// Same as [`PerspectiveCamera::new`], plus `Error::InvalidCamera` when
    /// `target` coincides with `position` or the view direction is parallel
    /// to `up`.
    pub fn look_at(
        position: Vec3,
        target: Vec3,
        up: Vec3,
        fov_y: f32,
        aspect_ratio: f32,
        near: f32,
        far: f32,
    ) -> Result<Self> {
        let direction = target - position;
        let focus_distance = direction.length();
        if !(focus_distance > f32::EPSILON) {
            engine_bail!(SOURCE, InvalidCamera, "Target {:?} coincides with position", target);
        }

        let forward = direction / focus_distance;
        let right = up.cross(forward);
        if !(right.length_squared() > f32::EPSILON) {
            engine_bail!(SOURCE, InvalidCamera,
                "View direction {:?} is parallel to up {:?}", forward, up);
        }
        let right = right.normalize();
        let up = forward.cross(right);
        let rotation = Quat::from_mat3(&Mat3::from_cols(right, up, forward)).normalize();

        let mut camera = Self::new(position, rotation, fov_y, aspect_ratio, near, far)?;
        camera.focus_distance = focus_distance;
        Ok(camera)
    }

    // ===== SETTERS =====

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the orientation. Non-unit quaternions are rejected.
    pub fn set_rotation(&mut self, rotation: Quat) -> Result<()> {
        if !rotation.is_normalized() {
            engine_bail!(SOURCE, InvalidCamera, "Rotation {:?} is not normalized", rotation);
        }
        self.rotation = rotation;
        Ok(())
    }

    pub fn set_fov_y(&mut self, fov_y: f32) -> Result<()> {
        Self::validate_fov(fov_y)?;
        self.fov_y = fov_y;
        Ok(())
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) -> Result<()> {
        Self::validate_aspect(aspect_ratio)?;
        self.aspect_ratio = aspect_ratio;
        Ok(())
    }

    pub fn set_clip_planes(&mut self, near: f32, far: f32) -> Result<()> {
        Self::validate_clip(near, far)?;
        self.near = near;
        self.far = far;
        Ok(())
    }

    /// Distance from the position to the focus point along `forward`.
    pub fn set_focus_distance(&mut self, distance: f32) {
        self.focus_distance = distance;
    }

    pub fn focus_distance(&self) -> f32 {
        self.focus_distance
    }

    // ===== VALIDATION =====

    fn validate_fov(fov_y: f32) -> Result<()> {
        if !(fov_y > 0.0 && fov_y < std::f32::consts::PI) {
            return Err(engine_err!(SOURCE, InvalidCamera,
                "Field of view {} must be in (0, PI)", fov_y));
        }
        Ok(())
    }

    fn validate_aspect(aspect_ratio: f32) -> Result<()> {
        if !(aspect_ratio > 0.0 && aspect_ratio.is_finite()) {
            return Err(engine_err!(SOURCE, InvalidCamera,
                "Aspect ratio {} must be positive and finite", aspect_ratio));
        }
        Ok(())
    }

    fn validate_clip(near: f32, far: f32) -> Result<()> {
        if !(near > 0.0 && near < far && far.is_finite()) {
            return Err(engine_err!(SOURCE, InvalidCamera,
                "Clip planes must satisfy 0 < near < far (near {}, far {})", near, far));
        }
        Ok(())
    }
}

impl Camera for PerspectiveCamera {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn rotation(&self) -> Quat {
        self.rotation
    }

    fn fov_y(&self) -> f32 {
        self.fov_y
    }

    fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    fn near(&self) -> f32 {
        self.near
    }

    fn far(&self) -> f32 {
        self.far
    }

    fn focus(&self) -> Vec3 {
        self.position + self.forward() * self.focus_distance
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
