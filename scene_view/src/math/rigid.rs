/// Rigid-transform helpers for `glam::Mat4`.
///
/// A rigid transform is an orthonormal rotation plus a translation. Its
/// inverse is closed-form (transpose the rotation, rotate and negate the
/// translation), which is exact up to rounding and cheaper than a general
/// 4x4 inversion.

use glam::{Mat3, Mat4, Vec3};

/// Operations valid on matrices whose upper 3x3 block is orthonormal.
pub trait RigidTransform {
    /// Closed-form inverse `[R | t]^-1 = [R^T | -R^T t]`.
    ///
    /// The result is meaningless if the upper 3x3 block carries scale or shear.
    fn rigid_inverse(&self) -> Self;

    /// Same matrix with the translation column zeroed.
    fn without_translation(&self) -> Self;

    /// Translation column as a vector.
    fn translation(&self) -> Vec3;
}

impl RigidTransform for Mat4 {
    fn rigid_inverse(&self) -> Self {
        let rotation_t = Mat3::from_mat4(*self).transpose();
        let translation = -(rotation_t * self.w_axis.truncate());

        Mat4::from_cols(
            rotation_t.x_axis.extend(0.0),
            rotation_t.y_axis.extend(0.0),
            rotation_t.z_axis.extend(0.0),
            translation.extend(1.0),
        )
    }

    fn without_translation(&self) -> Self {
        let mut m = *self;
        m.w_axis = glam::Vec4::W;
        m
    }

    fn translation(&self) -> Vec3 {
        self.w_axis.truncate()
    }
}

#[cfg(test)]
#[path = "rigid_tests.rs"]
mod tests;
