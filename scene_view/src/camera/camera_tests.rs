use glam::{Quat, Vec3};
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use crate::error::Error;
use super::*;

fn default_camera() -> PerspectiveCamera {
    PerspectiveCamera::new(Vec3::ZERO, Quat::IDENTITY, FRAC_PI_2, 1.0, 0.1, 100.0).unwrap()
}

fn assert_vec_near(a: Vec3, b: Vec3) {
    assert!(a.abs_diff_eq(b, 1e-5), "{:?} != {:?}", a, b);
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_new_stores_parameters() {
    let camera = PerspectiveCamera::new(
        Vec3::new(1.0, 2.0, 3.0),
        Quat::IDENTITY,
        FRAC_PI_4,
        16.0 / 9.0,
        0.5,
        500.0,
    ).unwrap();

    assert_eq!(camera.position(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(camera.fov_y(), FRAC_PI_4);
    assert_eq!(camera.aspect_ratio(), 16.0 / 9.0);
    assert_eq!(camera.near(), 0.5);
    assert_eq!(camera.far(), 500.0);
    assert_eq!(camera.focus_distance(), 1.0);
}

#[test]
fn test_identity_rotation_axes() {
    let camera = default_camera();
    assert_vec_near(camera.forward(), Vec3::Z);
    assert_vec_near(camera.up(), Vec3::Y);
    assert_vec_near(camera.right(), Vec3::X);
    assert_vec_near(camera.focus(), Vec3::Z);
}

#[test]
fn test_new_rejects_invalid_parameters() {
    let cases = [
        (Quat::from_xyzw(0.0, 0.0, 0.0, 2.0), FRAC_PI_2, 1.0, 0.1, 100.0),
        (Quat::IDENTITY, 0.0, 1.0, 0.1, 100.0),
        (Quat::IDENTITY, PI, 1.0, 0.1, 100.0),
        (Quat::IDENTITY, FRAC_PI_2, 0.0, 0.1, 100.0),
        (Quat::IDENTITY, FRAC_PI_2, f32::NAN, 0.1, 100.0),
        (Quat::IDENTITY, FRAC_PI_2, 1.0, 0.0, 100.0),
        (Quat::IDENTITY, FRAC_PI_2, 1.0, 100.0, 100.0),
        (Quat::IDENTITY, FRAC_PI_2, 1.0, 0.1, f32::INFINITY),
    ];

    for (rotation, fov, aspect, near, far) in cases {
        let result = PerspectiveCamera::new(Vec3::ZERO, rotation, fov, aspect, near, far);
        assert!(
            matches!(result, Err(Error::InvalidCamera(_))),
            "expected rejection for fov {} aspect {} near {} far {}", fov, aspect, near, far
        );
    }
}

// ============================================================================
// look_at
// ============================================================================

#[test]
fn test_look_at_orients_towards_target() {
    let camera = PerspectiveCamera::look_at(
        Vec3::new(0.0, 0.0, -10.0),
        Vec3::ZERO,
        Vec3::Y,
        FRAC_PI_2, 1.0, 0.1, 100.0,
    ).unwrap();

    assert_vec_near(camera.forward(), Vec3::Z);
    assert_vec_near(camera.up(), Vec3::Y);
    assert_eq!(camera.focus_distance(), 10.0);
    assert_vec_near(camera.focus(), Vec3::ZERO);
}

#[test]
fn test_look_at_sideways() {
    let camera = PerspectiveCamera::look_at(
        Vec3::new(5.0, 1.0, 0.0),
        Vec3::new(5.0, 1.0, 0.0) + Vec3::X * 3.0,
        Vec3::Y,
        FRAC_PI_2, 1.0, 0.1, 100.0,
    ).unwrap();

    assert_vec_near(camera.forward(), Vec3::X);
    assert_vec_near(camera.up(), Vec3::Y);
    // Left-handed: looking down +X with +Y up puts right at -Z
    assert_vec_near(camera.right(), -Vec3::Z);
    assert!(camera.rotation().is_normalized());
}

#[test]
fn test_look_at_rejects_degenerate_direction() {
    let same_point = PerspectiveCamera::look_at(
        Vec3::ONE, Vec3::ONE, Vec3::Y, FRAC_PI_2, 1.0, 0.1, 100.0,
    );
    assert!(matches!(same_point, Err(Error::InvalidCamera(_))));

    let parallel_up = PerspectiveCamera::look_at(
        Vec3::ZERO, Vec3::Y * 4.0, Vec3::Y, FRAC_PI_2, 1.0, 0.1, 100.0,
    );
    assert!(matches!(parallel_up, Err(Error::InvalidCamera(_))));
}

// ============================================================================
// Setters
// ============================================================================

#[test]
fn test_setters_validate_and_keep_previous_value() {
    let mut camera = default_camera();

    assert!(camera.set_fov_y(FRAC_PI_4).is_ok());
    assert_eq!(camera.fov_y(), FRAC_PI_4);
    assert!(camera.set_fov_y(-1.0).is_err());
    assert_eq!(camera.fov_y(), FRAC_PI_4);

    assert!(camera.set_aspect_ratio(2.0).is_ok());
    assert!(camera.set_aspect_ratio(-2.0).is_err());
    assert_eq!(camera.aspect_ratio(), 2.0);

    assert!(camera.set_clip_planes(1.0, 10.0).is_ok());
    assert!(camera.set_clip_planes(10.0, 1.0).is_err());
    assert_eq!((camera.near(), camera.far()), (1.0, 10.0));

    assert!(camera.set_rotation(Quat::from_rotation_y(FRAC_PI_2)).is_ok());
    assert_vec_near(camera.forward(), Vec3::X);
    assert!(camera.set_rotation(Quat::from_xyzw(1.0, 1.0, 0.0, 0.0)).is_err());
}

#[test]
fn test_set_position_and_focus_distance() {
    let mut camera = default_camera();
    camera.set_position(Vec3::new(0.0, 0.0, 5.0));
    camera.set_focus_distance(20.0);

    assert_vec_near(camera.focus(), Vec3::new(0.0, 0.0, 25.0));
}

#[test]
fn test_camera_as_trait_object() {
    let camera = default_camera();
    let dyn_camera: &dyn Camera = &camera;
    assert_eq!(dyn_camera.near(), 0.1);
    assert_vec_near(dyn_camera.forward(), Vec3::Z);
}
