//! Camera module — camera input contract, bounding boxes and the view frustum.
//!
//! The `Camera` trait is what a `SceneView` reads once per frame.
//! `PerspectiveCamera` is a ready-made implementation; engines with their own
//! camera types implement the trait instead.

mod camera;
mod aabb;
mod frustum;

pub use camera::{Camera, PerspectiveCamera};
pub use aabb::AABB;
pub use frustum::{
    ViewFrustum, FrustumPlane, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP,
};
