//! Math helpers on top of glam
//!
//! Closed-form operations the view setup relies on: the rigid-transform
//! inverse and the depth-range conventions with their linearization vector.

mod rigid;
mod depth;

pub use rigid::RigidTransform;
pub use depth::{DepthRange, device_z_to_world, linearize_depth};
