/*!
# Scene View

Per-frame view state for a 3D renderer.

Given a camera snapshot, this crate derives every matrix the rendering stages
need (view, projection, their products and inverses, plus camera-relative
"translated" variants for precision at large world coordinates), extracts the
view frustum for culling, and keeps clamped viewport/scissor state for the
main target and the shadow map.

## Architecture

- **ViewSetup**: pure computation of matrices and vectors from a `Camera`
- **ViewFrustum**: culling planes and point/sphere/box classification
- **SceneView**: double-buffered setups, frustum, sizes and viewports,
  updated once per frame

Nothing here renders or owns GPU resources.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod math;
pub mod camera;
pub mod view;

// Main view3d namespace module
pub mod view3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging hub
    pub use crate::engine::Engine;

    // Frame state
    pub use crate::view::{SceneView, ViewSetup, ViewConfig, ScreenViewport, ScissorRect};

    // Camera input and culling
    pub use crate::camera::{
        Camera, PerspectiveCamera, ViewFrustum, FrustumPlane, FrustumTest, AABB,
    };

    // Math helpers
    pub use crate::math::{DepthRange, RigidTransform};

    // Logging sub-module (types only, macros are exported at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }
}

// Re-export math library at crate root
pub use glam;
