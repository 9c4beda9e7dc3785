//! View module — per-frame view state.
//!
//! `ViewSetup` holds every matrix derived from one camera snapshot.
//! `SceneView` double-buffers setups, owns the frustum, and keeps the
//! clamped viewports for the main view and the shadow map.

mod config;
mod viewport;
mod view_setup;
mod scene_view;

pub use config::ViewConfig;
pub use viewport::{ScreenViewport, ScissorRect};
pub use view_setup::ViewSetup;
pub use scene_view::SceneView;
