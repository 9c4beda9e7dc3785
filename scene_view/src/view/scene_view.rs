/// SceneView — per-view frame state.
///
/// Owns the current and previous `ViewSetup`, the frustum extracted from the
/// current setup, and the clamped viewports of the main target and the shadow
/// map. `update()` is meant to run once per frame from the owning thread;
/// afterwards the state is read-only for the rest of the frame.
///
/// Every view (main camera, each shadow-casting light) gets its own instance.

use glam::{UVec2, Vec2};
use crate::camera::{Camera, ViewFrustum};
use crate::{engine_debug, engine_trace, engine_warn};
use super::config::ViewConfig;
use super::view_setup::ViewSetup;
use super::viewport::ScreenViewport;

const SOURCE: &str = "scene_view::SceneView";

#[derive(Debug, Clone, PartialEq)]
pub struct SceneView {
    config: ViewConfig,

    setup: ViewSetup,
    setup_before: ViewSetup,
    frustum: ViewFrustum,

    view_size: UVec2,
    view_aspect: f32,
    shadow_size: UVec2,
    shadow_aspect: f32,

    viewport: ScreenViewport,
    viewport_shadow_map: ScreenViewport,
}

impl Default for SceneView {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneView {
    /// Empty view with the default configuration.
    ///
    /// Sizes start at zero with an aspect ratio of 1; setups are identity
    /// and the frustum has no planes until the first `update`.
    pub fn new() -> Self {
        Self::with_config(ViewConfig::default())
    }

    pub fn with_config(config: ViewConfig) -> Self {
        Self {
            config,
            setup: ViewSetup::default(),
            setup_before: ViewSetup::default(),
            frustum: ViewFrustum::default(),
            view_size: UVec2::ZERO,
            view_aspect: 1.0,
            shadow_size: UVec2::ZERO,
            shadow_aspect: 1.0,
            viewport: ScreenViewport::default(),
            viewport_shadow_map: ScreenViewport::default(),
        }
    }

    // ===== CONFIGURATION =====

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect at the next update.
    pub fn set_config(&mut self, config: ViewConfig) {
        engine_debug!(SOURCE, "Config changed: {:?}", config);
        self.config = config;
    }

    // ===== SIZES =====

    /// Set the render target size. Aspect ratio becomes width / height.
    ///
    /// A zero height yields a non-finite aspect ratio; it is stored as is.
    pub fn set_size(&mut self, size: UVec2) {
        self.view_size = size;
        self.view_aspect = size.x as f32 / size.y as f32;

        if size.y == 0 {
            engine_warn!(SOURCE, "View height is zero, aspect ratio is {}", self.view_aspect);
        }
        engine_debug!(SOURCE, "View size {}x{} (aspect {})", size.x, size.y, self.view_aspect);
    }

    /// Set the shadow map size. Aspect ratio becomes width / height of the
    /// shadow map itself.
    pub fn set_shadow_map_size(&mut self, size: UVec2) {
        self.shadow_size = size;
        self.shadow_aspect = size.x as f32 / size.y as f32;

        if size.y == 0 {
            engine_warn!(SOURCE, "Shadow map height is zero, aspect ratio is {}", self.shadow_aspect);
        }
        engine_debug!(SOURCE, "Shadow map size {}x{} (aspect {})", size.x, size.y, self.shadow_aspect);
    }

    // ===== VIEWPORTS =====

    /// Store `viewport` clamped to the current view size.
    pub fn set_viewport(&mut self, viewport: ScreenViewport) {
        self.viewport = viewport.clamped_to(self.view_size);

        if self.viewport != viewport {
            engine_trace!(SOURCE, "Viewport {:?} clamped to {:?}", viewport, self.viewport);
        }
    }

    /// Store `viewport` clamped to the current shadow map size.
    pub fn set_viewport_shadow_map(&mut self, viewport: ScreenViewport) {
        self.viewport_shadow_map = viewport.clamped_to(self.shadow_size);

        if self.viewport_shadow_map != viewport {
            engine_trace!(SOURCE, "Shadow viewport {:?} clamped to {:?}", viewport, self.viewport_shadow_map);
        }
    }

    // ===== FRAME UPDATE =====

    /// Move the current setup into `setup_before`, then recompute the
    /// current one from `camera`.
    pub fn update_setup(&mut self, camera: &dyn Camera) {
        self.setup_before = self.setup;
        self.setup.update(camera, &self.config);

        if !self.setup.is_finite() {
            engine_warn!(SOURCE,
                "Degenerate camera (fov {}, aspect {}, near {}, far {}): view matrices are not finite",
                camera.fov_y(), camera.aspect_ratio(), camera.near(), camera.far());
        }
    }

    /// Re-extract the frustum from the current setup, near and far planes
    /// included.
    ///
    /// Callers that need a 4 or 5 plane volume build one with
    /// `ViewFrustum::new` from `view_setup().view_projection_frustum`.
    pub fn update_frustum(&mut self) {
        self.frustum.update(&self.setup.view_projection_frustum, true, true);
    }

    /// Per-frame entry point: setup first, then the frustum built from it.
    pub fn update(&mut self, camera: &dyn Camera) {
        self.update_setup(camera);
        self.update_frustum();

        engine_trace!(SOURCE, "Updated view at {:?} ({} frustum planes)",
            self.setup.view_origin, self.frustum.plane_count());
    }

    // ===== GETTERS =====

    pub fn viewport(&self) -> &ScreenViewport {
        &self.viewport
    }

    pub fn viewport_shadow_map(&self) -> &ScreenViewport {
        &self.viewport_shadow_map
    }

    pub fn size(&self) -> UVec2 {
        self.view_size
    }

    /// View size as floats
    pub fn size_f32(&self) -> Vec2 {
        self.view_size.as_vec2()
    }

    pub fn shadow_map_size(&self) -> UVec2 {
        self.shadow_size
    }

    pub fn shadow_map_size_f32(&self) -> Vec2 {
        self.shadow_size.as_vec2()
    }

    pub fn aspect(&self) -> f32 {
        self.view_aspect
    }

    pub fn shadow_map_aspect(&self) -> f32 {
        self.shadow_aspect
    }

    /// Setup computed by the most recent update
    pub fn view_setup(&self) -> &ViewSetup {
        &self.setup
    }

    /// Setup as it was before the most recent update
    pub fn view_setup_before(&self) -> &ViewSetup {
        &self.setup_before
    }

    /// Frustum of the current setup
    pub fn view_frustum(&self) -> &ViewFrustum {
        &self.frustum
    }
}

#[cfg(test)]
#[path = "scene_view_tests.rs"]
mod tests;
