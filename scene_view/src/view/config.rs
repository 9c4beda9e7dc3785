/// View configuration

use crate::math::DepthRange;

/// Settings a SceneView applies on every update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewConfig {
    /// Device depth convention applied to the canonical projection
    pub depth_range: DepthRange,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            depth_range: DepthRange::ZeroToOne,
        }
    }
}
