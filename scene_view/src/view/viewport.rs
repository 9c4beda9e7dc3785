/// Screen viewport and scissor rectangle, clamped to a view's pixel size.

use glam::UVec2;

/// Integer pixel rectangle restricting rasterization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScissorRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl ScissorRect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Rectangle covering `size` from the origin.
    pub fn from_size(size: UVec2) -> Self {
        Self {
            left: 0,
            top: 0,
            right: to_i32(size.x),
            bottom: to_i32(size.y),
        }
    }

    /// Width in pixels, 0 when inverted
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left).max(0) as u32
    }

    /// Height in pixels, 0 when inverted
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top).max(0) as u32
    }

    /// Clamp every edge into [0, size].
    pub fn clamped_to(&self, size: UVec2) -> Self {
        let max_x = to_i32(size.x);
        let max_y = to_i32(size.y);

        Self {
            left: self.left.clamp(0, max_x),
            top: self.top.clamp(0, max_y),
            right: self.right.clamp(0, max_x),
            bottom: self.bottom.clamp(0, max_y),
        }
    }
}

/// Viewport transform (top-left origin, pixel units) plus depth range and scissor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenViewport {
    /// Top-left X
    pub x: f32,
    /// Top-left Y
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
    pub scissor: ScissorRect,
}

impl ScreenViewport {
    /// Viewport with full depth range and a scissor covering the same pixels.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            min_depth: 0.0,
            max_depth: 1.0,
            scissor: ScissorRect {
                left: x.floor() as i32,
                top: y.floor() as i32,
                right: (x + width).ceil() as i32,
                bottom: (y + height).ceil() as i32,
            },
        }
    }

    /// Viewport covering a whole target of `size` pixels.
    pub fn from_size(size: UVec2) -> Self {
        Self {
            scissor: ScissorRect::from_size(size),
            ..Self::new(0.0, 0.0, size.x as f32, size.y as f32)
        }
    }

    /// Copy with every field clamped independently:
    /// depth bounds to [0, 1], x/width to [0, size.x], y/height to [0, size.y],
    /// scissor edges to [0, size].
    ///
    /// Total (NaN clamps to 0) and idempotent.
    pub fn clamped_to(&self, size: UVec2) -> Self {
        let max_x = size.x as f32;
        let max_y = size.y as f32;

        Self {
            x: clamp_total(self.x, max_x),
            y: clamp_total(self.y, max_y),
            width: clamp_total(self.width, max_x),
            height: clamp_total(self.height, max_y),
            min_depth: clamp_total(self.min_depth, 1.0),
            max_depth: clamp_total(self.max_depth, 1.0),
            scissor: self.scissor.clamped_to(size),
        }
    }
}

/// Clamp into [0, max]; `f32::max` drops NaN so the result is always in range.
#[inline]
fn clamp_total(value: f32, max: f32) -> f32 {
    value.max(0.0).min(max)
}

#[inline]
fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
#[path = "viewport_tests.rs"]
mod tests;
