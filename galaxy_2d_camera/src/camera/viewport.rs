//! Viewport and scissor rectangles handed to the renderer.
//!
//! Field layout matches `VkViewport` / `VkRect2D` so a backend can copy
//! them straight into `vkCmdSetViewport` / `vkCmdSetScissor`.

/// Viewport dimensions and depth range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

/// 2D rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect2D {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}
