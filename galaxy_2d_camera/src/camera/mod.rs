//! Camera module — 2D orthographic camera and its helpers.
//!
//! `Camera2D` is a plain value type owned and driven by the caller.
//! The other types are hand-off data for the renderer (viewport, scissor,
//! uniform block) and for visibility culling (frustum, rect).

mod camera_2d;
mod frustum;
mod rect;
mod uniform;
mod viewport;

pub use camera_2d::{
    Camera2D, Camera2DDesc, PixelTransform,
    DEFAULT_NEAR, DEFAULT_FAR, DEFAULT_FIT_PADDING, DEFAULT_ASPECT_RATIO,
};
pub use frustum::{
    Frustum2D, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_TOP, PLANE_BOTTOM,
};
pub use rect::Rect;
pub use uniform::CameraUniform;
pub use viewport::{Viewport, Rect2D};
