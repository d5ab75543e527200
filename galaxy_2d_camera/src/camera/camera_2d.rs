/// Camera2D — orthographic screen-space camera.
///
/// Owns a pixel rectangle (left/right/top/bottom), a depth range and a 2D
/// affine camera transform (position, rotation about Z, scale). Matrices are
/// derived on demand; nothing is cached.
///
/// Conventions follow Vulkan: pixel Y grows downward, NDC Y grows downward,
/// depth is mapped to `[0, 1]`. Matrices are glam column-major and applied to
/// column vectors (`v' = P * V * v`).
///
/// Degenerate bounds (zero width, zero height, `far == near`) are not
/// reported by the transforms: they produce Inf/NaN. Debug builds assert on
/// them; use `validate()` to check a camera explicitly.

use std::f64::consts::TAU;
use glam::{DMat4, DVec2, DVec3, DVec4};
use winit::dpi::PhysicalSize;
use crate::error::{Error, Result};
use super::frustum::Frustum2D;
use super::rect::Rect;
use super::uniform::CameraUniform;
use super::viewport::{Rect2D, Viewport};

const SOURCE: &str = "galaxy2d::Camera2D";

/// Default near plane for cameras built without an explicit depth range.
pub const DEFAULT_NEAR: f64 = -1.0;

/// Default far plane for cameras built without an explicit depth range.
pub const DEFAULT_FAR: f64 = 1.0;

/// Default margin used by `fit_to_bounds` (10% of the box size).
pub const DEFAULT_FIT_PADDING: f64 = 0.1;

/// Default target aspect ratio for `set_viewport`.
pub const DEFAULT_ASPECT_RATIO: f64 = 16.0 / 9.0;

/// Camera configuration.
///
/// Bounds describe the unzoomed screen; `zoom` is applied afterwards with
/// `Camera2D::set_zoom`, which narrows the bounds around their center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2DDesc {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub near: f64,
    pub far: f64,
    /// Camera world offset
    pub position: DVec2,
    /// Rotation about Z in radians (stored as given)
    pub rotation: f64,
    /// Absolute zoom level
    pub zoom: f64,
}

impl Default for Camera2DDesc {
    fn default() -> Self {
        Self {
            left: 0.0,
            right: 800.0,
            top: 0.0,
            bottom: 600.0,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            position: DVec2::ZERO,
            rotation: 0.0,
            zoom: 1.0,
        }
    }
}

/// Result of `Camera2D::transform_pixel`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelTransform {
    /// The input pixel
    pub pixel: DVec2,
    /// `true` iff the pixel lies inside the screen rectangle (edges included)
    pub is_visible: bool,
    /// Normalized device coordinates
    pub ndc: DVec2,
    /// Point under the projection only (camera transform ignored)
    pub world: DVec2,
}

/// 2D orthographic camera.
///
/// A flat value type: all fields are public and may be mutated directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera2D {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub near: f64,
    pub far: f64,
    /// World offset of the camera. z stays 0 for 2D use.
    pub position: DVec3,
    /// Rotation about Z in radians. `rotate` keeps it in `[0, 2π)`.
    pub rotation: f64,
    /// Zoom factor per axis.
    pub scale: DVec3,
}

impl Camera2D {
    /// Create a camera over an explicit screen rectangle with an identity transform.
    pub fn new(left: f64, right: f64, top: f64, bottom: f64, near: f64, far: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
            near,
            far,
            position: DVec3::ZERO,
            rotation: 0.0,
            scale: DVec3::ONE,
        }
    }

    /// Create a UI camera from a top-left pixel origin and a size.
    ///
    /// `bottom = y + height` lies below `top` (Y down).
    pub fn for_ui(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(x, x + width, y, y + height, DEFAULT_NEAR, DEFAULT_FAR)
    }

    /// Create a camera from a descriptor without validating it.
    pub fn from_desc(desc: &Camera2DDesc) -> Self {
        let mut camera = Self::new(desc.left, desc.right, desc.top, desc.bottom, desc.near, desc.far);
        camera.set_position(desc.position);
        camera.set_rotation(desc.rotation);
        camera.set_zoom(desc.zoom);
        camera
    }

    /// Create a camera from a descriptor, rejecting degenerate configurations.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if `desc.zoom` is not strictly positive
    /// - `DegenerateBounds` / `SingularTransform` as reported by `validate()`
    pub fn try_from_desc(desc: &Camera2DDesc) -> Result<Self> {
        if desc.zoom.is_nan() || desc.zoom <= 0.0 {
            let error = Error::InvalidParameter(format!("zoom must be > 0, got {}", desc.zoom));
            crate::camera_error!(SOURCE, "Rejected camera descriptor: {}", error);
            return Err(error);
        }

        let camera = Self::from_desc(desc);
        camera.validate().map_err(|error| {
            crate::camera_error!(SOURCE, "Rejected camera descriptor: {}", error);
            error
        })?;

        crate::camera_debug!(
            SOURCE,
            "Camera created: bounds [{}, {}] x [{}, {}], depth [{}, {}], zoom {}",
            camera.left, camera.right, camera.top, camera.bottom, camera.near, camera.far, desc.zoom
        );
        Ok(camera)
    }

    /// Check the invariants the transforms rely on.
    ///
    /// Never mutates the camera.
    pub fn validate(&self) -> Result<()> {
        let bounds = [self.left, self.right, self.top, self.bottom, self.near, self.far];
        if bounds.iter().any(|value| !value.is_finite()) {
            return Err(Error::DegenerateBounds(format!(
                "non-finite bounds: left {}, right {}, top {}, bottom {}, near {}, far {}",
                self.left, self.right, self.top, self.bottom, self.near, self.far
            )));
        }
        if self.right == self.left {
            return Err(Error::DegenerateBounds(format!("right == left ({})", self.left)));
        }
        if self.bottom == self.top {
            return Err(Error::DegenerateBounds(format!("bottom == top ({})", self.top)));
        }
        if self.far == self.near {
            return Err(Error::DegenerateBounds(format!("far == near ({})", self.near)));
        }

        for (axis, value) in [("x", self.scale.x), ("y", self.scale.y), ("z", self.scale.z)] {
            if value == 0.0 || !value.is_finite() {
                return Err(Error::SingularTransform(format!("scale.{} is {}", axis, value)));
            }
        }

        Ok(())
    }

    #[inline]
    fn debug_assert_bounds(&self) {
        debug_assert!(self.right != self.left, "Camera2D: degenerate width (right == left == {})", self.left);
        debug_assert!(self.bottom != self.top, "Camera2D: degenerate height (bottom == top == {})", self.top);
    }

    // ===== MATRICES =====

    /// Orthographic projection: x in `[left, right]` and y in `[top, bottom]`
    /// to `[-1, 1]`, z in `[near, far]` to `[0, 1]`.
    pub fn projection_matrix(&self) -> DMat4 {
        self.debug_assert_bounds();
        debug_assert!(self.far != self.near, "Camera2D: degenerate depth range (far == near == {})", self.near);

        let width = self.right - self.left;
        let height = self.bottom - self.top;
        let depth = self.far - self.near;

        DMat4::from_cols_array(&[
            2.0 / width, 0.0, 0.0, 0.0,
            0.0, 2.0 / height, 0.0, 0.0,
            0.0, 0.0, 1.0 / depth, 0.0,
            -(self.right + self.left) / width,
            -(self.bottom + self.top) / height,
            -self.near / depth,
            1.0,
        ])
    }

    /// View matrix: `translate(-position) * rotate_z(rotation) * scale(scale)`.
    ///
    /// Rotation and scale are applied to the world as-is, not inverted.
    pub fn view_matrix(&self) -> DMat4 {
        let mut view = DMat4::from_translation(-self.position);
        if self.rotation != 0.0 {
            view *= DMat4::from_rotation_z(self.rotation);
        }
        view * DMat4::from_scale(self.scale)
    }

    /// Combined `projection * view`.
    pub fn view_projection_matrix(&self) -> DMat4 {
        self.projection_matrix() * self.view_matrix()
    }

    // ===== COORDINATE TRANSFORMS =====

    /// Pixel to NDC using the direct linear mapping of the projection.
    pub fn pixel_to_ndc(&self, pixel_x: f64, pixel_y: f64) -> DVec2 {
        self.debug_assert_bounds();
        DVec2::new(
            2.0 * (pixel_x - self.left) / (self.right - self.left) - 1.0,
            2.0 * (pixel_y - self.top) / (self.bottom - self.top) - 1.0,
        )
    }

    /// NDC to pixel; exact inverse of `pixel_to_ndc`.
    pub fn ndc_to_pixel(&self, ndc: DVec2) -> DVec2 {
        DVec2::new(
            self.left + (ndc.x + 1.0) * 0.5 * (self.right - self.left),
            self.top + (ndc.y + 1.0) * 0.5 * (self.bottom - self.top),
        )
    }

    /// Map a pixel through the projection only.
    ///
    /// `world` ignores position, rotation and scale; use `pixel_to_world`
    /// for the camera-aware mapping.
    pub fn transform_pixel(&self, pixel_x: f64, pixel_y: f64) -> PixelTransform {
        let ndc = self.pixel_to_ndc(pixel_x, pixel_y);
        let is_visible = pixel_x >= self.left
            && pixel_x <= self.right
            && pixel_y >= self.top
            && pixel_y <= self.bottom;

        PixelTransform {
            pixel: DVec2::new(pixel_x, pixel_y),
            is_visible,
            ndc,
            world: unproject(&self.projection_matrix().inverse(), ndc),
        }
    }

    /// Pixel to world through the inverse view-projection.
    pub fn pixel_to_world(&self, pixel_x: f64, pixel_y: f64) -> DVec2 {
        let ndc = self.pixel_to_ndc(pixel_x, pixel_y);
        unproject(&self.view_projection_matrix().inverse(), ndc)
    }

    /// World to pixel through the view-projection.
    pub fn world_to_pixel(&self, world: DVec2) -> DVec2 {
        let clip = self.view_projection_matrix() * DVec4::new(world.x, world.y, 0.0, 1.0);
        self.ndc_to_pixel(DVec2::new(clip.x / clip.w, clip.y / clip.w))
    }

    // ===== TRANSFORM CONTROL =====

    /// Set the screen rectangle explicitly.
    pub fn set_bounds(&mut self, left: f64, right: f64, top: f64, bottom: f64) {
        self.left = left;
        self.right = right;
        self.top = top;
        self.bottom = bottom;
    }

    /// Set the depth range mapped to `[0, 1]`.
    pub fn set_depth_range(&mut self, near: f64, far: f64) {
        self.near = near;
        self.far = far;
    }

    /// Resize the screen rectangle, keeping `left`/`top`.
    pub fn set_screen_size(&mut self, width: f64, height: f64) {
        self.right = self.left + width;
        self.bottom = self.top + height;
    }

    /// Follow a window resize (e.g. on swapchain recreation).
    ///
    /// A minimized window reports a zero size; the camera is left untouched.
    pub fn resize_to_window(&mut self, size: PhysicalSize<u32>) {
        if size.width == 0 || size.height == 0 {
            crate::camera_debug!(SOURCE, "Ignoring zero-sized window ({}x{})", size.width, size.height);
            return;
        }
        self.set_screen_size(f64::from(size.width), f64::from(size.height));
    }

    pub fn translate(&mut self, delta: DVec2) {
        self.position.x += delta.x;
        self.position.y += delta.y;
    }

    /// Set x/y absolutely; z is forced to 0.
    pub fn set_position(&mut self, position: DVec2) {
        self.position = position.extend(0.0);
    }

    /// Accumulate a rotation and wrap the result into `[0, 2π)`.
    pub fn rotate(&mut self, angle_delta: f64) {
        let wrapped = (self.rotation + angle_delta).rem_euclid(TAU);
        // rem_euclid rounds tiny negative inputs up to exactly TAU
        self.rotation = if wrapped >= TAU { 0.0 } else { wrapped };
    }

    /// Set the rotation as given. Unlike `rotate`, no wrapping is applied.
    pub fn set_rotation(&mut self, angle: f64) {
        self.rotation = angle;
    }

    /// Zoom by `factor` relative to the current state.
    ///
    /// Multiplies `scale.x`/`scale.y` by `factor` and shrinks the screen
    /// rectangle around its center by the same factor. A non-positive
    /// (or NaN) factor is ignored.
    pub fn zoom(&mut self, factor: f64) {
        if factor.is_nan() || factor <= 0.0 {
            return;
        }

        self.scale.x *= factor;
        self.scale.y *= factor;

        let center = self.viewport_center();
        let half_size = self.viewport_size() / factor * 0.5;
        self.left = center.x - half_size.x;
        self.right = center.x + half_size.x;
        self.top = center.y - half_size.y;
        self.bottom = center.y + half_size.y;
    }

    /// Reset the scale to 1 then zoom by `level`.
    ///
    /// The screen rectangle is not reset; it narrows from its current size.
    pub fn set_zoom(&mut self, level: f64) {
        self.scale = DVec3::ONE;
        self.zoom(level);
    }

    /// Current zoom level (x scale).
    pub fn zoom_level(&self) -> f64 {
        self.scale.x
    }

    /// Reset position, rotation, scale and the screen origin.
    ///
    /// `right`/`bottom` are kept: the viewport size survives the reset.
    pub fn reset_transform(&mut self) {
        self.position = DVec3::ZERO;
        self.rotation = 0.0;
        self.scale = DVec3::ONE;
        self.left = 0.0;
        self.top = 0.0;
    }

    /// Center the camera on a world box and zoom so the padded box fits.
    ///
    /// `padding` is a fraction of the box size (`DEFAULT_FIT_PADDING` = 10%).
    /// The more constraining axis decides the zoom. No guard: an inverted box
    /// gives a negative zoom (scale reset to 1, bounds kept) and an empty box
    /// an infinite one.
    pub fn fit_to_bounds(&mut self, min_bounds: DVec2, max_bounds: DVec2, padding: f64) {
        self.set_position((min_bounds + max_bounds) * 0.5);

        let size = (max_bounds - min_bounds) * (1.0 + padding);
        let viewport = self.viewport_size();
        let required_scale = (size.x / viewport.x).max(size.y / viewport.y);

        self.set_zoom(1.0 / required_scale);
        crate::camera_trace!(SOURCE, "fit_to_bounds: zoom {}", 1.0 / required_scale);
    }

    /// Resize the screen rectangle, optionally locking the aspect ratio.
    ///
    /// With `keep_aspect_ratio`, a region wider than `target_aspect_ratio`
    /// keeps `width` and derives the height (recentered vertically); otherwise
    /// it keeps `height` and derives the width (recentered horizontally).
    pub fn set_viewport(&mut self, width: f64, height: f64, keep_aspect_ratio: bool, target_aspect_ratio: f64) {
        if !keep_aspect_ratio {
            self.set_screen_size(width, height);
            return;
        }

        if width / height > target_aspect_ratio {
            let new_height = width / target_aspect_ratio;
            let center_y = (self.top + self.bottom) * 0.5;
            self.right = self.left + width;
            self.top = center_y - new_height * 0.5;
            self.bottom = center_y + new_height * 0.5;
        } else {
            let new_width = height * target_aspect_ratio;
            let center_x = (self.left + self.right) * 0.5;
            self.left = center_x - new_width * 0.5;
            self.right = center_x + new_width * 0.5;
            self.bottom = self.top + height;
        }

        crate::camera_trace!(
            SOURCE,
            "set_viewport: bounds [{}, {}] x [{}, {}]",
            self.left, self.right, self.top, self.bottom
        );
    }

    // ===== QUERIES =====

    /// Center of the screen rectangle in pixels.
    pub fn viewport_center(&self) -> DVec2 {
        DVec2::new((self.left + self.right) * 0.5, (self.top + self.bottom) * 0.5)
    }

    /// Size of the screen rectangle in pixels.
    pub fn viewport_size(&self) -> DVec2 {
        DVec2::new(self.right - self.left, self.bottom - self.top)
    }

    // ===== VISIBILITY =====

    /// World-space culling planes of the current view-projection.
    pub fn frustum(&self) -> Frustum2D {
        Frustum2D::from_view_projection(&self.view_projection_matrix())
    }

    pub fn is_world_point_visible(&self, world: DVec2) -> bool {
        self.frustum().contains_point(world)
    }

    /// World-space box enclosing the visible screen (rotation included).
    pub fn visible_world_rect(&self) -> Rect {
        let inverse = self.view_projection_matrix().inverse();
        Rect::from_points(
            [
                DVec2::new(-1.0, -1.0),
                DVec2::new(1.0, -1.0),
                DVec2::new(-1.0, 1.0),
                DVec2::new(1.0, 1.0),
            ]
            .into_iter()
            .map(|corner| unproject(&inverse, corner)),
        )
    }

    // ===== RENDERER HAND-OFF =====

    /// Vulkan dynamic viewport covering the screen rectangle.
    pub fn viewport(&self) -> Viewport {
        Viewport {
            x: self.left as f32,
            y: self.top as f32,
            width: (self.right - self.left) as f32,
            height: (self.bottom - self.top) as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }

    /// Scissor rectangle: the viewport rounded to whole pixels.
    pub fn scissor(&self) -> Rect2D {
        Rect2D {
            x: self.left.round() as i32,
            y: self.top.round() as i32,
            width: (self.right - self.left).round().max(0.0) as u32,
            height: (self.bottom - self.top).round().max(0.0) as u32,
        }
    }

    /// Matrices narrowed to f32 for a uniform buffer upload.
    pub fn uniform(&self) -> CameraUniform {
        CameraUniform::new(&self.view_matrix(), &self.projection_matrix())
    }
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::from_desc(&Camera2DDesc::default())
    }
}

/// Apply an inverse matrix to an NDC point on the z = 0 plane, with perspective divide.
fn unproject(inverse: &DMat4, ndc: DVec2) -> DVec2 {
    let point = *inverse * DVec4::new(ndc.x, ndc.y, 0.0, 1.0);
    DVec2::new(point.x / point.w, point.y / point.w)
}

#[cfg(test)]
#[path = "camera_2d_tests.rs"]
mod tests;
