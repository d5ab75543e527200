/*!
# Galaxy 2D Camera

Orthographic 2D camera for the Galaxy3D Vulkan renderer.

`Camera2D` maps between three spaces:

- **Pixel space**: screen coordinates, origin top-left, Y down
- **NDC**: `[-1, 1]` on X/Y (Y down, Vulkan convention), depth `[0, 1]`
- **World space**: where 2D content is authored, before the camera transform

The camera is a plain `Copy` value. It owns no GPU resources; the renderer
pulls matrices (`uniform()`), the viewport and the scissor from it each frame.

## Example

```no_run
use galaxy_2d_camera::galaxy2d::Camera2D;
use galaxy_2d_camera::glam::DVec2;

let mut camera = Camera2D::for_ui(0.0, 0.0, 1280.0, 720.0);
camera.translate(DVec2::new(64.0, 0.0));
camera.zoom(2.0);

let world = camera.pixel_to_world(640.0, 360.0);
let pixel = camera.world_to_pixel(world);
assert!((pixel - DVec2::new(640.0, 360.0)).length() < 1e-4);
```
*/

// Internal modules
mod error;
pub mod log;
pub mod camera;

// Main galaxy2d namespace module
pub mod galaxy2d {
    // Error types
    pub use crate::error::{Error, Result};

    // Camera types
    pub use crate::camera::*;

    // Logging sub-module (types and logger slot, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger, set_logger, reset_logger};
    }
}

// Re-export math library at crate root
pub use glam;
