//! Rendering
//!
//! The simulation draws through the `Surface` trait. `DrawList` records
//! commands (tests, headless runs) and can tessellate them into vertices;
//! `CanvasSurface` draws onto a browser 2D canvas.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw_list;
pub mod shapes;
pub mod surface;
pub mod vertex;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;
pub use draw_list::{DrawCommand, DrawList};
pub use surface::{Color, Surface, css_color};
pub use vertex::{Vertex, colors};
