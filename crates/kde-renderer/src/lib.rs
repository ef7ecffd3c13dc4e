//! Color rendering for kernel density grids.
//!
//! - Gradient registry: closed set of named 256-entry color ramps
//! - Value-to-color quantization into planar RGBA buffers
//! - PNG encoding of the resulting pixels

pub mod buffer;
pub mod gradient;
pub mod png;
pub mod tables;

pub use buffer::{create_rgba_buffer, ColorBuffer, ColorScale};
pub use gradient::{Color, GradientTable, GradientType};
