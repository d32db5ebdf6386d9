//! Pixel buffers for the scanning pipeline.
//!
//! Camera frames arrive in whatever format the device produces (`Image`),
//! get drawn into an RGBA `Raster`, and the raster is what QR decoding reads.

mod error;
pub use error::*;

mod image;
pub use image::*;

mod pixelformat;
pub use pixelformat::*;

mod raster;
pub use raster::*;

mod rgba;
pub use rgba::*;

mod codec;
pub use codec::*;
