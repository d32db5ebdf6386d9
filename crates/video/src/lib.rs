//! Camera capture for the scanner.
//!
//! `MediaDevices` hands out `MediaStream`s for a set of `Constraints`.
//! A stream owns one or more `Track`s and produces `VideoFrame`s; a
//! `VideoSurface` binds a stream and exposes the newest frame.

mod constraints;
pub use constraints::*;

mod error;
pub use error::*;

mod stream;
pub use stream::*;

mod surface;
pub use surface::*;

mod track;
pub use track::*;

mod videoframe;
pub use videoframe::*;

pub mod videoin;
pub use videoin::{VideoIn, VideoInDevice};

#[cfg(feature = "v4l2")]
pub use videoin::v4l2::V4l2Devices;
