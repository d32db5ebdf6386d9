//! One-shot QR scanning from a live camera.
//!
//! A `Session` acquires a camera through `video::MediaDevices`, decodes
//! frames with a `QrDecoder` until the first payload appears, hands that
//! payload to the caller exactly once and releases the camera.

mod config;
pub use config::*;

mod decoder;
pub use decoder::*;

mod session;
pub use session::*;

mod status;
pub use status::*;
