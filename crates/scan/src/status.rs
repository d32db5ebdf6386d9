/// Shown when the platform has no camera API.
pub const UNSUPPORTED_MESSAGE: &str = "Camera access is not supported on this device.";

/// Shown when a granted stream has no live track once the watchdog fires.
pub const PREVIEW_FAILED_MESSAGE: &str = "Camera preview failed to load. Please retry.";

/// Shown when the camera stops producing while scanning.
pub const STREAM_ENDED_MESSAGE: &str = "Camera stream ended.";

/// Shown when decoding a frame crashed.
pub const FRAME_FAILED_MESSAGE: &str = "Camera frame could not be processed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Idle,
    /// Camera requested, not yet confirmed live.
    Preparing,
    /// Live track confirmed, decoding.
    Active,
}

/// Everything a UI needs to render a scan session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Status {
    pub state: SessionState,
    /// Waiting for the camera to open or to be confirmed live.
    pub preparing: bool,
    /// A stream is bound and playing, so a preview can be shown.
    pub camera_ready: bool,
    /// Last failure, cleared by the next `start()`.
    pub error: Option<String>,
}
