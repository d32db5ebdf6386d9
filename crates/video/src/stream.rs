use {crate::*, std::future::Future};

/// A live source of video frames, owned by whoever acquired it.
///
/// Dropping a stream must stop all of its tracks.
pub trait MediaStream: Send {
    /// Take the newest frame produced since the last call, if any.
    fn try_recv(&mut self) -> Option<VideoFrame>;

    fn tracks(&self) -> Vec<Track>;

    /// Stop every track. Idempotent.
    fn stop(&mut self) {
        for track in self.tracks() {
            track.stop();
        }
    }

    fn has_live_track(&self) -> bool {
        self.tracks().iter().any(Track::is_live)
    }
}

/// The platform's media capture capability.
pub trait MediaDevices: Send + Sync + 'static {
    /// Whether any capture API exists on this platform.
    fn is_supported(&self) -> bool {
        true
    }

    /// Acquire a video stream satisfying `constraints`.
    ///
    /// May stay pending for as long as the platform needs, e.g. while a
    /// permission prompt is open.
    fn get_user_media(
        &self,
        constraints: &Constraints,
    ) -> impl Future<Output = Result<Box<dyn MediaStream>, VideoError>> + Send;
}
