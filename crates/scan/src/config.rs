use {crate::*, std::time::Duration, video::Constraints};

/// Configuration for a scan session.
#[derive(Clone, Debug)]
pub struct ScanConfig {
    frame_interval: Duration,
    watchdog: Duration,
    preferred: Constraints,
    fallback: Constraints,
    inversion: Inversion,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            watchdog: Duration::from_secs(1),
            preferred: Constraints::preferred(),
            fallback: Constraints::any(),
            inversion: Inversion::DontInvert,
        }
    }
}

impl ScanConfig {
    /// Set the delay between decode ticks (one display refresh by default).
    pub fn with_frame_interval(mut self, frame_interval: Duration) -> Self {
        self.frame_interval = frame_interval;
        self
    }

    /// Set how long after playback starts the stream must have a live track.
    pub fn with_watchdog(mut self, watchdog: Duration) -> Self {
        self.watchdog = watchdog;
        self
    }

    /// Set the constraints tried first.
    pub fn with_preferred(mut self, preferred: Constraints) -> Self {
        self.preferred = preferred;
        self
    }

    /// Set the constraints tried when the preferred ones fail.
    pub fn with_fallback(mut self, fallback: Constraints) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_inversion(mut self, inversion: Inversion) -> Self {
        self.inversion = inversion;
        self
    }

    // Getters
    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn watchdog(&self) -> Duration {
        self.watchdog
    }

    pub fn preferred(&self) -> &Constraints {
        &self.preferred
    }

    pub fn fallback(&self) -> &Constraints {
        &self.fallback
    }

    pub fn inversion(&self) -> Inversion {
        self.inversion
    }
}
