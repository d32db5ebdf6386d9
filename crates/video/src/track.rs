use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackState {
    Live,
    Ended,
}

/// Shared handle onto one video track.
///
/// All clones observe the same state. A track starts `Live` and moves to
/// `Ended` exactly once, either because its source stopped producing or
/// because someone called `stop()`.
#[derive(Debug, Clone)]
pub struct Track {
    live: Arc<AtomicBool>,
}

impl Default for Track {
    fn default() -> Self {
        Self::new()
    }
}

impl Track {
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn ready_state(&self) -> TrackState {
        if self.is_live() {
            TrackState::Live
        } else {
            TrackState::Ended
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Release the track. Safe to call any number of times.
    pub fn stop(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Mark the track ended because its source went away.
    pub fn end(&self) {
        if self.live.swap(false, Ordering::AcqRel) {
            log::debug!("track ended by source");
        }
    }
}
