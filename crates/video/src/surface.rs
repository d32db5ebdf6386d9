use {crate::*, base::Vec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    HaveNothing,
    HaveCurrentData,
}

/// An off-screen playback surface for one bound stream.
///
/// While playing, `refresh()` pulls the newest frame out of the stream and
/// keeps it as the current frame until a newer one arrives.
#[derive(Default)]
pub struct VideoSurface {
    stream: Option<Box<dyn MediaStream>>,
    current: Option<VideoFrame>,
    playing: bool,
}

impl VideoSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `stream`, releasing whatever was bound before.
    pub fn bind(&mut self, stream: Box<dyn MediaStream>) {
        self.release();
        self.stream = Some(stream);
    }

    pub fn is_bound(&self) -> bool {
        self.stream.is_some()
    }

    /// Start playback of the bound stream.
    ///
    /// Track liveness is not checked here. A stream that was granted
    /// already ended plays, but never yields a frame.
    pub fn play(&mut self) -> Result<(), VideoError> {
        if self.stream.is_none() {
            return Err(VideoError::Stream("no stream bound".to_string()));
        }
        self.playing = true;
        Ok(())
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Pull the newest frame, if playing, and report readiness.
    pub fn refresh(&mut self) -> ReadyState {
        if self.playing {
            if let Some(frame) = self.stream.as_mut().and_then(|s| s.try_recv()) {
                self.current = Some(frame);
            }
        }
        self.ready_state()
    }

    pub fn ready_state(&self) -> ReadyState {
        match self.current {
            Some(_) => ReadyState::HaveCurrentData,
            None => ReadyState::HaveNothing,
        }
    }

    pub fn current_frame(&self) -> Option<&VideoFrame> {
        self.current.as_ref()
    }

    /// Native size of the current frame, zero before the first frame.
    pub fn video_size(&self) -> Vec2<usize> {
        self.current
            .as_ref()
            .map(|frame| frame.color.size)
            .unwrap_or_default()
    }

    pub fn has_live_track(&self) -> bool {
        self.stream
            .as_ref()
            .is_some_and(|stream| stream.has_live_track())
    }

    /// Stop every track of the bound stream and unbind it. Idempotent.
    pub fn release(&mut self) {
        self.playing = false;
        self.current = None;
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
        }
    }
}

impl Drop for VideoSurface {
    fn drop(&mut self) {
        self.release();
    }
}
