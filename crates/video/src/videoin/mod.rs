use {
    crate::*,
    base::Vec2,
    image::Image,
    tokio::{
        sync::{oneshot, watch},
        task::{JoinHandle, spawn_blocking},
    },
};

/// A blocking capture backend driven by a `VideoIn` worker thread.
pub trait VideoInDevice: Send + 'static {
    /// Open the device, returning the frame size that was actually set.
    fn open(&mut self, constraints: &Constraints) -> Result<Vec2<usize>, VideoError>;
    /// Close the device, if open.
    fn close(&mut self);
    /// Block until the next frame is available.
    fn blocking_capture(&mut self) -> Result<Image, VideoError>;
}

/// A `MediaStream` backed by a capture worker on the blocking pool.
///
/// The device is opened on the worker thread and stays there; frames are
/// published through a watch channel so readers only ever see the newest
/// one. The single video track doubles as the worker's cancel flag.
pub struct VideoIn {
    receiver: watch::Receiver<Option<VideoFrame>>,
    track: Track,
    size: Vec2<usize>,
    join_handle: Option<JoinHandle<()>>,
}

impl VideoIn {
    pub async fn open(
        mut device: Box<dyn VideoInDevice>,
        constraints: Constraints,
    ) -> Result<Self, VideoError> {
        let (sender, receiver) = watch::channel::<Option<VideoFrame>>(None);
        let track = Track::new();

        // device.open() must run on the same OS thread as blocking_capture()
        let (init_tx, init_rx) = oneshot::channel::<Result<Vec2<usize>, VideoError>>();

        let join_handle = spawn_blocking({
            let track = track.clone();
            move || {
                let size = match device.open(&constraints) {
                    Ok(size) => size,
                    Err(error) => {
                        track.end();
                        let _ = init_tx.send(Err(error));
                        return;
                    }
                };
                if init_tx.send(Ok(size)).is_err() {
                    // the caller stopped waiting for us
                    track.end();
                    device.close();
                    return;
                }

                log::info!("video worker: capturing at {}", size);
                let mut index = 0;
                while track.is_live() {
                    match device.blocking_capture() {
                        Ok(image) => {
                            if sender.send(Some(VideoFrame::new(image, index))).is_err() {
                                break;
                            }
                            index += 1;
                        }
                        Err(error) => {
                            log::error!("video worker: capture failed: {}", error);
                            track.end();
                            break;
                        }
                    }
                }
                device.close();
                log::debug!("video worker: closed after {} frames", index);
            }
        });

        let size = init_rx
            .await
            .map_err(|_| VideoError::Device("worker thread died during open".to_string()))??;

        Ok(Self {
            receiver,
            track,
            size,
            join_handle: Some(join_handle),
        })
    }

    /// Frame size negotiated with the device.
    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn track(&self) -> &Track {
        &self.track
    }
}

impl MediaStream for VideoIn {
    fn try_recv(&mut self) -> Option<VideoFrame> {
        match self.receiver.has_changed() {
            Ok(true) => self.receiver.borrow_and_update().clone(),
            _ => None,
        }
    }

    fn tracks(&self) -> Vec<Track> {
        vec![self.track.clone()]
    }

    fn stop(&mut self) {
        self.track.stop();
    }
}

impl Drop for VideoIn {
    fn drop(&mut self) {
        self.track.stop();
        // blocking tasks cannot be aborted, the worker exits on its next frame
        self.join_handle.take();
    }
}

#[cfg(feature = "v4l2")]
pub mod v4l2;
