use {
    crate::*,
    base::Epoch,
    image::Raster,
    std::sync::{Arc, Mutex, MutexGuard},
    tokio::{
        sync::watch,
        task::{JoinHandle, spawn_blocking},
    },
    video::{MediaDevices, ReadyState, VideoSurface},
};

type OnSuccess = Box<dyn FnOnce(String) + Send + 'static>;

struct Inner {
    status: Status,
    surface: VideoSurface,
    // taken while a decode is in flight
    raster: Option<Raster>,
    frame_tick: Option<JoinHandle<()>>,
    watchdog: Option<JoinHandle<()>>,
    on_success: Option<OnSuccess>,
}

struct Shared<M, D> {
    devices: M,
    decoder: D,
    config: ScanConfig,
    // stamps every scheduled task; advanced on every teardown
    epoch: Epoch,
    inner: Mutex<Inner>,
    status_tx: watch::Sender<Status>,
}

/// One camera scan at a time, reporting at most one payload per run.
///
/// `start()` moves the session from `Idle` to `Preparing` and acquires a
/// camera in the background. Frames are decoded on a fixed tick until a
/// payload is found, `stop()` is called, the session is dropped, or the
/// camera fails. Every one of those ends in `Idle` with the camera
/// released; failures leave a message in `Status::error`.
///
/// All scheduled work (acquisition, decode ticks, the startup watchdog) is
/// stamped with the run it belongs to and does nothing once that run has
/// been torn down.
pub struct Session<M: MediaDevices, D: QrDecoder> {
    shared: Arc<Shared<M, D>>,
}

impl<M: MediaDevices, D: QrDecoder> Session<M, D> {
    pub fn new(devices: M, decoder: D, config: ScanConfig) -> Self {
        let (status_tx, _) = watch::channel(Status::default());
        Self {
            shared: Arc::new(Shared {
                devices,
                decoder,
                config,
                epoch: Epoch::new(),
                inner: Mutex::new(Inner {
                    status: Status::default(),
                    surface: VideoSurface::new(),
                    raster: Some(Raster::new()),
                    frame_tick: None,
                    watchdog: None,
                    on_success: None,
                }),
                status_tx,
            }),
        }
    }

    /// Begin scanning. `on_success` receives the first decoded payload.
    ///
    /// Does nothing while a run is already preparing or active. Failures
    /// are reported through `status()`, never returned.
    ///
    /// # Panics
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<F>(&self, on_success: F)
    where
        F: FnOnce(String) + Send + 'static,
    {
        let shared = &self.shared;
        let mut inner = shared.lock();

        if inner.status.state != SessionState::Idle {
            log::debug!("start ignored, session is {:?}", inner.status.state);
            return;
        }

        if !shared.devices.is_supported() {
            log::error!("no camera capability on this platform");
            inner.status.error = Some(UNSUPPORTED_MESSAGE.to_string());
            shared.publish(&inner);
            return;
        }

        let epoch = shared.epoch.current();
        inner.status = Status {
            state: SessionState::Preparing,
            preparing: true,
            camera_ready: false,
            error: None,
        };
        inner.on_success = Some(Box::new(on_success));
        shared.publish(&inner);
        drop(inner);

        log::info!("scan session {}: acquiring camera", epoch);
        tokio::spawn(Shared::acquire(Arc::clone(shared), epoch));
    }

    /// Cancel the current run, if any, and release the camera.
    ///
    /// Idempotent and callable from any state. The last error message is kept.
    pub fn stop(&self) {
        self.shared.stop();
    }

    pub fn status(&self) -> Status {
        self.shared.lock().status.clone()
    }

    /// Watch every status change.
    pub fn subscribe(&self) -> watch::Receiver<Status> {
        self.shared.status_tx.subscribe()
    }

    pub fn state(&self) -> SessionState {
        self.shared.lock().status.state
    }

    pub fn error(&self) -> Option<String> {
        self.shared.lock().status.error.clone()
    }

    pub fn is_preparing(&self) -> bool {
        self.shared.lock().status.preparing
    }

    pub fn is_camera_ready(&self) -> bool {
        self.shared.lock().status.camera_ready
    }

    /// Number of scheduled frame ticks and watchdogs still pending (0, 1 or 2).
    pub fn pending_tasks(&self) -> usize {
        let inner = self.shared.lock();
        inner.frame_tick.is_some() as usize + inner.watchdog.is_some() as usize
    }

    /// Whether a camera stream is currently bound.
    pub fn has_stream(&self) -> bool {
        self.shared.lock().surface.is_bound()
    }

    pub fn config(&self) -> &ScanConfig {
        &self.shared.config
    }
}

impl<M: MediaDevices, D: QrDecoder> Drop for Session<M, D> {
    fn drop(&mut self) {
        self.shared.stop();
    }
}

impl<M: MediaDevices, D: QrDecoder> Shared<M, D> {
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn publish(&self, inner: &Inner) {
        self.status_tx.send_replace(inner.status.clone());
    }

    fn stop(&self) {
        let mut inner = self.lock();
        self.teardown(&mut inner);
        self.publish(&inner);
    }

    // release everything and invalidate all tasks of the current run
    fn teardown(&self, inner: &mut Inner) {
        self.epoch.advance();
        if let Some(handle) = inner.watchdog.take() {
            handle.abort();
        }
        if let Some(handle) = inner.frame_tick.take() {
            handle.abort();
        }
        inner.surface.release();
        inner.on_success = None;
        inner.status.state = SessionState::Idle;
        inner.status.preparing = false;
        inner.status.camera_ready = false;
    }

    fn fail(&self, inner: &mut Inner, message: String) {
        self.teardown(inner);
        inner.status.error = Some(message);
        self.publish(inner);
    }

    async fn acquire(self: Arc<Self>, epoch: u64) {
        let stream = match self.devices.get_user_media(self.config.preferred()).await {
            Ok(stream) => Ok(stream),
            Err(error) => {
                log::warn!("preferred camera unavailable, falling back to any camera: {}", error);
                if !self.epoch.is_current(epoch) {
                    return;
                }
                self.devices.get_user_media(self.config.fallback()).await
            }
        };

        let mut inner = self.lock();
        let mut stream = match stream {
            Ok(stream) => stream,
            Err(error) => {
                log::error!("camera error: {}", error);
                if self.epoch.is_current(epoch) {
                    self.fail(&mut inner, error.to_string());
                }
                return;
            }
        };

        if !self.epoch.is_current(epoch) {
            log::info!("scan session {}: cancelled during acquisition, releasing camera", epoch);
            stream.stop();
            return;
        }

        inner.surface.bind(stream);
        if let Err(error) = inner.surface.play() {
            log::error!("camera error: {}", error);
            self.fail(&mut inner, error.to_string());
            return;
        }

        inner.status.camera_ready = true;
        inner.frame_tick = Some(Self::schedule_tick(&self, epoch));
        inner.watchdog = Some(Self::schedule_watchdog(&self, epoch));
        self.publish(&inner);
        log::info!("scan session {}: camera playing", epoch);
    }

    fn schedule_tick(this: &Arc<Self>, epoch: u64) -> JoinHandle<()> {
        let this = Arc::clone(this);
        tokio::spawn(async move {
            tokio::time::sleep(this.config.frame_interval()).await;
            Self::tick(this, epoch).await;
        })
    }

    fn schedule_watchdog(this: &Arc<Self>, epoch: u64) -> JoinHandle<()> {
        let this = Arc::clone(this);
        tokio::spawn(async move {
            tokio::time::sleep(this.config.watchdog()).await;
            this.verify_live(epoch);
        })
    }

    fn verify_live(&self, epoch: u64) {
        let mut inner = self.lock();
        if !self.epoch.is_current(epoch) || !inner.surface.is_bound() {
            return;
        }

        if !inner.surface.has_live_track() {
            log::error!("scan session {}: camera stream is not active", epoch);
            self.fail(&mut inner, PREVIEW_FAILED_MESSAGE.to_string());
            return;
        }

        inner.watchdog = None;
        inner.status.state = SessionState::Active;
        inner.status.preparing = false;
        self.publish(&inner);
        log::debug!("scan session {}: camera confirmed live", epoch);
    }

    async fn tick(this: Arc<Self>, epoch: u64) {
        let (frame, mut raster) = {
            let mut inner = this.lock();
            if !this.epoch.is_current(epoch) {
                return;
            }

            if inner.status.state == SessionState::Active && !inner.surface.has_live_track() {
                log::error!("scan session {}: camera stream ended while scanning", epoch);
                this.fail(&mut inner, STREAM_ENDED_MESSAGE.to_string());
                return;
            }

            let frame = match inner.surface.refresh() {
                ReadyState::HaveCurrentData => inner.surface.current_frame().cloned(),
                ReadyState::HaveNothing => None,
            };
            let Some(frame) = frame else {
                inner.frame_tick = Some(Self::schedule_tick(&this, epoch));
                return;
            };
            (frame, inner.raster.take().unwrap_or_default())
        };

        let inversion = this.config.inversion();
        let decoded = spawn_blocking({
            let this = Arc::clone(&this);
            move || {
                let payload = match raster.draw(&frame.color) {
                    Ok(()) => this.decoder.decode(raster.data(), raster.size(), inversion),
                    Err(error) => {
                        log::debug!("frame {} unreadable: {}", frame.index, error);
                        None
                    }
                };
                (raster, payload)
            }
        })
        .await;

        let mut inner = this.lock();
        let payload = match decoded {
            Ok((raster, payload)) => {
                // the raster outlives runs, even stale ones
                if inner.raster.is_none() {
                    inner.raster = Some(raster);
                }
                if !this.epoch.is_current(epoch) {
                    return;
                }
                payload
            }
            Err(_) if !this.epoch.is_current(epoch) => return,
            Err(error) => {
                log::error!("scan session {}: decode failed: {}", epoch, error);
                this.fail(&mut inner, FRAME_FAILED_MESSAGE.to_string());
                return;
            }
        };

        match payload {
            Some(payload) if !payload.is_empty() => {
                let on_success = inner.on_success.take();
                this.teardown(&mut inner);
                this.publish(&inner);
                drop(inner);
                log::info!("scan session {}: decoded {:?}", epoch, payload);
                if let Some(on_success) = on_success {
                    on_success(payload);
                }
            }
            _ => {
                inner.frame_tick = Some(Self::schedule_tick(&this, epoch));
            }
        }
    }
}
