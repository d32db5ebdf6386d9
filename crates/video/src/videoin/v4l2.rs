use {
    crate::*,
    base::Vec2,
    image::{Image, PixelFormat},
    std::path::{Path, PathBuf},
    v4l::{
        Device, Format, FourCC, buffer::Type, io::mmap::Stream as MmapStream,
        io::traits::CaptureStream, video::Capture,
    },
};

const DEFAULT_PATH: &str = "/dev/video0";

// number of mmap buffers in the capture queue
const BUFFER_COUNT: u32 = 4;

/// V4L2 camera access.
///
/// V4L2 has no notion of which way a camera faces, so a rear camera must be
/// configured explicitly. An `Environment` request without one fails, which
/// lets the caller fall back to any camera.
#[derive(Debug, Clone)]
pub struct V4l2Devices {
    default_path: PathBuf,
    environment: Option<PathBuf>,
}

impl Default for V4l2Devices {
    fn default() -> Self {
        Self {
            default_path: PathBuf::from(DEFAULT_PATH),
            environment: None,
        }
    }
}

impl V4l2Devices {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_path = path.into();
        self
    }

    pub fn with_environment(mut self, path: impl Into<PathBuf>) -> Self {
        self.environment = Some(path.into());
        self
    }

    fn select(&self, constraints: &Constraints) -> Result<PathBuf, VideoError> {
        match constraints.facing {
            Some(Facing::Environment) => self.environment.clone().ok_or_else(|| {
                VideoError::Device("no environment-facing camera configured".to_string())
            }),
            Some(Facing::User) | None => Ok(self.default_path.clone()),
        }
    }
}

impl MediaDevices for V4l2Devices {
    fn is_supported(&self) -> bool {
        Path::new(&self.default_path).exists()
            || self.environment.as_deref().is_some_and(Path::exists)
    }

    async fn get_user_media(
        &self,
        constraints: &Constraints,
    ) -> Result<Box<dyn MediaStream>, VideoError> {
        if constraints.audio {
            return Err(VideoError::Device("audio capture is not available".to_string()));
        }
        let path = self.select(constraints)?;
        log::debug!("v4l2: opening {:?}", path);
        let stream = VideoIn::open(Box::new(V4l2::new(path)), constraints.clone()).await?;
        Ok(Box::new(stream))
    }
}

pub(crate) struct V4l2 {
    path: PathBuf,
    stream: Option<MmapStream<'static>>,
    size: Vec2<usize>,
    format: PixelFormat,
}

impl V4l2 {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            stream: None,
            size: Vec2::zero(),
            format: PixelFormat::Yuyv,
        }
    }

    fn negotiate(
        device: &Device,
        size: Vec2<usize>,
        fourcc: FourCC,
    ) -> Result<(Vec2<usize>, Option<PixelFormat>), VideoError> {
        let actual = Capture::set_format(
            device,
            &Format::new(size.x as u32, size.y as u32, fourcc),
        )?;
        let format = match &actual.fourcc.repr {
            b"YUYV" => Some(PixelFormat::Yuyv),
            b"MJPG" => Some(PixelFormat::Jpeg),
            b"GREY" => Some(PixelFormat::Luma8),
            b"RGB3" => Some(PixelFormat::Rgb8),
            _ => None,
        };
        Ok((
            Vec2::new(actual.width as usize, actual.height as usize),
            format,
        ))
    }
}

impl VideoInDevice for V4l2 {
    fn open(&mut self, constraints: &Constraints) -> Result<Vec2<usize>, VideoError> {
        self.stream.take();

        let device = Device::with_path(&self.path)?;
        let current = Capture::format(&device)?;

        let desired_size = constraints.size.unwrap_or(Vec2::new(
            current.width as usize,
            current.height as usize,
        ));

        // keep the device's own format when we can read it, otherwise ask for MJPEG
        let (size, format) = match Self::negotiate(&device, desired_size, current.fourcc)? {
            (size, Some(format)) => (size, format),
            (_, None) => match Self::negotiate(&device, desired_size, FourCC::new(b"MJPG"))? {
                (size, Some(format)) => (size, format),
                (_, None) => {
                    return Err(VideoError::Device(format!(
                        "{:?} offers no supported pixel format",
                        self.path
                    )));
                }
            },
        };
        self.size = size;
        self.format = format;

        self.stream = Some(
            MmapStream::with_buffers(&device, Type::VideoCapture, BUFFER_COUNT)
                .map_err(|error| VideoError::Stream(error.to_string()))?,
        );
        Ok(size)
    }

    fn close(&mut self) {
        self.stream.take();
    }

    fn blocking_capture(&mut self) -> Result<Image, VideoError> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| VideoError::Stream("No stream".to_string()))?;
        let (data, metadata) =
            CaptureStream::next(stream).map_err(|error| VideoError::Stream(error.to_string()))?;
        let used = (metadata.bytesused as usize).min(data.len());
        let len = self.format.frame_len(self.size).unwrap_or(used).min(used);
        Ok(Image::new(self.size, data[..len].to_vec(), self.format))
    }
}
