use {image::ImageError, std::fmt};

#[derive(Debug)]
pub enum VideoError {
    /// The platform has no capture capability at all.
    Unsupported,
    Denied(String),
    Device(String),
    Stream(String),
    Channel(String),
    Image(ImageError),
}

impl fmt::Display for VideoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoError::Unsupported => write!(f, "camera capture is not supported"),
            VideoError::Denied(msg) => write!(f, "camera access denied: {msg}"),
            VideoError::Device(msg) => write!(f, "device error: {msg}"),
            VideoError::Stream(msg) => write!(f, "stream error: {msg}"),
            VideoError::Channel(msg) => write!(f, "channel error: {msg}"),
            VideoError::Image(err) => write!(f, "image error: {err}"),
        }
    }
}

impl std::error::Error for VideoError {}

impl From<std::io::Error> for VideoError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => VideoError::Denied(err.to_string()),
            _ => VideoError::Device(err.to_string()),
        }
    }
}

impl From<ImageError> for VideoError {
    fn from(err: ImageError) -> Self {
        VideoError::Image(err)
    }
}
