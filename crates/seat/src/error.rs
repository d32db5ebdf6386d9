use {image::ImageError, std::fmt};

#[derive(Debug)]
pub enum SeatError {
    /// Seat numbers start at 1.
    StartBelowOne(u32),
    Reversed { start: u32, end: u32 },
    TooMany { requested: u32, max: u32 },
    Qr(qrcode::types::QrError),
    Image(ImageError),
}

impl fmt::Display for SeatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeatError::StartBelowOne(start) => {
                write!(f, "invalid seat range: seat numbers start at 1, got {start}")
            }
            SeatError::Reversed { start, end } => {
                write!(f, "invalid seat range: start {start} is after end {end}")
            }
            SeatError::TooMany { requested, max } => {
                write!(f, "too many seats: {requested} requested, at most {max} at a time")
            }
            SeatError::Qr(err) => write!(f, "qr error: {err}"),
            SeatError::Image(err) => write!(f, "image error: {err}"),
        }
    }
}

impl std::error::Error for SeatError {}

impl From<qrcode::types::QrError> for SeatError {
    fn from(err: qrcode::types::QrError) -> Self {
        SeatError::Qr(err)
    }
}

impl From<ImageError> for SeatError {
    fn from(err: ImageError) -> Self {
        SeatError::Image(err)
    }
}
