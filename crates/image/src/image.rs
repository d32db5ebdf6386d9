use {crate::*, base::Vec2};

/// One frame of pixel data in its native format.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub size: Vec2<usize>,
    pub data: Vec<u8>,
    pub format: PixelFormat,
}

impl Image {
    pub fn new(size: Vec2<usize>, data: Vec<u8>, format: PixelFormat) -> Self {
        Self { size, data, format }
    }

    /// Check that `data` holds exactly one frame of `size` in `format`.
    ///
    /// Compressed formats have no fixed length and always pass.
    pub fn validate(&self) -> Result<(), ImageError> {
        match self.format.frame_len(self.size) {
            Some(expected) if expected != self.data.len() => Err(ImageError::Size {
                expected,
                actual: self.data.len(),
            }),
            _ => Ok(()),
        }
    }
}
