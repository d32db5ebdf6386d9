use {crate::*, base::Vec2};

/// Off-screen RGBA8 buffer that frames are drawn into before inspection.
///
/// The backing storage is sized to the last drawn frame and only
/// reallocated when a frame of a different size arrives.
#[derive(Debug, Clone, Default)]
pub struct Raster {
    size: Vec2<usize>,
    data: Vec<u8>,
    reallocations: usize,
}

impl Raster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn size(&self) -> Vec2<usize> {
        self.size
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// How many times the buffer had to be resized.
    pub fn reallocations(&self) -> usize {
        self.reallocations
    }

    pub fn draw(&mut self, image: &Image) -> Result<(), ImageError> {
        if image.size == self.size {
            return write_rgba(image, &mut self.data);
        }
        let mut data = vec![0u8; image.size.area() * 4];
        write_rgba(image, &mut data)?;
        self.size = image.size;
        self.data = data;
        self.reallocations += 1;
        Ok(())
    }
}
