use {image::Image, std::sync::Arc};

/// A captured frame. Cloning shares the pixel data.
#[derive(Debug, Clone)]
pub struct VideoFrame {
    pub color: Arc<Image>,
    /// Position of this frame in its stream, starting at 0.
    pub index: u64,
}

impl VideoFrame {
    pub fn new(color: Image, index: u64) -> Self {
        Self {
            color: Arc::new(color),
            index,
        }
    }
}
