use base::Vec2;

/// Which colour polarities a decode pass tries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Inversion {
    /// Dark modules on a light background only.
    #[default]
    DontInvert,
    /// Light modules on a dark background only.
    OnlyInvert,
    AttemptBoth,
    InvertFirst,
}

/// Finds a QR code in an RGBA8 pixel buffer.
///
/// Returns the decoded text, or `None` when no readable code is present.
pub trait QrDecoder: Send + Sync + 'static {
    fn decode(&self, rgba: &[u8], size: Vec2<usize>, inversion: Inversion) -> Option<String>;
}

/// Relative luminance of each RGBA8 pixel (Rec. 709 weights, fixed point).
///
/// Returns `None` if `rgba` does not hold exactly `size` pixels.
pub fn luminance(rgba: &[u8], size: Vec2<usize>) -> Option<Vec<u8>> {
    if rgba.len() != size.area() * 4 {
        return None;
    }
    Some(
        rgba.chunks_exact(4)
            .map(|c| ((54 * c[0] as u32 + 183 * c[1] as u32 + 19 * c[2] as u32) >> 8) as u8)
            .collect(),
    )
}

/// `QrDecoder` over the `rqrr` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct RqrrDecoder;

impl RqrrDecoder {
    pub fn new() -> Self {
        Self
    }

    fn decode_luma(luma: &[u8], size: Vec2<usize>) -> Option<String> {
        let mut prepared =
            rqrr::PreparedImage::prepare_from_greyscale(size.x, size.y, |x, y| luma[y * size.x + x]);
        for grid in prepared.detect_grids() {
            match grid.decode() {
                Ok((_, content)) if !content.is_empty() => return Some(content),
                Ok(_) => {}
                Err(error) => log::trace!("qr grid found but not decodable: {:?}", error),
            }
        }
        None
    }
}

impl QrDecoder for RqrrDecoder {
    fn decode(&self, rgba: &[u8], size: Vec2<usize>, inversion: Inversion) -> Option<String> {
        if size.is_empty() {
            return None;
        }
        let luma = luminance(rgba, size)?;
        let inverted = || luma.iter().map(|&v| 255 - v).collect::<Vec<u8>>();
        match inversion {
            Inversion::DontInvert => Self::decode_luma(&luma, size),
            Inversion::OnlyInvert => Self::decode_luma(&inverted(), size),
            Inversion::AttemptBoth => {
                Self::decode_luma(&luma, size).or_else(|| Self::decode_luma(&inverted(), size))
            }
            Inversion::InvertFirst => {
                Self::decode_luma(&inverted(), size).or_else(|| Self::decode_luma(&luma, size))
            }
        }
    }
}
