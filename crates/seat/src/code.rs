use {
    crate::*,
    base::Vec2,
    image::{Image, PixelFormat, encode_png},
    qrcode::{Color, QrCode},
};

// light modules around the code, in modules
const QUIET_ZONE: usize = 2;

// smallest rendered edge, in pixels
const MIN_DIMENSION: usize = 200;

const DARK: [u8; 3] = [0x0a, 0x16, 0x28];
const LIGHT: [u8; 3] = [0xff, 0xff, 0xff];

/// A rendered seat code, ready to be printed.
#[derive(Debug, Clone)]
pub struct SeatCode {
    pub seat: String,
    pub png: Vec<u8>,
}

impl SeatCode {
    pub fn file_name(&self) -> String {
        format!("seat-{}-qr.png", self.seat)
    }
}

/// Render `payload` as an RGB QR image with a quiet zone, at least 200px wide.
pub fn render(payload: &str) -> Result<Image, SeatError> {
    let code = QrCode::new(payload.as_bytes())?;
    let modules = code.width();
    let colors = code.to_colors();

    let total = modules + 2 * QUIET_ZONE;
    let scale = MIN_DIMENSION.div_ceil(total).max(1);
    let edge = total * scale;

    let mut data = Vec::with_capacity(edge * edge * 3);
    for py in 0..edge {
        for px in 0..edge {
            let (mx, my) = (px / scale, py / scale);
            let dark = (QUIET_ZONE..QUIET_ZONE + modules).contains(&mx)
                && (QUIET_ZONE..QUIET_ZONE + modules).contains(&my)
                && colors[(my - QUIET_ZONE) * modules + (mx - QUIET_ZONE)] == Color::Dark;
            data.extend_from_slice(if dark { &DARK } else { &LIGHT });
        }
    }
    Ok(Image::new(Vec2::new(edge, edge), data, PixelFormat::Rgb8))
}

/// Render one PNG code per seat in `range`, encoding the plain seat number.
pub fn generate(range: &SeatRange) -> Result<Vec<SeatCode>, SeatError> {
    let codes = range
        .iter()
        .map(|seat| {
            let seat = seat.to_string();
            let png = encode_png(&render(&seat)?)?;
            Ok(SeatCode { seat, png })
        })
        .collect::<Result<Vec<_>, SeatError>>()?;
    log::info!(
        "generated {} seat codes ({}..={})",
        codes.len(),
        range.start(),
        range.end()
    );
    Ok(codes)
}
