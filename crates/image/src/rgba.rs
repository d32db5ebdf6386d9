use crate::*;

/// Convert any supported frame to packed RGBA8, alpha fully opaque.
pub fn to_rgba(image: &Image) -> Result<Vec<u8>, ImageError> {
    let mut rgba = vec![0u8; image.size.area() * 4];
    write_rgba(image, &mut rgba)?;
    Ok(rgba)
}

/// Convert `image` into `out`, which must hold exactly one RGBA8 frame of
/// the image's size. Nothing is written unless the whole frame converts.
pub fn write_rgba(image: &Image, out: &mut [u8]) -> Result<(), ImageError> {
    image.validate()?;
    let expected = image.size.area() * 4;
    if out.len() != expected {
        return Err(ImageError::Size {
            expected,
            actual: out.len(),
        });
    }
    match image.format {
        PixelFormat::Rgba8 => out.copy_from_slice(&image.data),
        PixelFormat::Rgb8 => {
            for (o, c) in out.chunks_exact_mut(4).zip(image.data.chunks_exact(3)) {
                o.copy_from_slice(&[c[0], c[1], c[2], 255]);
            }
        }
        PixelFormat::Luma8 => {
            for (o, &l) in out.chunks_exact_mut(4).zip(&image.data) {
                o.copy_from_slice(&[l, l, l, 255]);
            }
        }
        PixelFormat::Yuyv => {
            for (o, c) in out.chunks_exact_mut(8).zip(image.data.chunks_exact(4)) {
                let (r0, g0, b0) = yuv_to_rgb(c[0], c[1], c[3]);
                let (r1, g1, b1) = yuv_to_rgb(c[2], c[1], c[3]);
                o.copy_from_slice(&[r0, g0, b0, 255, r1, g1, b1, 255]);
            }
        }
        PixelFormat::Jpeg => {
            let decoded = crates_image::load_from_memory_with_format(
                &image.data,
                crates_image::ImageFormat::Jpeg,
            )?
            .to_rgba8();
            let (w, h) = decoded.dimensions();
            if (w as usize, h as usize) != (image.size.x, image.size.y) {
                return Err(ImageError::Decode(format!(
                    "jpeg is {}x{}, frame claims {}",
                    w, h, image.size
                )));
            }
            out.copy_from_slice(decoded.as_raw());
        }
    }
    Ok(())
}
