use {crate::*, base::Vec2, crates_image::ImageEncoder};

/// Decode a PNG or JPEG file into an RGBA8 `Image`.
pub fn decode_file(data: &[u8]) -> Result<Image, ImageError> {
    let rgba = crates_image::load_from_memory(data)?.to_rgba8();
    let (w, h) = rgba.dimensions();
    Ok(Image::new(
        Vec2::new(w as usize, h as usize),
        rgba.into_raw(),
        PixelFormat::Rgba8,
    ))
}

fn color_type(format: PixelFormat) -> Result<crates_image::ExtendedColorType, ImageError> {
    match format {
        PixelFormat::Rgb8 => Ok(crates_image::ExtendedColorType::Rgb8),
        PixelFormat::Rgba8 => Ok(crates_image::ExtendedColorType::Rgba8),
        PixelFormat::Luma8 => Ok(crates_image::ExtendedColorType::L8),
        other => Err(ImageError::Encode(format!("cannot encode {:?} directly", other))),
    }
}

pub fn encode_png(image: &Image) -> Result<Vec<u8>, ImageError> {
    image.validate()?;
    let mut buffer = Vec::new();
    crates_image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(
            &image.data,
            image.size.x as u32,
            image.size.y as u32,
            color_type(image.format)?,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}

pub fn encode_jpeg(image: &Image, quality: u8) -> Result<Vec<u8>, ImageError> {
    image.validate()?;
    // jpeg has no alpha
    let (data, format) = match image.format {
        PixelFormat::Rgba8 => (
            image
                .data
                .chunks_exact(4)
                .flat_map(|c| [c[0], c[1], c[2]])
                .collect(),
            PixelFormat::Rgb8,
        ),
        format => (image.data.clone(), format),
    };
    let mut buffer = Vec::new();
    crates_image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buffer, quality)
        .write_image(
            &data,
            image.size.x as u32,
            image.size.y as u32,
            color_type(format)?,
        )
        .map_err(|e| ImageError::Encode(e.to_string()))?;
    Ok(buffer)
}
