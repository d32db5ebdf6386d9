use base::Vec2;
use image::{Image, ImageError, PixelFormat, decode_file, encode_jpeg, encode_png, to_rgba};

#[test]
fn test_png_roundtrip_preserves_pixels() {
    let size = Vec2::new(3, 2);
    let data: Vec<u8> = (0..18).map(|v| v * 10).collect();
    let png = encode_png(&Image::new(size, data.clone(), PixelFormat::Rgb8)).unwrap();

    let decoded = decode_file(&png).unwrap();
    assert_eq!(decoded.size, size);
    assert_eq!(decoded.format, PixelFormat::Rgba8);
    assert_eq!(&decoded.data[..4], &[0, 10, 20, 255]);
}

#[test]
fn test_jpeg_frame_converts_to_rgba() {
    let size = Vec2::new(8, 8);
    let jpeg = encode_jpeg(&Image::new(size, vec![128; 64], PixelFormat::Luma8), 90).unwrap();
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8]);

    let rgba = to_rgba(&Image::new(size, jpeg, PixelFormat::Jpeg)).unwrap();
    assert_eq!(rgba.len(), 8 * 8 * 4);
    assert_eq!(rgba[3], 255);
}

#[test]
fn test_jpeg_frame_with_wrong_size_is_rejected() {
    let jpeg = encode_jpeg(
        &Image::new(Vec2::new(8, 8), vec![0; 64], PixelFormat::Luma8),
        90,
    )
    .unwrap();
    let result = to_rgba(&Image::new(Vec2::new(16, 16), jpeg, PixelFormat::Jpeg));
    assert!(matches!(result, Err(ImageError::Decode(_))));
}

#[test]
fn test_corrupt_jpeg_is_a_decode_error() {
    let result = to_rgba(&Image::new(
        Vec2::new(2, 2),
        b"not a jpeg at all".to_vec(),
        PixelFormat::Jpeg,
    ));
    assert!(matches!(result, Err(ImageError::Decode(_))));
}

#[test]
fn test_yuyv_cannot_be_encoded_directly() {
    let result = encode_png(&Image::new(Vec2::new(2, 1), vec![0; 4], PixelFormat::Yuyv));
    assert!(matches!(result, Err(ImageError::Encode(_))));
}
