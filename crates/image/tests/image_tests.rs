use base::Vec2;
use image::{Image, ImageError, PixelFormat, fourcc_to_string, to_rgba};

#[test]
fn test_image_new_rgb8() {
    let size = Vec2::new(2, 3);
    let data: Vec<u8> = (0..18).collect();
    let image = Image::new(size, data.clone(), PixelFormat::Rgb8);

    assert_eq!(image.size, size);
    assert_eq!(image.data, data);
    assert!(image.validate().is_ok());
}

#[test]
fn test_validate_rejects_short_buffer() {
    let image = Image::new(Vec2::new(4, 2), vec![0; 10], PixelFormat::Yuyv);
    assert_eq!(
        image.validate(),
        Err(ImageError::Size {
            expected: 16,
            actual: 10
        })
    );
}

#[test]
fn test_validate_accepts_any_jpeg_length() {
    let image = Image::new(Vec2::new(10, 10), vec![0xFF, 0xD8], PixelFormat::Jpeg);
    assert!(image.validate().is_ok());
}

#[test]
fn test_fourcc_roundtrip_known_formats() {
    for format in [
        PixelFormat::Rgb8,
        PixelFormat::Rgba8,
        PixelFormat::Luma8,
        PixelFormat::Yuyv,
        PixelFormat::Jpeg,
    ] {
        assert_eq!(PixelFormat::from_fourcc(format.as_fourcc()), Ok(format));
    }
    assert_eq!(fourcc_to_string(PixelFormat::Jpeg.as_fourcc()), "MJPG");
}

#[test]
fn test_unknown_fourcc_is_an_error() {
    let fourcc = u32::from_le_bytes(*b"pRAA");
    match PixelFormat::from_fourcc(fourcc) {
        Err(ImageError::Format(msg)) => assert!(msg.contains("pRAA")),
        other => panic!("Expected ImageError::Format, got {:?}", other),
    }
}

#[test]
fn test_rgb_to_rgba_adds_opaque_alpha() {
    let image = Image::new(Vec2::new(2, 1), vec![1, 2, 3, 4, 5, 6], PixelFormat::Rgb8);
    assert_eq!(to_rgba(&image).unwrap(), vec![1, 2, 3, 255, 4, 5, 6, 255]);
}

#[test]
fn test_luma_to_rgba_replicates_channel() {
    let image = Image::new(Vec2::new(2, 1), vec![0, 200], PixelFormat::Luma8);
    assert_eq!(
        to_rgba(&image).unwrap(),
        vec![0, 0, 0, 255, 200, 200, 200, 255]
    );
}

#[test]
fn test_yuyv_neutral_chroma_is_grey() {
    // u = v = 128 means no chroma, so rgb equals luma
    let image = Image::new(Vec2::new(2, 1), vec![50, 128, 180, 128], PixelFormat::Yuyv);
    assert_eq!(
        to_rgba(&image).unwrap(),
        vec![50, 50, 50, 255, 180, 180, 180, 255]
    );
}

#[test]
fn test_image_error_display() {
    let err = ImageError::Decode("test error".to_string());
    assert_eq!(format!("{}", err), "decode error: test error");

    let err = ImageError::Size {
        expected: 12,
        actual: 3,
    };
    assert_eq!(format!("{}", err), "size error: expected 12 bytes, got 3");
}
