use {
    image::{PixelFormat, decode_file},
    seat::{SeatRange, generate, render},
};

#[test]
fn test_render_is_square_and_large_enough() {
    let image = render("7").unwrap();
    assert_eq!(image.format, PixelFormat::Rgb8);
    assert_eq!(image.size.x, image.size.y);
    assert!(image.size.x >= 200);
    image.validate().unwrap();
}

#[test]
fn test_render_colors() {
    let image = render("7").unwrap();
    let colors = image
        .data
        .chunks_exact(3)
        .map(|c| [c[0], c[1], c[2]])
        .collect::<std::collections::HashSet<_>>();
    assert_eq!(colors.len(), 2);
    assert!(colors.contains(&[0x0a, 0x16, 0x28]));
    assert!(colors.contains(&[0xff, 0xff, 0xff]));
    // quiet zone
    assert_eq!(&image.data[0..3], &[0xff, 0xff, 0xff]);
}

#[test]
fn test_generate_names_and_decodes() {
    let codes = generate(&SeatRange::new(4, 6).unwrap()).unwrap();
    let names = codes.iter().map(|c| c.file_name()).collect::<Vec<_>>();
    assert_eq!(
        names,
        vec!["seat-4-qr.png", "seat-5-qr.png", "seat-6-qr.png"]
    );
    for code in &codes {
        let image = decode_file(&code.png).unwrap();
        assert_eq!(image.format, PixelFormat::Rgba8);
        assert!(image.size.x >= 200);
    }
}
