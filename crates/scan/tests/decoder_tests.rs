use {
    base::Vec2,
    image::{Image, Raster, decode_file, to_rgba},
    scan::{Inversion, QrDecoder, RqrrDecoder, luminance},
    seat::{SeatRange, generate, normalize_seat_label, render},
};

const CANVAS: Vec2<usize> = Vec2 { x: 480, y: 360 };

// place `code` on a white canvas at `offset`, returning RGBA8
fn on_canvas(code: &Image, offset: Vec2<usize>) -> Vec<u8> {
    let rgba = to_rgba(code).unwrap();
    let mut data = vec![255u8; CANVAS.area() * 4];
    let row = code.size.x * 4;
    for y in 0..code.size.y {
        let start = ((offset.y + y) * CANVAS.x + offset.x) * 4;
        data[start..start + row].copy_from_slice(&rgba[y * row..(y + 1) * row]);
    }
    data
}

fn invert(rgba: &[u8]) -> Vec<u8> {
    rgba.chunks_exact(4)
        .flat_map(|c| [255 - c[0], 255 - c[1], 255 - c[2], c[3]])
        .collect()
}

#[test]
fn test_luminance() {
    let rgba = [255, 255, 255, 255, 0, 0, 0, 255, 255, 0, 0, 255];
    assert_eq!(luminance(&rgba, Vec2::new(3, 1)), Some(vec![255, 0, 53]));
    assert_eq!(luminance(&rgba, Vec2::new(2, 1)), None);
}

#[test]
fn test_decodes_seat_code() {
    let data = on_canvas(&render("7").unwrap(), Vec2::new(100, 60));
    let decoded = RqrrDecoder::new().decode(&data, CANVAS, Inversion::DontInvert);
    assert_eq!(decoded.as_deref(), Some("7"));
}

#[test]
fn test_decodes_generated_png() {
    let codes = generate(&SeatRange::new(23, 23).unwrap()).unwrap();
    let image = decode_file(&codes[0].png).unwrap();
    let data = on_canvas(&image, Vec2::new(40, 40));
    let decoded = RqrrDecoder::new()
        .decode(&data, CANVAS, Inversion::default())
        .and_then(|raw| normalize_seat_label(&raw));
    assert_eq!(decoded.as_deref(), Some("23"));
}

#[test]
fn test_inverted_code_needs_inversion() {
    let data = invert(&on_canvas(&render("S-42").unwrap(), Vec2::new(120, 50)));
    let decoder = RqrrDecoder::new();
    assert_eq!(decoder.decode(&data, CANVAS, Inversion::DontInvert), None);
    for inversion in [
        Inversion::OnlyInvert,
        Inversion::AttemptBoth,
        Inversion::InvertFirst,
    ] {
        assert_eq!(
            decoder.decode(&data, CANVAS, inversion).as_deref(),
            Some("S-42"),
            "{:?}",
            inversion
        );
    }
}

#[test]
fn test_blank_frame_has_no_code() {
    let data = vec![255u8; CANVAS.area() * 4];
    let decoder = RqrrDecoder::new();
    assert_eq!(decoder.decode(&data, CANVAS, Inversion::AttemptBoth), None);
}

#[test]
fn test_malformed_buffers() {
    let decoder = RqrrDecoder::new();
    assert_eq!(decoder.decode(&[], Vec2::zero(), Inversion::DontInvert), None);
    assert_eq!(decoder.decode(&[0; 12], CANVAS, Inversion::DontInvert), None);
}

#[test]
fn test_decodes_through_raster() {
    let code = render("31").unwrap();
    let mut raster = Raster::new();
    raster.draw(&code).unwrap();
    let padded = Image::new(raster.size(), raster.data().to_vec(), image::PixelFormat::Rgba8);
    let data = on_canvas(&padded, Vec2::new(90, 70));
    let decoded = RqrrDecoder::new().decode(&data, CANVAS, Inversion::DontInvert);
    assert_eq!(decoded.as_deref(), Some("31"));
}
