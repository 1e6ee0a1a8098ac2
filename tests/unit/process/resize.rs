use super::*;

#[test]
fn favicon_is_always_48_square() {
    for (w, h) in [(1u32, 1u32), (300, 120), (17, 900)] {
        let img = DynamicImage::ImageRgba8(image::RgbaImage::new(w, h));
        let out = resize_favicon(&img).unwrap();
        assert_eq!((out.width(), out.height()), (48, 48));
    }
}

#[test]
fn resize_exact_rejects_zero() {
    let img = DynamicImage::ImageRgb8(image::RgbImage::new(4, 4));
    assert!(resize_exact(&img, 0, 4).is_err());
    let out = resize_exact(&img, 9, 3).unwrap();
    assert_eq!((out.width(), out.height()), (9, 3));
}

#[test]
fn info_reports_size_and_mode() {
    let img = DynamicImage::ImageRgb8(image::RgbImage::new(12, 7));
    let info = ImageInfo::of(&img);
    assert_eq!(
        info,
        ImageInfo {
            width: 12,
            height: 7,
            mode: "RGB"
        }
    );
    assert_eq!(info.to_string(), "Size: (12, 7), Mode: RGB");

    let gray = DynamicImage::ImageLumaA8(image::GrayAlphaImage::new(1, 1));
    assert_eq!(ImageInfo::of(&gray).mode, "LA");
}

#[test]
fn resize_exact_alpha_keeps_hidden_color_out_of_edges() {
    let mut img = image::RgbaImage::from_pixel(8, 4, image::Rgba([255, 255, 255, 0]));
    for y in 0..4 {
        for x in 0..4 {
            img.put_pixel(x, y, image::Rgba([0, 0, 255, 255]));
        }
    }
    let out = resize_exact(&DynamicImage::ImageRgba8(img), 16, 8).unwrap();
    assert_eq!(out.color(), ColorType::Rgba8);

    let out = out.to_rgba8();
    assert!(
        out.pixels()
            .filter(|p| p.0[3] > 0)
            .all(|p| p.0[0] == 0 && p.0[1] == 0)
    );
}

#[test]
fn resize_exact_keeps_gray_alpha_layout() {
    let img = DynamicImage::ImageLumaA8(image::GrayAlphaImage::from_pixel(
        6,
        6,
        image::LumaA([90, 255]),
    ));
    let out = resize_exact(&img, 3, 3).unwrap();
    assert_eq!(out.color(), ColorType::La8);
    assert_eq!(out.to_luma_alpha8().get_pixel(1, 1).0, [90, 255]);
}

#[test]
fn paletted_input_reports_expanded_mode() {
    let palette = [0u8, 0, 0, 255, 0, 0];
    let indices = [0u8, 1, 1, 0];
    let mut bytes = Vec::new();
    {
        let mut enc = gif::Encoder::new(&mut bytes, 2, 2, &palette).unwrap();
        let frame = gif::Frame {
            width: 2,
            height: 2,
            buffer: std::borrow::Cow::Borrowed(&indices[..]),
            ..gif::Frame::default()
        };
        enc.write_frame(&frame).unwrap();
    }

    let img = image::load_from_memory(&bytes).unwrap();
    let info = ImageInfo::of(&img);
    assert_eq!((info.width, info.height, info.mode), (2, 2, "RGBA"));
}
