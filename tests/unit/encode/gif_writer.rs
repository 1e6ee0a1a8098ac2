use std::path::PathBuf;

use image::Rgba;

use super::*;

fn out_path(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("unit_gif");
    std::fs::create_dir_all(&dir).unwrap();
    let p = dir.join(name);
    let _ = std::fs::remove_file(&p);
    p
}

fn frame(color: [u8; 4]) -> RgbaImage {
    let mut img = RgbaImage::new(6, 4);
    for y in 0..4 {
        for x in 0..3 {
            img.put_pixel(x, y, Rgba(color));
        }
    }
    img
}

#[test]
fn writes_all_frames_with_delay_and_disposal() {
    let path = out_path("three.gif");
    let frames = vec![
        frame([255, 0, 0, 255]),
        frame([0, 255, 0, 255]),
        frame([0, 0, 255, 255]),
    ];
    let bytes = write_gif(&path, &frames, &GifConfig::looping(120)).unwrap();
    assert!(bytes > 0);
    assert_eq!(bytes, std::fs::metadata(&path).unwrap().len());

    let mut opts = gif::DecodeOptions::new();
    opts.set_color_output(gif::ColorOutput::RGBA);
    let mut dec = opts.read_info(File::open(&path).unwrap()).unwrap();
    assert_eq!((dec.width(), dec.height()), (6, 4));

    let mut count = 0;
    while let Some(f) = dec.read_next_frame().unwrap() {
        assert_eq!(f.delay, 12);
        assert_eq!(f.dispose, gif::DisposalMethod::Background);
        // Left half opaque, right half transparent.
        assert_eq!(f.buffer[3], 255);
        assert_eq!(f.buffer[(5 * 4) + 3], 0);
        count += 1;
    }
    assert_eq!(count, 3);
}

#[test]
fn empty_frame_list_is_rejected() {
    let path = out_path("empty.gif");
    let err = write_gif(&path, &[], &GifConfig::looping(100)).unwrap_err();
    assert!(err.to_string().contains("validation error:"));
    assert!(!path.exists());
}

#[test]
fn mismatched_frame_sizes_are_rejected() {
    let path = out_path("mismatch.gif");
    let frames = vec![RgbaImage::new(2, 2), RgbaImage::new(3, 2)];
    assert!(write_gif(&path, &frames, &GifConfig::looping(100)).is_err());
}

#[test]
fn delay_is_stored_in_centiseconds() {
    assert_eq!(GifConfig::looping(100).delay_cs(), 10);
    assert_eq!(GifConfig::looping(125).delay_cs(), 12);
    assert_eq!(GifConfig::looping(5).delay_cs(), 0);
}
