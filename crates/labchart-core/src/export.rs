// File: crates/labchart-core/src/export.rs
// Summary: Tight bounding-box crop of rendered pixels and PNG encoding with DPI metadata.

use std::path::Path;

use image::RgbaImage;
use log::debug;

use crate::error::Result;
use crate::geometry::RectI32;

const METERS_PER_INCH: f64 = 0.0254;

/// Bounding box of every pixel that differs from `background`, or `None` for a blank image.
pub fn content_bounds(img: &RgbaImage, background: [u8; 4]) -> Option<RectI32> {
    let (mut left, mut top) = (u32::MAX, u32::MAX);
    let (mut right, mut bottom) = (0u32, 0u32);
    let mut any = false;
    for (x, y, px) in img.enumerate_pixels() {
        if px.0 != background {
            any = true;
            left = left.min(x);
            top = top.min(y);
            right = right.max(x + 1);
            bottom = bottom.max(y + 1);
        }
    }
    any.then(|| RectI32::from_ltrb(left as i32, top as i32, right as i32, bottom as i32))
}

/// Crop to the drawn content plus `pad_px` on each side; blank images are returned unchanged.
pub fn tight_crop(img: RgbaImage, background: [u8; 4], pad_px: i32) -> RgbaImage {
    let Some(content) = content_bounds(&img, background) else {
        return img;
    };
    let full = RectI32::from_ltwh(0, 0, img.width() as i32, img.height() as i32);
    let crop = content.outset_within(pad_px.max(0), &full);
    debug!("tight crop {:?} of {}x{}", crop, img.width(), img.height());
    if crop == full {
        return img;
    }
    image::imageops::crop_imm(
        &img,
        crop.left as u32,
        crop.top as u32,
        crop.width() as u32,
        crop.height() as u32,
    )
    .to_image()
}

/// Encode RGBA pixels as PNG, recording `dpi` in the pHYs chunk.
pub fn encode_png(img: &RgbaImage, dpi: u32) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, img.width(), img.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let ppm = (dpi as f64 / METERS_PER_INCH).round() as u32;
        encoder.set_pixel_dims(Some(png::PixelDimensions {
            xppu: ppm,
            yppu: ppm,
            unit: png::Unit::Meter,
        }));
        let mut writer = encoder.write_header()?;
        writer.write_image_data(img.as_raw())?;
        writer.finish()?;
    }
    Ok(out)
}

/// Write a fully encoded image, creating the parent directory if needed.
pub fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const WHITE: [u8; 4] = [255, 255, 255, 255];

    fn canvas_with_dot(w: u32, h: u32, x: u32, y: u32) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(w, h, Rgba(WHITE));
        img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
        img
    }

    #[test]
    fn bounds_cover_single_pixel() {
        let img = canvas_with_dot(20, 10, 7, 3);
        assert_eq!(content_bounds(&img, WHITE), Some(RectI32::from_ltrb(7, 3, 8, 4)));
    }

    #[test]
    fn crop_pads_and_clips_to_image() {
        let img = canvas_with_dot(20, 10, 1, 5);
        let cropped = tight_crop(img, WHITE, 2);
        // left side clipped at 0, right side padded by 2
        assert_eq!(cropped.width(), 4);
        assert_eq!(cropped.height(), 5);
    }

    #[test]
    fn blank_image_is_left_alone() {
        let img = RgbaImage::from_pixel(5, 5, Rgba(WHITE));
        assert_eq!(tight_crop(img, WHITE, 1).dimensions(), (5, 5));
    }
}
