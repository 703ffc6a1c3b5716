use image::{DynamicImage, GrayImage, Luma};
use log::debug;

use crate::color;
use crate::error::{Error, Result};
use crate::point::Point;

/// How pixels are classified as part of the output point set. Exactly one
/// strategy applies per run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Selection {
    /// Every pixel with luminance strictly below `threshold`.
    Threshold { threshold: u8 },
    /// The darkest `ratio` fraction of all pixels, `ratio` in `[0, 1]`.
    Ratio { ratio: f64 },
    /// Canny edge pixels, with `low`/`high` hysteresis thresholds.
    Edges { low: f32, high: f32 },
}

/// Classifies the pixels of `img` according to `selection`.
///
/// Output ordering differs per strategy: `Threshold` sorts ascending by `y`,
/// `Ratio` orders by ascending luminance (ties in raster order), and `Edges`
/// keeps raster-scan order. Callers that need a spatial order must sort
/// themselves.
pub fn select(img: &DynamicImage, selection: &Selection) -> Result<Vec<Point>> {
    let intensity = to_intensity(img)?;

    match *selection {
        Selection::Threshold { threshold } => Ok(select_threshold(&intensity, threshold)),
        Selection::Ratio { ratio } => select_ratio(&intensity, ratio),
        Selection::Edges { low, high } => select_edges(&intensity, low, high),
    }
}

/// Collapses supported pixel layouts to 8-bit luminance.
fn to_intensity(img: &DynamicImage) -> Result<GrayImage> {
    match img {
        DynamicImage::ImageLuma8(gray) => Ok(gray.clone()),
        DynamicImage::ImageLumaA8(img) => Ok(GrayImage::from_fn(img.width(), img.height(), |x, y| {
            Luma([img.get_pixel(x, y)[0]])
        })),
        DynamicImage::ImageRgb8(img) => Ok(GrayImage::from_fn(img.width(), img.height(), |x, y| {
            let p = img.get_pixel(x, y);
            Luma([color::luminance(p[0], p[1], p[2])])
        })),
        DynamicImage::ImageRgba8(img) => Ok(GrayImage::from_fn(img.width(), img.height(), |x, y| {
            let p = img.get_pixel(x, y);
            Luma([color::luminance(p[0], p[1], p[2])])
        })),
        other => Err(Error::Format {
            layout: layout_name(other),
        }),
    }
}

fn layout_name(img: &DynamicImage) -> &'static str {
    match img {
        DynamicImage::ImageLuma16(_) => "Luma16",
        DynamicImage::ImageLumaA16(_) => "LumaA16",
        DynamicImage::ImageRgb16(_) => "Rgb16",
        DynamicImage::ImageRgba16(_) => "Rgba16",
        DynamicImage::ImageRgb32F(_) => "Rgb32F",
        DynamicImage::ImageRgba32F(_) => "Rgba32F",
        _ => "unknown",
    }
}

fn select_threshold(intensity: &GrayImage, threshold: u8) -> Vec<Point> {
    let mut points: Vec<Point> = intensity
        .enumerate_pixels()
        .filter(|(_, _, pixel)| pixel[0] < threshold)
        .map(|(x, y, _)| Point::from_pixel(x, y))
        .collect();

    // Stable, so pixels on the same row keep their left-to-right order.
    points.sort_by_key(|point| point.y);

    debug!("{} pixels below threshold {}", points.len(), threshold);

    points
}

fn select_ratio(intensity: &GrayImage, ratio: f64) -> Result<Vec<Point>> {
    if !(0.0..=1.0).contains(&ratio) {
        return Err(Error::InvalidArgument(format!(
            "ratio must lie in [0, 1], got {}",
            ratio
        )));
    }

    let total = (intensity.width() * intensity.height()) as usize;
    let count = (total as f64 * ratio).floor() as usize;

    let mut pixels: Vec<(u8, Point)> = intensity
        .enumerate_pixels()
        .map(|(x, y, pixel)| (pixel[0], Point::from_pixel(x, y)))
        .collect();

    // Stable, so ties at the cutoff resolve in raster-scan order.
    pixels.sort_by_key(|(value, _)| *value);
    pixels.truncate(count);

    debug!("kept the {} darkest of {} pixels", count, total);

    Ok(pixels.into_iter().map(|(_, point)| point).collect())
}

fn select_edges(intensity: &GrayImage, low: f32, high: f32) -> Result<Vec<Point>> {
    if !low.is_finite() || !high.is_finite() || low < 0.0 || low > high {
        return Err(Error::InvalidArgument(format!(
            "hysteresis thresholds must satisfy 0 <= low <= high, got low={} high={}",
            low, high
        )));
    }

    let mask = imageproc::edges::canny(intensity, low, high);

    let points: Vec<Point> = mask
        .enumerate_pixels()
        .filter(|(_, _, pixel)| pixel[0] > 0)
        .map(|(x, y, _)| Point::from_pixel(x, y))
        .collect();

    debug!("{} edge pixels", points.len());

    Ok(points)
}
