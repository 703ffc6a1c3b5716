use std::path;

use svg::node::element::Circle;
use svg::Document;

use crate::error::Result;
use crate::point::Point;

/// Rendering hints for exported points.
pub struct Style {
    pub radius: f64,
    pub color: String,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            radius: 1.0,
            color: "black".to_string(),
        }
    }
}

fn draw_points(document: Document, points: &[Point], style: &Style) -> Document {
    let mut document = document;

    for point in points {
        document = document.add(
            Circle::new()
                .set("fill", style.color.as_str())
                .set("cx", point.x)
                // Back into image space, where y grows downwards.
                .set("cy", point.row())
                .set("r", style.radius),
        );
    }

    document
}

pub fn write_points(
    filename: &path::Path,
    points: &[Point],
    width: u32,
    height: u32,
    style: &Style,
) -> Result<()> {
    let document = Document::new().set("viewBox", (0, 0, width, height));
    let document = draw_points(document, points, style);

    svg::save(filename, &document)?;

    Ok(())
}
