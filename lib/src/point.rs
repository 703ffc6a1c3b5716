use serde::{Deserialize, Serialize};
use std::fmt;

/// A selected pixel position in plot coordinates: `x` is the image column,
/// `y` is the negated image row, so larger `y` means further up the plot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Maps an image position (column, row counted from the top) into plot
    /// coordinates by negating the row.
    pub fn from_pixel(column: u32, row: u32) -> Self {
        Point::new(column as i32, -(row as i32))
    }

    /// The image row this point came from.
    pub fn row(&self) -> u32 {
        (-self.y) as u32
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pixel_negates_row() {
        let point = Point::from_pixel(3, 7);
        assert_eq!(point, Point::new(3, -7));
        assert_eq!(point.row(), 7);
    }

    #[test]
    fn top_row_maps_to_origin_y() {
        assert_eq!(Point::from_pixel(5, 0), Point::new(5, 0));
    }
}
