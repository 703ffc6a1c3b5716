/// Rec. 601 luminance of an RGB pixel, rounded to the nearest 8-bit value.
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    let y = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    y.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_pixels_keep_their_value() {
        assert_eq!(luminance(0, 0, 0), 0);
        assert_eq!(luminance(128, 128, 128), 128);
        assert_eq!(luminance(255, 255, 255), 255);
    }

    #[test]
    fn green_dominates_luminance() {
        assert!(luminance(0, 255, 0) > luminance(255, 0, 0));
        assert!(luminance(255, 0, 0) > luminance(0, 0, 255));
    }
}
