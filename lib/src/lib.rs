pub mod color;
pub mod error;
pub mod fetch;
pub mod point;
pub mod reduce;
pub mod select;
#[cfg(feature = "svg")]
pub mod svg;

pub use error::{Error, Result};
pub use point::Point;
pub use select::Selection;

use rand::Rng;

/// Runs the whole pipeline: fetch the image behind `locator`, classify its
/// pixels with `selection`, and thin the result to `desired` points. Fails
/// fast on the first fetch, selection, or reduction error.
///
/// The exact trim draws from `thread_rng`; use [`process_with_rng`] to seed
/// it for reproducible output.
pub fn process(
    locator: &str,
    selection: &Selection,
    desired: Option<usize>,
    exact: bool,
) -> Result<Vec<Point>> {
    process_with_rng(locator, selection, desired, exact, &mut rand::thread_rng())
}

pub fn process_with_rng<R: Rng>(
    locator: &str,
    selection: &Selection,
    desired: Option<usize>,
    exact: bool,
    rng: &mut R,
) -> Result<Vec<Point>> {
    let img = fetch::fetch(locator)?;
    let points = select::select(&img, selection)?;

    reduce::reduce(points, desired, exact, rng)
}
