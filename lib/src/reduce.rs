use log::info;
use rand::Rng;

use crate::error::{Error, Result};
use crate::point::Point;

/// Thins `points` down to roughly `desired` elements by keeping every
/// stride-th point, where `stride = len / desired`. With `exact`, randomly
/// removes single points afterwards until exactly `desired` remain; the base
/// decimation itself is deterministic.
///
/// A `desired` of `None`, or one at least as large as the input, returns the
/// input unchanged and ignores `exact`.
pub fn reduce<R: Rng>(
    points: Vec<Point>,
    desired: Option<usize>,
    exact: bool,
    rng: &mut R,
) -> Result<Vec<Point>> {
    if desired == Some(0) {
        return Err(Error::InvalidArgument(
            "desired point count must be at least one".into(),
        ));
    }

    if points.is_empty() {
        return Ok(points);
    }

    let original = points.len();

    let target = match desired {
        Some(count) if count < original => count,
        _ => {
            info!("Original number of points: {}, new number of points: {}", original, original);
            return Ok(points);
        }
    };

    let stride = original / target;
    let mut thinned: Vec<Point> = points.into_iter().step_by(stride).collect();

    if exact {
        // Removal by index keeps the decimation order of the survivors.
        while thinned.len() > target {
            thinned.remove(rng.gen_range(0..thinned.len()));
        }
    }

    info!("Original number of points: {}, new number of points: {}", original, thinned.len());

    Ok(thinned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn points(count: usize) -> Vec<Point> {
        (0..count)
            .map(|i| Point::new(i as i32, -(i as i32)))
            .collect()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn decimates_to_an_exact_ten_points_without_trimming() {
        let reduced = reduce(points(100), Some(10), true, &mut rng()).unwrap();

        let expected: Vec<Point> = (0..10)
            .map(|i| Point::new(i * 10, -(i * 10)))
            .collect();
        assert_eq!(reduced, expected);
    }

    #[test]
    fn no_desired_count_returns_input_unchanged() {
        let original = points(25);

        let reduced = reduce(original.clone(), None, true, &mut rng()).unwrap();

        assert_eq!(reduced, original);
    }

    #[test]
    fn desired_count_at_or_above_length_returns_input_unchanged() {
        let original = points(25);

        assert_eq!(reduce(original.clone(), Some(25), true, &mut rng()).unwrap(), original);
        assert_eq!(reduce(original.clone(), Some(40), true, &mut rng()).unwrap(), original);
    }

    #[test]
    fn empty_input_stays_empty() {
        let reduced = reduce(Vec::new(), Some(5), true, &mut rng()).unwrap();

        assert!(reduced.is_empty());
    }

    #[test]
    fn zero_desired_count_is_rejected() {
        assert!(matches!(
            reduce(points(10), Some(0), true, &mut rng()),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn exact_trim_hits_the_target_and_preserves_order() {
        let original = points(10);

        // stride = 10 / 3 = 3 keeps indices 0, 3, 6, 9; the trim drops one.
        let reduced = reduce(original.clone(), Some(3), true, &mut rng()).unwrap();

        assert_eq!(reduced.len(), 3);
        for pair in reduced.windows(2) {
            assert!(pair[0].x < pair[1].x);
        }
        for point in &reduced {
            assert!(original.contains(point));
            assert_eq!(point.x % 3, 0);
        }
    }

    #[test]
    fn approximate_reduction_skips_the_trim() {
        let reduced = reduce(points(10), Some(3), false, &mut rng()).unwrap();

        // Decimation alone overshoots: ceil(10 / 3) elements survive.
        assert_eq!(reduced.len(), 4);
        assert_eq!(
            reduced,
            vec![
                Point::new(0, 0),
                Point::new(3, -3),
                Point::new(6, -6),
                Point::new(9, -9),
            ]
        );
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let first = reduce(points(97), Some(13), true, &mut StdRng::seed_from_u64(7)).unwrap();
        let second = reduce(points(97), Some(13), true, &mut StdRng::seed_from_u64(7)).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 13);
    }
}
