use crate::arena::types::Coord;

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn euclidean_distance(a: Coord, b: Coord) -> f64 {
    ((a.x - b.x) as f64).hypot((a.y - b.y) as f64)
}

/// Distance from `from` to the closest of `targets`, if there are any.
pub fn nearest_distance<'a>(
    from: Coord,
    targets: impl IntoIterator<Item = &'a Coord>,
) -> Option<f64> {
    targets
        .into_iter()
        .map(|target| euclidean_distance(from, *target))
        .min_by(f64::total_cmp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_is_straight_line() {
        let a = Coord::new(0, 0);
        let b = Coord::new(3, 4);
        assert!((euclidean_distance(a, b) - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn nearest_of_nothing_is_none() {
        let empty: [Coord; 0] = [];
        assert_eq!(nearest_distance(Coord::new(1, 1), &empty), None);
        let targets = [Coord::new(4, 1), Coord::new(1, 3)];
        assert_eq!(nearest_distance(Coord::new(1, 1), &targets), Some(2.0));
    }
}
