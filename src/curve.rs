//! Ordered polylines in the plane.
use crate::point::{Point, PointExt};
use crate::{Coord, Precision};
use nalgebra::distance;
use std::fmt;

/// Bounding values of a curve's coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Extrema<T = Precision> {
    pub min_x: T,
    pub max_x: T,
    pub min_y: T,
    pub max_y: T,
}

/// A curve composed of discrete points.
///
/// Points are expected to be in traversal order (generally ascending x);
/// [Curve::add_point] does no sorting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Curve<T: Coord = Precision> {
    points: Vec<Point<T>>,
}

impl<T: Coord> Curve<T> {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point without sorting.
    pub fn add_point(&mut self, p: Point<T>) {
        self.points.push(p);
    }

    pub fn add_xy(&mut self, x: T, y: T) {
        self.add_point(Point::new(x, y));
    }

    /// Insert a point by a linear search for its place in x order.
    ///
    /// Only meaningful if the curve is already sorted by x.
    /// Points with an equal x stay ahead of the new one.
    pub fn add_point_sorted(&mut self, p: Point<T>) {
        let idx = self
            .points
            .iter()
            .position(|existing| existing.x > p.x)
            .unwrap_or(self.points.len());
        self.points.insert(idx, p);
    }

    /// Stable sort by x.
    pub fn sort_points(&mut self) {
        self.points
            .sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal));
    }

    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point<T>> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point<T>> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
        self.points.iter()
    }

    /// Find the point strictly between `start` and `end` which is furthest
    /// from the line through `points[start]` and `points[end]`.
    ///
    /// Returns the index and perpendicular distance of that point.
    /// Ties go to the lowest index.
    /// [None] if there are no points in between, or none of them lies off the line.
    ///
    /// Panics if `start` or `end` is out of bounds.
    pub fn furthest_point(&self, start: usize, end: usize) -> Option<(usize, T)> {
        let s = &self.points[start];
        let e = &self.points[end];

        let mut furthest = None;
        let mut record = T::zero();
        for (idx, p) in self
            .points
            .iter()
            .enumerate()
            .take(end)
            .skip(start + 1)
        {
            let d = p.point_to_line_distance(s, e);
            if d > record {
                furthest = Some(idx);
                record = d;
            }
        }
        furthest.map(|idx| (idx, record))
    }

    /// Smallest and largest coordinates on each axis, or [None] for an empty curve.
    pub fn extrema(&self) -> Option<Extrema<T>> {
        let first = self.points.first()?;
        let init = Extrema {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };
        Some(self.points.iter().skip(1).fold(init, |e, p| Extrema {
            min_x: e.min_x.min(p.x),
            max_x: e.max_x.max(p.x),
            min_y: e.min_y.min(p.y),
            max_y: e.max_y.max(p.y),
        }))
    }

    /// Sum of the lengths of every edge.
    pub fn total_length(&self) -> T {
        self.points
            .windows(2)
            .map(|pair| distance(&pair[0], &pair[1]))
            .fold(T::zero(), |acc, d| acc + d)
    }
}

impl<T: Coord> From<Vec<Point<T>>> for Curve<T> {
    fn from(points: Vec<Point<T>>) -> Self {
        Self { points }
    }
}

impl<T: Coord> From<&[Point<T>]> for Curve<T> {
    fn from(line: &[Point<T>]) -> Self {
        Self {
            points: line.to_vec(),
        }
    }
}

impl<T: Coord> FromIterator<Point<T>> for Curve<T> {
    fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<T: Coord> IntoIterator for Curve<T> {
    type Item = Point<T>;
    type IntoIter = std::vec::IntoIter<Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a, T: Coord> IntoIterator for &'a Curve<T> {
    type Item = &'a Point<T>;
    type IntoIter = std::slice::Iter<'a, Point<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl<T: Coord> fmt::Display for Curve<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "curve{{")?;
        for p in &self.points {
            write!(f, "({}, {}), ", p.x, p.y)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::make_curve;

    #[test]
    fn furthest() {
        let c = make_curve(vec![[0.0, 0.0], [1.0, 1.0], [2.0, 3.0], [3.0, -1.0], [4.0, 0.0]]);
        assert_eq!(c.furthest_point(0, 4), Some((2, 3.0)));

        let (idx, d) = c.furthest_point(2, 4).unwrap();
        assert_eq!(idx, 3);
        assert!((d - 5.0 / 13.0f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn furthest_leftmost_tie() {
        let c = make_curve(vec![
            [0.0, 0.0],
            [1.0, 2.0],
            [2.0, -2.0],
            [3.0, 2.0],
            [4.0, 0.0],
        ]);
        assert_eq!(c.furthest_point(0, 4), Some((1, 2.0)));
    }

    #[test]
    fn furthest_no_interior() {
        let c = make_curve(vec![[0.0, 0.0], [1.0, 5.0], [2.0, 0.0]]);
        assert_eq!(c.furthest_point(0, 1), None);
        assert_eq!(c.furthest_point(1, 1), None);
        assert_eq!(c.furthest_point(2, 1), None);
    }

    #[test]
    fn furthest_all_on_chord() {
        let c = make_curve(vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]]);
        assert_eq!(c.furthest_point(0, 2), None);
    }

    #[test]
    #[should_panic]
    fn furthest_out_of_bounds() {
        let c = make_curve(vec![[0.0, 0.0], [1.0, 0.0]]);
        c.furthest_point(0, 2);
    }

    #[test]
    fn sorted_insert() {
        let mut c = make_curve(vec![[0.0, 0.0], [2.0, 0.0]]);
        c.add_point_sorted(Point::new(1.0, 1.0));
        c.add_point_sorted(Point::new(3.0, 1.0));
        c.add_point_sorted(Point::new(-1.0, 1.0));
        c.add_point_sorted(Point::new(1.0, 2.0));
        let xs: Vec<_> = c.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(
            xs,
            vec![
                (-1.0, 1.0),
                (0.0, 0.0),
                (1.0, 1.0),
                (1.0, 2.0),
                (2.0, 0.0),
                (3.0, 1.0)
            ]
        );
    }

    #[test]
    fn sort() {
        let mut c = make_curve(vec![[2.0, 0.0], [0.0, 1.0], [1.0, 2.0]]);
        c.sort_points();
        assert_eq!(c, make_curve(vec![[0.0, 1.0], [1.0, 2.0], [2.0, 0.0]]));
    }

    #[test]
    fn extrema() {
        assert_eq!(Curve::<f64>::new().extrema(), None);
        let c = make_curve(vec![[0.5, 3.0], [-1.0, 1.0], [2.0, -4.0]]);
        assert_eq!(
            c.extrema(),
            Some(Extrema {
                min_x: -1.0,
                max_x: 2.0,
                min_y: -4.0,
                max_y: 3.0,
            })
        );
    }

    #[test]
    fn length() {
        let c = make_curve(vec![[0.0, 0.0], [3.0, 4.0], [3.0, 5.0]]);
        assert_eq!(c.total_length(), 6.0);
        assert_eq!(Curve::<f64>::new().total_length(), 0.0);
    }

    #[test]
    fn display() {
        let c = make_curve(vec![[0.0, 1.0], [2.5, 3.0]]);
        assert_eq!(c.to_string(), "curve{(0, 1), (2.5, 3), }");
    }

    #[test]
    fn from_slice() {
        let line: Vec<Point> = (0..3)
            .map(|n| Point::new(n as f64, (n * n) as f64))
            .collect();
        let c = Curve::from(line.as_slice());
        assert_eq!(c.len(), 3);
        assert_eq!(c.points()[2], Point::new(2.0, 4.0));
        assert_eq!(c.points(), line.as_slice());
    }

    #[test]
    fn preallocated() {
        let mut c = Curve::<f64>::with_capacity(4);
        assert!(c.is_empty());
        c.add_xy(1.0, 2.0);
        assert_eq!(c.points(), &[Point::new(1.0, 2.0)]);
    }
}
