//! 2D points, doubling as vectors for the projection arithmetic the simplifier relies on.
use crate::error::{CurveError, Result};
use crate::{Coord, Precision};
use nalgebra::{distance, Point2, Vector2};

/// A point in the plane.
pub type Point<T = Precision> = Point2<T>;

pub(crate) fn lossy_f64<T: Coord>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Unit vector in the direction of `v`; the zero vector stays zero.
fn unit<T: Coord>(v: &Vector2<T>) -> Result<Vector2<T>> {
    let norm = v.norm();
    if !norm.is_finite() {
        return Err(CurveError::Domain {
            magnitude: lossy_f64(norm),
        });
    }
    Ok(v.try_normalize(T::zero()).unwrap_or_else(Vector2::zeros))
}

/// Measurements between points, treating a point as the vector from the origin where needed.
pub trait PointExt<T: Coord>: Sized {
    /// Unit vector pointing at `radians` anticlockwise from the x axis.
    fn from_angle(radians: T) -> Self;

    fn from_angle_and_magnitude(radians: T, magnitude: T) -> Self;

    /// Euclidean distance between two points.
    fn distance(&self, other: &Self) -> T;

    fn dot(&self, other: &Self) -> T;

    fn magnitude(&self) -> T;

    /// Scale to unit length.
    ///
    /// The zero vector normalizes to itself.
    /// Fails with [CurveError::Domain] if the magnitude is infinite or NaN.
    fn try_normalize(&self) -> Result<Self>;

    /// Scale to unit length; the zero vector normalizes to itself.
    ///
    /// Panics if the magnitude is infinite or NaN.
    fn normalize(&self) -> Self {
        match self.try_normalize() {
            Ok(p) => p,
            Err(e) => panic!("{e}"),
        }
    }

    /// Angle of this vector from the x axis, in radians.
    fn heading(&self) -> T;

    /// Orthogonal projection of this point onto the infinite line through `a` and `b`.
    ///
    /// If `a == b` there is no line and `a` is returned.
    /// Panics if `b - a` has a non-finite magnitude.
    fn scalar_projection(&self, a: &Self, b: &Self) -> Self;

    /// Perpendicular distance from this point to the infinite line through `l1` and `l2`.
    fn point_to_line_distance(&self, l1: &Self, l2: &Self) -> T {
        self.distance(&self.scalar_projection(l1, l2))
    }
}

impl<T: Coord> PointExt<T> for Point<T> {
    fn from_angle(radians: T) -> Self {
        Point::new(radians.cos(), radians.sin())
    }

    fn from_angle_and_magnitude(radians: T, magnitude: T) -> Self {
        Point::from(Self::from_angle(radians).coords * magnitude)
    }

    fn distance(&self, other: &Self) -> T {
        distance(self, other)
    }

    fn dot(&self, other: &Self) -> T {
        self.coords.dot(&other.coords)
    }

    fn magnitude(&self) -> T {
        self.coords.norm()
    }

    fn try_normalize(&self) -> Result<Self> {
        unit(&self.coords).map(Point::from)
    }

    fn heading(&self) -> T {
        let n = self.normalize();
        n.y.atan2(n.x)
    }

    fn scalar_projection(&self, a: &Self, b: &Self) -> Self {
        let ab = match unit(&(*b - *a)) {
            Ok(v) => v,
            Err(e) => panic!("{e}"),
        };
        let sp = (*self - *a).dot(&ab);
        *a + ab * sp
    }
}
