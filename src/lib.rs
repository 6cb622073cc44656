//! Build 2D curves and simplify them with the Ramer-Douglas-Peucker algorithm.
//!
//! ```
//! use rdpcurve::construct::from_function;
//!
//! let curve = from_function(-5.0, 5.0, 0.01, |x: f64| (0.25 * x).tan()).unwrap();
//! let simplified = curve.simplify(0.075).unwrap();
//! assert!(simplified.len() < curve.len());
//! assert_eq!(simplified.first(), curve.first());
//! ```
pub use nalgebra;
use nalgebra::RealField;
use num_traits::ToPrimitive;

pub mod construct;
pub mod curve;
pub mod error;
pub mod point;
pub mod render;
pub mod simplify;

pub use curve::{Curve, Extrema};
pub use error::{CurveError, Result};
pub use point::{Point, PointExt};

pub type Precision = f64;

/// Floating point types which can be used for coordinates; `f32` and `f64`.
pub trait Coord: RealField + Copy + ToPrimitive {}

impl<T: RealField + Copy + ToPrimitive> Coord for T {}

/// Tolerance used by the demo binary when none is given.
pub const DEFAULT_EPSILON: Precision = 0.075;
