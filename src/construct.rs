//! Build curves by sampling a mathematical source.
//!
//! `delta` is treated as a maximum: points may be closer together than `delta`
//! (the last step usually is) but will not be further apart along the stepping axis,
//! beyond rounding in the last place of the coordinates.
//! The exact end point is always included.
use crate::curve::Curve;
use crate::error::{CurveError, Result};
use crate::point::lossy_f64;
use crate::{Coord, Precision};
use log::debug;

/// Sampling step used by the demo and a reasonable default for unit-scale curves.
pub const DEFAULT_DELTA: Precision = 0.01;

fn check_delta<T: Coord>(delta: T) -> Result<()> {
    if delta > T::zero() && delta.is_finite() {
        Ok(())
    } else {
        Err(CurveError::NonPositiveDelta(lossy_f64(delta)))
    }
}

fn check_finite<T: Coord>(values: &[T]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(CurveError::NonFiniteBound)
    }
}

/// Values from `start` towards `end` every `delta`, excluding `end` itself.
///
/// Each value is `start + n * delta` for an integer step count `n`, so rounding does not drift.
/// Values which round onto the previous one are skipped; the output is strictly monotonic.
fn steps<T: Coord>(start: T, end: T, delta: T) -> Result<Vec<T>> {
    let forward = end >= start;
    let span = if forward { end - start } else { start - end };
    let count = (span / delta)
        .ceil()
        .to_usize()
        .ok_or(CurveError::TooManySamples)?;

    let mut out: Vec<T> = Vec::new();
    for n in 0..=count {
        let Some(n) = T::from_usize(n) else {
            break;
        };
        let v = if forward {
            start + delta * n
        } else {
            start - delta * n
        };
        let before_end = if forward { v < end } else { v > end };
        if !before_end {
            break;
        }
        // delta may be below the coordinates' precision
        let advanced = out
            .last()
            .map_or(true, |prev| if forward { v > *prev } else { v < *prev });
        if advanced {
            out.push(v);
        }
    }
    Ok(out)
}

/// Create a curve between `x_start` and `x_end`, using `f` to get y values.
///
/// Samples at `x_start + n * delta` while below `x_end`, then at `x_end` exactly.
/// Fails if the bounds are not finite, `delta` is not positive, or `x_start >= x_end`.
pub fn from_function<T: Coord, F: Fn(T) -> T>(
    x_start: T,
    x_end: T,
    delta: T,
    f: F,
) -> Result<Curve<T>> {
    check_finite(&[x_start, x_end])?;
    check_delta(delta)?;
    if x_start >= x_end {
        return Err(CurveError::EmptyRange {
            start: lossy_f64(x_start),
            end: lossy_f64(x_end),
        });
    }

    let xs = steps(x_start, x_end, delta)?;
    let mut curve = Curve::with_capacity(xs.len() + 1);
    for x in xs {
        curve.add_xy(x, f(x));
    }
    curve.add_xy(x_end, f(x_end));

    debug!(
        "sampled {} points between {} and {}",
        curve.len(),
        lossy_f64(x_start),
        lossy_f64(x_end)
    );
    Ok(curve)
}

/// Create a quadratic curve `y = ax^2 + bx + c` between `x_start` and `x_end`.
///
/// See [from_function].
pub fn from_quadratic<T: Coord>(
    a: T,
    b: T,
    c: T,
    x_start: T,
    x_end: T,
    delta: T,
) -> Result<Curve<T>> {
    from_function(x_start, x_end, delta, |x| a * x * x + b * x + c)
}

/// Create a straight line from `(x1, y1)` to `(x2, y2)`,
/// with at most `delta` between the x coordinates of consecutive points.
///
/// Vertical lines step along y instead.
/// Points run from the first end to the second, whichever direction that is.
pub fn from_line_segment<T: Coord>(x1: T, y1: T, x2: T, y2: T, delta: T) -> Result<Curve<T>> {
    check_finite(&[x1, y1, x2, y2])?;
    check_delta(delta)?;

    let mut curve = Curve::new();
    if x1 == x2 {
        if y1 == y2 {
            return Err(CurveError::DegenerateSegment);
        }
        for y in steps(y1, y2, delta)? {
            curve.add_xy(x1, y);
        }
    } else {
        let slope = (y2 - y1) / (x2 - x1);
        for x in steps(x1, x2, delta)? {
            curve.add_xy(x, slope * (x - x1) + y1);
        }
    }
    curve.add_xy(x2, y2);

    debug!("sampled {} points along line segment", curve.len());
    Ok(curve)
}
