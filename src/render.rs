//! Draw curves as ASCII art, for eyeballing the effect of simplification in a terminal.
use crate::curve::Curve;
use crate::error::{CurveError, Result};
use crate::Coord;
use std::io;

const EMPTY: char = '-';
const MARK: char = 'X';

/// Linearly remap `value` from the range `start1..stop1` onto `start2..stop2`.
///
/// An empty source range is treated as having width 1.
pub fn map_range<T: Coord>(value: T, start1: T, stop1: T, start2: T, stop2: T) -> T {
    let width = if stop1 == start1 {
        T::one()
    } else {
        stop1 - start1
    };
    (value - start1) / width * (stop2 - start2) + start2
}

/// Widen an axis' bounds according to the printer's options.
///
/// `start_0` pulls a positive minimum down to 0.
/// `symmetric` makes the bounds mirror each other around 0, growing whichever side is smaller.
pub fn fix_bounds<T: Coord>(mut min: T, mut max: T, symmetric: bool, start_0: bool) -> (T, T) {
    if start_0 && min > T::zero() {
        min = T::zero();
    }

    if symmetric && max >= T::zero() {
        if -max < min {
            min = -max;
        } else if -min >= max {
            max = -min;
        }
    }

    (min, max)
}

/// How a curve should be laid out on the character grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PrintConfig {
    /// Include x = 0 on the left edge if every x is positive.
    pub start_x_0: bool,
    /// Include y = 0 on the bottom edge if every y is positive.
    pub start_y_0: bool,
    pub symmetric_x: bool,
    pub symmetric_y: bool,
    /// Grid width in characters.
    pub width: usize,
    /// Grid height in characters.
    pub height: usize,
}

impl Default for PrintConfig {
    fn default() -> Self {
        Self {
            start_x_0: false,
            start_y_0: false,
            symmetric_x: false,
            symmetric_y: true,
            width: 80,
            height: 24,
        }
    }
}

impl PrintConfig {
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }
}

/// Renders curves onto a fixed-size character grid, largest y on the top row.
#[derive(Copy, Clone, Debug, Default)]
pub struct CurvePrinter {
    config: PrintConfig,
}

impl CurvePrinter {
    pub fn new(config: PrintConfig) -> Self {
        Self { config }
    }

    /// Rows of the grid, top first.
    ///
    /// Fails if the curve is empty or the grid has no cells.
    pub fn render<T: Coord>(&self, curve: &Curve<T>) -> Result<Vec<String>> {
        let PrintConfig { width, height, .. } = self.config;
        if width == 0 || height == 0 {
            return Err(CurveError::ZeroSizedGrid { width, height });
        }
        let extrema = curve.extrema().ok_or(CurveError::EmptyCurve)?;

        let (min_x, max_x) = fix_bounds(
            extrema.min_x,
            extrema.max_x,
            self.config.symmetric_x,
            self.config.start_x_0,
        );
        let (min_y, max_y) = fix_bounds(
            extrema.min_y,
            extrema.max_y,
            self.config.symmetric_y,
            self.config.start_y_0,
        );

        let mut screen = vec![vec![EMPTY; width]; height];
        for p in curve {
            let col = to_cell(map_range(p.x, min_x, max_x, T::zero(), last_cell(width)), width);
            let row = to_cell(map_range(p.y, min_y, max_y, T::zero(), last_cell(height)), height);
            screen[height - row - 1][col] = MARK;
        }

        Ok(screen
            .into_iter()
            .map(|row| row.into_iter().collect())
            .collect())
    }

    /// Write the rendered grid to `out`, one line per row.
    pub fn print<T: Coord, W: io::Write>(&self, curve: &Curve<T>, out: &mut W) -> io::Result<()> {
        let rows = self
            .render(curve)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
        for row in rows {
            writeln!(out, "{row}")?;
        }
        Ok(())
    }
}

fn last_cell<T: Coord>(size: usize) -> T {
    T::from_usize(size - 1).unwrap_or_else(T::zero)
}

/// Truncate a mapped coordinate to a cell index within `0..size`.
fn to_cell<T: Coord>(value: T, size: usize) -> usize {
    value.to_usize().unwrap_or(0).min(size - 1)
}
