//! Simplify a curve using the [Ramer-Douglas-Peucker](https://en.wikipedia.org/wiki/Ramer%E2%80%93Douglas%E2%80%93Peucker_algorithm) algorithm.
use crate::curve::Curve;
use crate::error::{CurveError, Result};
use crate::point::lossy_f64;
use crate::Coord;
use log::debug;
use std::cmp::Ordering;

/// Push the indices kept strictly between `start` and `end`, in ascending order.
fn rdp_keep_inner<T: Coord>(
    curve: &Curve<T>,
    epsilon: T,
    start: usize,
    end: usize,
    to_keep: &mut Vec<usize>,
) {
    if end <= start + 1 {
        return;
    }

    let Some((furthest, dist)) = curve.furthest_point(start, end) else {
        return;
    };
    if dist < epsilon {
        return;
    }

    rdp_keep_inner(curve, epsilon, start, furthest, to_keep);
    to_keep.push(furthest);
    rdp_keep_inner(curve, epsilon, furthest, end, to_keep);
}

fn check_args<T: Coord>(curve: &Curve<T>, epsilon: T) -> Result<()> {
    if curve.len() < 2 {
        return Err(CurveError::TooFewPoints { len: curve.len() });
    }
    // NaN compares as None
    match epsilon.partial_cmp(&T::zero()) {
        Some(Ordering::Less) | None => Err(CurveError::InvalidEpsilon(lossy_f64(epsilon))),
        _ => Ok(()),
    }
}

/// Return the indices of the points in the curve which would be kept if simplified using RDP.
///
/// The first and last indices are always kept.
/// Interior points are dropped if they are less than `epsilon` from the chord they were tested against;
/// a point exactly `epsilon` away is kept.
pub fn rdp_keep<T: Coord>(curve: &Curve<T>, epsilon: T) -> Result<Vec<usize>> {
    check_args(curve, epsilon)?;
    let last = curve.len() - 1;

    let mut out = vec![0];
    rdp_keep_inner(curve, epsilon, 0, last, &mut out);
    out.push(last);
    Ok(out)
}

/// Decimate the curve using RDP.
///
/// Fails if the curve has fewer than 2 points or `epsilon` is negative or NaN.
pub fn rdp_reduce<T: Coord>(curve: &Curve<T>, epsilon: T) -> Result<Curve<T>> {
    let kept = rdp_keep(curve, epsilon)?;
    debug!(
        "simplified {} points to {} with epsilon {}",
        curve.len(),
        kept.len(),
        lossy_f64(epsilon)
    );
    let points = curve.points();
    let mut out = Curve::with_capacity(kept.len());
    for idx in kept {
        out.add_point(points[idx]);
    }
    Ok(out)
}

impl<T: Coord> Curve<T> {
    /// See [rdp_reduce].
    pub fn simplify(&self, epsilon: T) -> Result<Self> {
        rdp_reduce(self, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::construct::{from_function, from_quadratic};
    use crate::test_utils::make_curve;

    fn assert_reduce(orig: Vec<[f64; 2]>, expected: Vec<[f64; 2]>, epsilon: f64) {
        let orig_curve = make_curve(orig);
        let exp_curve = make_curve(expected);

        let out = rdp_reduce(&orig_curve, epsilon).unwrap();
        assert_eq!(out, exp_curve);
    }

    fn tan_curve() -> Curve {
        from_function(-5.0, 5.0, 0.01, |x: f64| (0.25 * x).tan()).unwrap()
    }

    #[test]
    fn reduce() {
        assert_reduce(
            vec![[0.0, 0.0], [1.0, 0.1], [2.0, 0.0]],
            vec![[0.0, 0.0], [2.0, 0.0]],
            0.2,
        );
    }

    #[test]
    fn reduce_multi() {
        assert_reduce(
            vec![[0.0, 0.0], [0.5, 0.6], [1.0, 1.0], [1.6, 0.5], [2.0, 0.0]],
            vec![[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]],
            0.2,
        )
    }

    #[test]
    fn collinear_collapse() {
        for epsilon in [1e-9, 0.5, 100.0] {
            assert_reduce(
                vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0]],
                vec![[0.0, 0.0], [2.0, 0.0]],
                epsilon,
            );
        }
    }

    #[test]
    fn spike_retained() {
        assert_reduce(
            vec![[0.0, 0.0], [1.0, 10.0], [2.0, 0.0]],
            vec![[0.0, 0.0], [1.0, 10.0], [2.0, 0.0]],
            1.0,
        );
    }

    #[test]
    fn epsilon_boundary_kept() {
        assert_reduce(
            vec![[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]],
            vec![[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]],
            1.0,
        );
    }

    #[test]
    fn two_points() {
        assert_reduce(vec![[0.0, 0.0], [1.0, 1.0]], vec![[0.0, 0.0], [1.0, 1.0]], 0.5);
    }

    #[test]
    fn closed_loop() {
        // first and last coincide, so distances are measured to that point
        assert_reduce(
            vec![[0.0, 0.0], [1.0, 1.0], [2.0, 0.0], [0.0, 0.0]],
            vec![[0.0, 0.0], [1.0, 1.0], [2.0, 0.0], [0.0, 0.0]],
            0.5,
        );
    }

    #[test]
    fn zero_epsilon_keeps_non_collinear() {
        let c = from_quadratic(1.0, 0.0, 0.0, 0.0, 10.0, 1.0).unwrap();
        assert_eq!(c.len(), 11);
        assert_eq!(c.simplify(0.0).unwrap(), c);
    }

    #[test]
    fn zero_epsilon_drops_collinear() {
        assert_reduce(
            vec![[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 2.0]],
            vec![[0.0, 0.0], [2.0, 0.0], [3.0, 2.0]],
            0.0,
        );
    }

    #[test]
    fn endpoints_and_subsequence() {
        let c = tan_curve();
        for epsilon in [0.0, 0.001, 0.075, 1.0] {
            let kept = rdp_keep(&c, epsilon).unwrap();
            assert_eq!(kept.first(), Some(&0));
            assert_eq!(kept.last(), Some(&(c.len() - 1)));
            assert!(kept.windows(2).all(|w| w[0] < w[1]));

            let reduced = c.simplify(epsilon).unwrap();
            assert_eq!(reduced.first(), c.first());
            assert_eq!(reduced.last(), c.last());
            let expected: Vec<_> = kept.iter().map(|idx| c.points()[*idx]).collect();
            assert_eq!(reduced.points(), expected.as_slice());
        }
    }

    #[test]
    fn monotonic_in_epsilon() {
        let c = from_function(0.0, 5.0, 0.01, |x: f64| {
            (-x).exp() * (2.0 * std::f64::consts::PI * x).cos()
        })
        .unwrap();
        let mut prev = rdp_keep(&c, 0.0).unwrap();
        for epsilon in [0.0001, 0.001, 0.01, 0.075, 0.5, 2.0] {
            let kept = rdp_keep(&c, epsilon).unwrap();
            assert!(kept.len() <= prev.len());
            assert!(kept.iter().all(|idx| prev.contains(idx)));
            prev = kept;
        }
        assert_eq!(prev, vec![0, c.len() - 1]);
    }

    #[test]
    fn simplifies_sampled_curve() {
        let c = tan_curve();
        let reduced = c.simplify(0.075).unwrap();
        assert!(reduced.len() < c.len() / 10);
        assert!(reduced.len() > 2);
    }

    #[test]
    fn too_few_points() {
        assert_eq!(
            rdp_reduce(&Curve::<f64>::new(), 0.1),
            Err(CurveError::TooFewPoints { len: 0 })
        );
        assert_eq!(
            rdp_keep(&make_curve(vec![[1.0, 1.0]]), 0.1),
            Err(CurveError::TooFewPoints { len: 1 })
        );
    }

    #[test]
    fn bad_epsilon() {
        let c = make_curve(vec![[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]]);
        assert_eq!(c.simplify(-1.0), Err(CurveError::InvalidEpsilon(-1.0)));
        assert!(matches!(
            c.simplify(f64::NAN),
            Err(CurveError::InvalidEpsilon(e)) if e.is_nan()
        ));
    }
}
