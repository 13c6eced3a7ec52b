// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Equal arc-length sampling
//!
//! Arc length along a curve is the integral of its speed. We approximate this
//! with a left Riemann sum over one revolution, then sweep the revolution a
//! second time, emitting a point each time the running sum crosses the next
//! multiple of `1 / total` of the full sum.
//!
//! The step size is taken from the curve and is part of the result: the same
//! curve sampled with a different step yields slightly different points.

use super::Parametric;
use crate::conv::{step_count, to_f64};
use crate::{Coordinates, Vec2};
use smallvec::SmallVec;
use std::f64::consts::TAU;

/// A point emitted by [`arc_samples`]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArcSample {
    /// Curve parameter of the point
    pub param: f64,
    /// Sum of speeds swept before reaching `param`
    ///
    /// Proportional to the arc length from the start of the sweep. Compare
    /// with [`circumference`] of the same curve.
    pub arc: f64,
    /// Position
    pub point: Vec2,
}

/// Sum of speeds over one revolution
///
/// This is proportional to the perimeter of the curve (by a factor of
/// `1 / step`).
pub fn circumference<C: Parametric + ?Sized>(curve: &C) -> f64 {
    let (phase, step) = (curve.phase(), curve.step());
    (0..step_count(TAU, step))
        .map(|k| curve.speed(phase + to_f64(k) * step))
        .sum()
}

/// Sample `total` points at (approximately) equal arc-length intervals
///
/// Points are yielded in sweep order, starting at the curve's phase. The
/// result always has length `total`; if `total == 0` the curve is not
/// evaluated at all.
///
/// A curve of zero length has no well-defined arc fraction: all points are
/// then taken from the first `total` steps of the sweep.
pub fn arc_samples<C: Parametric + ?Sized>(curve: &C, total: usize) -> SmallVec<[ArcSample; 16]> {
    let mut samples = SmallVec::new();
    if total == 0 {
        return samples;
    }

    let (phase, step) = (curve.phase(), curve.step());
    let steps = step_count(TAU, step);
    let circ = circumference(curve);
    log::trace!("arc_samples: circumference {circ} over {steps} steps");

    let n = to_f64(total);
    samples.reserve_exact(total);
    let mut run = 0.0;
    for k in 0..steps {
        let t = phase + to_f64(k) * step;
        // NaN (from 0 / 0) counts as crossing
        if !(n * run / circ < to_f64(samples.len())) {
            samples.push(ArcSample {
                param: t,
                arc: run,
                point: curve.point(t),
            });
            if samples.len() == total {
                return samples;
            }
        }
        run += curve.speed(t);
    }

    // Short sweep: total exceeds the number of steps
    log::warn!(
        "arc_samples: sweep of {steps} steps yielded {} of {total} points",
        samples.len()
    );
    let t = phase + to_f64(steps.saturating_sub(1)) * step;
    let last = ArcSample {
        param: t,
        arc: run,
        point: curve.point(t),
    };
    samples.resize(total, last);
    samples
}

/// Sample `total` positions at (approximately) equal arc-length intervals
///
/// See [`arc_samples`].
pub fn equal_arc_points<C: Parametric + ?Sized>(curve: &C, total: usize) -> Coordinates {
    arc_samples(curve, total)
        .into_iter()
        .map(|sample| sample.point)
        .collect()
}
