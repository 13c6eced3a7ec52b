// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Type conversion utilities
//!
//! Token counts and sweep indices are `usize` while all geometry is `f64`.
//! Counts are small (tokens on a board, steps in one revolution) so these
//! conversions are always exact; `easy-cast` checks this on debug builds.

use easy_cast::{Cast, CastFloat};

/// Convert `usize` → `f64`
///
/// This is a "safer" wrapper around `as` ensuring (on debug builds) that the
/// input value is represented exactly.
#[inline]
pub fn to_f64(x: usize) -> f64 {
    x.cast()
}

/// Number of integration steps of size `step` covering `span`
///
/// This is the count of indices `k` with `k * step < span`, i.e. the number
/// of iterations of a sweep `t = start, start + step, ...` stopping before
/// `start + span`.
#[inline]
pub fn step_count(span: f64, step: f64) -> usize {
    (span / step).cast_ceil()
}
