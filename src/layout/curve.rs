// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Closed parametric curves

use crate::{Environment, Vec2};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

/// Integration step for ellipse and rounded-rectangle layouts, in radians
pub const STEP: f64 = 0.001;

/// Integration step for the superellipse layout, in radians
///
/// The superellipse's speed changes far more sharply close to the axes than
/// that of other curves; a coarse step yields visibly uneven spacing.
pub const SUPERELLIPSE_STEP: f64 = 0.00001;

/// Phase shift of the superellipse sweep, in radians
///
/// The derivative of `cbrt` is singular at zero, thus the superellipse speed
/// is undefined wherever `cos t = 0` or `sin t = 0`. Starting the sweep just
/// past `-π/2` keeps every sample clear of these points.
pub const SUPERELLIPSE_PHASE_EPSILON: f64 = 0.000001;

/// A parametric curve swept over one revolution
///
/// The sweep covers `phase() + k * step()` for each `k ≥ 0` with
/// `k * step() < 2π`.
pub trait Parametric {
    /// Magnitude of the derivative `d/dt (x(t), y(t))`
    ///
    /// This is not required to be exact: only values relative to other
    /// samples of the same curve matter. It should be non-negative.
    fn speed(&self, t: f64) -> f64;

    /// Position at parameter `t`
    fn point(&self, t: f64) -> Vec2;

    /// Parameter at which the sweep starts
    ///
    /// The first token is placed here.
    fn phase(&self) -> f64;

    /// Integration step
    fn step(&self) -> f64;
}

/// Family of closed curve
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CurveFamily {
    /// `(cos t, sin t)`
    Ellipse,
    /// `(cbrt(cos t), cbrt(sin t))`
    Superellipse,
    /// `(|cos t|·cos t − |sin t|·sin t, |cos t|·cos t + |sin t|·sin t)`
    ///
    /// Each quadrant of `t` traces one edge of the rectangle, slowing to a
    /// halt at the corners. The sweep starts at `-3π/4`, the middle of the
    /// top edge.
    RoundedRect,
}

impl CurveFamily {
    /// Phase offset of the family's sweep
    pub fn phase(self) -> f64 {
        match self {
            CurveFamily::Ellipse => -FRAC_PI_2,
            CurveFamily::Superellipse => -FRAC_PI_2 + SUPERELLIPSE_PHASE_EPSILON,
            CurveFamily::RoundedRect => -3.0 * FRAC_PI_4,
        }
    }

    /// Integration step of the family
    pub fn step(self) -> f64 {
        match self {
            CurveFamily::Superellipse => SUPERELLIPSE_STEP,
            CurveFamily::Ellipse | CurveFamily::RoundedRect => STEP,
        }
    }
}

/// Quarter of a revolution
///
/// Used to select the branch of the piecewise rounded-rectangle speed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// `[0, π/2)`
    First,
    /// `[π/2, π)`
    Second,
    /// `[π, 3π/2)`
    Third,
    /// `[3π/2, 2π)`
    Fourth,
}

impl Quadrant {
    /// The quadrant containing angle `t`
    ///
    /// `t` is normalized into `[0, 2π)` first. Non-finite angles land in
    /// [`Quadrant::Fourth`].
    pub fn of(t: f64) -> Self {
        let t = t.rem_euclid(TAU);
        // A tiny negative angle may round up to exactly 2π
        let t = if t == TAU { 0.0 } else { t };
        match t {
            t if t < FRAC_PI_2 => Quadrant::First,
            t if t < PI => Quadrant::Second,
            t if t < 3.0 * FRAC_PI_2 => Quadrant::Third,
            _ => Quadrant::Fourth,
        }
    }
}

/// A closed curve fitted to a container
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Curve {
    family: CurveFamily,
    centre: Vec2,
    radii: Vec2,
}

impl Curve {
    /// Construct from explicit centre and radii
    pub fn new(family: CurveFamily, centre: Vec2, radii: Vec2) -> Self {
        Curve {
            family,
            centre,
            radii,
        }
    }

    /// Fit a curve inside `container`, leaving room for tokens of size `token`
    ///
    /// Radii are `(container - (token + env.margin)) / 2` and the centre
    /// equals the radii, so that token positions (top-left corners) start at
    /// the origin. Radii are negative when a token does not fit.
    pub fn fit(family: CurveFamily, container: Vec2, token: Vec2, env: &Environment) -> Self {
        let radii = (container - (token + env.margin)) * 0.5;
        Curve::new(family, radii, radii)
    }

    /// The curve family
    #[inline]
    pub fn family(&self) -> CurveFamily {
        self.family
    }

    /// Centre of the curve
    #[inline]
    pub fn centre(&self) -> Vec2 {
        self.centre
    }

    /// Horizontal and vertical radii
    #[inline]
    pub fn radii(&self) -> Vec2 {
        self.radii
    }
}

impl Parametric for Curve {
    fn speed(&self, t: f64) -> f64 {
        let Vec2(rx, ry) = self.radii;
        match self.family {
            CurveFamily::Ellipse => (rx * t.sin()).hypot(ry * t.cos()),
            CurveFamily::Superellipse => {
                let (sin, cos) = t.sin_cos();
                let dx = rx / 3.0 / cos.cbrt().powi(2) * -sin;
                let dy = ry / 3.0 / sin.cbrt().powi(2) * cos;
                dx.hypot(dy)
            }
            CurveFamily::RoundedRect => {
                let r = match Quadrant::of(t) {
                    Quadrant::First | Quadrant::Third => rx,
                    Quadrant::Second | Quadrant::Fourth => ry,
                };
                2.0 * r * (2.0 * t).sin().abs()
            }
        }
    }

    fn point(&self, t: f64) -> Vec2 {
        let (sin, cos) = t.sin_cos();
        let unit = match self.family {
            CurveFamily::Ellipse => Vec2(cos, sin),
            CurveFamily::Superellipse => Vec2(cos.cbrt(), sin.cbrt()),
            CurveFamily::RoundedRect => {
                let c = cos.abs() * cos;
                let s = sin.abs() * sin;
                Vec2(c - s, c + s)
            }
        };
        self.centre + Vec2(unit.0 * self.radii.0, unit.1 * self.radii.1)
    }

    #[inline]
    fn phase(&self) -> f64 {
        self.family.phase()
    }

    #[inline]
    fn step(&self) -> f64 {
        self.family.step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn curve(family: CurveFamily) -> Curve {
        Curve::new(family, Vec2(170.0, 110.5), Vec2(170.0, 110.5))
    }

    #[test]
    fn fit() {
        let env = Environment::default();
        let c = Curve::fit(
            CurveFamily::Ellipse,
            Vec2(400.0, 300.0),
            Vec2(40.0, 40.0),
            &env,
        );
        assert_eq!(c.radii(), Vec2(170.0, 110.5));
        assert_eq!(c.centre(), Vec2(170.0, 110.5));

        let c = Curve::fit(
            CurveFamily::RoundedRect,
            Vec2(10.0, 10.0),
            Vec2(40.0, 40.0),
            &env,
        );
        assert_eq!(c.radii(), Vec2(-25.0, -34.5));
    }

    #[test]
    fn quadrants() {
        assert_eq!(Quadrant::of(0.0), Quadrant::First);
        assert_eq!(Quadrant::of(FRAC_PI_2), Quadrant::Second);
        assert_eq!(Quadrant::of(PI), Quadrant::Third);
        assert_eq!(Quadrant::of(3.0 * FRAC_PI_2), Quadrant::Fourth);
        assert_eq!(Quadrant::of(-3.0 * FRAC_PI_4), Quadrant::Third);
        assert_eq!(Quadrant::of(-0.1), Quadrant::Fourth);
        assert_eq!(Quadrant::of(-1e-20), Quadrant::First);
        assert_eq!(Quadrant::of(-TAU), Quadrant::First);
        assert_eq!(Quadrant::of(TAU + 0.1), Quadrant::First);
        assert_eq!(Quadrant::of(f64::NAN), Quadrant::Fourth);
    }

    #[test]
    fn ellipse_points() {
        let c = curve(CurveFamily::Ellipse);
        let top = c.point(c.phase());
        assert!((top.0 - 170.0).abs() < EPS);
        assert!(top.1.abs() < EPS);
        let right = c.point(0.0);
        assert_eq!(right, Vec2(340.0, 110.5));
    }

    #[test]
    fn ellipse_speed() {
        let c = curve(CurveFamily::Ellipse);
        assert!((c.speed(0.0) - 110.5).abs() < EPS);
        assert!((c.speed(FRAC_PI_2) - 170.0).abs() < EPS);
    }

    #[test]
    fn superellipse_is_finite_on_sweep() {
        let c = curve(CurveFamily::Superellipse);
        let t = c.phase();
        assert!(c.speed(t).is_finite());
        let top = c.point(t);
        assert!((top.0 - 170.0).abs() < 5.0);
        assert!(top.1.abs() < EPS.sqrt());
    }

    #[test]
    fn superellipse_corner_is_squarer() {
        let e = curve(CurveFamily::Ellipse);
        let s = curve(CurveFamily::Superellipse);
        let t = FRAC_PI_4;
        // Further from the centre along the diagonal than the ellipse
        assert!(s.point(t).distance(s.centre()) > e.point(t).distance(e.centre()));
    }

    #[test]
    fn rounded_rect_edges() {
        let c = Curve::new(CurveFamily::RoundedRect, Vec2(50.0, 50.0), Vec2(50.0, 50.0));
        let top = c.point(c.phase());
        assert!(top.distance(Vec2(50.0, 0.0)) < EPS);
        let right = c.point(-FRAC_PI_4);
        assert!(right.distance(Vec2(100.0, 50.0)) < EPS);
    }

    #[test]
    fn rounded_rect_speed_branches() {
        let c = Curve::new(CurveFamily::RoundedRect, Vec2::ZERO, Vec2(10.0, 3.0));
        assert!((c.speed(FRAC_PI_4) - 20.0).abs() < EPS);
        assert!((c.speed(3.0 * FRAC_PI_4) - 6.0).abs() < EPS);
        assert!((c.speed(5.0 * FRAC_PI_4) - 20.0).abs() < EPS);
        assert!((c.speed(-FRAC_PI_4) - 6.0).abs() < EPS);
        assert_eq!(c.speed(0.0), 0.0);
    }

    #[test]
    fn zero_radii() {
        for family in [
            CurveFamily::Ellipse,
            CurveFamily::Superellipse,
            CurveFamily::RoundedRect,
        ] {
            let c = Curve::new(family, Vec2::ZERO, Vec2::ZERO);
            let t = c.phase() + 0.5;
            assert_eq!(c.speed(t), 0.0);
            assert_eq!(c.point(t), Vec2::ZERO);
        }
    }
}
