// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Straight-line layouts

use super::Layout;
use crate::conv::to_f64;
use crate::{Coordinates, Vec2};

/// Smallest spacing of the [`Layout::Linear`] row, in pixels
pub const LINEAR_MIN_OFFSET: f64 = 15.0;

/// Place `total` tokens along a straight line
///
/// Lines have uniform speed, so positions are computed directly by index.
///
/// -   [`Layout::Diagonal`]: token `i` is at `(container - token) / total * i`
/// -   [`Layout::Horizontal`]: as diagonal, with `y = 0`
/// -   [`Layout::Vertical`]: as diagonal, with `x = 0`
/// -   [`Layout::Linear`]: a row with spacing
///     `offset = max(15, container.0 / 18)`; token `i` is at
///     `(offset * (i + 1), offset)`
///
/// Returns `None` for closed layouts.
pub fn linear_points(
    layout: Layout,
    container: Vec2,
    token: Vec2,
    total: usize,
) -> Option<Coordinates> {
    let n = to_f64(total);
    let coords = match layout {
        Layout::Diagonal | Layout::Horizontal | Layout::Vertical => {
            let span = container - token;
            let mut inc = Vec2(span.0 / n, span.1 / n);
            match layout {
                Layout::Horizontal => inc.1 = 0.0,
                Layout::Vertical => inc.0 = 0.0,
                _ => (),
            }
            (0..total).map(|i| inc * to_f64(i)).collect()
        }
        Layout::Linear => {
            let offset = LINEAR_MIN_OFFSET.max(container.0 / 18.0);
            (1..=total)
                .map(|i| Vec2(offset * to_f64(i), offset))
                .collect()
        }
        Layout::Ellipse | Layout::RectEllipse | Layout::Rect => return None,
    };
    Some(coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagonal() {
        let coords = linear_points(Layout::Diagonal, Vec2(100.0, 100.0), Vec2(10.0, 10.0), 5);
        let expected = [0.0, 18.0, 36.0, 54.0, 72.0].map(Vec2::splat);
        assert_eq!(coords.as_deref(), Some(&expected[..]));
    }

    #[test]
    fn horizontal_and_vertical() {
        let container = Vec2(110.0, 70.0);
        let token = Vec2(10.0, 10.0);
        let h = linear_points(Layout::Horizontal, container, token, 4).unwrap();
        let expected = [0.0, 25.0, 50.0, 75.0].map(|x| Vec2(x, 0.0));
        assert_eq!(&h[..], &expected[..]);
        let v = linear_points(Layout::Vertical, container, token, 4).unwrap();
        let expected = [0.0, 15.0, 30.0, 45.0].map(|y| Vec2(0.0, y));
        assert_eq!(&v[..], &expected[..]);
    }

    #[test]
    fn linear_row() {
        let coords = linear_points(Layout::Linear, Vec2(360.0, 100.0), Vec2::ZERO, 3).unwrap();
        assert_eq!(
            &coords[..],
            &[Vec2(20.0, 20.0), Vec2(40.0, 20.0), Vec2(60.0, 20.0)]
        );

        // Narrow containers use the minimum spacing
        let coords = linear_points(Layout::Linear, Vec2(90.0, 100.0), Vec2::ZERO, 2).unwrap();
        assert_eq!(&coords[..], &[Vec2(15.0, 15.0), Vec2(30.0, 15.0)]);
    }

    #[test]
    fn empty() {
        for layout in [
            Layout::Diagonal,
            Layout::Horizontal,
            Layout::Vertical,
            Layout::Linear,
        ] {
            let coords = linear_points(layout, Vec2(100.0, 100.0), Vec2(10.0, 10.0), 0).unwrap();
            assert!(coords.is_empty());
        }
    }

    #[test]
    fn closed_layouts() {
        assert!(linear_points(Layout::Ellipse, Vec2::ZERO, Vec2::ZERO, 3).is_none());
        assert!(linear_points(Layout::Rect, Vec2::ZERO, Vec2::ZERO, 3).is_none());
    }
}
