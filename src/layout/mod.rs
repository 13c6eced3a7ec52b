// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Layout shapes
//!
//! Each [`Layout`] is either a closed curve, described by a [`CurveFamily`]
//! and sampled at equal arc-length intervals by [`equal_arc_points`], or a
//! straight line computed directly by [`linear_points`].

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod curve;
mod linear;
mod sweep;

pub use curve::{Curve, CurveFamily, Parametric, Quadrant};
pub use curve::{STEP, SUPERELLIPSE_PHASE_EPSILON, SUPERELLIPSE_STEP};
pub use linear::{linear_points, LINEAR_MIN_OFFSET};
pub use sweep::{arc_samples, circumference, equal_arc_points, ArcSample};

/// Unrecognised layout name
///
/// Placement never falls back to a default layout.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("unrecognised layout type \"{0}\"")]
pub struct UnknownLayout(pub String);

/// Shape along which tokens are placed
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Layout {
    /// An ellipse touching the edges of the container
    ///
    /// The first token is placed at the top centre.
    Ellipse,
    /// A superellipse: between an ellipse and a rectangle
    ///
    /// The first token is placed at the top centre.
    #[cfg_attr(feature = "serde", serde(alias = "rectangular_ellipse"))]
    RectEllipse,
    /// A rectangle with rounded corners
    #[cfg_attr(feature = "serde", serde(alias = "rectangle"))]
    Rect,
    /// From the top-left towards the bottom-right corner
    Diagonal,
    /// Along the top edge
    Horizontal,
    /// Along the left edge
    Vertical,
    /// A single row of fixed spacing, inset from the top-left corner
    Linear,
}

impl Layout {
    /// All layouts, in the order a layout selector presents them
    pub const ALL: [Layout; 7] = [
        Layout::Ellipse,
        Layout::RectEllipse,
        Layout::Rect,
        Layout::Diagonal,
        Layout::Horizontal,
        Layout::Vertical,
        Layout::Linear,
    ];

    /// Canonical selector name
    pub fn name(self) -> &'static str {
        match self {
            Layout::Ellipse => "ellipse",
            Layout::RectEllipse => "rect_ellipse",
            Layout::Rect => "rect",
            Layout::Diagonal => "diagonal",
            Layout::Horizontal => "horizontal",
            Layout::Vertical => "vertical",
            Layout::Linear => "linear",
        }
    }

    /// Parse a selector name
    ///
    /// Accepts the canonical names plus the long forms
    /// `rectangular_ellipse` and `rectangle`. Matching is exact: case and
    /// whitespace are significant.
    pub fn parse(s: &str) -> Result<Self, UnknownLayout> {
        Ok(match s {
            "ellipse" => Layout::Ellipse,
            "rect_ellipse" | "rectangular_ellipse" => Layout::RectEllipse,
            "rect" | "rectangle" => Layout::Rect,
            "diagonal" => Layout::Diagonal,
            "horizontal" => Layout::Horizontal,
            "vertical" => Layout::Vertical,
            "linear" => Layout::Linear,
            _ => return Err(UnknownLayout(s.to_string())),
        })
    }

    /// The curve family of a closed layout
    ///
    /// Returns `None` for straight-line layouts, which need no integration.
    pub fn curve_family(self) -> Option<CurveFamily> {
        match self {
            Layout::Ellipse => Some(CurveFamily::Ellipse),
            Layout::RectEllipse => Some(CurveFamily::Superellipse),
            Layout::Rect => Some(CurveFamily::RoundedRect),
            Layout::Diagonal | Layout::Horizontal | Layout::Vertical | Layout::Linear => None,
        }
    }

    /// True for layouts placed along a closed curve
    #[inline]
    pub fn is_closed(self) -> bool {
        self.curve_family().is_some()
    }
}

impl FromStr for Layout {
    type Err = UnknownLayout;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Layout::parse(s)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
