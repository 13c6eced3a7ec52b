// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Placement requests

use crate::layout::{self, Curve, Layout, UnknownLayout};
use crate::{Coordinates, Environment, Vec2};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Input to [`place`]
///
/// Together with an [`Environment`] this fully determines the result.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementRequest {
    /// Size of the container, in pixels
    pub container: Vec2,
    /// Size of each token, in pixels
    pub token: Vec2,
    /// Number of tokens
    pub total: usize,
    /// Shape along which tokens are placed
    pub layout: Layout,
}

impl PlacementRequest {
    /// Construct
    pub fn new(layout: Layout, container: Vec2, token: Vec2, total: usize) -> Self {
        PlacementRequest {
            container,
            token,
            total,
            layout,
        }
    }

    /// Construct, taking the layout from a selector name
    ///
    /// Fails if `selector` does not name a [`Layout`] (see [`Layout::parse`]).
    pub fn from_selector(
        selector: &str,
        container: Vec2,
        token: Vec2,
        total: usize,
    ) -> Result<Self, UnknownLayout> {
        let layout = Layout::parse(selector)?;
        Ok(PlacementRequest::new(layout, container, token, total))
    }

    /// Apply [`Environment::snap_to_pixel`] to sizes
    pub fn snapped(mut self, env: &Environment) -> Self {
        self.container = env.snap(self.container);
        self.token = env.snap(self.token);
        self
    }

    /// Check for degenerate input
    ///
    /// Degenerate requests are still placed, but the result is empty or
    /// tokens overlap. Callers may prefer to defer placement, e.g. until the
    /// container has been measured.
    pub fn degeneracy(&self) -> Option<Degeneracy> {
        if self.total == 0 {
            Some(Degeneracy::NoTokens)
        } else if !(self.token.0 < self.container.0) || !(self.token.1 < self.container.1) {
            Some(Degeneracy::TokenExceedsContainer)
        } else {
            None
        }
    }
}

/// Reason a [`PlacementRequest`] yields a degenerate result
///
/// This is a warning, not an error.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Degeneracy {
    /// No tokens: the result is empty
    NoTokens,
    /// Tokens are at least as large as the container (or sizes are not
    /// comparable): positions may be negative and tokens overlap
    TokenExceedsContainer,
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degeneracy::NoTokens => write!(f, "no tokens to place"),
            Degeneracy::TokenExceedsContainer => write!(f, "token does not fit container"),
        }
    }
}

/// Compute token positions
///
/// Returns exactly `request.total` positions (top-left corners of tokens,
/// relative to the container), in placement order. For closed layouts the
/// first position is the top of the shape and following positions proceed
/// clockwise (in screen coordinates).
///
/// Sizes are snapped to pixels first if [`Environment::snap_to_pixel`] is
/// enabled. Degenerate input is logged at `warn` level but still placed.
pub fn place(request: &PlacementRequest, env: &Environment) -> Coordinates {
    let request = request.snapped(env);
    if let Some(degeneracy) = request.degeneracy() {
        log::warn!("place: {degeneracy} ({request:?})");
    }

    let PlacementRequest {
        container,
        token,
        total,
        layout,
    } = request;
    match layout.curve_family() {
        Some(family) => {
            let curve = Curve::fit(family, container, token, env);
            layout::equal_arc_points(&curve, total)
        }
        None => layout::linear_points(layout, container, token, total).unwrap_or_default(),
    }
}
