// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Token placement library — placement environment

use crate::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Environment in which tokens are placed
///
/// An `Environment` can be default-constructed, matching the board widget
/// this library was written for.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Environment {
    /// Space reserved around a token, in pixels
    ///
    /// This is subtracted (together with the token size) from the container
    /// size before deriving the radii of closed layouts. It accounts for the
    /// token's label and border, which are not part of its measured size.
    /// Linear layouts ignore it.
    ///
    /// Defaults to `(20, 39)`.
    pub margin: Vec2,
    /// Round container and token sizes to whole pixels
    ///
    /// Container sizes often jitter by fractions of a pixel while the host
    /// reflows its layout. If enabled, sizes are rounded before placement and
    /// before comparison against a cached result, so that such jitter neither
    /// moves tokens nor causes recomputation.
    pub snap_to_pixel: bool,
}

impl Default for Environment {
    fn default() -> Self {
        Environment {
            margin: Vec2(20.0, 39.0),
            snap_to_pixel: true,
        }
    }
}

impl Environment {
    /// Alternative default constructor
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply [`Environment::snap_to_pixel`] to a size
    #[inline]
    pub fn snap(&self, size: Vec2) -> Vec2 {
        if self.snap_to_pixel {
            size.round()
        } else {
            size
        }
    }
}

/// Helper to modify an environment
///
/// Tracks whether any value actually changed.
#[derive(Debug)]
pub struct UpdateEnv<'a> {
    env: &'a mut Environment,
    changed: bool,
}

impl<'a> UpdateEnv<'a> {
    pub(crate) fn new(env: &'a mut Environment) -> Self {
        UpdateEnv {
            env,
            changed: false,
        }
    }

    pub(crate) fn finish(self) -> bool {
        self.changed
    }

    /// Set the token margin
    ///
    /// Units are pixels (see [`Environment::margin`]).
    pub fn set_margin(&mut self, margin: Vec2) {
        if margin != self.env.margin {
            self.env.margin = margin;
            self.changed = true;
        }
    }

    /// Enable or disable rounding of sizes to whole pixels
    pub fn set_snap_to_pixel(&mut self, snap: bool) {
        if snap != self.env.snap_to_pixel {
            self.env.snap_to_pixel = snap;
            self.changed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_tracks_changes() {
        let mut env = Environment::default();

        let mut update = UpdateEnv::new(&mut env);
        update.set_margin(Vec2(20.0, 39.0));
        update.set_snap_to_pixel(true);
        assert!(!update.finish());

        let mut update = UpdateEnv::new(&mut env);
        update.set_margin(Vec2(10.0, 10.0));
        assert!(update.finish());
        assert_eq!(env.margin, Vec2(10.0, 10.0));
    }

    #[test]
    fn snap() {
        let mut env = Environment::new();
        assert_eq!(env.snap(Vec2(399.7, 300.2)), Vec2(400.0, 300.0));
        env.snap_to_pixel = false;
        assert_eq!(env.snap(Vec2(399.7, 300.2)), Vec2(399.7, 300.2));
    }
}
