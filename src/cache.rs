// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Token placement library — cached placement

use crate::{place, Coordinates, Environment, PlacementRequest, UnknownLayout};
use crate::{UpdateEnv, Vec2};

// doc imports
#[allow(unused)]
use crate::Layout;

/// Memo of the last placement
///
/// Placing tokens along a closed layout integrates over tens of thousands of
/// steps (hundreds of thousands for [`Layout::RectEllipse`]). A board which
/// asks for placements whenever a token is added should hold a
/// `PlacementCache` so that unchanged input does not repeat this work.
///
/// The cache holds a single result, keyed on the full (snapped) request.
/// Any change to the request or to the [`Environment`] causes recomputation.
/// Each board should own its own cache.
///
/// This type has no interior mutability; to share between threads, wrap it in
/// a `Mutex`.
#[derive(Clone, Debug, Default)]
pub struct PlacementCache {
    env: Environment,
    key: Option<PlacementRequest>,
    coords: Coordinates,
    computations: u64,
}

impl PlacementCache {
    /// Construct an empty cache
    pub fn new(env: Environment) -> Self {
        PlacementCache {
            env,
            ..Default::default()
        }
    }

    /// Read the environment
    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Update the environment
    ///
    /// Returns true (and invalidates the cached result) when the environment
    /// changed.
    pub fn update_env<F: FnOnce(&mut UpdateEnv)>(&mut self, f: F) -> bool {
        let mut update = UpdateEnv::new(&mut self.env);
        f(&mut update);
        let changed = update.finish();
        if changed {
            log::debug!("PlacementCache: environment changed");
            self.invalidate();
        }
        changed
    }

    /// Drop the cached result
    ///
    /// The next call to [`Self::place`] recomputes.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.coords.clear();
    }

    /// Get token positions for `request`
    ///
    /// Returns the cached result if the (snapped) request equals the last
    /// one, otherwise computes with [`place`] and caches the result.
    ///
    /// Sizes are compared bitwise: a request with NaN sizes matches an
    /// identical earlier request, while `0.0` and `-0.0` do not match.
    pub fn place(&mut self, request: &PlacementRequest) -> &[Vec2] {
        let key = request.snapped(&self.env);
        if self.key.as_ref().is_some_and(|last| same_key(last, &key)) {
            log::debug!("PlacementCache: hit for {key:?}");
        } else {
            log::debug!("PlacementCache: computing {key:?}");
            self.coords = place(&key, &self.env);
            self.key = Some(key);
            self.computations += 1;
        }
        &self.coords
    }

    /// Get token positions, taking the layout from a selector name
    ///
    /// Fails if `selector` does not name a [`Layout`]; the cached result is
    /// left untouched in this case.
    pub fn place_selected(
        &mut self,
        selector: &str,
        container: Vec2,
        token: Vec2,
        total: usize,
    ) -> Result<&[Vec2], UnknownLayout> {
        let request = PlacementRequest::from_selector(selector, container, token, total)?;
        Ok(self.place(&request))
    }

    /// The last result, if any
    pub fn cached(&self) -> Option<(&PlacementRequest, &[Vec2])> {
        self.key.as_ref().map(|key| (key, &self.coords[..]))
    }

    /// Number of times a placement has been computed
    pub fn computations(&self) -> u64 {
        self.computations
    }
}

fn same_key(a: &PlacementRequest, b: &PlacementRequest) -> bool {
    let bits = |v: Vec2| (v.0.to_bits(), v.1.to_bits());
    a.layout == b.layout
        && a.total == b.total
        && bits(a.container) == bits(b.container)
        && bits(a.token) == bits(b.token)
}
