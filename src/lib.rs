// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Token placement library
//!
//! Computes positions for a number of tokens spread evenly around a board.
//! Closed layouts (ellipse, superellipse, rounded rectangle) space tokens by
//! *arc length* rather than by angle; since these curves have no closed-form
//! arc-length parametrization the perimeter is integrated numerically.
//!
//! The main entry points are:
//!
//! -   [`place`]: a pure function from a [`PlacementRequest`] to
//!     [`Coordinates`]
//! -   [`PlacementCache`]: an owned memo of the last result, for callers
//!     which request placements repeatedly with mostly unchanged input
//!
//! ```
//! use token_layout::{place, Environment, Layout, PlacementRequest, Vec2};
//!
//! let request = PlacementRequest::new(
//!     Layout::Diagonal,
//!     Vec2(100.0, 100.0),
//!     Vec2(10.0, 10.0),
//!     5,
//! );
//! let coords = place(&request, &Environment::default());
//! assert_eq!(coords[1], Vec2(18.0, 18.0));
//! ```

pub mod conv;

mod data;
pub use data::*;

mod env;
pub use env::*;

pub mod layout;
pub use layout::{Layout, UnknownLayout};

mod place;
pub use place::*;

mod cache;
pub use cache::*;
