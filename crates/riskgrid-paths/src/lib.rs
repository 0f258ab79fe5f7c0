//! Risk-aware shortest paths on 8-connected grids.
//!
//! This crate searches a [`riskgrid_core::Grid`] for the cheapest route
//! through an ordered list of required cells:
//!
//! - **A\*** single-leg search ([`AstarSearch`], [`astar_path`]) with
//!   insertion-order tie-breaking, so equal inputs expand cells in the same
//!   order every time
//! - a **risk cost model** ([`RiskCost`]): `1` per orthogonal step, `√2` per
//!   diagonal step, plus the entered cell's risk, with a straight-line
//!   heuristic
//! - **waypoint sequencing** ([`find_route`]): one fresh search per leg,
//!   early exit on the first failing leg, and path marking on the grid
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | extent and neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | edge costs |
//! | [`AstarPather`] : [`WeightedPather`] | admissible heuristic |

mod astar;
mod cost;
mod distance;
mod error;
mod path;
mod state;
mod traits;
mod waypoints;

pub use astar::{AstarSearch, NoProgress, Progress, SearchStatus, astar_path};
pub use cost::{RiskCost, step_cost};
pub use distance::{chebyshev, euclidean, octile};
pub use error::{RequestError, SearchError};
pub use path::{Path, mark_path};
pub use traits::{AstarPather, Pather, WeightedPather};
pub use waypoints::{LegStats, PathRequest, Route, find_route};
