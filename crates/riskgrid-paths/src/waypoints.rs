//! Multi-waypoint routing.
//!
//! A request `start → wp_1 → … → wp_k → end` is split into `k + 1` legs,
//! each searched independently with its own [`AstarSearch`] state. The
//! first failing leg ends the whole request and is reported by index.

use riskgrid_core::{Grid, Pos, Role};

use crate::astar::{AstarSearch, Progress, SearchStatus};
use crate::cost::RiskCost;
use crate::error::{RequestError, SearchError};
use crate::path::mark_path;

/// The required points of a route.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathRequest {
    pub start: Option<Pos>,
    pub waypoints: Vec<Pos>,
    pub end: Option<Pos>,
}

impl PathRequest {
    /// A direct request with no waypoints.
    pub fn new(start: Pos, end: Pos) -> Self {
        Self {
            start: Some(start),
            waypoints: Vec::new(),
            end: Some(end),
        }
    }

    /// Append a waypoint (builder).
    pub fn with_waypoint(mut self, p: Pos) -> Self {
        self.waypoints.push(p);
        self
    }

    /// Append several waypoints in order (builder).
    pub fn with_waypoints(mut self, ps: impl IntoIterator<Item = Pos>) -> Self {
        self.waypoints.extend(ps);
        self
    }

    /// Read the request from cell roles: the Start cell, the End cell, and
    /// every Waypoint cell in row-major order.
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            start: grid.find_role(Role::Start),
            waypoints: grid.positions_with(Role::Waypoint),
            end: grid.find_role(Role::End),
        }
    }

    /// The full point sequence, `start` first and `end` last.
    pub fn points(&self) -> Result<Vec<Pos>, RequestError> {
        let start = self.start.ok_or(RequestError::MissingStart)?;
        let end = self.end.ok_or(RequestError::MissingEnd)?;
        let mut pts = Vec::with_capacity(self.waypoints.len() + 2);
        pts.push(start);
        pts.extend_from_slice(&self.waypoints);
        pts.push(end);
        Ok(pts)
    }

    /// Check the request against `grid` without searching.
    pub fn validate(&self, grid: &Grid) -> Result<(), RequestError> {
        let pts = self.points()?;
        for &p in &pts {
            match grid.role(p) {
                None => return Err(RequestError::OutOfBounds(p)),
                Some(Role::Barrier) => return Err(RequestError::Blocked(p)),
                Some(_) => {}
            }
        }
        let (start, end) = (pts[0], pts[pts.len() - 1]);
        if start == end {
            return Err(RequestError::StartIsEnd(start));
        }
        if let Some((index, &pos)) = self
            .waypoints
            .iter()
            .enumerate()
            .find(|&(_, &p)| p == start || p == end)
        {
            return Err(RequestError::WaypointAtEndpoint { index, pos });
        }
        Ok(())
    }
}

/// Summary of one successful leg.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegStats {
    pub from: Pos,
    pub to: Pos,
    pub cost: f64,
    /// Cells on the leg, both endpoints included.
    pub cells: usize,
    /// Cells expanded by the leg's search.
    pub expanded: usize,
}

/// A complete multi-leg route.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub cells: Vec<Pos>,
    pub cost: f64,
    pub legs: Vec<LegStats>,
}

/// Search every leg of `request` in order and stitch the results.
///
/// The neighbor cache is refreshed first if a barrier changed since the
/// last refresh. Each successful leg is painted onto the grid with
/// [`mark_path`] as soon as it completes, so a failure in a later leg
/// leaves earlier legs painted. `progress` is called after every expansion
/// of every leg.
pub fn find_route<G: Progress + ?Sized>(
    grid: &mut Grid,
    request: &PathRequest,
    progress: &mut G,
) -> Result<Route, SearchError> {
    if grid.is_empty() {
        return Err(SearchError::EmptyGraph);
    }
    request.validate(grid)?;
    let points = request.points()?;

    if grid.neighbors_stale() {
        grid.refresh_neighbors();
    }

    let mut route = Route {
        cells: Vec::new(),
        cost: 0.0,
        legs: Vec::with_capacity(points.len() - 1),
    };

    for (leg, pair) in points.windows(2).enumerate() {
        let (from, to) = (pair[0], pair[1]);
        let (path, expanded) = {
            let cost = RiskCost::new(grid);
            let mut search = AstarSearch::new(&cost, from, to)?;
            match search.run(&mut *progress) {
                SearchStatus::Succeeded => {}
                SearchStatus::Cancelled => return Err(SearchError::Cancelled { leg }),
                _ => {
                    log::warn!("leg {} from {} to {}: no path", leg, from, to);
                    return Err(SearchError::NoPath { leg, from, to });
                }
            }
            let path = search.path().ok_or(SearchError::NoPath { leg, from, to })?;
            (path, search.expanded())
        };
        log::debug!(
            "leg {}: {} -> {} cost={:.3} cells={} expanded={}",
            leg,
            from,
            to,
            path.cost(),
            path.len(),
            expanded
        );

        mark_path(grid, path.cells());
        route.legs.push(LegStats {
            from,
            to,
            cost: path.cost(),
            cells: path.len(),
            expanded,
        });
        route.cost += path.cost();
        let skip = usize::from(!route.cells.is_empty());
        route.cells.extend(path.into_cells().into_iter().skip(skip));
    }

    Ok(route)
}
