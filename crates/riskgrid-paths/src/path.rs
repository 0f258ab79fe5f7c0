//! Paths and their reconstruction from search back-pointers.

use riskgrid_core::{Bounds, Grid, Pos, Role};

/// An ordered run of cells from a leg's start to its end, inclusive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Pos>,
    cost: f64,
}

impl Path {
    pub(crate) fn new(cells: Vec<Pos>, cost: f64) -> Self {
        Self { cells, cost }
    }

    /// The cells, start first.
    #[inline]
    pub fn cells(&self) -> &[Pos] {
        &self.cells
    }

    /// Total movement cost, risk included.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of cells, both endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn first(&self) -> Option<Pos> {
        self.cells.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Pos> {
        self.cells.last().copied()
    }

    pub fn into_cells(self) -> Vec<Pos> {
        self.cells
    }
}

/// Walk `parents` back from `goal` to the cell with no predecessor and
/// return the forward path.
pub(crate) fn reconstruct(
    parents: &[Option<usize>],
    bounds: Bounds,
    goal: usize,
    cost: f64,
) -> Path {
    let mut cells = Vec::new();
    let mut cur = Some(goal);
    while let Some(i) = cur {
        cells.push(bounds.pos(i));
        cur = parents[i];
    }
    cells.reverse();
    Path::new(cells, cost)
}

/// Paint a path onto the grid for rendering.
///
/// Every cell on `path` becomes [`Role::PathMarked`], except start, end and
/// waypoint cells, which keep their role. Risk values are left alone.
/// Returns the number of cells repainted.
pub fn mark_path(grid: &mut Grid, path: &[Pos]) -> usize {
    let mut marked = 0;
    for &p in path {
        match grid.role(p) {
            Some(role) if !role.is_endpoint() && role.is_passable() => {
                grid.set_role(p, Role::PathMarked);
                marked += 1;
            }
            _ => {}
        }
    }
    marked
}
