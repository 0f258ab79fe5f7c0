//! The [`Grid`] type — a fixed-size 2D container of [`Cell`]s with a
//! per-cell neighbor cache.
//!
//! Adjacency is 8-directional and derived from cell roles: barrier cells
//! have no neighbors and are nobody's neighbor. The cache goes stale
//! whenever a cell enters or leaves [`Role::Barrier`]; call
//! [`refresh_neighbors`](Grid::refresh_neighbors) before searching.

use std::fmt;

use rand::Rng;

use crate::cell::{Cell, Role};
use crate::geom::{Bounds, Pos};
use crate::neighbors::Neighbors;
use crate::risk::RiskSampler;

/// A `rows × cols` grid of cells owned by the caller.
#[derive(Debug, Clone)]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<Cell>,
    neighbors: Vec<Vec<Pos>>,
    stale: bool,
}

impl Grid {
    /// Create a grid of free, risk-free cells. The neighbor cache starts
    /// fresh.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Bounds::new(rows, cols);
        let cells = bounds.iter().map(Cell::new).collect();
        let mut grid = Self {
            bounds,
            cells,
            neighbors: Vec::new(),
            stale: true,
        };
        grid.refresh_neighbors();
        grid
    }

    /// The grid extent.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Whether the grid has no cells at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        self.bounds.contains(p)
    }

    /// The cell at `p`, or `None` when out of bounds.
    pub fn at(&self, p: Pos) -> Option<&Cell> {
        self.bounds.index(p).map(|i| &self.cells[i])
    }

    /// The role of the cell at `p`, or `None` when out of bounds.
    pub fn role(&self, p: Pos) -> Option<Role> {
        self.at(p).map(|c| c.role)
    }

    /// The risk surcharge for entering `p`. Zero when out of bounds.
    pub fn risk(&self, p: Pos) -> f64 {
        self.at(p).map_or(0.0, |c| c.risk)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Assign a role to the cell at `p`. Returns `false` (and changes
    /// nothing) when `p` is out of bounds.
    ///
    /// There is at most one [`Role::Start`] and one [`Role::End`]: assigning
    /// either demotes the previous holder to [`Role::Free`]. Roles other
    /// than `Risky` and `PathMarked` drop the cell's risk.
    pub fn set_role(&mut self, p: Pos, role: Role) -> bool {
        let Some(i) = self.bounds.index(p) else {
            return false;
        };
        if matches!(role, Role::Start | Role::End) {
            let prev = self.find_role(role).filter(|&q| q != p);
            if let Some(j) = prev.and_then(|q| self.bounds.index(q)) {
                self.assign(j, Role::Free);
            }
        }
        self.assign(i, role);
        true
    }

    fn assign(&mut self, i: usize, role: Role) {
        let cell = &mut self.cells[i];
        if cell.is_barrier() != (role == Role::Barrier) {
            self.stale = true;
        }
        cell.role = role;
        if !matches!(role, Role::Risky | Role::PathMarked) {
            cell.risk = 0.0;
        }
    }

    /// Make `p` risky, drawing its penalty once from `rng`.
    pub fn make_risky<R: Rng + ?Sized>(
        &mut self,
        p: Pos,
        sampler: &RiskSampler,
        rng: &mut R,
    ) -> bool {
        if !self.set_role(p, Role::Risky) {
            return false;
        }
        let risk = sampler.sample(rng);
        self.set_risk(p, risk)
    }

    /// Set the penalty of a risky cell explicitly.
    ///
    /// Returns `false` and leaves the cell unchanged when `p` is out of
    /// bounds, not [`Role::Risky`], or `risk` is negative or not finite.
    pub fn set_risk(&mut self, p: Pos, risk: f64) -> bool {
        if !risk.is_finite() || risk < 0.0 {
            return false;
        }
        match self.bounds.index(p) {
            Some(i) if self.cells[i].role == Role::Risky => {
                self.cells[i].risk = risk;
                true
            }
            _ => false,
        }
    }

    /// Reset the cell at `p` to free with no risk.
    pub fn reset(&mut self, p: Pos) -> bool {
        self.set_role(p, Role::Free)
    }

    /// Reset every cell.
    pub fn clear(&mut self) {
        for i in 0..self.cells.len() {
            self.assign(i, Role::Free);
        }
    }

    /// Undo path marking: marked cells go back to risky when they carry a
    /// penalty, free otherwise.
    pub fn clear_path_marks(&mut self) {
        for cell in self.cells.iter_mut() {
            if cell.role == Role::PathMarked {
                cell.role = if cell.risk > 0.0 { Role::Risky } else { Role::Free };
            }
        }
    }

    /// First cell (row-major) holding `role`.
    pub fn find_role(&self, role: Role) -> Option<Pos> {
        self.cells.iter().find(|c| c.role == role).map(|c| c.pos)
    }

    /// Every cell holding `role`, row-major.
    pub fn positions_with(&self, role: Role) -> Vec<Pos> {
        self.cells
            .iter()
            .filter(|c| c.role == role)
            .map(|c| c.pos)
            .collect()
    }

    /// Count how many cells hold `role`.
    pub fn count(&self, role: Role) -> usize {
        self.cells.iter().filter(|c| c.role == role).count()
    }

    // -----------------------------------------------------------------------
    // Neighbor cache
    // -----------------------------------------------------------------------

    /// Cached neighbors of `p`. Empty for barriers and out-of-bounds
    /// positions. May be out of date while
    /// [`neighbors_stale`](Self::neighbors_stale) is `true`.
    pub fn neighbors(&self, p: Pos) -> &[Pos] {
        match self.bounds.index(p) {
            Some(i) => &self.neighbors[i],
            None => &[],
        }
    }

    /// Whether a barrier changed since the last refresh.
    #[inline]
    pub fn neighbors_stale(&self) -> bool {
        self.stale
    }

    /// Recompute every cell's neighbor list.
    pub fn refresh_neighbors(&mut self) {
        let bounds = self.bounds;
        let cells = &self.cells;
        let passable = |p: Pos| bounds.index(p).is_some_and(|i| !cells[i].is_barrier());

        let mut nb = Neighbors::new();
        let lists: Vec<Vec<Pos>> = cells
            .iter()
            .map(|c| {
                if c.is_barrier() {
                    Vec::new()
                } else {
                    nb.all(c.pos, passable).to_vec()
                }
            })
            .collect();
        self.neighbors = lists;
        self.stale = false;
        log::debug!("refreshed neighbor cache for {} grid", bounds);
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cols = self.bounds.cols.max(1) as usize;
        for (i, row) in self.cells.chunks(cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for c in row {
                write!(f, "{}", c.role.glyph())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::RiskConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn new_grid_is_free_and_fresh() {
        let g = Grid::new(4, 5);
        assert_eq!(g.count(Role::Free), 20);
        assert!(!g.neighbors_stale());
        assert_eq!(g.neighbors(Pos::new(0, 0)).len(), 3);
        assert_eq!(g.neighbors(Pos::new(0, 2)).len(), 5);
        assert_eq!(g.neighbors(Pos::new(2, 2)).len(), 8);
        assert!(g.neighbors(Pos::new(9, 9)).is_empty());
    }

    #[test]
    fn out_of_bounds_access() {
        let mut g = Grid::new(2, 2);
        assert!(g.at(Pos::new(2, 0)).is_none());
        assert_eq!(g.role(Pos::new(-1, 0)), None);
        assert_eq!(g.risk(Pos::new(5, 5)), 0.0);
        assert!(!g.set_role(Pos::new(2, 2), Role::Barrier));
    }

    #[test]
    fn barriers_invalidate_cache() {
        let mut g = Grid::new(3, 3);
        g.set_role(Pos::new(1, 1), Role::Risky);
        assert!(!g.neighbors_stale());
        g.set_role(Pos::new(1, 1), Role::Barrier);
        assert!(g.neighbors_stale());
        g.refresh_neighbors();
        assert!(!g.neighbors(Pos::new(0, 0)).contains(&Pos::new(1, 1)));
        assert!(g.neighbors(Pos::new(1, 1)).is_empty());
        g.reset(Pos::new(1, 1));
        assert!(g.neighbors_stale());
    }

    #[test]
    fn single_start_and_end() {
        let mut g = Grid::new(3, 3);
        g.set_role(Pos::new(0, 0), Role::Start);
        g.set_role(Pos::new(2, 2), Role::Start);
        assert_eq!(g.count(Role::Start), 1);
        assert_eq!(g.role(Pos::new(0, 0)), Some(Role::Free));
        g.set_role(Pos::new(1, 1), Role::End);
        g.set_role(Pos::new(1, 1), Role::End);
        assert_eq!(g.find_role(Role::End), Some(Pos::new(1, 1)));
    }

    #[test]
    fn risk_only_on_risky_cells() {
        let mut g = Grid::new(3, 3);
        let p = Pos::new(1, 2);
        assert!(!g.set_risk(p, 2.0));
        g.set_role(p, Role::Risky);
        assert!(g.set_risk(p, 2.0));
        assert!(!g.set_risk(p, -1.0));
        assert!(!g.set_risk(p, f64::NAN));
        assert_eq!(g.risk(p), 2.0);
        g.set_role(p, Role::Free);
        assert_eq!(g.risk(p), 0.0);
    }

    #[test]
    fn make_risky_samples_once() {
        let mut g = Grid::new(10, 10);
        let sampler = RiskSampler::new(g.bounds(), &RiskConfig::default());
        let mut rng = StdRng::seed_from_u64(3);
        let p = Pos::new(4, 4);
        assert!(g.make_risky(p, &sampler, &mut rng));
        let r = g.risk(p);
        assert!(r >= sampler.min() && r <= sampler.max());
        assert!(!g.make_risky(Pos::new(10, 0), &sampler, &mut rng));
        assert_eq!(g.risk(p), r);
    }

    #[test]
    fn path_marks_keep_risk() {
        let mut g = Grid::new(1, 3);
        g.set_role(Pos::new(0, 0), Role::Risky);
        g.set_risk(Pos::new(0, 0), 1.5);
        g.set_role(Pos::new(0, 0), Role::PathMarked);
        g.set_role(Pos::new(0, 1), Role::PathMarked);
        assert_eq!(g.risk(Pos::new(0, 0)), 1.5);
        g.clear_path_marks();
        assert_eq!(g.role(Pos::new(0, 0)), Some(Role::Risky));
        assert_eq!(g.role(Pos::new(0, 1)), Some(Role::Free));
    }

    #[test]
    fn clear_resets_everything() {
        let mut g = Grid::new(2, 2);
        g.set_role(Pos::new(0, 0), Role::Barrier);
        g.set_role(Pos::new(1, 1), Role::Risky);
        g.set_risk(Pos::new(1, 1), 3.0);
        g.clear();
        assert_eq!(g.count(Role::Free), 4);
        assert_eq!(g.risk(Pos::new(1, 1)), 0.0);
        assert!(g.neighbors_stale());
    }

    #[test]
    fn display_renders_glyphs() {
        let mut g = Grid::new(2, 3);
        g.set_role(Pos::new(0, 0), Role::Start);
        g.set_role(Pos::new(1, 2), Role::End);
        g.set_role(Pos::new(0, 1), Role::Barrier);
        assert_eq!(g.to_string(), "S#.\n..E");
    }

    #[test]
    fn empty_grid() {
        let g = Grid::new(0, 4);
        assert!(g.is_empty());
        assert!(g.cells().is_empty());
        assert_eq!(g.to_string(), "");
    }
}
