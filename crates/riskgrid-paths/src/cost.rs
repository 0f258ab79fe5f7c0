//! The risk-weighted cost model over a [`Grid`].

use std::f64::consts::SQRT_2;

use riskgrid_core::{Bounds, Grid, Pos};

use crate::distance::euclidean;
use crate::traits::{AstarPather, Pather, WeightedPather};

/// Geometric cost of one step: `1` orthogonal, `√2` diagonal.
#[inline]
pub fn step_cost(from: Pos, to: Pos) -> f64 {
    if from.is_diagonal_to(to) { SQRT_2 } else { 1.0 }
}

/// Searches a [`Grid`] through its neighbor cache.
///
/// Entering a cell costs its step length plus the cell's risk. The
/// heuristic is the straight-line distance and ignores risk, so it stays
/// admissible however large the penalties are.
#[derive(Clone, Copy)]
pub struct RiskCost<'g> {
    grid: &'g Grid,
}

impl<'g> RiskCost<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &'g Grid {
        self.grid
    }
}

impl Pather for RiskCost<'_> {
    fn bounds(&self) -> Bounds {
        self.grid.bounds()
    }

    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>) {
        buf.extend_from_slice(self.grid.neighbors(p));
    }
}

impl WeightedPather for RiskCost<'_> {
    fn cost(&self, from: Pos, to: Pos) -> f64 {
        step_cost(from, to) + self.grid.risk(to)
    }
}

impl AstarPather for RiskCost<'_> {
    fn estimate(&self, from: Pos, to: Pos) -> f64 {
        euclidean(from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use riskgrid_core::Role;

    #[test]
    fn step_costs() {
        let p = Pos::new(1, 1);
        assert_eq!(step_cost(p, Pos::new(1, 2)), 1.0);
        assert_eq!(step_cost(p, Pos::new(0, 1)), 1.0);
        assert_eq!(step_cost(p, Pos::new(2, 2)), SQRT_2);
    }

    #[test]
    fn risk_is_charged_on_entry() {
        let mut g = Grid::new(3, 3);
        let risky = Pos::new(1, 1);
        g.set_role(risky, Role::Risky);
        g.set_risk(risky, 4.0);
        let cost = RiskCost::new(&g);
        assert_eq!(cost.cost(Pos::new(0, 1), risky), 5.0);
        assert_eq!(cost.cost(risky, Pos::new(0, 1)), 1.0);
        assert_eq!(cost.cost(Pos::new(0, 0), risky), SQRT_2 + 4.0);
    }

    #[test]
    fn estimate_ignores_risk() {
        let mut g = Grid::new(4, 4);
        g.set_role(Pos::new(3, 3), Role::Risky);
        g.set_risk(Pos::new(3, 3), 10.0);
        let cost = RiskCost::new(&g);
        let h = cost.estimate(Pos::new(0, 0), Pos::new(3, 3));
        assert!((h - 3.0 * SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn neighbors_come_from_cache() {
        let mut g = Grid::new(3, 3);
        g.set_role(Pos::new(0, 1), Role::Barrier);
        g.refresh_neighbors();
        let cost = RiskCost::new(&g);
        let mut buf = Vec::new();
        cost.neighbors(Pos::new(0, 0), &mut buf);
        assert_eq!(buf, vec![Pos::new(1, 0), Pos::new(1, 1)]);
    }
}
