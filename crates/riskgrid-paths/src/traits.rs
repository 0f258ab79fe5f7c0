use riskgrid_core::{Bounds, Pos};

/// Minimal search interface — provides the graph extent and neighbor
/// enumeration.
pub trait Pather {
    /// Extent of the graph. Every position handed out by
    /// [`neighbors`](Self::neighbors) must lie inside it.
    fn bounds(&self) -> Bounds;

    /// Append neighbors of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Pos, buf: &mut Vec<Pos>);
}

/// Pather with weighted (non-negative-cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be >= 0.
    fn cost(&self, from: Pos, to: Pos) -> f64;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Pos, to: Pos) -> f64;
}
