//! Single-leg A* search.
//!
//! [`AstarSearch`] is a small state machine: it starts [`Running`] with only
//! the start cell enqueued, and each [`step`](AstarSearch::step) expands one
//! cell until the goal is popped ([`Succeeded`]) or the open set runs dry
//! ([`Failed`]).
//!
//! [`Running`]: SearchStatus::Running
//! [`Succeeded`]: SearchStatus::Succeeded
//! [`Failed`]: SearchStatus::Failed

use riskgrid_core::{Bounds, Pos};

use crate::error::{RequestError, SearchError};
use crate::path::{Path, reconstruct};
use crate::state::SearchState;
use crate::traits::AstarPather;

/// Where a search stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Running,
    Succeeded,
    Failed,
    Cancelled,
}

/// Hook invoked synchronously by [`AstarSearch::run`].
///
/// Any `FnMut()` closure is a `Progress` that never cancels.
pub trait Progress {
    /// Called once after every expansion, before the next one starts.
    fn on_step(&mut self);

    /// Polled once per iteration before expanding; returning `true` stops
    /// the search with [`SearchStatus::Cancelled`].
    fn should_cancel(&mut self) -> bool {
        false
    }
}

impl<F: FnMut()> Progress for F {
    fn on_step(&mut self) {
        self()
    }
}

/// A [`Progress`] that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn on_step(&mut self) {}
}

/// One A* run from `start` to `goal` over a pather.
pub struct AstarSearch<'p, P: AstarPather> {
    pather: &'p P,
    bounds: Bounds,
    start: Pos,
    goal: Pos,
    goal_idx: usize,
    state: SearchState,
    status: SearchStatus,
    expanded: usize,
    last_expanded: Option<Pos>,
    nbuf: Vec<Pos>,
}

impl<'p, P: AstarPather> AstarSearch<'p, P> {
    /// Prepare a search with `start` enqueued at `g = 0`.
    pub fn new(pather: &'p P, start: Pos, goal: Pos) -> Result<Self, SearchError> {
        let bounds = pather.bounds();
        if bounds.is_empty() {
            return Err(SearchError::EmptyGraph);
        }
        let start_idx = bounds.index(start).ok_or(RequestError::OutOfBounds(start))?;
        let goal_idx = bounds.index(goal).ok_or(RequestError::OutOfBounds(goal))?;

        let mut state = SearchState::new(bounds);
        state.g[start_idx] = 0.0;
        state.f[start_idx] = pather.estimate(start, goal);
        state.push(start_idx);

        Ok(Self {
            pather,
            bounds,
            start,
            goal,
            goal_idx,
            state,
            status: SearchStatus::Running,
            expanded: 0,
            last_expanded: None,
            nbuf: Vec::with_capacity(8),
        })
    }

    #[inline]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    #[inline]
    pub fn start(&self) -> Pos {
        self.start
    }

    #[inline]
    pub fn goal(&self) -> Pos {
        self.goal
    }

    /// Number of cells expanded so far.
    #[inline]
    pub fn expanded(&self) -> usize {
        self.expanded
    }

    /// The cell popped by the latest [`step`](Self::step).
    #[inline]
    pub fn last_expanded(&self) -> Option<Pos> {
        self.last_expanded
    }

    /// Best known cost from the start to `p`; infinite if not reached.
    pub fn g_score(&self, p: Pos) -> f64 {
        self.bounds
            .index(p)
            .map_or(f64::INFINITY, |i| self.state.g[i])
    }

    /// Whether `p` is currently in the open set.
    pub fn is_open(&self, p: Pos) -> bool {
        self.bounds.index(p).is_some_and(|i| self.state.is_queued(i))
    }

    /// Number of cells currently in the open set.
    pub fn open_len(&self) -> usize {
        self.state.open_len()
    }

    /// Advance by one pop. Once the search has left
    /// [`SearchStatus::Running`] this is a no-op returning the final status.
    pub fn step(&mut self) -> SearchStatus {
        if self.status != SearchStatus::Running {
            return self.status;
        }
        let Some(ci) = self.state.pop() else {
            self.status = SearchStatus::Failed;
            return self.status;
        };
        let current = self.bounds.pos(ci);
        self.last_expanded = Some(current);

        if ci == self.goal_idx {
            self.status = SearchStatus::Succeeded;
            return self.status;
        }

        self.expanded += 1;
        let current_g = self.state.g[ci];
        log::trace!("expand {} g={:.3}", current, current_g);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.pather.neighbors(current, &mut nbuf);

        for &np in nbuf.iter() {
            let Some(ni) = self.bounds.index(np) else {
                continue;
            };
            let tentative_g = current_g + self.pather.cost(current, np);
            if tentative_g >= self.state.g[ni] {
                continue;
            }
            self.state.parent[ni] = Some(ci);
            self.state.g[ni] = tentative_g;
            self.state.f[ni] = tentative_g + self.pather.estimate(np, self.goal);
            self.state.push(ni);
        }

        self.nbuf = nbuf;
        self.status
    }

    /// Step until the search finishes, calling `progress` after every
    /// expansion.
    pub fn run<G: Progress + ?Sized>(&mut self, progress: &mut G) -> SearchStatus {
        while self.status == SearchStatus::Running {
            if progress.should_cancel() {
                self.status = SearchStatus::Cancelled;
                break;
            }
            if self.step() == SearchStatus::Running {
                progress.on_step();
            }
        }
        self.status
    }

    /// The start→goal path, once the search has succeeded.
    pub fn path(&self) -> Option<Path> {
        if self.status != SearchStatus::Succeeded {
            return None;
        }
        Some(reconstruct(
            &self.state.parent,
            self.bounds,
            self.goal_idx,
            self.state.g[self.goal_idx],
        ))
    }
}

/// Run one search to completion and return its path.
///
/// Failure is reported as leg 0; the waypoint sequencer renumbers it.
pub fn astar_path<P: AstarPather, G: Progress + ?Sized>(
    pather: &P,
    from: Pos,
    to: Pos,
    progress: &mut G,
) -> Result<Path, SearchError> {
    let mut search = AstarSearch::new(pather, from, to)?;
    match search.run(progress) {
        SearchStatus::Cancelled => Err(SearchError::Cancelled { leg: 0 }),
        _ => search.path().ok_or(SearchError::NoPath { leg: 0, from, to }),
    }
}
