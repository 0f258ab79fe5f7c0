//! Error types for path searches.

use riskgrid_core::Pos;

/// Why a [`PathRequest`](crate::PathRequest) was rejected before any
/// search ran.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RequestError {
    #[error("no start cell")]
    MissingStart,

    #[error("no end cell")]
    MissingEnd,

    #[error("position {0} is outside the grid")]
    OutOfBounds(Pos),

    /// A required point sits on a barrier.
    #[error("position {0} is blocked")]
    Blocked(Pos),

    #[error("start and end are the same cell {0}")]
    StartIsEnd(Pos),

    /// A waypoint coincides with the start or the end.
    #[error("waypoint {index} at {pos} coincides with an endpoint")]
    WaypointAtEndpoint { index: usize, pos: Pos },
}

/// Errors that can occur while searching.
///
/// All of them are deterministic: retrying on an unchanged grid reproduces
/// the same error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The open set ran dry before leg `leg` reached its target.
    #[error("no path found for leg {leg} from {from} to {to}")]
    NoPath { leg: usize, from: Pos, to: Pos },

    #[error("invalid request: {0}")]
    InvalidRequest(#[from] RequestError),

    #[error("grid has no cells")]
    EmptyGraph,

    /// The progress observer asked the search to stop.
    #[error("search cancelled during leg {leg}")]
    Cancelled { leg: usize },
}

impl SearchError {
    /// Returns `true` if this is a "no path found" error.
    #[must_use]
    pub const fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPath { .. })
    }

    /// Index of the leg the search stopped in, if it got that far.
    #[must_use]
    pub const fn failed_leg(&self) -> Option<usize> {
        match self {
            Self::NoPath { leg, .. } | Self::Cancelled { leg } => Some(*leg),
            _ => None,
        }
    }
}
