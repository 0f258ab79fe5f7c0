//! **riskgrid-core** — the grid graph model for risk-aware path search.
//!
//! This crate provides the types the search engine in `riskgrid-paths`
//! reads: positions and extents, cell roles, the [`Grid`] with its
//! 8-directional neighbor cache, ASCII map loading, and risk sampling.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod map;
pub mod neighbors;
pub mod risk;

pub use cell::{Cell, Role};
pub use geom::{Bounds, Pos};
pub use grid::Grid;
pub use map::MapError;
pub use neighbors::{DIRECTIONS, Neighbors};
pub use risk::{RiskConfig, RiskSampler};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pos_round_trip() {
        let p = Pos::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Pos = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn cell_round_trip() {
        let c = Cell {
            pos: Pos::new(1, 2),
            role: Role::Risky,
            risk: 2.5,
        };
        let json = serde_json::to_string(&c).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }

    #[test]
    fn risk_config_round_trip() {
        let cfg = RiskConfig {
            cell_size: 30.0,
            ..RiskConfig::default()
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: RiskConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, back);
    }
}
