//! Search configuration.

use crate::error::{Error, Result};

/// Neighbor relation used when wiring the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// 4-directional movement (up, right, down, left).
    Orthogonal,
    /// 8-directional movement (cardinal + diagonal).
    #[default]
    Diagonal,
}

impl Connectivity {
    /// Whether diagonal moves are allowed.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(self, Connectivity::Diagonal)
    }
}

/// Grid construction parameters.
///
/// `canvas_width` and `canvas_height` only feed the derived per-cell display
/// metadata ([`Grid::cell_width`](crate::Grid::cell_width) /
/// [`Grid::cell_height`](crate::Grid::cell_height)); they play no part in the
/// search itself.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    pub columns: i32,
    pub rows: i32,
    /// Probability that a cell is rolled as an obstacle, per cell, independently.
    pub obstacle_probability: f64,
    pub connectivity: Connectivity,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            columns: 50,
            rows: 50,
            obstacle_probability: 0.4,
            connectivity: Connectivity::Diagonal,
            canvas_width: 500.0,
            canvas_height: 500.0,
        }
    }
}

impl Config {
    /// Check the parameters. No grid is built from a config that fails here.
    pub fn validate(&self) -> Result<()> {
        if self.columns <= 0 || self.rows <= 0 {
            return Err(Error::Config(format!(
                "grid size must be positive, got {}x{}",
                self.columns, self.rows
            )));
        }
        if !(0.0..=1.0).contains(&self.obstacle_probability) {
            return Err(Error::Config(format!(
                "obstacle probability must be within [0, 1], got {}",
                self.obstacle_probability
            )));
        }
        Ok(())
    }
}
