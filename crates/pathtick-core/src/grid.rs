//! The obstacle grid and its precomputed neighbor arena.

use rand::Rng;
use rand::RngExt;

use crate::config::{Config, Connectivity};
use crate::error::{Error, Result};
use crate::geom::Point;

/// A single grid square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub pos: Point,
    pub obstacle: bool,
}

/// A dense 2D grid of [`Cell`]s with immutable neighbor adjacency.
///
/// Cells live in a row-major arena and are addressed either by [`Point`] or
/// by flat index. Each cell's neighbor list is computed once at construction
/// from the configured [`Connectivity`] and never changes afterwards; lists
/// are symmetric and contain only in-bounds indices. Obstacle flags and
/// endpoints may change after construction, adjacency may not.
#[derive(Debug, Clone)]
pub struct Grid {
    columns: i32,
    rows: i32,
    connectivity: Connectivity,
    cells: Vec<Cell>,
    neighbors: Vec<Vec<usize>>,
    start: usize,
    end: usize,
    cell_width: f64,
    cell_height: f64,
}

impl Grid {
    /// Build an obstacle-free grid with endpoints at opposite corners.
    ///
    /// This is the deterministic base used by tests and by harnesses that
    /// lay out their own mazes via [`set_obstacle`](Self::set_obstacle) and
    /// [`set_endpoints`](Self::set_endpoints).
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;
        let len = (config.columns * config.rows) as usize;
        let mut cells = Vec::with_capacity(len);
        for y in 0..config.rows {
            for x in 0..config.columns {
                cells.push(Cell {
                    pos: Point::new(x, y),
                    obstacle: false,
                });
            }
        }
        let mut grid = Self {
            columns: config.columns,
            rows: config.rows,
            connectivity: config.connectivity,
            cells,
            neighbors: Vec::new(),
            start: 0,
            end: len - 1,
            cell_width: config.canvas_width / f64::from(config.columns),
            cell_height: config.canvas_height / f64::from(config.rows),
        };
        grid.neighbors = grid.wire_neighbors();
        Ok(grid)
    }

    /// Build a random maze.
    ///
    /// Every cell is independently rolled as an obstacle with the configured
    /// probability, then both endpoints are drawn uniformly over all
    /// coordinates and forced clear. The endpoints may coincide, and the
    /// maze may be unsolvable; both are normal outcomes for the search, not
    /// errors.
    pub fn generate(config: &Config, rng: &mut impl Rng) -> Result<Self> {
        let mut grid = Self::new(config)?;
        for cell in grid.cells.iter_mut() {
            let r: f64 = rng.random();
            cell.obstacle = r < config.obstacle_probability;
        }
        let start = Point::new(
            rng.random_range(0..grid.columns),
            rng.random_range(0..grid.rows),
        );
        let end = Point::new(
            rng.random_range(0..grid.columns),
            rng.random_range(0..grid.rows),
        );
        grid.set_endpoints(start, end)?;
        Ok(grid)
    }

    fn wire_neighbors(&self) -> Vec<Vec<usize>> {
        let mut lists = Vec::with_capacity(self.cells.len());
        for cell in &self.cells {
            let mut ns = Vec::with_capacity(8);
            if self.connectivity.is_diagonal() {
                for p in cell.pos.neighbors_8() {
                    if let Some(i) = self.idx(p) {
                        ns.push(i);
                    }
                }
            } else {
                for p in cell.pos.neighbors_4() {
                    if let Some(i) = self.idx(p) {
                        ns.push(i);
                    }
                }
            }
            lists.push(ns);
        }
        lists
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        if p.x < 0 || p.x >= self.columns || p.y < 0 || p.y >= self.rows {
            return None;
        }
        Some((p.y * self.columns + p.x) as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        Point::new(
            (idx % self.columns as usize) as i32,
            (idx / self.columns as usize) as i32,
        )
    }

    // -----------------------------------------------------------------------
    // Layout mutators
    // -----------------------------------------------------------------------

    /// Set the obstacle flag at a point. Does nothing if out of bounds.
    pub fn set_obstacle(&mut self, p: Point, obstacle: bool) {
        if let Some(i) = self.idx(p) {
            self.cells[i].obstacle = obstacle;
        }
    }

    /// Assign the search endpoints, forcing both cells clear of obstacles.
    ///
    /// The endpoints may coincide; the search then resolves trivially on its
    /// first expansion.
    pub fn set_endpoints(&mut self, start: Point, end: Point) -> Result<()> {
        let si = self.idx(start).ok_or_else(|| {
            Error::Config(format!(
                "start {} outside {}x{} grid",
                start, self.columns, self.rows
            ))
        })?;
        let ei = self.idx(end).ok_or_else(|| {
            Error::Config(format!(
                "end {} outside {}x{} grid",
                end, self.columns, self.rows
            ))
        })?;
        self.cells[si].obstacle = false;
        self.cells[ei].obstacle = false;
        self.start = si;
        self.end = ei;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    /// Number of columns.
    #[inline]
    pub fn columns(&self) -> i32 {
        self.columns
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// The neighbor relation this grid was wired with.
    #[inline]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// The cell at a point, or `None` if out of bounds.
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Neighbor indices of the cell at `idx`.
    #[inline]
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        &self.neighbors[idx]
    }

    /// Start cell coordinates.
    #[inline]
    pub fn start(&self) -> Point {
        self.cells[self.start].pos
    }

    /// End cell coordinates.
    #[inline]
    pub fn end(&self) -> Point {
        self.cells[self.end].pos
    }

    /// Flat index of the start cell.
    #[inline]
    pub fn start_idx(&self) -> usize {
        self.start
    }

    /// Flat index of the end cell.
    #[inline]
    pub fn end_idx(&self) -> usize {
        self.end
    }

    /// Width of one cell on the configured canvas. Display metadata only.
    #[inline]
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Height of one cell on the configured canvas. Display metadata only.
    #[inline]
    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config(columns: i32, rows: i32, connectivity: Connectivity) -> Config {
        Config {
            columns,
            rows,
            connectivity,
            ..Config::default()
        }
    }

    #[test]
    fn new_grid_is_clear() {
        let g = Grid::new(&config(4, 3, Connectivity::Orthogonal)).unwrap();
        assert_eq!(g.cell_count(), 12);
        assert!(g.iter().all(|c| !c.obstacle));
        assert_eq!(g.start(), Point::new(0, 0));
        assert_eq!(g.end(), Point::new(3, 2));
    }

    #[test]
    fn invalid_config_builds_nothing() {
        let bad = config(0, 5, Connectivity::Orthogonal);
        assert!(Grid::new(&bad).is_err());
    }

    #[test]
    fn idx_point_round_trip() {
        let g = Grid::new(&config(7, 5, Connectivity::Diagonal)).unwrap();
        for i in 0..g.cell_count() {
            assert_eq!(g.idx(g.point(i)), Some(i));
        }
        assert_eq!(g.idx(Point::new(7, 0)), None);
        assert_eq!(g.idx(Point::new(0, 5)), None);
        assert_eq!(g.idx(Point::new(-1, 0)), None);
    }

    #[test]
    fn orthogonal_neighbor_counts() {
        let g = Grid::new(&config(3, 3, Connectivity::Orthogonal)).unwrap();
        let corner = g.idx(Point::new(0, 0)).unwrap();
        let edge = g.idx(Point::new(1, 0)).unwrap();
        let center = g.idx(Point::new(1, 1)).unwrap();
        assert_eq!(g.neighbors(corner).len(), 2);
        assert_eq!(g.neighbors(edge).len(), 3);
        assert_eq!(g.neighbors(center).len(), 4);
    }

    #[test]
    fn diagonal_neighbor_counts() {
        let g = Grid::new(&config(3, 3, Connectivity::Diagonal)).unwrap();
        let corner = g.idx(Point::new(0, 0)).unwrap();
        let center = g.idx(Point::new(1, 1)).unwrap();
        assert_eq!(g.neighbors(corner).len(), 3);
        assert_eq!(g.neighbors(center).len(), 8);
    }

    #[test]
    fn neighbor_lists_are_symmetric() {
        for connectivity in [Connectivity::Orthogonal, Connectivity::Diagonal] {
            let g = Grid::new(&config(5, 4, connectivity)).unwrap();
            for i in 0..g.cell_count() {
                for &n in g.neighbors(i) {
                    assert!(
                        g.neighbors(n).contains(&i),
                        "{} lists {} but not vice versa",
                        g.point(i),
                        g.point(n)
                    );
                }
            }
        }
    }

    #[test]
    fn generate_is_reproducible_per_seed() {
        let cfg = Config {
            columns: 12,
            rows: 10,
            obstacle_probability: 0.4,
            ..Config::default()
        };
        let a = Grid::generate(&cfg, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = Grid::generate(&cfg, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a.start(), b.start());
        assert_eq!(a.end(), b.end());
        for (ca, cb) in a.iter().zip(b.iter()) {
            assert_eq!(ca, cb);
        }
    }

    #[test]
    fn generate_forces_endpoints_clear() {
        let cfg = Config {
            columns: 8,
            rows: 8,
            obstacle_probability: 1.0,
            ..Config::default()
        };
        let g = Grid::generate(&cfg, &mut StdRng::seed_from_u64(3)).unwrap();
        assert!(!g.cell(g.start()).unwrap().obstacle);
        assert!(!g.cell(g.end()).unwrap().obstacle);
        // Everything else rolled as an obstacle.
        let clear = g.iter().filter(|c| !c.obstacle).count();
        assert!(clear <= 2);
    }

    #[test]
    fn zero_probability_rolls_no_obstacles() {
        let cfg = Config {
            columns: 6,
            rows: 6,
            obstacle_probability: 0.0,
            ..Config::default()
        };
        let g = Grid::generate(&cfg, &mut StdRng::seed_from_u64(11)).unwrap();
        assert!(g.iter().all(|c| !c.obstacle));
    }

    #[test]
    fn set_endpoints_rejects_out_of_bounds() {
        let mut g = Grid::new(&config(3, 3, Connectivity::Orthogonal)).unwrap();
        let err = g.set_endpoints(Point::new(3, 0), Point::new(0, 0));
        assert!(matches!(err, Err(Error::Config(_))));
    }

    #[test]
    fn set_endpoints_clears_obstacles() {
        let mut g = Grid::new(&config(3, 3, Connectivity::Orthogonal)).unwrap();
        g.set_obstacle(Point::new(2, 2), true);
        g.set_endpoints(Point::new(0, 0), Point::new(2, 2)).unwrap();
        assert!(!g.cell(Point::new(2, 2)).unwrap().obstacle);
    }

    #[test]
    fn cell_size_is_canvas_over_grid() {
        let cfg = Config {
            columns: 50,
            rows: 25,
            ..Config::default()
        };
        let g = Grid::new(&cfg).unwrap();
        assert_eq!(g.cell_width(), 10.0);
        assert_eq!(g.cell_height(), 20.0);
    }
}
