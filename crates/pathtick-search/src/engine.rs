use pathtick_core::{Config, Grid, Point, Result};
use rand::Rng;

/// Search bookkeeping for one grid cell.
///
/// One `Node` exists per cell in the engine's arena, addressed by the same
/// flat index as the cell itself. All fields reset on every restart.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Node {
    /// Known cost from the start cell; meaningful once discovered.
    pub g: f64,
    /// Heuristic estimate of remaining cost to the goal.
    pub h: f64,
    /// Priority key. Equals `g + h` whenever both have been assigned.
    pub f: f64,
    /// Arena index of the cell this one was reached from. The start cell
    /// keeps `None`, which terminates path reconstruction.
    pub parent: Option<usize>,
}

/// State machine of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The frontier is live; `step()` may be called.
    Running,
    /// The goal was selected for expansion. Terminal.
    Found,
    /// The open set drained without reaching the goal. Terminal.
    Exhausted,
}

/// Incremental A* over a [`Grid`], advanced one expansion at a time.
///
/// The engine owns its grid exclusively for its lifetime. It is
/// single-threaded and synchronous: each [`step`](Self::step) returns after
/// exactly one expansion (or a terminal transition), and nothing runs
/// between calls.
pub struct StepSearch {
    pub(crate) grid: Grid,
    pub(crate) nodes: Vec<Node>,
    /// Open list in discovery order. The selection scan walks it in this
    /// order, which is what breaks f-score ties.
    pub(crate) open: Vec<usize>,
    pub(crate) in_open: Vec<bool>,
    pub(crate) closed: Vec<usize>,
    pub(crate) in_closed: Vec<bool>,
    pub(crate) current: usize,
    pub(crate) status: Status,
}

impl StepSearch {
    /// Create an engine over the given grid, ready to run.
    pub fn new(grid: Grid) -> Self {
        let mut search = Self {
            nodes: Vec::new(),
            open: Vec::new(),
            in_open: Vec::new(),
            closed: Vec::new(),
            in_closed: Vec::new(),
            current: grid.start_idx(),
            status: Status::Running,
            grid,
        };
        search.reset();
        search
    }

    /// Generate a random maze per `config` and create an engine over it.
    pub fn generate(config: &Config, rng: &mut impl Rng) -> Result<Self> {
        Ok(Self::new(Grid::generate(config, rng)?))
    }

    /// Restart the search on the same maze.
    ///
    /// Clears all per-cell bookkeeping and reseeds the open set with the
    /// start cell (whose `g` is 0). Must not be called while a `step()` is
    /// in progress, which the synchronous API already guarantees.
    pub fn reset(&mut self) {
        let len = self.grid.cell_count();
        self.nodes.clear();
        self.nodes.resize(len, Node::default());
        self.open.clear();
        self.in_open.clear();
        self.in_open.resize(len, false);
        self.closed.clear();
        self.in_closed.clear();
        self.in_closed.resize(len, false);

        let start = self.grid.start_idx();
        self.open.push(start);
        self.in_open[start] = true;
        self.current = start;
        self.status = Status::Running;
    }

    /// Replace the maze entirely and restart.
    pub fn replace_grid(&mut self, grid: Grid) {
        self.grid = grid;
        self.reset();
    }

    // -----------------------------------------------------------------------
    // Inspection
    // -----------------------------------------------------------------------

    /// Current state of the search.
    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    /// The grid being searched.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The most recently selected cell; the start cell before the first
    /// `step()`.
    #[inline]
    pub fn current(&self) -> Point {
        self.grid.point(self.current)
    }

    /// Search scores of the cell at `p`, or `None` if out of bounds.
    pub fn node_at(&self, p: Point) -> Option<&Node> {
        self.grid.idx(p).map(|i| &self.nodes[i])
    }

    /// Snapshot of the open set, in discovery order.
    pub fn open_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.open.iter().map(|&i| self.grid.point(i))
    }

    /// Snapshot of the closed set, in expansion order.
    pub fn closed_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.closed.iter().map(|&i| self.grid.point(i))
    }
}
