//! Path reconstruction over parent links.

use pathtick_core::Point;

use crate::engine::StepSearch;

impl StepSearch {
    /// Walk parent links back from the cell at `from` to the parentless
    /// start cell, inclusive of both.
    ///
    /// The sequence comes out goal-first, start-last; reverse it for
    /// start→goal order. A cell the search has not reached yet has no
    /// parent, so its trace is just the cell itself. Returns `None` if
    /// `from` lies outside the grid.
    pub fn path_from(&self, from: Point) -> Option<Vec<Point>> {
        self.grid.idx(from).map(|i| self.backtrace(i))
    }

    /// Best current trace, from the most recently selected cell back to the
    /// start.
    ///
    /// Callable in any state: mid-run it is the partial route to the
    /// frontier, after [`Status::Found`](crate::Status::Found) it is the
    /// full solution, and before the first `step()` it is just the start
    /// cell.
    pub fn reconstruct_path(&self) -> Vec<Point> {
        self.backtrace(self.current)
    }

    fn backtrace(&self, from: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut cursor = Some(from);
        while let Some(i) = cursor {
            path.push(self.grid.point(i));
            cursor = self.nodes[i].parent;
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Status;
    use pathtick_core::{Config, Connectivity, Grid};

    fn searched_grid() -> StepSearch {
        let config = Config {
            columns: 4,
            rows: 4,
            obstacle_probability: 0.0,
            connectivity: Connectivity::Orthogonal,
            ..Config::default()
        };
        let mut grid = Grid::new(&config).unwrap();
        grid.set_endpoints(Point::new(0, 0), Point::new(3, 3)).unwrap();
        StepSearch::new(grid)
    }

    #[test]
    fn trace_before_first_step_is_the_start() {
        let search = searched_grid();
        assert_eq!(search.reconstruct_path(), vec![Point::new(0, 0)]);
    }

    #[test]
    fn trace_is_goal_first_start_last() {
        let mut search = searched_grid();
        search.solve().unwrap();
        let path = search.reconstruct_path();
        assert_eq!(path.first(), Some(&Point::new(3, 3)));
        assert_eq!(path.last(), Some(&Point::new(0, 0)));
    }

    #[test]
    fn partial_trace_follows_the_frontier() {
        let mut search = searched_grid();
        while search.closed_cells().count() < 4 {
            search.step().unwrap();
        }
        assert_eq!(search.status(), Status::Running);
        let path = search.reconstruct_path();
        assert_eq!(path[0], search.current());
        assert_eq!(*path.last().unwrap(), Point::new(0, 0));
        // Consecutive trace cells are grid neighbors.
        for pair in path.windows(2) {
            let d = pair[0] - pair[1];
            assert_eq!(d.x.abs() + d.y.abs(), 1);
        }
    }

    #[test]
    fn path_from_unvisited_cell_is_that_cell() {
        let search = searched_grid();
        assert_eq!(
            search.path_from(Point::new(2, 2)),
            Some(vec![Point::new(2, 2)])
        );
    }

    #[test]
    fn path_from_outside_the_grid_is_none() {
        let search = searched_grid();
        assert_eq!(search.path_from(Point::new(9, 9)), None);
    }
}
