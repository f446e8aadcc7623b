use log::debug;
use pathtick_core::{Error, Point, Result};

use crate::distance::estimate;
use crate::engine::{Status, StepSearch};

/// Cost of moving to any accepted neighbor. Diagonal steps are not
/// penalized extra; see [`estimate`] for the consequences.
const STEP_COST: f64 = 1.0;

impl StepSearch {
    /// Perform exactly one expansion.
    ///
    /// Selects the open cell with the smallest `f` (ties go to the member
    /// encountered first in the scan), moves it to the closed set and
    /// relaxes its non-obstacle, non-closed neighbors at a uniform step
    /// cost of 1. Selecting the goal transitions to [`Status::Found`]
    /// without expanding it; an empty open set transitions to
    /// [`Status::Exhausted`]. Closed cells are never re-opened, even if a
    /// cheaper route to them turns up later.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] when the search has already ended;
    /// check [`status`](Self::status) before calling.
    pub fn step(&mut self) -> Result<()> {
        if self.status != Status::Running {
            return Err(Error::InvalidState("step() called after the search ended"));
        }

        if self.open.is_empty() {
            debug!("open set drained, no route to {}", self.grid.end());
            self.status = Status::Exhausted;
            return Ok(());
        }

        // Strict `<` keeps the first-encountered member on ties.
        let mut lowest = 0;
        for i in 1..self.open.len() {
            if self.nodes[self.open[i]].f < self.nodes[self.open[lowest]].f {
                lowest = i;
            }
        }
        let ci = self.open[lowest];
        self.current = ci;

        if ci == self.grid.end_idx() {
            debug!("goal {} selected for expansion", self.grid.end());
            self.status = Status::Found;
            return Ok(());
        }

        // Ordered removal; the scan order must stay stable for ties.
        self.open.remove(lowest);
        self.in_open[ci] = false;
        self.in_closed[ci] = true;
        self.closed.push(ci);

        let current_g = self.nodes[ci].g;
        let end = self.grid.end();
        let connectivity = self.grid.connectivity();

        for &ni in self.grid.neighbors(ci) {
            if self.grid.cells()[ni].obstacle || self.in_closed[ni] {
                continue;
            }
            let tentative_g = current_g + STEP_COST;
            if self.in_open[ni] {
                if tentative_g >= self.nodes[ni].g {
                    continue;
                }
            } else {
                self.open.push(ni);
                self.in_open[ni] = true;
            }
            let node = &mut self.nodes[ni];
            node.g = tentative_g;
            node.h = estimate(connectivity, self.grid.point(ni), end);
            node.f = node.g + node.h;
            node.parent = Some(ci);
        }

        Ok(())
    }

    /// Step until the search ends, then return the start→goal path on
    /// success or `None` if the maze has no route.
    ///
    /// Calling this on an already-ended search just reports its outcome.
    pub fn solve(&mut self) -> Result<Option<Vec<Point>>> {
        while self.status == Status::Running {
            self.step()?;
        }
        match self.status {
            Status::Found => {
                let mut path = self.reconstruct_path();
                path.reverse();
                Ok(Some(path))
            }
            _ => Ok(None),
        }
    }
}
