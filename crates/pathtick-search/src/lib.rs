//! **pathtick-search** — Stepwise A* search over obstacle grids.
//!
//! The search advances one expansion per [`StepSearch::step`] call, so an
//! external clock (an animation tick, a REPL prompt, a test loop) controls
//! pacing entirely; the engine itself has no notion of time. Between calls
//! the frontier can be read back out for display:
//!
//! - [`StepSearch::status`]: `Running`, `Found`, or `Exhausted`
//! - [`StepSearch::current`]: the most recently selected cell
//! - [`StepSearch::reconstruct_path`]: best trace back to the start so far
//! - [`StepSearch::open_cells`] / [`StepSearch::closed_cells`]: frontier snapshots
//!
//! [`StepSearch::solve`] drives the same loop to completion in one call for
//! callers that only want the final path.

mod distance;
mod engine;
mod step;
mod trace;

pub use distance::{chebyshev, estimate, euclidean, manhattan};
pub use engine::{Node, Status, StepSearch};
