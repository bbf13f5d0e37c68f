/// Number of relaxation passes the rating engine executes.
///
/// The loop always runs the full budget: no convergence tolerance, no early
/// exit. On event-sized data the allocation settles well inside this budget,
/// and a fixed count keeps runs bit-for-bit reproducible.
pub const DEFAULT_ITERATIONS: usize = 200;

/// Teams per alliance. Score components that cannot be attributed to a
/// single robot are divided by this with truncating integer division; the
/// remainder is dropped, not redistributed.
pub const ALLIANCE_SIZE: usize = 3;
