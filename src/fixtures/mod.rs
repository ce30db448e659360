//! Ready-made game trees.

/// Small hand-written trees with known values and pruning traces.
pub mod two_ply;

/// Seeded random trees for property checks and demos.
pub mod random_tree;
