//! Solver backends implementing the `ports::solver::Solver` trait.

mod highs;

pub use highs::HiGHSSolver;
