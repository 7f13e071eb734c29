//! Solver port for mixed-integer linear programming.
//!
//! This module defines the contract the model layer depends on. The problem
//! is column-oriented: a minimization objective, named linear constraints,
//! and per-variable bounds, with a subset of columns restricted to integer
//! values. Backends live under `adapter::solver`.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A mixed-integer linear programming solver.
///
/// Implementations wrap specific solver backends and must be thread-safe.
/// Non-optimal terminations (infeasible, unbounded) are reported through
/// [`SolutionStatus`], never as errors; `Err` is reserved for backend
/// failures outside the normal termination set.
pub trait Solver: Send + Sync {
    /// Solver name for logging/config.
    fn name(&self) -> &'static str;

    /// Solve: minimize `c*x` subject to the constraints and integrality
    /// restrictions. Blocks until the backend terminates.
    fn solve_milp(&self, problem: &IlpProblem) -> Result<LpSolution>;
}

/// Linear programming problem definition (the continuous relaxation).
#[derive(Debug, Clone)]
pub struct LpProblem {
    /// Objective coefficients (minimize c*x).
    pub objective: Vec<Decimal>,
    /// Constraints.
    pub constraints: Vec<Constraint>,
    /// Variable bounds.
    pub bounds: Vec<VariableBounds>,
}

impl LpProblem {
    /// Create a new LP problem with all-zero objective and default bounds.
    #[must_use]
    pub fn new(num_vars: usize) -> Self {
        Self {
            objective: vec![Decimal::ZERO; num_vars],
            constraints: Vec::new(),
            bounds: vec![VariableBounds::default(); num_vars],
        }
    }

    /// Number of variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }
}

/// Integer linear programming problem.
#[derive(Debug, Clone)]
pub struct IlpProblem {
    /// Base LP problem.
    pub lp: LpProblem,
    /// Indices of variables that must be integer.
    pub integer_vars: Vec<usize>,
}

impl IlpProblem {
    /// Create from an LP problem with specified integer variables.
    #[must_use]
    pub const fn new(lp: LpProblem, integer_vars: Vec<usize>) -> Self {
        Self { lp, integer_vars }
    }
}

/// A single named constraint: `sum(coeffs[i] * x[i]) {>=, <=, =} rhs`.
///
/// The name is purely diagnostic; it identifies the constraint in logs and
/// test failures.
#[derive(Debug, Clone)]
pub struct Constraint {
    /// Diagnostic label, e.g. `plant_capacity(B)`.
    pub name: String,
    /// Coefficients for each variable.
    pub coefficients: Vec<Decimal>,
    /// Constraint sense (>=, <=, =).
    pub sense: ConstraintSense,
    /// Right-hand side value.
    pub rhs: Decimal,
}

impl Constraint {
    /// Create a >= constraint.
    #[must_use]
    pub fn geq(name: impl Into<String>, coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            name: name.into(),
            coefficients,
            sense: ConstraintSense::GreaterEqual,
            rhs,
        }
    }

    /// Create a <= constraint.
    #[must_use]
    pub fn leq(name: impl Into<String>, coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            name: name.into(),
            coefficients,
            sense: ConstraintSense::LessEqual,
            rhs,
        }
    }

    /// Create an = constraint.
    #[must_use]
    pub fn eq(name: impl Into<String>, coefficients: Vec<Decimal>, rhs: Decimal) -> Self {
        Self {
            name: name.into(),
            coefficients,
            sense: ConstraintSense::Equal,
            rhs,
        }
    }
}

/// Constraint sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintSense {
    GreaterEqual,
    LessEqual,
    Equal,
}

/// Bounds on a variable.
#[derive(Debug, Clone, Copy)]
pub struct VariableBounds {
    /// Lower bound (None = -infinity).
    pub lower: Option<Decimal>,
    /// Upper bound (None = +infinity).
    pub upper: Option<Decimal>,
}

impl Default for VariableBounds {
    fn default() -> Self {
        Self {
            lower: Some(Decimal::ZERO),
            upper: None,
        }
    }
}

impl VariableBounds {
    /// Binary variable bounds [0, 1].
    #[must_use]
    pub const fn binary() -> Self {
        Self {
            lower: Some(Decimal::ZERO),
            upper: Some(Decimal::ONE),
        }
    }

    /// Non-negative variable [0, +inf).
    #[must_use]
    pub fn non_negative() -> Self {
        Self::default()
    }
}

/// Solution to an LP/MILP problem.
#[derive(Debug, Clone)]
pub struct LpSolution {
    /// Variable values; meaningful only when the status is optimal.
    pub values: Vec<Decimal>,
    /// Objective value; meaningful only when the status is optimal.
    pub objective: Decimal,
    /// Solver termination status.
    pub status: SolutionStatus,
}

impl LpSolution {
    /// Check if the solution is optimal.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }

    /// A non-solution carrying only a termination status.
    #[must_use]
    pub fn unsolved(num_vars: usize, status: SolutionStatus) -> Self {
        Self {
            values: vec![Decimal::ZERO; num_vars],
            objective: Decimal::ZERO,
            status,
        }
    }
}

/// Solver termination status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// Found a proven optimal solution.
    Optimal,
    /// Problem is infeasible.
    Infeasible,
    /// Problem is unbounded.
    Unbounded,
    /// Solver terminated without a classification.
    Undefined,
    /// Solver was not invoked.
    NotSolved,
}

impl fmt::Display for SolutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Optimal => "Optimal",
            Self::Infeasible => "Infeasible",
            Self::Unbounded => "Unbounded",
            Self::Undefined => "Undefined",
            Self::NotSolved => "Not Solved",
        };
        f.write_str(text)
    }
}
