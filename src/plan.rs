//! Solve orchestration and plan extraction.
//!
//! Bridges the model layer and the solver port: builds the MILP for a
//! topology, submits it, and maps raw column values back to named flows and
//! open/closed decisions. Non-optimal solver statuses flow through as data;
//! callers must check [`SupplyPlan::status`] before trusting the rest.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::domain::{Code, Topology};
use crate::error::Result;
use crate::model::SupplyModel;
use crate::ports::solver::{SolutionStatus, Solver};

/// The structured outcome of one solve.
///
/// Flows and indicators are populated only when `status` is
/// [`SolutionStatus::Optimal`]; otherwise the maps are empty and
/// `total_cost` is `None`.
#[derive(Debug, Clone)]
pub struct SupplyPlan {
    pub status: SolutionStatus,
    pub total_cost: Option<Decimal>,
    /// Whether each plant is open, from the rounded binary indicator.
    pub open_plants: BTreeMap<Code, bool>,
    /// Bauxite tonnes shipped per (mine, plant) arc.
    pub bauxite_flows: BTreeMap<(Code, Code), Decimal>,
    /// Alumina tonnes shipped per (plant, smelter) arc.
    pub alumina_flows: BTreeMap<(Code, Code), Decimal>,
}

impl SupplyPlan {
    fn unsolved(status: SolutionStatus) -> Self {
        Self {
            status,
            total_cost: None,
            open_plants: BTreeMap::new(),
            bauxite_flows: BTreeMap::new(),
            alumina_flows: BTreeMap::new(),
        }
    }
}

/// Build the MILP for `topology`, solve it, and extract the plan.
///
/// Blocks until the solver terminates; no timeout is imposed here.
pub fn solve(solver: &dyn Solver, topology: &Topology) -> Result<SupplyPlan> {
    let model = SupplyModel::build(topology);
    debug!(
        variables = model.problem.lp.num_vars(),
        constraints = model.problem.lp.constraints.len(),
        "supply model built"
    );

    info!(solver = solver.name(), "solving supply model");
    let solution = solver.solve_milp(&model.problem)?;
    info!(status = %solution.status, "solve finished");

    if !solution.is_optimal() {
        return Ok(SupplyPlan::unsolved(solution.status));
    }

    let mut plan = SupplyPlan {
        status: solution.status,
        total_cost: Some(solution.objective),
        open_plants: BTreeMap::new(),
        bauxite_flows: BTreeMap::new(),
        alumina_flows: BTreeMap::new(),
    };

    for (code, col) in &model.index.open {
        // Integer columns can come back as 0.9999...; round to the decision.
        plan.open_plants
            .insert(*code, solution.values[*col].round() == Decimal::ONE);
    }
    for (arc, col) in &model.index.bauxite {
        plan.bauxite_flows.insert(*arc, solution.values[*col]);
    }
    for (arc, col) in &model.index.alumina {
        plan.alumina_flows.insert(*arc, solution.values[*col]);
    }

    Ok(plan)
}
