//! MILP construction for the supply-chain network.
//!
//! Builds the solver-ready problem from a [`Topology`]: one continuous flow
//! variable per bauxite arc and per alumina arc, one binary open-indicator
//! per plant, a single cost objective, and the capacity/balance/demand
//! constraints. Column layout is bauxite flows first (mine-major), then
//! alumina flows (plant-major), then open-indicators.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::domain::{Code, Topology};
use crate::ports::solver::{Constraint, IlpProblem, LpProblem, VariableBounds};

/// Maps decision variables back to problem columns.
///
/// Flow variables are keyed by the `(origin, destination)` arc; indicators
/// by plant code. `BTreeMap` keeps iteration order deterministic.
#[derive(Debug, Clone, Default)]
pub struct VarIndex {
    /// Bauxite flow x[mine][plant].
    pub bauxite: BTreeMap<(Code, Code), usize>,
    /// Alumina flow y[plant][smelter].
    pub alumina: BTreeMap<(Code, Code), usize>,
    /// Open-indicator w[plant].
    pub open: BTreeMap<Code, usize>,
}

/// A solver-ready supply-chain model.
#[derive(Debug, Clone)]
pub struct SupplyModel {
    pub problem: IlpProblem,
    pub index: VarIndex,
}

impl SupplyModel {
    /// Build the MILP for the given topology.
    ///
    /// Objective: extraction + production + smelting + freight costs on the
    /// flow variables, plus plant fixed costs on the open-indicators.
    ///
    /// Constraints, one per entity of the fixed topology:
    /// - mine extraction <= mine capacity
    /// - plant bauxite intake <= plant capacity * open-indicator
    /// - smelter alumina intake <= smelter capacity
    /// - per plant, alumina recovered from bauxite (per-mine yield) equals
    ///   alumina shipped onward
    /// - per smelter, aluminum produced (alumina * aluminum yield) equals
    ///   demand
    pub fn build(topology: &Topology) -> Self {
        let n_mines = topology.mines.len();
        let n_plants = topology.plants.len();
        let n_smelters = topology.smelters.len();

        let nx = n_mines * n_plants;
        let ny = n_plants * n_smelters;
        let n = nx + ny + n_plants;

        let x_col = |mine: usize, plant: usize| mine * n_plants + plant;
        let y_col = |plant: usize, smelter: usize| nx + plant * n_smelters + smelter;
        let w_col = |plant: usize| nx + ny + plant;

        let mut index = VarIndex::default();
        for (mi, mine) in topology.mines.iter().enumerate() {
            for (pj, plant) in topology.plants.iter().enumerate() {
                index.bauxite.insert((mine.code, plant.code), x_col(mi, pj));
            }
        }
        for (pj, plant) in topology.plants.iter().enumerate() {
            for (sk, smelter) in topology.smelters.iter().enumerate() {
                index.alumina.insert((plant.code, smelter.code), y_col(pj, sk));
            }
            index.open.insert(plant.code, w_col(pj));
        }

        let mut lp = LpProblem::new(n);

        // Objective: per-unit costs on flows, fixed costs on indicators.
        for (mi, mine) in topology.mines.iter().enumerate() {
            for (pj, plant) in topology.plants.iter().enumerate() {
                lp.objective[x_col(mi, pj)] =
                    mine.extraction_cost + topology.bauxite_rate(mine.code, plant.code);
            }
        }
        for (pj, plant) in topology.plants.iter().enumerate() {
            for (sk, smelter) in topology.smelters.iter().enumerate() {
                lp.objective[y_col(pj, sk)] = plant.production_cost
                    + smelter.smelting_cost
                    + topology.alumina_rate(plant.code, smelter.code);
            }
            lp.objective[w_col(pj)] = plant.fixed_cost;
        }

        // Mine extraction capacity.
        for (mi, mine) in topology.mines.iter().enumerate() {
            let mut coefficients = vec![Decimal::ZERO; n];
            for pj in 0..n_plants {
                coefficients[x_col(mi, pj)] = Decimal::ONE;
            }
            lp.constraints.push(Constraint::leq(
                format!("mine_capacity({})", mine.code),
                coefficients,
                mine.capacity,
            ));
        }

        // Plant intake capacity, gated by the open-indicator: a closed plant
        // forces all inbound bauxite to zero.
        for (pj, plant) in topology.plants.iter().enumerate() {
            let mut coefficients = vec![Decimal::ZERO; n];
            for mi in 0..n_mines {
                coefficients[x_col(mi, pj)] = Decimal::ONE;
            }
            coefficients[w_col(pj)] = -plant.capacity;
            lp.constraints.push(Constraint::leq(
                format!("plant_capacity({})", plant.code),
                coefficients,
                Decimal::ZERO,
            ));
        }

        // Smelter intake capacity.
        for (sk, smelter) in topology.smelters.iter().enumerate() {
            let mut coefficients = vec![Decimal::ZERO; n];
            for pj in 0..n_plants {
                coefficients[y_col(pj, sk)] = Decimal::ONE;
            }
            lp.constraints.push(Constraint::leq(
                format!("smelter_capacity({})", smelter.code),
                coefficients,
                smelter.capacity,
            ));
        }

        // Mass conservation per plant: alumina recovered from incoming
        // bauxite (yield of the source mine) equals alumina shipped onward.
        for (pj, plant) in topology.plants.iter().enumerate() {
            let mut coefficients = vec![Decimal::ZERO; n];
            for (mi, mine) in topology.mines.iter().enumerate() {
                coefficients[x_col(mi, pj)] = mine.alumina_yield;
            }
            for sk in 0..n_smelters {
                coefficients[y_col(pj, sk)] = -Decimal::ONE;
            }
            lp.constraints.push(Constraint::eq(
                format!("alumina_balance({})", plant.code),
                coefficients,
                Decimal::ZERO,
            ));
        }

        // Demand per smelter, in aluminum terms: the alumina->aluminum
        // conversion factor applies on the delivered side.
        for (sk, smelter) in topology.smelters.iter().enumerate() {
            let mut coefficients = vec![Decimal::ZERO; n];
            for pj in 0..n_plants {
                coefficients[y_col(pj, sk)] = topology.aluminum_yield;
            }
            lp.constraints.push(Constraint::eq(
                format!("aluminum_demand({})", smelter.code),
                coefficients,
                smelter.demand,
            ));
        }

        // Flows are non-negative; indicators are binary.
        for pj in 0..n_plants {
            lp.bounds[w_col(pj)] = VariableBounds::binary();
        }

        let integer_vars: Vec<usize> = (0..n_plants).map(w_col).collect();

        Self {
            problem: IlpProblem::new(lp, integer_vars),
            index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::solver::ConstraintSense;
    use rust_decimal_macros::dec;

    fn standard_model() -> SupplyModel {
        SupplyModel::build(&Topology::standard())
    }

    #[test]
    fn column_and_row_counts_match_topology() {
        let model = standard_model();
        // 3*4 bauxite + 4*2 alumina + 4 indicators
        assert_eq!(model.problem.lp.num_vars(), 24);
        // 3 mine + 4 plant + 2 smelter + 4 balance + 2 demand
        assert_eq!(model.problem.lp.constraints.len(), 15);
    }

    #[test]
    fn objective_sums_unit_costs_per_arc() {
        let model = standard_model();

        // x[A][B]: extraction 420 + freight 400
        let col = model.index.bauxite[&("A", "B")];
        assert_eq!(model.problem.lp.objective[col], dec!(820));

        // y[B][D]: production 330 + smelting 8500 + freight 220
        let col = model.index.alumina[&("B", "D")];
        assert_eq!(model.problem.lp.objective[col], dec!(9050));

        // w[B]: fixed cost
        let col = model.index.open[&"B"];
        assert_eq!(model.problem.lp.objective[col], dec!(3000000));
    }

    #[test]
    fn plant_capacity_is_gated_by_indicator() {
        let model = standard_model();
        let row = model
            .problem
            .lp
            .constraints
            .iter()
            .find(|c| c.name == "plant_capacity(C)")
            .expect("constraint present");

        assert_eq!(row.sense, ConstraintSense::LessEqual);
        assert_eq!(row.rhs, Decimal::ZERO);
        assert_eq!(row.coefficients[model.index.open[&"C"]], dec!(-20000));
        for mine in ["A", "B", "C"] {
            assert_eq!(row.coefficients[model.index.bauxite[&(mine, "C")]], Decimal::ONE);
        }
    }

    #[test]
    fn balance_applies_per_mine_yield() {
        let model = standard_model();
        let row = model
            .problem
            .lp
            .constraints
            .iter()
            .find(|c| c.name == "alumina_balance(E)")
            .expect("constraint present");

        assert_eq!(row.sense, ConstraintSense::Equal);
        assert_eq!(row.coefficients[model.index.bauxite[&("A", "E")]], dec!(0.06));
        assert_eq!(row.coefficients[model.index.bauxite[&("B", "E")]], dec!(0.08));
        assert_eq!(row.coefficients[model.index.bauxite[&("C", "E")]], dec!(0.062));
        assert_eq!(row.coefficients[model.index.alumina[&("E", "D")]], -Decimal::ONE);
        assert_eq!(row.coefficients[model.index.alumina[&("E", "E")]], -Decimal::ONE);
    }

    #[test]
    fn demand_is_equality_in_aluminum_terms() {
        let model = standard_model();
        let row = model
            .problem
            .lp
            .constraints
            .iter()
            .find(|c| c.name == "aluminum_demand(D)")
            .expect("constraint present");

        assert_eq!(row.sense, ConstraintSense::Equal);
        assert_eq!(row.rhs, dec!(1000));
        for plant in ["B", "C", "D", "E"] {
            assert_eq!(row.coefficients[model.index.alumina[&(plant, "D")]], dec!(0.4));
        }
    }

    #[test]
    fn only_indicators_are_integer_and_binary() {
        let model = standard_model();
        let expected: Vec<usize> = model.index.open.values().copied().collect();
        let mut actual = model.problem.integer_vars.clone();
        actual.sort_unstable();
        assert_eq!(actual, expected);

        for (_, col) in &model.index.open {
            let bounds = model.problem.lp.bounds[*col];
            assert_eq!(bounds.lower, Some(Decimal::ZERO));
            assert_eq!(bounds.upper, Some(Decimal::ONE));
        }
        for (_, col) in &model.index.bauxite {
            assert_eq!(model.problem.lp.bounds[*col].upper, None);
        }
    }
}
