//! Supply-chain network topology.
//!
//! The network is a fixed three-stage chain: bauxite mines ship ore to
//! alumina refineries (plants), which ship alumina to smelters. Nodes are
//! identified by short static codes; freight tables are keyed by the
//! `(origin, destination)` pair. Quantities and money are `Decimal` in this
//! layer; conversion to `f64` happens only at the solver boundary.

use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{Error, Result};

/// Short identifier for a network node, e.g. `"A"` or `"D"`.
pub type Code = &'static str;

/// A bauxite mine.
#[derive(Debug, Clone)]
pub struct Mine {
    pub code: Code,
    /// Maximum bauxite extraction, tonnes.
    pub capacity: Decimal,
    /// Extraction cost per tonne of bauxite.
    pub extraction_cost: Decimal,
    /// Tonnes of alumina recoverable per tonne of this mine's bauxite.
    pub alumina_yield: Decimal,
}

/// An alumina refinery. Incurs its fixed cost only when open.
#[derive(Debug, Clone)]
pub struct Plant {
    pub code: Code,
    /// Maximum bauxite intake, tonnes.
    pub capacity: Decimal,
    /// One-time cost charged if the plant operates at all.
    pub fixed_cost: Decimal,
    /// Production cost per tonne of alumina shipped onward.
    pub production_cost: Decimal,
}

/// An aluminum smelter with a fixed demand to satisfy.
#[derive(Debug, Clone)]
pub struct Smelter {
    pub code: Code,
    /// Maximum alumina intake, tonnes.
    pub capacity: Decimal,
    /// Smelting cost per tonne of alumina received.
    pub smelting_cost: Decimal,
    /// Required aluminum output, tonnes.
    pub demand: Decimal,
}

/// The full network: nodes plus freight tables.
///
/// Immutable once constructed; safe to share across invocations. Freight
/// tables cover every mine-plant and plant-smelter pair.
#[derive(Debug, Clone)]
pub struct Topology {
    pub mines: Vec<Mine>,
    pub plants: Vec<Plant>,
    pub smelters: Vec<Smelter>,
    /// Bauxite freight cost per tonne, keyed by (mine, plant).
    pub bauxite_freight: BTreeMap<(Code, Code), Decimal>,
    /// Alumina freight cost per tonne, keyed by (plant, smelter).
    pub alumina_freight: BTreeMap<(Code, Code), Decimal>,
    /// Tonnes of aluminum produced per tonne of alumina smelted.
    pub aluminum_yield: Decimal,
}

impl Topology {
    /// The standard bauxite network: 3 mines, 4 plants, 2 smelters.
    pub fn standard() -> Self {
        let mines = vec![
            Mine {
                code: "A",
                capacity: dec!(36000),
                extraction_cost: dec!(420),
                alumina_yield: dec!(0.06),
            },
            Mine {
                code: "B",
                capacity: dec!(52000),
                extraction_cost: dec!(360),
                alumina_yield: dec!(0.08),
            },
            Mine {
                code: "C",
                capacity: dec!(28000),
                extraction_cost: dec!(540),
                alumina_yield: dec!(0.062),
            },
        ];

        let plants = vec![
            Plant {
                code: "B",
                capacity: dec!(40000),
                fixed_cost: dec!(3000000),
                production_cost: dec!(330),
            },
            Plant {
                code: "C",
                capacity: dec!(20000),
                fixed_cost: dec!(2500000),
                production_cost: dec!(320),
            },
            Plant {
                code: "D",
                capacity: dec!(30000),
                fixed_cost: dec!(4800000),
                production_cost: dec!(380),
            },
            Plant {
                code: "E",
                capacity: dec!(80000),
                fixed_cost: dec!(6000000),
                production_cost: dec!(240),
            },
        ];

        let smelters = vec![
            Smelter {
                code: "D",
                capacity: dec!(4000),
                smelting_cost: dec!(8500),
                demand: dec!(1000),
            },
            Smelter {
                code: "E",
                capacity: dec!(7000),
                smelting_cost: dec!(5200),
                demand: dec!(1200),
            },
        ];

        let bauxite_freight = BTreeMap::from([
            (("A", "B"), dec!(400)),
            (("A", "C"), dec!(2010)),
            (("A", "D"), dec!(510)),
            (("A", "E"), dec!(1920)),
            (("B", "B"), dec!(10)),
            (("B", "C"), dec!(630)),
            (("B", "D"), dec!(220)),
            (("B", "E"), dec!(1510)),
            (("C", "B"), dec!(1630)),
            (("C", "C"), dec!(10)),
            (("C", "D"), dec!(620)),
            (("C", "E"), dec!(940)),
        ]);

        let alumina_freight = BTreeMap::from([
            (("B", "D"), dec!(220)),
            (("B", "E"), dec!(1510)),
            (("C", "D"), dec!(620)),
            (("C", "E"), dec!(940)),
            (("D", "D"), dec!(0)),
            (("D", "E"), dec!(1615)),
            (("E", "D"), dec!(1465)),
            (("E", "E"), dec!(0)),
        ]);

        Self {
            mines,
            plants,
            smelters,
            bauxite_freight,
            alumina_freight,
            aluminum_yield: dec!(0.4),
        }
    }

    /// Bauxite freight cost per tonne on the (mine, plant) arc.
    pub fn bauxite_rate(&self, mine: Code, plant: Code) -> Decimal {
        self.bauxite_freight
            .get(&(mine, plant))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Alumina freight cost per tonne on the (plant, smelter) arc.
    pub fn alumina_rate(&self, plant: Code, smelter: Code) -> Decimal {
        self.alumina_freight
            .get(&(plant, smelter))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Replace plant fixed costs with caller-supplied values.
    pub fn with_fixed_costs(mut self, overrides: &FixedCostOverrides) -> Self {
        for plant in &mut self.plants {
            if let Some(cost) = overrides.get(plant.code) {
                plant.fixed_cost = cost;
            }
        }
        self
    }
}

/// Caller-supplied replacements for plant fixed costs.
#[derive(Debug, Default, Clone)]
pub struct FixedCostOverrides {
    costs: BTreeMap<Code, Decimal>,
}

impl FixedCostOverrides {
    pub fn set(&mut self, plant: Code, cost: Decimal) {
        self.costs.insert(plant, cost);
    }

    pub fn get(&self, plant: Code) -> Option<Decimal> {
        self.costs.get(plant).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

/// Parse an externally-supplied fixed-cost value.
///
/// The only validation is numeric conversion; a failure aborts before model
/// construction.
pub fn parse_fixed_cost(field: &'static str, raw: &str) -> Result<Decimal> {
    Decimal::from_str(raw.trim()).map_err(|_| Error::InvalidInput {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_topology_shape() {
        let topology = Topology::standard();
        assert_eq!(topology.mines.len(), 3);
        assert_eq!(topology.plants.len(), 4);
        assert_eq!(topology.smelters.len(), 2);
    }

    #[test]
    fn freight_tables_cover_every_arc() {
        let topology = Topology::standard();
        for mine in &topology.mines {
            for plant in &topology.plants {
                assert!(
                    topology.bauxite_freight.contains_key(&(mine.code, plant.code)),
                    "missing bauxite arc {} -> {}",
                    mine.code,
                    plant.code
                );
            }
        }
        for plant in &topology.plants {
            for smelter in &topology.smelters {
                assert!(
                    topology.alumina_freight.contains_key(&(plant.code, smelter.code)),
                    "missing alumina arc {} -> {}",
                    plant.code,
                    smelter.code
                );
            }
        }
    }

    #[test]
    fn fixed_cost_override_applies_to_named_plant_only() {
        let mut overrides = FixedCostOverrides::default();
        overrides.set("C", dec!(999));

        let topology = Topology::standard().with_fixed_costs(&overrides);
        let by_code = |code: &str| {
            topology
                .plants
                .iter()
                .find(|p| p.code == code)
                .map(|p| p.fixed_cost)
                .unwrap()
        };
        assert_eq!(by_code("C"), dec!(999));
        assert_eq!(by_code("B"), dec!(3000000));
    }

    #[test]
    fn parse_fixed_cost_accepts_decimals() {
        assert_eq!(parse_fixed_cost("fixed-cost-b", " 3000000.50 ").unwrap(), dec!(3000000.50));
    }

    #[test]
    fn parse_fixed_cost_rejects_non_numeric() {
        let err = parse_fixed_cost("fixed-cost-b", "cheap").unwrap_err();
        assert!(err.to_string().contains("not a number"));
        assert!(err.to_string().contains("fixed-cost-b"));
    }
}
