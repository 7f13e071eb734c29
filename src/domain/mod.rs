//! Network domain types for the supply-chain model.

mod network;

pub use network::{
    parse_fixed_cost, Code, FixedCostOverrides, Mine, Plant, Smelter, Topology,
};
