//! Bauxplan - supply-chain cost minimization for the bauxite network.
//!
//! This crate models a three-stage aluminum supply chain (bauxite mines,
//! alumina refineries, smelters) as a mixed-integer linear program and
//! solves it with an external MILP solver.
//!
//! # Architecture
//!
//! The crate separates the optimization model from the solver backend:
//!
//! - **[`domain`]** - Network topology: mines, plants, smelters, freight
//!   tables, and the standard instance.
//! - **[`model`]** - Builds the solver-ready MILP from a topology: flow
//!   variables, open/closed indicators, cost objective, and the
//!   capacity/balance/demand constraints.
//! - **[`ports`]** - The `Solver` trait and the column-oriented problem and
//!   solution types that make up the solver contract.
//! - **[`adapter`]** - `HiGHSSolver`, the open-source HiGHS backend via
//!   good_lp.
//! - **[`plan`]** - Solve orchestration and extraction of a structured
//!   `SupplyPlan` from raw solver output.
//! - **[`report`]** - Plain-text rendering of a plan.
//! - **[`config`]** / **[`error`]** - TOML configuration with logging setup,
//!   and the crate error types.
//!
//! # Example
//!
//! ```no_run
//! use bauxplan::adapter::solver::HiGHSSolver;
//! use bauxplan::domain::Topology;
//! use bauxplan::{plan, report};
//!
//! let topology = Topology::standard();
//! let solver = HiGHSSolver::new();
//! let supply_plan = plan::solve(&solver, &topology).unwrap();
//! println!("{}", report::render(&supply_plan));
//! ```

pub mod adapter;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod model;
pub mod plan;
pub mod ports;
pub mod report;
