//! The `solve` subcommand.

use crate::adapter::solver::HiGHSSolver;
use crate::cli::{output, SolveArgs};
use crate::config::Config;
use crate::domain::{parse_fixed_cost, FixedCostOverrides, Topology};
use crate::error::Result;
use crate::{plan, report};

pub fn run(args: &SolveArgs) -> Result<()> {
    let config = Config::load_or_default(&args.config)?;
    config.init_logging();

    // Validate overrides before any model or solver work.
    let overrides = parse_overrides(args)?;
    let topology = Topology::standard().with_fixed_costs(&overrides);

    let solver = HiGHSSolver::new();
    let supply_plan = plan::solve(&solver, &topology)?;

    output::note(&report::render(&supply_plan));
    Ok(())
}

fn parse_overrides(args: &SolveArgs) -> Result<FixedCostOverrides> {
    let fields: [(&'static str, &'static str, &Option<String>); 4] = [
        ("fixed-cost-b", "B", &args.fixed_cost_b),
        ("fixed-cost-c", "C", &args.fixed_cost_c),
        ("fixed-cost-d", "D", &args.fixed_cost_d),
        ("fixed-cost-e", "E", &args.fixed_cost_e),
    ];

    let mut overrides = FixedCostOverrides::default();
    for (field, plant, raw) in fields {
        if let Some(raw) = raw {
            overrides.set(plant, parse_fixed_cost(field, raw)?);
        }
    }
    Ok(overrides)
}
