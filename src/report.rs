//! Plain-text rendering of a supply plan.
//!
//! Pure functions of the plan: no I/O, deterministic output. Flows at or
//! below [`FLOW_TOLERANCE`] are suppressed so logically-zero arcs do not
//! show up as floating-point noise.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::plan::SupplyPlan;

/// Flows at or below this value are treated as zero when rendering.
pub const FLOW_TOLERANCE: Decimal = dec!(0.000001);

/// Render the full plan report.
pub fn render(plan: &SupplyPlan) -> String {
    let mut lines = vec![format!("Status: {}", plan.status)];

    let Some(total_cost) = plan.total_cost else {
        lines.push("No plan available.".to_string());
        lines.push(String::new());
        return lines.join("\n");
    };
    lines.push(format!("Total cost: {}", currency(total_cost)));

    lines.push(String::new());
    lines.push("Open plants:".to_string());
    for (code, open) in &plan.open_plants {
        lines.push(format!("  {code}: {}", u8::from(*open)));
    }

    lines.push(String::new());
    lines.push("Bauxite flows:".to_string());
    for ((mine, plant), quantity) in &plan.bauxite_flows {
        if *quantity > FLOW_TOLERANCE {
            lines.push(format!("  {mine} -> {plant}: {:.2}", quantity.round_dp(2)));
        }
    }

    lines.push(String::new());
    lines.push("Alumina flows:".to_string());
    for ((plant, smelter), quantity) in &plan.alumina_flows {
        if *quantity > FLOW_TOLERANCE {
            lines.push(format!("  {plant} -> {smelter}: {:.2}", quantity.round_dp(2)));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}

/// Format an amount as currency: dollar sign, thousands separators, two
/// decimal places.
pub fn currency(amount: Decimal) -> String {
    let formatted = format!("{:.2}", amount.round_dp(2));
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));
    let (sign, digits) = int_part
        .strip_prefix('-')
        .map_or(("", int_part), |rest| ("-", rest));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{frac_part}")
}
