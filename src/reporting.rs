//! Text rendering of production plans for terminal output and logs.

use crate::planner::{PlanEntry, PlanSummary};

const RULE: &str = "---------------------------------";

/// Renders `plan` as a fixed-width table followed by the summary line.
pub fn format_plan_table(plan: &[PlanEntry], summary: &PlanSummary) -> String {
    let mut lines = vec![
        RULE.to_string(),
        "| Turbine | Expected production |".to_string(),
        RULE.to_string(),
    ];
    lines.extend(
        plan.iter()
            .map(|e| format!("| {:<7} | {:<19} |", e.identifier, e.expected_production)),
    );
    lines.push(RULE.to_string());
    lines.push(summary.to_string());
    lines.join("\n")
}

/// Prints the plan table and the unmet part of the target to stdout.
pub fn print_plan_report(plan: &[PlanEntry], summary: &PlanSummary) {
    println!("{}", format_plan_table(plan, summary));
    if summary.shortfall() > 0 {
        println!(
            "Shortfall: {}MWh of the target is not covered by profitable turbines.",
            summary.shortfall()
        );
    }
}
