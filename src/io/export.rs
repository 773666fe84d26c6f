//! CSV export for production plans.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::planner::PlanEntry;
use crate::turbine::Turbine;

/// Column header for CSV plan export.
const HEADER: &str = "identifier,capacity,production_cost,expected_production";

/// Exports a production plan to a CSV file at the given path.
///
/// # Arguments
///
/// * `turbines` - Registry snapshot the plan was computed from
/// * `plan` - Plan entries in the same order as `turbines`
/// * `path` - Output file path
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails, or if `plan`
/// does not line up with `turbines`.
pub fn export_csv(turbines: &[Turbine], plan: &[PlanEntry], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(turbines, plan, buf)
}

/// Writes a production plan as CSV to any writer.
///
/// One row per turbine, in registry order.
///
/// # Errors
///
/// Returns `io::ErrorKind::InvalidInput` if `plan` and `turbines` differ in
/// length or identifiers, otherwise any error from the writer.
pub fn write_csv(turbines: &[Turbine], plan: &[PlanEntry], writer: impl Write) -> io::Result<()> {
    if turbines.len() != plan.len() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!(
                "plan has {} entries but the fleet has {} turbines",
                plan.len(),
                turbines.len()
            ),
        ));
    }

    let mut wtr = csv::WriterBuilder::new().from_writer(writer);
    wtr.write_record(HEADER.split(','))?;

    for (t, entry) in turbines.iter().zip(plan) {
        if t.identifier() != entry.identifier {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "plan entry \"{}\" does not match turbine \"{}\"",
                    entry.identifier,
                    t.identifier()
                ),
            ));
        }
        wtr.write_record(&[
            t.identifier().to_string(),
            t.capacity().to_string(),
            t.production_cost().to_string(),
            entry.expected_production.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
