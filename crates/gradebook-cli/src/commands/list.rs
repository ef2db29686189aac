//! The `gradebook list` command.

use std::path::PathBuf;

use anyhow::{bail, Result};
use comfy_table::Table;

use gradebook_core::report;
use gradebook_core::store::Roster;

pub fn execute(file: PathBuf, format: &str) -> Result<()> {
    let roster = Roster::open(file);

    match format {
        "text" => {
            if roster.is_empty() {
                println!("{}", report::NO_STUDENTS);
            } else {
                println!("Student Performance Report:");
                print!("{}", report::performance_report(roster.all()));
            }
        }
        "table" => {
            if roster.is_empty() {
                println!("{}", report::NO_STUDENTS);
                return Ok(());
            }
            let mut table = Table::new();
            table.set_header(["Roll", "Name", "Average", "Grade"]);
            for summary in report::summaries(roster.all()) {
                table.add_row([
                    summary.roll.to_string(),
                    summary.name,
                    format!("{:.2}", summary.average),
                    summary.grade.to_string(),
                ]);
            }
            println!("{table}");
        }
        "json" => {
            let summaries = report::summaries(roster.all());
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        other => bail!("unknown format: {other} (expected text, table, or json)"),
    }

    Ok(())
}
