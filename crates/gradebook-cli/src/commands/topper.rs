//! The `gradebook topper` command.

use std::path::PathBuf;

use anyhow::{bail, Result};

use gradebook_core::report::{self, StudentSummary};
use gradebook_core::store::Roster;

pub fn execute(file: PathBuf, format: &str) -> Result<()> {
    let roster = Roster::open(file);

    match format {
        "text" => match report::topper(roster.all()) {
            Some(student) => {
                println!("Top Performer:");
                println!("{student}");
                let details = student.subject_details();
                if !details.is_empty() {
                    println!("{details}");
                }
            }
            None => println!("{}", report::NO_STUDENTS_AVAILABLE),
        },
        "json" => {
            let summary = report::topper(roster.all()).map(StudentSummary::from);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        other => bail!("unknown format: {other} (expected text or json)"),
    }

    Ok(())
}
