//! The `gradebook marks` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::store::{AddMarksOutcome, Roster};

pub fn execute(file: PathBuf, roll: u32, marks: Vec<(String, f64)>) -> Result<()> {
    let mut roster = Roster::open(file);
    match roster.add_marks(roll, &marks)? {
        AddMarksOutcome::Added => println!("Marks added successfully!"),
        AddMarksOutcome::StudentNotFound => println!("Student not found!"),
    }
    Ok(())
}
