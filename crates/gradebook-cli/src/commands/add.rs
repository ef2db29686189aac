//! The `gradebook add` command.

use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::store::Roster;

pub fn execute(file: PathBuf, name: String, roll: u32) -> Result<()> {
    let mut roster = Roster::open(file);
    roster.add_student(name, roll)?;
    println!("Student added successfully!");
    Ok(())
}
