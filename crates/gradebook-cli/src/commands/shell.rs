//! The `gradebook shell` command — interactive menu loop.
//!
//! Store errors are printed as plain messages and the loop continues; the
//! in-memory roster keeps unsaved changes so a later mutation can persist
//! them.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use gradebook_core::report;
use gradebook_core::store::{AddMarksOutcome, Roster};

use super::parse_subject_mark;

pub fn execute(file: PathBuf) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut roster = Roster::open(file);

    loop {
        print_menu();
        let Some(choice) = prompt(&mut lines, "Enter your choice: ")? else {
            break;
        };

        match choice.trim() {
            "1" => {
                if !add_student(&mut lines, &mut roster)? {
                    break;
                }
            }
            "2" => {
                if !add_marks(&mut lines, &mut roster)? {
                    break;
                }
            }
            "3" => {
                if roster.is_empty() {
                    println!("\n{}", report::NO_STUDENTS);
                } else {
                    println!("\nStudent Performance Report:");
                    print!("{}", report::performance_report(roster.all()));
                }
            }
            "4" => match report::topper(roster.all()) {
                Some(student) => {
                    println!("\nTop Performer:");
                    println!("{student}");
                    let details = student.subject_details();
                    if !details.is_empty() {
                        println!("{details}");
                    }
                }
                None => println!("\n{}", report::NO_STUDENTS_AVAILABLE),
            },
            "5" => {
                println!("\nSaving data and exiting... Goodbye!");
                break;
            }
            _ => println!("Invalid choice! Please try again."),
        }
    }

    Ok(())
}

/// Returns `Ok(false)` when stdin is exhausted.
fn add_student(lines: &mut impl Iterator<Item = io::Result<String>>, roster: &mut Roster) -> Result<bool> {
    let Some(name) = prompt(lines, "Enter student name: ")? else {
        return Ok(false);
    };
    let Some(roll_text) = prompt(lines, "Enter roll number: ")? else {
        return Ok(false);
    };
    let Ok(roll) = roll_text.trim().parse::<u32>() else {
        println!("Invalid roll number!");
        return Ok(true);
    };

    match roster.add_student(name.trim(), roll) {
        Ok(()) => println!("Student added successfully!"),
        Err(e) => println!("Error saving data: {e}"),
    }
    Ok(true)
}

/// Returns `Ok(false)` when stdin is exhausted.
fn add_marks(lines: &mut impl Iterator<Item = io::Result<String>>, roster: &mut Roster) -> Result<bool> {
    let Some(roll_text) = prompt(lines, "Enter roll number: ")? else {
        return Ok(false);
    };
    let Ok(roll) = roll_text.trim().parse::<u32>() else {
        println!("Invalid roll number!");
        return Ok(true);
    };

    let mut marks = Vec::new();
    println!("Enter marks as SUBJECT:MARK, one per line (blank line to finish):");
    loop {
        let Some(entry) = prompt(lines, "> ")? else {
            return Ok(false);
        };
        let entry = entry.trim();
        if entry.is_empty() {
            break;
        }
        match parse_subject_mark(entry) {
            Ok(pair) => marks.push(pair),
            Err(e) => println!("{e}"),
        }
    }

    match roster.add_marks(roll, &marks) {
        Ok(AddMarksOutcome::Added) => println!("Marks added successfully!"),
        Ok(AddMarksOutcome::StudentNotFound) => println!("Student not found!"),
        Err(e) => println!("Error saving data: {e}"),
    }
    Ok(true)
}

fn print_menu() {
    println!();
    println!("=======================================");
    println!("  STUDENT GRADE TRACKER");
    println!("=======================================");
    println!("1. Add Student");
    println!("2. Add Subjects & Marks");
    println!("3. View All Students");
    println!("4. View Top Performer");
    println!("5. Exit");
    println!("=======================================");
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?)),
        None => Ok(None),
    }
}
