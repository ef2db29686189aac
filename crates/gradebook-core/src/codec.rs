//! Line codec for the persisted roster file.
//!
//! One record per line, comma-separated:
//!
//! ```text
//! <roll>,<name>,<subject1>:<mark1>,<subject2>:<mark2>,...
//! ```
//!
//! Neither names nor subjects are escaped, so text containing `,` or `:`
//! corrupts the line on re-parse. Decoding is deliberately lenient: lines
//! and tokens that don't fit the format are dropped, never errors. That
//! leniency lives here and nowhere else.

use crate::model::{format_mark, Student};

/// Encode one record as a single line (no trailing newline).
pub fn encode(student: &Student) -> String {
    let mut line = format!("{},{}", student.roll, student.name);
    for (subject, mark) in student.subjects.iter() {
        line.push(',');
        line.push_str(subject);
        line.push(':');
        line.push_str(&format_mark(mark));
    }
    line
}

/// Decode one line into a record.
///
/// Returns `None` for lines with fewer than two comma-separated tokens or a
/// non-numeric roll. Subject tokens that don't split into exactly two parts
/// on `:`, or whose mark doesn't parse as a float, are silently dropped.
pub fn decode(line: &str) -> Option<Student> {
    let mut tokens = line.split(',');
    let roll: u32 = tokens.next()?.parse().ok()?;
    let name = tokens.next()?;

    let mut student = Student::new(name, roll);
    for token in tokens {
        let parts: Vec<&str> = token.split(':').collect();
        if let [subject, mark] = parts.as_slice() {
            if let Ok(mark) = mark.parse::<f64>() {
                student.add_subject_mark(*subject, mark);
            }
        }
    }
    Some(student)
}
