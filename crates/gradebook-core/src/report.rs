//! Aggregate views over the roster: full listing and class topper.

use serde::{Deserialize, Serialize};

use crate::model::{Grade, Student};

/// Indicator text for a listing over an empty roster.
pub const NO_STUDENTS: &str = "No students found!";

/// Indicator text for a topper query over an empty roster.
pub const NO_STUDENTS_AVAILABLE: &str = "No students available!";

/// Derived per-record view for reporting output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub roll: u32,
    pub name: String,
    pub average: f64,
    pub grade: Grade,
}

impl From<&Student> for StudentSummary {
    fn from(student: &Student) -> Self {
        Self {
            roll: student.roll,
            name: student.name.clone(),
            average: student.average(),
            grade: student.grade(),
        }
    }
}

/// Summaries for every record, in store order.
pub fn summaries(students: &[Student]) -> Vec<StudentSummary> {
    students.iter().map(StudentSummary::from).collect()
}

/// The record with the highest average.
///
/// Strict `>` scan from the front, so the first maximal record wins ties.
/// `None` for an empty roster.
pub fn topper(students: &[Student]) -> Option<&Student> {
    let mut best = students.first()?;
    for student in &students[1..] {
        if student.average() > best.average() {
            best = student;
        }
    }
    Some(best)
}

/// Full performance listing: one summary line plus subject details per
/// record, or the explicit empty indicator.
pub fn performance_report(students: &[Student]) -> String {
    if students.is_empty() {
        return NO_STUDENTS.to_string();
    }
    let mut out = String::new();
    for student in students {
        out.push_str(&student.to_string());
        out.push('\n');
        let details = student.subject_details();
        if !details.is_empty() {
            out.push_str(&details);
            out.push('\n');
        }
        out.push_str("-----------------------------\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(name: &str, roll: u32, marks: &[(&str, f64)]) -> Student {
        let mut s = Student::new(name, roll);
        for (subject, mark) in marks {
            s.add_subject_mark(*subject, *mark);
        }
        s
    }

    #[test]
    fn topper_empty_roster() {
        assert!(topper(&[]).is_none());
    }

    #[test]
    fn topper_first_maximal_wins_ties() {
        let roster = vec![
            student("A", 1, &[("Math", 70.0)]),
            student("B", 2, &[("Math", 85.0)]),
            student("C", 3, &[("Math", 85.0)]),
        ];
        assert_eq!(topper(&roster).unwrap().name, "B");
    }

    #[test]
    fn topper_single_record() {
        let roster = vec![student("Solo", 9, &[])];
        assert_eq!(topper(&roster).unwrap().roll, 9);
    }

    #[test]
    fn report_empty_indicator() {
        assert_eq!(performance_report(&[]), NO_STUDENTS);
    }

    #[test]
    fn report_lists_records_in_order() {
        let roster = vec![
            student("Asha", 1, &[("Math", 95.0), ("Science", 82.0)]),
            student("Ravi", 2, &[]),
        ];
        let report = performance_report(&roster);
        let asha = report.find("Roll No: 1").unwrap();
        let ravi = report.find("Roll No: 2").unwrap();
        assert!(asha < ravi);
        assert!(report.contains("Avg: 88.50 | Grade: A"));
        assert!(report.contains("   -> Math: 95.0"));
    }

    #[test]
    fn summary_serializes_to_json() {
        let roster = vec![student("Asha", 1, &[("Math", 95.0), ("Science", 82.0)])];
        let json = serde_json::to_string(&summaries(&roster)).unwrap();
        assert!(json.contains("\"name\":\"Asha\""));
        assert!(json.contains("\"grade\":\"A\""));
    }
}
