//! Core data model types for gradebook.
//!
//! A [`Student`] is one roster entry: a name, a roll number, and an
//! insertion-ordered mapping of subject names to marks. Averages and letter
//! grades are derived on demand, never stored.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An insertion-ordered mapping from subject name to mark.
///
/// Inserting an existing subject overwrites its mark in place, so the
/// first-seen position of every subject is preserved. Marks are accepted
/// as-is: negative values and values above 100 are not rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectMarks(Vec<(String, f64)>);

impl SubjectMarks {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert or overwrite the mark for `subject`.
    pub fn insert(&mut self, subject: impl Into<String>, mark: f64) {
        let subject = subject.into();
        match self.0.iter_mut().find(|(name, _)| *name == subject) {
            Some((_, existing)) => *existing = mark,
            None => self.0.push((subject, mark)),
        }
    }

    pub fn get(&self, subject: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|(name, _)| name == subject)
            .map(|(_, mark)| *mark)
    }

    /// Iterate subject/mark pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, mark)| (name.as_str(), *mark))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, f64)> for SubjectMarks {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut marks = Self::new();
        for (subject, mark) in iter {
            marks.insert(subject, mark);
        }
        marks
    }
}

/// Letter grade bands, inclusive on the lower bound of each band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Map an average to its grade band.
    pub fn from_average(average: f64) -> Self {
        if average >= 90.0 {
            Grade::APlus
        } else if average >= 80.0 {
            Grade::A
        } else if average >= 70.0 {
            Grade::B
        } else if average >= 60.0 {
            Grade::C
        } else if average >= 50.0 {
            Grade::D
        } else {
            Grade::F
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grade::APlus => write!(f, "A+"),
            Grade::A => write!(f, "A"),
            Grade::B => write!(f, "B"),
            Grade::C => write!(f, "C"),
            Grade::D => write!(f, "D"),
            Grade::F => write!(f, "F"),
        }
    }
}

/// One student record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Display name. Stored raw; a name containing `,` or `:` corrupts the
    /// persisted line on re-parse (see [`crate::codec`]).
    pub name: String,
    /// Roll number, the lookup key. Uniqueness is not enforced.
    pub roll: u32,
    /// Subject marks in insertion order.
    pub subjects: SubjectMarks,
}

impl Student {
    pub fn new(name: impl Into<String>, roll: u32) -> Self {
        Self {
            name: name.into(),
            roll,
            subjects: SubjectMarks::new(),
        }
    }

    /// Insert or overwrite a single subject mark.
    pub fn add_subject_mark(&mut self, subject: impl Into<String>, mark: f64) {
        self.subjects.insert(subject, mark);
    }

    /// Arithmetic mean of all marks, `0.0` for a record with no subjects.
    pub fn average(&self) -> f64 {
        if self.subjects.is_empty() {
            return 0.0;
        }
        let total: f64 = self.subjects.iter().map(|(_, mark)| mark).sum();
        total / self.subjects.len() as f64
    }

    pub fn grade(&self) -> Grade {
        Grade::from_average(self.average())
    }

    /// Multi-line listing of each subject and its mark, in insertion order.
    /// Empty string for a record with no subjects.
    pub fn subject_details(&self) -> String {
        self.subjects
            .iter()
            .map(|(subject, mark)| format!("   -> {subject}: {}", format_mark(mark)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Roll No: {} | Name: {} | Avg: {:.2} | Grade: {}",
            self.roll,
            self.name,
            self.average(),
            self.grade()
        )
    }
}

/// Format a mark for display and persistence.
///
/// Integral values keep one decimal place (`95` renders as `95.0`) so
/// persisted files match the historical format; everything else uses the
/// shortest default rendering.
pub fn format_mark(mark: f64) -> String {
    if mark.is_finite() && mark.fract() == 0.0 {
        format!("{mark:.1}")
    } else {
        format!("{mark}")
    }
}
