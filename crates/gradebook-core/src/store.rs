//! In-memory roster backed by a flat text file.
//!
//! The [`Roster`] owns the persisted file for the process lifetime: it loads
//! once on open and rewrites the whole file after every mutation. Loading is
//! lenient (undecodable lines are skipped); saving is a direct overwrite.

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::codec;
use crate::error::StoreError;
use crate::model::Student;

/// Result of an [`Roster::add_marks`] call.
///
/// An unknown roll number is a normal outcome the caller branches on, not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddMarksOutcome {
    Added,
    StudentNotFound,
}

/// Ordered collection of student records with full-file persistence.
#[derive(Debug)]
pub struct Roster {
    students: Vec<Student>,
    path: PathBuf,
}

impl Roster {
    /// Open a roster backed by `path`, loading any existing records.
    ///
    /// A missing file means an empty roster. An unreadable file is reported
    /// as a warning and the roster keeps whatever was parsed before the
    /// failure; startup is never aborted by a load error.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut roster = Self {
            students: Vec::new(),
            path,
        };
        if let Err(e) = roster.load() {
            warn!("{e}; continuing with {} record(s)", roster.students.len());
        }
        roster
    }

    fn load(&mut self) -> Result<(), StoreError> {
        if !self.path.exists() {
            return Ok(());
        }
        let file = File::open(&self.path).map_err(|source| StoreError::Load {
            path: self.path.clone(),
            source,
        })?;

        let mut skipped = 0usize;
        for line in BufReader::new(file).lines() {
            // A mid-file read error keeps everything parsed so far.
            let line = line.map_err(|source| StoreError::Load {
                path: self.path.clone(),
                source,
            })?;
            match codec::decode(&line) {
                Some(student) => self.students.push(student),
                None => {
                    debug!(line = %line, "skipping undecodable roster line");
                    skipped += 1;
                }
            }
        }

        if skipped > 0 {
            warn!(
                "skipped {skipped} malformed line(s) while loading {}",
                self.path.display()
            );
        }
        debug!(
            "loaded {} record(s) from {}",
            self.students.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Serialize every record and rewrite the backing file.
    ///
    /// This is a direct overwrite, not a temp-file-and-rename: a crash
    /// mid-write can truncate the file. Known limitation of the format.
    pub fn save(&self) -> Result<(), StoreError> {
        let mut contents = String::new();
        for student in &self.students {
            contents.push_str(&codec::encode(student));
            contents.push('\n');
        }
        fs::write(&self.path, contents).map_err(|source| StoreError::Save {
            path: self.path.clone(),
            source,
        })
    }

    /// Append a new record with no subjects and persist.
    ///
    /// Duplicate roll numbers are accepted; lookups return the first match.
    pub fn add_student(&mut self, name: impl Into<String>, roll: u32) -> Result<(), StoreError> {
        self.students.push(Student::new(name, roll));
        self.save()
    }

    /// First record with the given roll number, in insertion order.
    pub fn find_by_roll(&self, roll: u32) -> Option<&Student> {
        self.students.iter().find(|s| s.roll == roll)
    }

    /// Merge subject marks into the record with the given roll and persist.
    ///
    /// An unknown roll mutates nothing and skips the save. If the save
    /// fails the in-memory merge is retained, so the next successful save
    /// includes it.
    pub fn add_marks(
        &mut self,
        roll: u32,
        marks: &[(String, f64)],
    ) -> Result<AddMarksOutcome, StoreError> {
        let Some(student) = self.students.iter_mut().find(|s| s.roll == roll) else {
            return Ok(AddMarksOutcome::StudentNotFound);
        };
        for (subject, mark) in marks {
            student.add_subject_mark(subject.clone(), *mark);
        }
        self.save()?;
        Ok(AddMarksOutcome::Added)
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_roster() -> (tempfile::TempDir, Roster) {
        let dir = tempfile::tempdir().unwrap();
        let roster = Roster::open(dir.path().join("grades.txt"));
        (dir, roster)
    }

    #[test]
    fn open_missing_file_is_empty() {
        let (_dir, roster) = temp_roster();
        assert!(roster.is_empty());
    }

    #[test]
    fn add_student_persists_immediately() {
        let (_dir, mut roster) = temp_roster();
        roster.add_student("Asha", 1).unwrap();
        let contents = fs::read_to_string(roster.path()).unwrap();
        assert_eq!(contents, "1,Asha\n");
    }

    #[test]
    fn add_marks_merges_and_persists() {
        let (_dir, mut roster) = temp_roster();
        roster.add_student("Asha", 1).unwrap();
        let outcome = roster
            .add_marks(1, &[("Math".into(), 95.0), ("Science".into(), 82.0)])
            .unwrap();
        assert_eq!(outcome, AddMarksOutcome::Added);

        let contents = fs::read_to_string(roster.path()).unwrap();
        assert_eq!(contents, "1,Asha,Math:95.0,Science:82.0\n");
    }

    #[test]
    fn add_marks_overwrites_and_appends() {
        let (_dir, mut roster) = temp_roster();
        roster.add_student("Asha", 1).unwrap();
        roster
            .add_marks(1, &[("Math".into(), 50.0), ("Science".into(), 82.0)])
            .unwrap();
        roster
            .add_marks(1, &[("Math".into(), 95.0), ("Art".into(), 60.0)])
            .unwrap();

        let student = roster.find_by_roll(1).unwrap();
        let pairs: Vec<_> = student.subjects.iter().collect();
        // Overwritten subject keeps its first-seen position, new ones append.
        assert_eq!(
            pairs,
            vec![("Math", 95.0), ("Science", 82.0), ("Art", 60.0)]
        );
    }

    #[test]
    fn add_marks_unknown_roll_mutates_nothing() {
        let (_dir, mut roster) = temp_roster();
        roster.add_student("Asha", 1).unwrap();
        let before = fs::read_to_string(roster.path()).unwrap();

        let outcome = roster.add_marks(99, &[("Math".into(), 95.0)]).unwrap();
        assert_eq!(outcome, AddMarksOutcome::StudentNotFound);
        assert!(roster.find_by_roll(1).unwrap().subjects.is_empty());
        assert_eq!(fs::read_to_string(roster.path()).unwrap(), before);
    }

    #[test]
    fn duplicate_rolls_return_first_match() {
        let (_dir, mut roster) = temp_roster();
        roster.add_student("First", 5).unwrap();
        roster.add_student("Second", 5).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.find_by_roll(5).unwrap().name, "First");
    }

    #[test]
    fn reopen_restores_records_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grades.txt");

        let mut roster = Roster::open(&path);
        roster.add_student("Asha", 1).unwrap();
        roster.add_student("Ravi", 2).unwrap();
        roster.add_marks(2, &[("History".into(), 67.25)]).unwrap();

        let reopened = Roster::open(&path);
        assert_eq!(reopened.len(), 2);
        assert_eq!(reopened.all()[0].name, "Asha");
        assert_eq!(reopened.all()[1].name, "Ravi");
        assert_eq!(reopened.all()[1].subjects.get("History"), Some(67.25));
    }

    #[test]
    fn malformed_lines_are_skipped_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grades.txt");
        fs::write(
            &path,
            "1,Asha,Math:95.0\nabc,Name\n\n2,Ravi,Science:82.0\n",
        )
        .unwrap();

        let roster = Roster::open(&path);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.all()[0].roll, 1);
        assert_eq!(roster.all()[1].roll, 2);
    }

    #[cfg(unix)]
    #[test]
    fn save_failure_keeps_memory_state() {
        let dir = tempfile::tempdir().unwrap();
        let mut roster = Roster::open(dir.path().join("grades.txt"));
        roster.add_student("Asha", 1).unwrap();

        // Make the directory read-only so the rewrite fails.
        let mut perms = fs::metadata(dir.path()).unwrap().permissions();
        std::os::unix::fs::PermissionsExt::set_mode(&mut perms, 0o555);
        fs::set_permissions(dir.path(), perms.clone()).unwrap();

        let result = roster.add_marks(1, &[("Math".into(), 95.0)]);
        assert!(matches!(result, Err(StoreError::Save { .. })));
        // Mutation already applied; a later save would include it.
        assert_eq!(roster.find_by_roll(1).unwrap().subjects.get("Math"), Some(95.0));

        std::os::unix::fs::PermissionsExt::set_mode(&mut perms, 0o755);
        fs::set_permissions(dir.path(), perms).unwrap();
    }
}
