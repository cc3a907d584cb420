//! Student record representation and derived metrics
//!
//! This module defines [`StudentRecord`], the unit the store holds, and
//! [`Grade`], the letter grade derived from a record's average marks.
//!
//! # Fields
//!
//! - `roll`: positive integer identifier.  Uniqueness is *not* enforced on
//!   direct adds; only the section merge rejects duplicates.
//! - `name`: single whitespace-free token.
//! - `marks`: one mark (0..=100) per configured subject.
//! - `attendance`: percentage, 0..=100.
//!
//! # Derived metrics
//!
//! `total` and `average` are computed over the record's own marks; since the
//! store guarantees every record has `subject_count` marks, the average is
//! `total / subject_count` (0.0 when there are no subjects).

use std::fmt;

/// One student's record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    pub roll: u32,
    pub name: String,
    pub marks: Vec<u8>,
    pub attendance: u8,
}

impl StudentRecord {
    pub fn new(roll: u32, name: impl Into<String>, marks: Vec<u8>, attendance: u8) -> Self {
        StudentRecord {
            roll,
            name: name.into(),
            marks,
            attendance,
        }
    }

    /// Sum of all marks
    pub fn total(&self) -> u32 {
        self.marks.iter().map(|&m| u32::from(m)).sum()
    }

    /// Mean mark, or 0.0 for a record with no subjects
    pub fn average(&self) -> f64 {
        if self.marks.is_empty() {
            return 0.0;
        }
        f64::from(self.total()) / self.marks.len() as f64
    }

    /// Letter grade for this record's average
    pub fn grade(&self) -> Grade {
        Grade::from_average(self.average())
    }
}

/// Letter grade with inclusive lower bounds, checked highest-first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Map an average to a grade: ≥90 A, ≥80 B, ≥70 C, ≥60 D, else F
    pub fn from_average(avg: f64) -> Self {
        if avg >= 90.0 {
            Grade::A
        } else if avg >= 80.0 {
            Grade::B
        } else if avg >= 70.0 {
            Grade::C
        } else if avg >= 60.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::F => 'F',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_boundaries_inclusive_on_lower_edge() {
        assert_eq!(Grade::from_average(90.0), Grade::A);
        assert_eq!(Grade::from_average(89.99), Grade::B);
        assert_eq!(Grade::from_average(80.0), Grade::B);
        assert_eq!(Grade::from_average(70.0), Grade::C);
        assert_eq!(Grade::from_average(60.0), Grade::D);
        assert_eq!(Grade::from_average(59.99), Grade::F);
        assert_eq!(Grade::from_average(0.0), Grade::F);
        assert_eq!(Grade::from_average(100.0), Grade::A);
    }

    #[test]
    fn test_total_and_average() {
        let r = StudentRecord::new(7, "Asha", vec![80, 90, 100], 95);
        assert_eq!(r.total(), 270);
        assert!((r.average() - 90.0).abs() < f64::EPSILON);
        assert_eq!(r.grade(), Grade::A);
    }

    #[test]
    fn test_average_with_no_subjects_is_zero() {
        let r = StudentRecord::new(1, "Solo", vec![], 100);
        assert_eq!(r.total(), 0);
        assert_eq!(r.average(), 0.0);
        assert_eq!(r.grade(), Grade::F);
    }
}
