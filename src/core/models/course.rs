//! Course model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ValidationError;

/// Letter grade on the 5.0-point scale.
///
/// The scale runs from A (5.0) down to F (0.0) in half-point steps, with a
/// gap at E (1.0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    /// 5.0 points
    A,
    /// 4.5 points
    #[serde(rename = "B+")]
    BPlus,
    /// 4.0 points
    B,
    /// 3.5 points
    #[serde(rename = "C+")]
    CPlus,
    /// 3.0 points
    C,
    /// 2.5 points
    #[serde(rename = "D+")]
    DPlus,
    /// 2.0 points
    D,
    /// 1.0 points
    E,
    /// 0.0 points
    F,
}

impl Grade {
    /// Grade points for GPA weighting
    #[must_use]
    pub const fn points(self) -> f32 {
        match self {
            Self::A => 5.0,
            Self::BPlus => 4.5,
            Self::B => 4.0,
            Self::CPlus => 3.5,
            Self::C => 3.0,
            Self::DPlus => 2.5,
            Self::D => 2.0,
            Self::E => 1.0,
            Self::F => 0.0,
        }
    }

    /// The grade symbol as displayed and stored
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Ok(Self::A),
            "B+" => Ok(Self::BPlus),
            "B" => Ok(Self::B),
            "C+" => Ok(Self::CPlus),
            "C" => Ok(Self::C),
            "D+" => Ok(Self::DPlus),
            "D" => Ok(Self::D),
            "E" => Ok(Self::E),
            "F" => Ok(Self::F),
            _ => Err(format!("Unknown grade: '{s}'. Use A, B+, B, C+, C, D+, D, E, or F")),
        }
    }
}

/// Academic semester within a year.
///
/// Declaration order matches lexicographic label order, so the derived `Ord`
/// sorts performance groups the same way the labels do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Semester {
    /// First semester
    First,
    /// Second semester
    Second,
    /// Summer session
    Summer,
}

impl Semester {
    /// The semester label as displayed and stored
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::First => "First",
            Self::Second => "Second",
            Self::Summer => "Summer",
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "second" => Ok(Self::Second),
            "summer" => Ok(Self::Summer),
            _ => Err(format!(
                "Unknown semester: '{s}'. Use First, Second, or Summer"
            )),
        }
    }
}

/// Completion status of a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseStatus {
    /// Course is still being taken; its grade (if any) does not count
    #[serde(rename = "in-progress")]
    InProgress,
    /// Course is finished; a grade is meaningful
    #[serde(rename = "completed")]
    Completed,
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "In Progress"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

impl FromStr for CourseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "in-progress" | "in_progress" | "inprogress" => Ok(Self::InProgress),
            "completed" | "complete" => Ok(Self::Completed),
            _ => Err(format!(
                "Unknown status: '{s}'. Use in-progress or completed"
            )),
        }
    }
}

/// A course record owned by a user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course record id
    pub id: Uuid,

    /// Owning user id
    pub user_id: Uuid,

    /// Course code (e.g., "CS101"); unique within a user's course set
    pub code: String,

    /// Course title (e.g., "Intro to Computer Science")
    pub title: String,

    /// Credit units, 1 to 10
    pub units: u8,

    /// Letter grade; meaningful only when status is completed
    pub grade: Option<Grade>,

    /// Semester the course belongs to
    pub semester: Semester,

    /// Academic year (2000 to 2100)
    pub year: u16,

    /// Completion status
    pub status: CourseStatus,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Course {
    /// Whether the course counts toward GPA (completed with a grade)
    #[must_use]
    pub const fn is_graded(&self) -> bool {
        matches!(self.status, CourseStatus::Completed) && self.grade.is_some()
    }
}

/// Input for creating or replacing a course record.
///
/// Carries every user-editable field; ids and timestamps are assigned by the
/// store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDraft {
    /// Course code
    pub code: String,
    /// Course title
    pub title: String,
    /// Credit units
    pub units: u8,
    /// Optional letter grade
    pub grade: Option<Grade>,
    /// Semester
    pub semester: Semester,
    /// Academic year
    pub year: u16,
    /// Completion status
    pub status: CourseStatus,
}

impl CourseDraft {
    /// Validate field constraints, reporting the first failing field
    ///
    /// # Errors
    /// Returns a [`ValidationError`] naming the first field that violates its
    /// constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.code.is_empty() {
            return Err(ValidationError::new("code", "Course code is required"));
        }
        if self.code.len() > 20 {
            return Err(ValidationError::new(
                "code",
                "Course code must be less than 20 characters",
            ));
        }
        if self.title.is_empty() {
            return Err(ValidationError::new("title", "Course title is required"));
        }
        if self.title.len() > 100 {
            return Err(ValidationError::new(
                "title",
                "Course title must be less than 100 characters",
            ));
        }
        if self.units < 1 {
            return Err(ValidationError::new("units", "Units must be at least 1"));
        }
        if self.units > 10 {
            return Err(ValidationError::new("units", "Units must be at most 10"));
        }
        if self.year < 2000 {
            return Err(ValidationError::new("year", "Year must be at least 2000"));
        }
        if self.year > 2100 {
            return Err(ValidationError::new("year", "Year must be at most 2100"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> CourseDraft {
        CourseDraft {
            code: "CS101".to_string(),
            title: "Intro to Computer Science".to_string(),
            units: 3,
            grade: Some(Grade::A),
            semester: Semester::First,
            year: 2023,
            status: CourseStatus::Completed,
        }
    }

    #[test]
    fn test_grade_points() {
        assert!((Grade::A.points() - 5.0).abs() < f32::EPSILON);
        assert!((Grade::BPlus.points() - 4.5).abs() < f32::EPSILON);
        assert!((Grade::E.points() - 1.0).abs() < f32::EPSILON);
        assert!((Grade::F.points() - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_grade_parse_round_trip() {
        for symbol in ["A", "B+", "B", "C+", "C", "D+", "D", "E", "F"] {
            let grade: Grade = symbol.parse().expect("known grade symbol");
            assert_eq!(grade.to_string(), symbol);
        }
    }

    #[test]
    fn test_grade_parse_rejects_unknown() {
        assert!("A+".parse::<Grade>().is_err());
        assert!("G".parse::<Grade>().is_err());
        assert!("".parse::<Grade>().is_err());
    }

    #[test]
    fn test_semester_ordering_is_lexicographic() {
        assert!(Semester::First < Semester::Second);
        assert!(Semester::Second < Semester::Summer);
    }

    #[test]
    fn test_status_serde_labels() {
        let json = serde_json::to_string(&CourseStatus::InProgress).expect("serialize");
        assert_eq!(json, "\"in-progress\"");
        let json = serde_json::to_string(&CourseStatus::Completed).expect("serialize");
        assert_eq!(json, "\"completed\"");
    }

    #[test]
    fn test_grade_serde_symbols() {
        let json = serde_json::to_string(&Grade::BPlus).expect("serialize");
        assert_eq!(json, "\"B+\"");
        let grade: Grade = serde_json::from_str("\"D+\"").expect("deserialize");
        assert_eq!(grade, Grade::DPlus);
    }

    #[test]
    fn test_draft_validation_passes() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn test_draft_validation_first_failing_field() {
        let mut d = draft();
        d.code = String::new();
        d.units = 0;
        // Both code and units are invalid; code is reported first
        let err = d.validate().expect_err("invalid draft");
        assert_eq!(err.field, "code");
    }

    #[test]
    fn test_draft_validation_bounds() {
        let mut d = draft();
        d.units = 11;
        assert_eq!(d.validate().expect_err("units").field, "units");

        let mut d = draft();
        d.year = 1999;
        assert_eq!(d.validate().expect_err("year").field, "year");

        let mut d = draft();
        d.title = "x".repeat(101);
        assert_eq!(d.validate().expect_err("title").field, "title");
    }
}
