//! Transcript report generation
//!
//! Renders a student's transcript document in Markdown, HTML, or PDF with a
//! title header, student information, academic summary, semester performance
//! table, per-semester course breakdown, and an optional insights section.

pub mod formats;

pub use formats::{HtmlReporter, MarkdownReporter, PdfReporter, ReportFormat};

use crate::core::metrics::{self, SemesterPerformance};
use crate::core::models::{Course, Semester, User};
use std::error::Error;
use std::path::Path;

/// Data context for transcript rendering
///
/// Aggregates the user record, course list, and derived statistics so every
/// output format works from the same source of truth.
#[derive(Debug, Clone)]
pub struct TranscriptContext<'a> {
    /// The student the transcript belongs to
    pub user: &'a User,
    /// The student's course records
    pub courses: &'a [Course],
    /// Credits required for degree completion
    pub required_credits: u32,
    /// Whether to render the rule-based insights section
    pub include_insights: bool,
}

impl<'a> TranscriptContext<'a> {
    /// Create a new transcript context
    #[must_use]
    pub const fn new(
        user: &'a User,
        courses: &'a [Course],
        required_credits: u32,
        include_insights: bool,
    ) -> Self {
        Self {
            user,
            courses,
            required_credits,
            include_insights,
        }
    }

    /// Cumulative GPA across completed, graded courses
    #[must_use]
    pub fn cgpa(&self) -> f32 {
        metrics::calculate_cgpa(self.courses)
    }

    /// Total completed credit units
    #[must_use]
    pub fn total_credits(&self) -> u32 {
        metrics::total_credits(self.courses)
    }

    /// Number of completed courses
    #[must_use]
    pub fn completed_courses(&self) -> usize {
        metrics::total_courses_completed(self.courses)
    }

    /// Degree completion percentage
    #[must_use]
    pub fn degree_progress(&self) -> f32 {
        metrics::degree_progress(self.total_credits(), self.required_credits)
    }

    /// Per-semester GPA groups, ascending by year then semester
    #[must_use]
    pub fn semester_performance(&self) -> Vec<SemesterPerformance> {
        metrics::semester_performance(self.courses)
    }

    /// Rule-based insight lines (empty when insights are disabled)
    #[must_use]
    pub fn insights(&self) -> Vec<String> {
        if self.include_insights {
            metrics::generate_insights(self.courses)
        } else {
            Vec::new()
        }
    }

    /// Short uppercase student reference derived from the user id
    #[must_use]
    pub fn student_ref(&self) -> String {
        self.user
            .id
            .simple()
            .to_string()
            .chars()
            .take(8)
            .collect::<String>()
            .to_uppercase()
    }

    /// All courses grouped by `(year, semester)`, ascending, preserving
    /// insertion order within each group. Includes in-progress courses.
    #[must_use]
    pub fn grouped_courses(&self) -> Vec<((u16, Semester), Vec<&'a Course>)> {
        let mut groups: Vec<((u16, Semester), Vec<&Course>)> = Vec::new();

        for course in self.courses {
            let key = (course.year, course.semester);
            if let Some((_, members)) = groups.iter_mut().find(|(k, _)| *k == key) {
                members.push(course);
            } else {
                groups.push((key, vec![course]));
            }
        }

        groups.sort_by_key(|(key, _)| *key);
        groups
    }
}

/// Trait for transcript report generators
pub trait ReportGenerator {
    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &TranscriptContext, output_path: &Path) -> Result<(), Box<dyn Error>>;

    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &TranscriptContext) -> Result<String, Box<dyn Error>>;
}
