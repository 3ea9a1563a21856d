//! Academic performance metrics
//!
//! Pure functions over in-memory course lists: GPA/CGPA aggregation,
//! semester grouping, degree progress, and rule-based insights. Every
//! function is total over its input; no I/O and no validation happens here.

use crate::core::models::{Course, CourseStatus, Semester};
use serde::Serialize;
use std::collections::BTreeMap;

/// Total credits required for degree completion when no explicit requirement
/// is configured.
pub const DEFAULT_REQUIRED_CREDITS: u32 = 120;

/// Grade-point average for one `(semester, year)` group, derived for display
/// and reporting; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterPerformance {
    /// Semester label of the group
    pub semester: Semester,
    /// Academic year of the group
    pub year: u16,
    /// Credit-weighted GPA of the group's completed, graded courses
    pub gpa: f32,
}

/// Compute the credit-weighted grade-point average of a course list.
///
/// Only completed courses with a grade contribute. The result is the raw
/// quotient `Σ(points × units) / Σ(units)`; display layers round for
/// presentation. Returns 0 when no course qualifies.
#[must_use]
pub fn calculate_gpa(courses: &[Course]) -> f32 {
    let mut total_points = 0.0f32;
    let mut total_units = 0.0f32;

    for course in courses.iter().filter(|c| c.is_graded()) {
        if let Some(grade) = course.grade {
            total_points += grade.points() * f32::from(course.units);
            total_units += f32::from(course.units);
        }
    }

    if total_units > 0.0 {
        total_points / total_units
    } else {
        0.0
    }
}

/// Compute the GPA of one `(semester, year)` group.
#[must_use]
pub fn calculate_semester_gpa(courses: &[Course], semester: Semester, year: u16) -> f32 {
    let semester_courses: Vec<Course> = courses
        .iter()
        .filter(|c| c.semester == semester && c.year == year && c.is_graded())
        .cloned()
        .collect();

    calculate_gpa(&semester_courses)
}

/// Cumulative GPA across all completed, graded courses.
#[must_use]
pub fn calculate_cgpa(courses: &[Course]) -> f32 {
    calculate_gpa(courses)
}

/// Total credit units across completed courses.
#[must_use]
pub fn total_credits(courses: &[Course]) -> u32 {
    courses
        .iter()
        .filter(|c| matches!(c.status, CourseStatus::Completed))
        .map(|c| u32::from(c.units))
        .sum()
}

/// Number of completed courses.
#[must_use]
pub fn total_courses_completed(courses: &[Course]) -> usize {
    courses
        .iter()
        .filter(|c| matches!(c.status, CourseStatus::Completed))
        .count()
}

/// Number of in-progress courses.
#[must_use]
pub fn courses_in_progress(courses: &[Course]) -> usize {
    courses
        .iter()
        .filter(|c| matches!(c.status, CourseStatus::InProgress))
        .count()
}

/// Group completed, graded courses by `(semester, year)` and compute the GPA
/// of each group.
///
/// The result is sorted ascending by year, then by semester label. Returns an
/// empty sequence when no course qualifies.
#[must_use]
pub fn semester_performance(courses: &[Course]) -> Vec<SemesterPerformance> {
    // BTreeMap keyed by (year, semester) yields the required ordering directly
    let mut groups: BTreeMap<(u16, Semester), Vec<Course>> = BTreeMap::new();

    for course in courses.iter().filter(|c| c.is_graded()) {
        groups
            .entry((course.year, course.semester))
            .or_default()
            .push(course.clone());
    }

    groups
        .into_iter()
        .map(|((year, semester), group)| SemesterPerformance {
            semester,
            year,
            gpa: calculate_gpa(&group),
        })
        .collect()
}

/// Degree completion percentage, clamped at 100.
#[must_use]
pub fn degree_progress(completed_credits: u32, required_credits: u32) -> f32 {
    if required_credits == 0 {
        return 100.0;
    }
    let percent = completed_credits as f32 / required_credits as f32 * 100.0;
    percent.min(100.0)
}

/// Generate rule-based textual insights from a course list.
///
/// Deterministic given its input: CGPA thresholds, the GPA trend between the
/// two most recent semesters, workload, and completion milestones each
/// contribute at most one line. Produces between zero and four strings.
#[must_use]
pub fn generate_insights(courses: &[Course]) -> Vec<String> {
    let mut insights = Vec::new();
    let cgpa = calculate_cgpa(courses);
    let performance = semester_performance(courses);

    if cgpa >= 4.5 {
        insights.push("Outstanding performance! You're maintaining an excellent CGPA.".to_string());
    } else if cgpa >= 4.0 {
        insights.push("Great work! Your academic performance is strong.".to_string());
    } else if cgpa >= 3.0 {
        insights.push("Good progress. Consider focusing on challenging courses.".to_string());
    } else if cgpa > 0.0 {
        insights
            .push("Your CGPA needs improvement. Consider seeking academic support.".to_string());
    }

    if performance.len() >= 2 {
        let recent = &performance[performance.len() - 2..];
        let trend = recent[1].gpa - recent[0].gpa;

        if trend > 0.3 {
            insights.push("Your grades are trending upward - keep it up!".to_string());
        } else if trend < -0.3 {
            insights.push(
                "Your recent semester GPA dropped. Consider reviewing your study approach."
                    .to_string(),
            );
        }
    }

    let in_progress = courses_in_progress(courses);
    if in_progress > 6 {
        insights.push(format!(
            "You have {in_progress} courses in progress. Consider your workload balance."
        ));
    }

    let completed_count = total_courses_completed(courses);
    if completed_count > 0 && completed_count % 10 == 0 {
        insights.push(format!(
            "Milestone achieved! You've completed {completed_count} courses."
        ));
    }

    insights
}
