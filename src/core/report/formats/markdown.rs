//! Markdown transcript generator
//!
//! Generates transcripts in Markdown format. These render well in GitHub,
//! GitLab, and VS Code.

use crate::core::report::{ReportGenerator, TranscriptContext};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded Markdown transcript template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/transcript.md");

/// Markdown transcript generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the transcript using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &TranscriptContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace(
            "{{generated_on}}",
            &chrono::Utc::now().format("%Y-%m-%d").to_string(),
        );
        output = output.replace("{{student_name}}", &ctx.user.name);
        output = output.replace("{{student_email}}", &ctx.user.email);
        output = output.replace("{{student_ref}}", &ctx.student_ref());
        output = output.replace("{{cgpa}}", &format!("{:.2}", ctx.cgpa()));
        output = output.replace("{{total_credits}}", &ctx.total_credits().to_string());
        output = output.replace("{{required_credits}}", &ctx.required_credits.to_string());
        output = output.replace(
            "{{completed_courses}}",
            &ctx.completed_courses().to_string(),
        );
        output = output.replace(
            "{{degree_progress}}",
            &format!("{:.1}", ctx.degree_progress()),
        );

        output = output.replace(
            "{{semester_performance}}",
            &Self::generate_performance_section(ctx),
        );
        output = output.replace("{{course_details}}", &Self::generate_details_section(ctx));
        output = output.replace("{{insights}}", &Self::generate_insights_section(ctx));

        output
    }

    /// Generate the semester performance table
    fn generate_performance_section(ctx: &TranscriptContext) -> String {
        let performance = ctx.semester_performance();
        if performance.is_empty() {
            return String::new();
        }

        let mut section = String::from("## Semester Performance\n\n");
        section.push_str("| Semester | Year | GPA |\n");
        section.push_str("|---|---|---|\n");

        for entry in performance {
            let _ = writeln!(
                section,
                "| {} | {} | {:.2} |",
                entry.semester, entry.year, entry.gpa
            );
        }

        section
    }

    /// Generate the per-semester course tables
    fn generate_details_section(ctx: &TranscriptContext) -> String {
        let groups = ctx.grouped_courses();
        if groups.is_empty() {
            return String::new();
        }

        let mut section = String::from("## Course Details\n");

        for ((year, semester), courses) in groups {
            let _ = write!(section, "\n### {semester} Semester {year}\n\n");
            section.push_str("| Course Code | Title | Units | Grade | Status |\n");
            section.push_str("|---|---|---|---|---|\n");

            for course in courses {
                let grade = course
                    .grade
                    .map_or_else(|| "-".to_string(), |g| g.to_string());
                let _ = writeln!(
                    section,
                    "| {} | {} | {} | {grade} | {} |",
                    course.code, course.title, course.units, course.status
                );
            }
        }

        section
    }

    /// Generate the insights bullet list
    fn generate_insights_section(ctx: &TranscriptContext) -> String {
        let insights = ctx.insights();
        if insights.is_empty() {
            return String::new();
        }

        let mut section = String::from("## Academic Insights\n\n");
        for insight in insights {
            let _ = writeln!(section, "- {insight}");
        }

        section
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn generate(&self, ctx: &TranscriptContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &TranscriptContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
