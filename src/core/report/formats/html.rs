//! HTML transcript generator
//!
//! Generates a self-contained HTML transcript with embedded CSS, including
//! print page geometry so the document paginates cleanly when converted to
//! PDF or printed.

use crate::core::report::{ReportGenerator, TranscriptContext};
use std::error::Error;
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Embedded HTML transcript template
const HTML_TEMPLATE: &str = include_str!("../templates/transcript.html");

/// HTML transcript generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Escape text for HTML interpolation
    fn escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Render the transcript using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &TranscriptContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace(
            "{{generated_on}}",
            &chrono::Utc::now().format("%Y-%m-%d").to_string(),
        );
        output = output.replace("{{student_name}}", &Self::escape(&ctx.user.name));
        output = output.replace("{{student_email}}", &Self::escape(&ctx.user.email));
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
            &Self::generate_performance_html(ctx),
        );
        output = output.replace("{{course_details}}", &Self::generate_details_html(ctx));
        output = output.replace("{{insights}}", &Self::generate_insights_html(ctx));

        output
    }

    /// Generate the semester performance section
    fn generate_performance_html(ctx: &TranscriptContext) -> String {
        let performance = ctx.semester_performance();
        if performance.is_empty() {
            return String::new();
        }

        let mut html = String::from(
            "<section>\n<h2>Semester Performance</h2>\n<table>\n<thead>\
             <tr><th>Semester</th><th>Year</th><th>GPA</th></tr></thead>\n<tbody>\n",
        );

        for entry in performance {
            let _ = writeln!(
                html,
                "<tr><td>{}</td><td>{}</td><td>{:.2}</td></tr>",
                entry.semester, entry.year, entry.gpa
            );
        }

        html.push_str("</tbody>\n</table>\n</section>");
        html
    }

    /// Generate the per-semester course detail section
    fn generate_details_html(ctx: &TranscriptContext) -> String {
        let groups = ctx.grouped_courses();
        if groups.is_empty() {
            return String::new();
        }

        let mut html = String::from("<section>\n<h2>Course Details</h2>\n");

        for ((year, semester), courses) in groups {
            let _ = writeln!(html, "<h3>{semester} Semester {year}</h3>");
            html.push_str(
                "<table>\n<thead><tr><th>Course Code</th><th>Title</th><th>Units</th>\
                 <th>Grade</th><th>Status</th></tr></thead>\n<tbody>\n",
            );

            for course in courses {
                let grade = course
                    .grade
                    .map_or_else(|| "-".to_string(), |g| g.to_string());
                let _ = writeln!(
                    html,
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{grade}</td><td>{}</td></tr>",
                    Self::escape(&course.code),
                    Self::escape(&course.title),
                    course.units,
                    course.status
                );
            }

            html.push_str("</tbody>\n</table>\n");
        }

        html.push_str("</section>");
        html
    }

    /// Generate the insights section
    fn generate_insights_html(ctx: &TranscriptContext) -> String {
        let insights = ctx.insights();
        if insights.is_empty() {
            return String::new();
        }

        let mut html =
            String::from("<section>\n<h2>Academic Insights</h2>\n<ul class=\"insights\">\n");
        for insight in insights {
            let _ = writeln!(html, "<li>{}</li>", Self::escape(&insight));
        }
        html.push_str("</ul>\n</section>");
        html
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn generate(&self, ctx: &TranscriptContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let report_content = self.render(ctx)?;
        fs::write(output_path, report_content)?;
        Ok(())
    }

    fn render(&self, ctx: &TranscriptContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
