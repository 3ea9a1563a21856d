//! Transcript command handler
//!
//! Generates a transcript document in Markdown, HTML, or PDF for the
//! logged-in user.

use acadtrack::config::Config;
use acadtrack::core::report::{
    HtmlReporter, MarkdownReporter, PdfReporter, ReportFormat, ReportGenerator, TranscriptContext,
};
use acadtrack::core::storage::CourseStore;
use acadtrack::{error, info};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::{current_user, open_store};

/// Run the transcript command.
pub fn run(output_file: Option<&Path>, format_str: &str, no_insights: bool, config: &Config) {
    if let Err(err) = generate_transcript(output_file, format_str, no_insights, config) {
        error!("Transcript generation failed: {err}");
        eprintln!("{err}");
    }
}

fn generate_transcript(
    output_file: Option<&Path>,
    format_str: &str,
    no_insights: bool,
    config: &Config,
) -> Result<(), String> {
    // Parse the format
    let format = ReportFormat::from_str(format_str)
        .map_err(|e| format!("✗ {e}. Use: markdown, html, or pdf"))?;

    let store = open_store(config)?;
    let user = current_user(&store)?;
    let courses = CourseStore::new(&store).for_user(user.id);

    let ctx = TranscriptContext::new(
        &user,
        &courses,
        config.academic.required_credits,
        !no_insights,
    );

    // Determine output path
    let final_output_path: PathBuf = if let Some(output) = output_file {
        output.to_path_buf()
    } else {
        let reports_dir = PathBuf::from(&config.paths.reports_dir);
        std::fs::create_dir_all(&reports_dir).map_err(|e| {
            format!(
                "✗ Failed to create reports directory {}: {e}",
                reports_dir.display()
            )
        })?;

        let name_part = user.name.replace(char::is_whitespace, "_");
        let date_part = chrono::Utc::now().format("%Y-%m-%d");
        let filename = format!("transcript_{name_part}_{date_part}.{}", format.extension());
        reports_dir.join(filename)
    };

    // Write the transcript
    let reporter: Box<dyn ReportGenerator> = match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
        ReportFormat::Pdf => Box::new(PdfReporter::new()),
    };

    reporter
        .generate(&ctx, &final_output_path)
        .map_err(|e| format!("✗ Failed to generate {format} transcript: {e}"))?;

    println!("✓ Transcript generated: {}", final_output_path.display());
    info!("Transcript exported to: {}", final_output_path.display());

    print_summary(&ctx);

    Ok(())
}

/// Print a summary of the transcript contents
fn print_summary(ctx: &TranscriptContext) {
    println!("\n=== Summary ===");
    println!("Student: {}", ctx.user.name);
    println!("CGPA: {:.2} / 5.0", ctx.cgpa());
    println!(
        "Credits: {} / {}",
        ctx.total_credits(),
        ctx.required_credits
    );
    println!("Courses Completed: {}", ctx.completed_courses());
    println!("Degree Progress: {:.1}%", ctx.degree_progress());
}
