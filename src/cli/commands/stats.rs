//! Stats command handler
//!
//! Prints the academic summary, semester performance table, and rule-based
//! insights for the logged-in user.

use acadtrack::config::Config;
use acadtrack::core::metrics;
use acadtrack::core::storage::CourseStore;
use acadtrack::error;

use super::{current_user, open_store};

/// Run the stats command.
pub fn run(config: &Config) {
    if let Err(err) = show_stats(config) {
        error!("Stats command failed: {err}");
        eprintln!("{err}");
    }
}

fn show_stats(config: &Config) -> Result<(), String> {
    let store = open_store(config)?;
    let user = current_user(&store)?;
    let courses = CourseStore::new(&store).for_user(user.id);

    let cgpa = metrics::calculate_cgpa(&courses);
    let credits = metrics::total_credits(&courses);
    let completed = metrics::total_courses_completed(&courses);
    let in_progress = metrics::courses_in_progress(&courses);
    let required = config.academic.required_credits;
    let progress = metrics::degree_progress(credits, required);

    println!("\n=== Academic Summary ===");
    println!("Student: {} <{}>", user.name, user.email);
    println!("Cumulative GPA (CGPA): {cgpa:.2} / 5.0");
    println!("Total Credits Completed: {credits} / {required}");
    println!("Courses Completed: {completed}");
    println!("Courses In Progress: {in_progress}");
    println!("Degree Progress: {progress:.1}%");

    let performance = metrics::semester_performance(&courses);
    if !performance.is_empty() {
        println!("\n=== Semester Performance ===");
        for entry in &performance {
            println!("{} {}: GPA {:.2}", entry.semester, entry.year, entry.gpa);
        }
    }

    let insights = metrics::generate_insights(&courses);
    if !insights.is_empty() {
        println!("\n=== Insights ===");
        for insight in &insights {
            println!("• {insight}");
        }
    }

    Ok(())
}
