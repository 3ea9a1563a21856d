//! Course command handlers

use std::str::FromStr;

use acadtrack::config::Config;
use acadtrack::core::models::{Course, CourseDraft, CourseStatus, Grade, Semester};
use acadtrack::core::storage::CourseStore;
use acadtrack::{error, info};
use uuid::Uuid;

use crate::args::CourseSubcommand;

use super::{current_user, open_store};

/// Dispatch course subcommands
pub fn run(subcommand: CourseSubcommand, config: &Config) {
    let result = match subcommand {
        CourseSubcommand::Add {
            code,
            title,
            units,
            semester,
            year,
            grade,
            status,
        } => add(config, &code, &title, units, &semester, year, grade.as_deref(), &status),
        CourseSubcommand::Update {
            id,
            code,
            title,
            units,
            semester,
            year,
            grade,
            clear_grade,
            status,
        } => update(
            config,
            &id,
            code.as_deref(),
            title.as_deref(),
            units,
            semester.as_deref(),
            year,
            grade.as_deref(),
            clear_grade,
            status.as_deref(),
        ),
        CourseSubcommand::Remove { id } => remove(config, &id),
        CourseSubcommand::List { semester, year } => list(config, semester.as_deref(), year),
    };

    if let Err(err) = result {
        error!("Course command failed: {err}");
        eprintln!("{err}");
    }
}

fn parse_id(id: &str) -> Result<Uuid, String> {
    Uuid::parse_str(id).map_err(|_| format!("✗ Invalid course id: '{id}'"))
}

fn parse_grade(grade: Option<&str>) -> Result<Option<Grade>, String> {
    grade
        .map(|g| Grade::from_str(g).map_err(|e| format!("✗ {e}")))
        .transpose()
}

#[allow(clippy::too_many_arguments)]
fn add(
    config: &Config,
    code: &str,
    title: &str,
    units: u8,
    semester: &str,
    year: u16,
    grade: Option<&str>,
    status: &str,
) -> Result<(), String> {
    let store = open_store(config)?;
    let user = current_user(&store)?;

    let draft = CourseDraft {
        code: code.to_string(),
        title: title.to_string(),
        units,
        grade: parse_grade(grade)?,
        semester: Semester::from_str(semester).map_err(|e| format!("✗ {e}"))?,
        year,
        status: CourseStatus::from_str(status).map_err(|e| format!("✗ {e}"))?,
    };

    let course = CourseStore::new(&store)
        .create(user.id, &draft)
        .map_err(|e| format!("✗ Failed to add course: {e}"))?;

    info!("Course created: {} ({})", course.code, course.id);
    println!("✓ Course added: {} - {} ({})", course.code, course.title, course.id);

    Ok(())
}

/// Look up a course by id, restricted to the acting user's records
fn owned_course(store: &CourseStore, user_id: Uuid, id: Uuid) -> Result<Course, String> {
    store
        .get(id)
        .filter(|course| course.user_id == user_id)
        .ok_or_else(|| "✗ Course not found".to_string())
}

#[allow(clippy::too_many_arguments)]
fn update(
    config: &Config,
    id: &str,
    code: Option<&str>,
    title: Option<&str>,
    units: Option<u8>,
    semester: Option<&str>,
    year: Option<u16>,
    grade: Option<&str>,
    clear_grade: bool,
    status: Option<&str>,
) -> Result<(), String> {
    let store = open_store(config)?;
    let user = current_user(&store)?;
    let courses = CourseStore::new(&store);

    let existing = owned_course(&courses, user.id, parse_id(id)?)?;

    // Merge CLI fields over the existing record, then replace it whole
    let new_grade = if clear_grade {
        None
    } else {
        parse_grade(grade)?.or(existing.grade)
    };

    let draft = CourseDraft {
        code: code.map_or(existing.code, ToString::to_string),
        title: title.map_or(existing.title, ToString::to_string),
        units: units.unwrap_or(existing.units),
        grade: new_grade,
        semester: semester
            .map(|s| Semester::from_str(s).map_err(|e| format!("✗ {e}")))
            .transpose()?
            .unwrap_or(existing.semester),
        year: year.unwrap_or(existing.year),
        status: status
            .map(|s| CourseStatus::from_str(s).map_err(|e| format!("✗ {e}")))
            .transpose()?
            .unwrap_or(existing.status),
    };

    let updated = courses
        .replace(existing.id, &draft)
        .map_err(|e| format!("✗ Failed to update course: {e}"))?;

    info!("Course updated: {} ({})", updated.code, updated.id);
    println!("✓ Course updated: {} - {}", updated.code, updated.title);

    Ok(())
}

fn remove(config: &Config, id: &str) -> Result<(), String> {
    let store = open_store(config)?;
    let user = current_user(&store)?;
    let courses = CourseStore::new(&store);

    let course = owned_course(&courses, user.id, parse_id(id)?)?;

    courses
        .delete(course.id)
        .map_err(|e| format!("✗ Failed to remove course: {e}"))?;

    info!("Course removed: {} ({})", course.code, course.id);
    println!("✓ Course removed: {} - {}", course.code, course.title);

    Ok(())
}

fn list(config: &Config, semester: Option<&str>, year: Option<u16>) -> Result<(), String> {
    let store = open_store(config)?;
    let user = current_user(&store)?;

    let semester_filter = semester
        .map(|s| Semester::from_str(s).map_err(|e| format!("✗ {e}")))
        .transpose()?;

    let mut courses = CourseStore::new(&store).for_user(user.id);
    courses.retain(|course| {
        semester_filter.is_none_or(|s| course.semester == s)
            && year.is_none_or(|y| course.year == y)
    });

    if courses.is_empty() {
        println!("No courses recorded.");
        return Ok(());
    }

    // Group by (year, semester), ascending
    courses.sort_by_key(|course| (course.year, course.semester));

    let mut current_group: Option<(u16, Semester)> = None;
    for course in &courses {
        let group = (course.year, course.semester);
        if current_group != Some(group) {
            println!("\n{} Semester {}", course.semester, course.year);
            current_group = Some(group);
        }

        let grade = course
            .grade
            .map_or_else(|| "-".to_string(), |g| g.to_string());
        println!(
            "  {}  {:<20} {:<40} {} units  grade: {:<2}  [{}]",
            course.id, course.code, course.title, course.units, grade, course.status
        );
    }

    Ok(())
}
