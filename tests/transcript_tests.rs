//! Integration tests for transcript rendering

use acadtrack::core::models::{Course, CourseStatus, Grade, Semester, User};
use acadtrack::core::report::{
    HtmlReporter, MarkdownReporter, ReportFormat, ReportGenerator, TranscriptContext,
};
use chrono::Utc;
use std::str::FromStr;
use tempfile::TempDir;
use uuid::Uuid;

fn sample_user() -> User {
    User {
        id: Uuid::new_v4(),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        password_hash: String::new(),
        created_at: Utc::now(),
    }
}

fn course(
    code: &str,
    units: u8,
    grade: Option<Grade>,
    semester: Semester,
    year: u16,
    status: CourseStatus,
) -> Course {
    let now = Utc::now();
    Course {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        code: code.to_string(),
        title: format!("{code} title"),
        units,
        grade,
        semester,
        year,
        status,
        created_at: now,
        updated_at: now,
    }
}

fn sample_courses() -> Vec<Course> {
    vec![
        course(
            "CS101",
            3,
            Some(Grade::A),
            Semester::First,
            2023,
            CourseStatus::Completed,
        ),
        course(
            "MATH101",
            4,
            Some(Grade::B),
            Semester::First,
            2023,
            CourseStatus::Completed,
        ),
        course(
            "ENG101",
            3,
            None,
            Semester::Second,
            2024,
            CourseStatus::InProgress,
        ),
    ]
}

#[test]
fn report_format_parses_aliases() {
    assert_eq!(ReportFormat::from_str("md").unwrap(), ReportFormat::Markdown);
    assert_eq!(
        ReportFormat::from_str("markdown").unwrap(),
        ReportFormat::Markdown
    );
    assert_eq!(ReportFormat::from_str("HTML").unwrap(), ReportFormat::Html);
    assert_eq!(ReportFormat::from_str("pdf").unwrap(), ReportFormat::Pdf);
    assert!(ReportFormat::from_str("docx").is_err());
}

#[test]
fn context_derives_summary_values() {
    let user = sample_user();
    let courses = sample_courses();
    let ctx = TranscriptContext::new(&user, &courses, 120, true);

    let expected_gpa = (5.0 * 3.0 + 4.0 * 4.0) / 7.0;
    assert!((ctx.cgpa() - expected_gpa).abs() < 1e-4);
    assert_eq!(ctx.total_credits(), 7);
    assert_eq!(ctx.completed_courses(), 2);
    assert!((ctx.degree_progress() - 7.0 / 120.0 * 100.0).abs() < 1e-3);
    assert_eq!(ctx.student_ref().len(), 8);
}

#[test]
fn context_groups_courses_ascending() {
    let user = sample_user();
    let courses = vec![
        course(
            "ENG101",
            3,
            None,
            Semester::Second,
            2024,
            CourseStatus::InProgress,
        ),
        course(
            "CS101",
            3,
            Some(Grade::A),
            Semester::First,
            2023,
            CourseStatus::Completed,
        ),
    ];
    let ctx = TranscriptContext::new(&user, &courses, 120, true);

    let groups = ctx.grouped_courses();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].0, (2023, Semester::First));
    assert_eq!(groups[1].0, (2024, Semester::Second));
}

#[test]
fn markdown_transcript_contains_all_sections() {
    let user = sample_user();
    let courses = sample_courses();
    let ctx = TranscriptContext::new(&user, &courses, 120, true);

    let rendered = MarkdownReporter::new().render(&ctx).expect("render");

    assert!(rendered.contains("# Academic Transcript"));
    assert!(rendered.contains("Test User"));
    assert!(rendered.contains("test@example.com"));
    assert!(rendered.contains("4.43 / 5.0"));
    assert!(rendered.contains("7 / 120"));
    assert!(rendered.contains("## Semester Performance"));
    assert!(rendered.contains("| First | 2023 | 4.43 |"));
    assert!(rendered.contains("### First Semester 2023"));
    assert!(rendered.contains("### Second Semester 2024"));
    assert!(rendered.contains("| CS101 | CS101 title | 3 | A | Completed |"));
    assert!(rendered.contains("| ENG101 | ENG101 title | 3 | - | In Progress |"));
    assert!(rendered.contains("## Academic Insights"));
}

#[test]
fn markdown_transcript_omits_insights_when_disabled() {
    let user = sample_user();
    let courses = sample_courses();
    let ctx = TranscriptContext::new(&user, &courses, 120, false);

    let rendered = MarkdownReporter::new().render(&ctx).expect("render");
    assert!(!rendered.contains("## Academic Insights"));
}

#[test]
fn markdown_transcript_for_empty_course_list() {
    let user = sample_user();
    let courses: Vec<Course> = Vec::new();
    let ctx = TranscriptContext::new(&user, &courses, 120, true);

    let rendered = MarkdownReporter::new().render(&ctx).expect("render");
    assert!(rendered.contains("0.00 / 5.0"));
    assert!(rendered.contains("0 / 120"));
    assert!(!rendered.contains("## Semester Performance"));
    assert!(!rendered.contains("## Course Details"));
}

#[test]
fn html_transcript_contains_tables_and_escapes_content() {
    let user = sample_user();
    let mut courses = sample_courses();
    courses[0].title = "Algorithms & <Data> Structures".to_string();
    let ctx = TranscriptContext::new(&user, &courses, 120, true);

    let rendered = HtmlReporter::new().render(&ctx).expect("render");

    assert!(rendered.contains("<h1>Academic Transcript</h1>"));
    assert!(rendered.contains("<h2>Semester Performance</h2>"));
    assert!(rendered.contains("<h3>First Semester 2023</h3>"));
    assert!(rendered.contains("Algorithms &amp; &lt;Data&gt; Structures"));
    assert!(!rendered.contains("<Data>"));
    // Print geometry drives pagination during PDF conversion
    assert!(rendered.contains("@page"));
}

#[test]
fn generate_writes_markdown_file() {
    let user = sample_user();
    let courses = sample_courses();
    let ctx = TranscriptContext::new(&user, &courses, 120, true);

    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("transcript.md");

    MarkdownReporter::new()
        .generate(&ctx, &path)
        .expect("generate");

    let written = std::fs::read_to_string(&path).expect("read back");
    assert!(written.contains("# Academic Transcript"));
}
