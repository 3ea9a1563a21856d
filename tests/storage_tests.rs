//! Integration tests for the storage layer: users, courses, and sessions

use acadtrack::core::models::{
    CourseDraft, CourseStatus, Grade, LoginInput, RegisterInput, Semester, User,
};
use acadtrack::core::storage::{CourseStore, Session, StorageError, Store, UserStore};
use tempfile::TempDir;

fn temp_store() -> (TempDir, Store) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = Store::open(dir.path().join("data")).expect("Failed to open store");
    (dir, store)
}

fn register_input() -> RegisterInput {
    RegisterInput {
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        password: "password123".to_string(),
        confirm_password: "password123".to_string(),
    }
}

fn course_draft() -> CourseDraft {
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

fn register_user(store: &Store) -> User {
    UserStore::new(store)
        .register(&register_input())
        .expect("Failed to register user")
}

// --- User storage ---

#[test]
fn register_creates_user_with_hashed_password() {
    let (_dir, store) = temp_store();
    let user = register_user(&store);

    assert_eq!(user.email, "test@example.com");
    assert_eq!(user.name, "Test User");
    assert_ne!(user.password_hash, "password123");
    assert!(user.password_hash.starts_with("$argon2"));
}

#[test]
fn register_rejects_duplicate_email() {
    let (_dir, store) = temp_store();
    let users = UserStore::new(&store);

    users.register(&register_input()).expect("first register");
    let err = users
        .register(&register_input())
        .expect_err("duplicate email");

    assert!(matches!(err, StorageError::DuplicateEmail { .. }));
    assert_eq!(err.to_string(), "User with this email already exists");
    assert_eq!(users.list().len(), 1);
}

#[test]
fn register_rejects_invalid_input() {
    let (_dir, store) = temp_store();
    let users = UserStore::new(&store);

    let mut input = register_input();
    input.password = "short".to_string();
    input.confirm_password = "short".to_string();

    let err = users.register(&input).expect_err("short password");
    assert!(matches!(err, StorageError::Validation(_)));
    assert!(users.list().is_empty());
}

#[test]
fn find_by_email_and_get_return_user() {
    let (_dir, store) = temp_store();
    let users = UserStore::new(&store);
    let created = register_user(&store);

    let by_email = users.find_by_email("test@example.com").expect("by email");
    assert_eq!(by_email.id, created.id);

    let by_id = users.get(created.id).expect("by id");
    assert_eq!(by_id.email, created.email);

    assert!(users.find_by_email("nobody@example.com").is_none());
}

#[test]
fn authenticate_succeeds_with_valid_credentials() {
    let (_dir, store) = temp_store();
    let users = UserStore::new(&store);
    register_user(&store);

    let user = users
        .authenticate(&LoginInput {
            email: "test@example.com".to_string(),
            password: "password123".to_string(),
        })
        .expect("valid credentials");

    assert_eq!(user.email, "test@example.com");
}

#[test]
fn authenticate_fails_for_unknown_email() {
    let (_dir, store) = temp_store();
    let users = UserStore::new(&store);

    let err = users
        .authenticate(&LoginInput {
            email: "nonexistent@example.com".to_string(),
            password: "password123".to_string(),
        })
        .expect_err("unknown email");

    assert_eq!(err.to_string(), "Invalid email or password");
}

#[test]
fn authenticate_fails_for_wrong_password() {
    let (_dir, store) = temp_store();
    let users = UserStore::new(&store);
    register_user(&store);

    let err = users
        .authenticate(&LoginInput {
            email: "test@example.com".to_string(),
            password: "wrongpassword".to_string(),
        })
        .expect_err("wrong password");

    // Identical message for both failure causes
    assert_eq!(err.to_string(), "Invalid email or password");
}

// --- Course storage ---

#[test]
fn create_course_assigns_id_and_owner() {
    let (_dir, store) = temp_store();
    let user = register_user(&store);
    let courses = CourseStore::new(&store);

    let course = courses.create(user.id, &course_draft()).expect("create");

    assert_eq!(course.code, "CS101");
    assert_eq!(course.user_id, user.id);
    assert_eq!(course.created_at, course.updated_at);
}

#[test]
fn create_rejects_duplicate_code_for_same_user() {
    let (_dir, store) = temp_store();
    let user = register_user(&store);
    let courses = CourseStore::new(&store);

    courses.create(user.id, &course_draft()).expect("first");
    let err = courses
        .create(user.id, &course_draft())
        .expect_err("duplicate code");

    assert!(matches!(err, StorageError::DuplicateCourseCode { .. }));
    assert_eq!(err.to_string(), "Course with this code already exists");
    assert_eq!(courses.for_user(user.id).len(), 1);
}

#[test]
fn same_code_under_different_user_succeeds() {
    let (_dir, store) = temp_store();
    let users = UserStore::new(&store);
    let courses = CourseStore::new(&store);

    let first = register_user(&store);
    let mut other_input = register_input();
    other_input.email = "other@example.com".to_string();
    let second = users.register(&other_input).expect("second user");

    courses.create(first.id, &course_draft()).expect("first");
    courses.create(second.id, &course_draft()).expect("second");

    assert_eq!(courses.for_user(first.id).len(), 1);
    assert_eq!(courses.for_user(second.id).len(), 1);
}

#[test]
fn for_user_filters_by_owner() {
    let (_dir, store) = temp_store();
    let users = UserStore::new(&store);
    let courses = CourseStore::new(&store);

    let first = register_user(&store);
    let mut other_input = register_input();
    other_input.email = "other@example.com".to_string();
    let second = users.register(&other_input).expect("second user");

    courses.create(first.id, &course_draft()).expect("create");

    assert_eq!(courses.for_user(first.id).len(), 1);
    assert!(courses.for_user(second.id).is_empty());
}

#[test]
fn replace_updates_fields_and_preserves_identity() {
    let (_dir, store) = temp_store();
    let user = register_user(&store);
    let courses = CourseStore::new(&store);

    let created = courses.create(user.id, &course_draft()).expect("create");

    let mut draft = course_draft();
    draft.title = "Advanced Computer Science".to_string();
    draft.grade = Some(Grade::BPlus);

    let updated = courses.replace(created.id, &draft).expect("replace");

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.user_id, user.id);
    assert_eq!(updated.title, "Advanced Computer Science");
    assert_eq!(updated.grade, Some(Grade::BPlus));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);

    // The stored collection reflects the replacement
    let stored = courses.get(created.id).expect("stored course");
    assert_eq!(stored.title, "Advanced Computer Science");
}

#[test]
fn replace_unknown_id_fails() {
    let (_dir, store) = temp_store();
    register_user(&store);
    let courses = CourseStore::new(&store);

    let err = courses
        .replace(uuid::Uuid::new_v4(), &course_draft())
        .expect_err("unknown id");

    assert!(matches!(err, StorageError::CourseNotFound { .. }));
    assert_eq!(err.to_string(), "Course not found");
}

#[test]
fn replace_rejects_code_collision_with_sibling_course() {
    let (_dir, store) = temp_store();
    let user = register_user(&store);
    let courses = CourseStore::new(&store);

    courses.create(user.id, &course_draft()).expect("first");
    let mut second_draft = course_draft();
    second_draft.code = "MATH101".to_string();
    let second = courses.create(user.id, &second_draft).expect("second");

    // Renaming MATH101 to CS101 collides with the sibling course
    let mut collide = course_draft();
    collide.code = "CS101".to_string();
    let err = courses.replace(second.id, &collide).expect_err("collision");

    assert!(matches!(err, StorageError::DuplicateCourseCode { .. }));
}

#[test]
fn delete_removes_course() {
    let (_dir, store) = temp_store();
    let user = register_user(&store);
    let courses = CourseStore::new(&store);

    let created = courses.create(user.id, &course_draft()).expect("create");
    courses.delete(created.id).expect("delete");

    assert!(courses.get(created.id).is_none());
    assert!(courses.for_user(user.id).is_empty());
}

#[test]
fn delete_unknown_id_leaves_collection_unchanged() {
    let (_dir, store) = temp_store();
    let user = register_user(&store);
    let courses = CourseStore::new(&store);

    courses.create(user.id, &course_draft()).expect("create");

    let err = courses
        .delete(uuid::Uuid::new_v4())
        .expect_err("unknown id");
    assert!(matches!(err, StorageError::CourseNotFound { .. }));

    assert_eq!(courses.for_user(user.id).len(), 1);
}

#[test]
fn delete_user_removes_record() {
    let (_dir, store) = temp_store();
    let users = UserStore::new(&store);
    let user = register_user(&store);

    users.delete(user.id).expect("delete user");
    assert!(users.get(user.id).is_none());
    assert!(users.list().is_empty());
}

#[test]
fn delete_unknown_user_leaves_collection_unchanged() {
    let (_dir, store) = temp_store();
    let users = UserStore::new(&store);
    register_user(&store);

    let err = users.delete(uuid::Uuid::new_v4()).expect_err("unknown id");
    assert!(matches!(err, StorageError::UserNotFound { .. }));
    assert_eq!(err.to_string(), "User not found");
    assert_eq!(users.list().len(), 1);
}

#[test]
fn delete_for_user_removes_only_their_courses() {
    let (_dir, store) = temp_store();
    let users = UserStore::new(&store);
    let courses = CourseStore::new(&store);

    let first = register_user(&store);
    let mut other_input = register_input();
    other_input.email = "other@example.com".to_string();
    let second = users.register(&other_input).expect("second user");

    courses.create(first.id, &course_draft()).expect("first");
    let mut second_draft = course_draft();
    second_draft.code = "MATH101".to_string();
    courses.create(first.id, &second_draft).expect("second");
    courses.create(second.id, &course_draft()).expect("other");

    let removed = courses.delete_for_user(first.id).expect("delete for user");
    assert_eq!(removed, 2);
    assert!(courses.for_user(first.id).is_empty());
    assert_eq!(courses.for_user(second.id).len(), 1);
}

// --- Sessions ---

#[test]
fn session_begin_load_end_round_trip() {
    let (_dir, store) = temp_store();
    let user = register_user(&store);

    assert!(Session::load(&store).is_none());

    let session = Session::begin(&store, &user).expect("begin session");
    assert_eq!(session.user_id, user.id);

    let loaded = Session::load(&store).expect("load session");
    assert_eq!(loaded.user_id, user.id);

    let resolved = loaded.user(&store).expect("resolve user");
    assert_eq!(resolved.email, user.email);

    Session::end(&store).expect("end session");
    assert!(Session::load(&store).is_none());
}

#[test]
fn stale_session_reports_missing_user() {
    let (_dir, store) = temp_store();
    let user = register_user(&store);
    let session = Session::begin(&store, &user).expect("begin session");

    // Wipe the user list out from under the session
    store
        .set("users", &Vec::<User>::new())
        .expect("clear users");

    let err = session.user(&store).expect_err("stale session");
    assert!(matches!(err, StorageError::UserNotFound { .. }));
}
