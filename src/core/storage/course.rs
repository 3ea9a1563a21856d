//! Course persistence

use chrono::Utc;
use uuid::Uuid;

use super::{StorageError, Store, COURSES_KEY};
use crate::core::models::{Course, CourseDraft};

/// Typed access to the persisted course list
#[derive(Debug)]
pub struct CourseStore<'a> {
    store: &'a Store,
}

impl<'a> CourseStore<'a> {
    /// Create a course store over the given backing store
    #[must_use]
    pub const fn new(store: &'a Store) -> Self {
        Self { store }
    }

    /// All stored courses, across users
    #[must_use]
    pub fn list(&self) -> Vec<Course> {
        self.store.get(COURSES_KEY).unwrap_or_default()
    }

    /// Courses belonging to one user
    #[must_use]
    pub fn for_user(&self, user_id: Uuid) -> Vec<Course> {
        self.list()
            .into_iter()
            .filter(|course| course.user_id == user_id)
            .collect()
    }

    /// Look up a course by id
    #[must_use]
    pub fn get(&self, id: Uuid) -> Option<Course> {
        self.list().into_iter().find(|course| course.id == id)
    }

    /// Create a new course for a user.
    ///
    /// The course code must be unique within that user's course set; the
    /// same code under a different user is fine.
    ///
    /// # Errors
    /// Returns [`StorageError::Validation`] for invalid input,
    /// [`StorageError::DuplicateCourseCode`] for a code collision, or a
    /// storage error if the collection cannot be written.
    pub fn create(&self, user_id: Uuid, draft: &CourseDraft) -> Result<Course, StorageError> {
        draft.validate()?;

        let mut courses = self.list();
        if courses
            .iter()
            .any(|c| c.user_id == user_id && c.code == draft.code)
        {
            return Err(StorageError::DuplicateCourseCode {
                code: draft.code.clone(),
            });
        }

        let now = Utc::now();
        let course = Course {
            id: Uuid::new_v4(),
            user_id,
            code: draft.code.clone(),
            title: draft.title.clone(),
            units: draft.units,
            grade: draft.grade,
            semester: draft.semester,
            year: draft.year,
            status: draft.status,
            created_at: now,
            updated_at: now,
        };

        courses.push(course.clone());
        self.store.set(COURSES_KEY, &courses)?;

        Ok(course)
    }

    /// Replace an existing course record with new field values.
    ///
    /// Full-record replacement: every user-editable field is taken from the
    /// draft; id, owner, and creation timestamp are preserved and
    /// `updated_at` is refreshed. Changing the code to one already used by
    /// another of the owner's courses is rejected.
    ///
    /// # Errors
    /// Returns [`StorageError::CourseNotFound`] for an unknown id,
    /// [`StorageError::Validation`] for invalid input,
    /// [`StorageError::DuplicateCourseCode`] for a code collision, or a
    /// storage error if the collection cannot be written.
    pub fn replace(&self, id: Uuid, draft: &CourseDraft) -> Result<Course, StorageError> {
        draft.validate()?;

        let mut courses = self.list();
        let index = courses
            .iter()
            .position(|course| course.id == id)
            .ok_or(StorageError::CourseNotFound { id })?;

        let owner = courses[index].user_id;
        if courses
            .iter()
            .any(|c| c.id != id && c.user_id == owner && c.code == draft.code)
        {
            return Err(StorageError::DuplicateCourseCode {
                code: draft.code.clone(),
            });
        }

        let existing = &courses[index];
        let updated = Course {
            id: existing.id,
            user_id: existing.user_id,
            code: draft.code.clone(),
            title: draft.title.clone(),
            units: draft.units,
            grade: draft.grade,
            semester: draft.semester,
            year: draft.year,
            status: draft.status,
            created_at: existing.created_at,
            updated_at: Utc::now(),
        };

        courses[index] = updated.clone();
        self.store.set(COURSES_KEY, &courses)?;

        Ok(updated)
    }

    /// Delete every course owned by a user, returning how many were removed.
    ///
    /// Used when an account is removed; an owner with no courses is fine.
    ///
    /// # Errors
    /// Returns a storage error if the collection cannot be written.
    pub fn delete_for_user(&self, user_id: Uuid) -> Result<usize, StorageError> {
        let courses = self.list();
        let remaining: Vec<Course> = courses
            .iter()
            .filter(|course| course.user_id != user_id)
            .cloned()
            .collect();

        let removed = courses.len() - remaining.len();
        if removed > 0 {
            self.store.set(COURSES_KEY, &remaining)?;
        }

        Ok(removed)
    }

    /// Delete a course by id.
    ///
    /// # Errors
    /// Returns [`StorageError::CourseNotFound`] for an unknown id; the
    /// stored collection is left unchanged in that case.
    pub fn delete(&self, id: Uuid) -> Result<(), StorageError> {
        let courses = self.list();
        let remaining: Vec<Course> = courses
            .iter()
            .filter(|course| course.id != id)
            .cloned()
            .collect();

        if remaining.len() == courses.len() {
            return Err(StorageError::CourseNotFound { id });
        }

        self.store.set(COURSES_KEY, &remaining)?;
        Ok(())
    }
}
