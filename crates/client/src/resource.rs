//! Per-entity wiring: endpoint path, page size, search fields and sort keys.

use std::cmp::Ordering;
use std::fmt::Debug;

use portal_core::types::DbId;
use portal_db::models::course::{Course, CreateCourse};
use portal_db::models::enrollment::{CreateEnrollment, Enrollment};
use portal_db::models::student::{CreateStudent, Student};
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::directory::EnrollmentDirectory;
use crate::view::{any_field_contains, compare_text};

/// A REST resource the client can list, read and mutate.
pub trait Resource {
    type Entity: DeserializeOwned + Clone + Debug + Send;
    type Input: Serialize + Validate + Sync;
    type SortKey: Copy + Default + Debug + PartialEq;
    /// Extra data needed to search or sort, e.g. names for enrollments.
    type Context: Default;

    /// Path segment under `/api`.
    const PATH: &'static str;
    /// Singular, lower-case name used in notification messages.
    const NAME: &'static str;
    const PAGE_SIZE: usize;

    fn id(entity: &Self::Entity) -> DbId;

    /// Whether `entity` matches the lower-cased search term.
    fn matches(entity: &Self::Entity, needle: &str, context: &Self::Context) -> bool;

    fn compare(
        a: &Self::Entity,
        b: &Self::Entity,
        key: Self::SortKey,
        context: &Self::Context,
    ) -> Ordering;
}

// ---------------------------------------------------------------------------
// Students
// ---------------------------------------------------------------------------

pub struct Students;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StudentSort {
    #[default]
    FirstNameAsc,
    FirstNameDesc,
}

impl Resource for Students {
    type Entity = Student;
    type Input = CreateStudent;
    type SortKey = StudentSort;
    type Context = ();

    const PATH: &'static str = "students";
    const NAME: &'static str = "student";
    const PAGE_SIZE: usize = 5;

    fn id(entity: &Student) -> DbId {
        entity.id
    }

    fn matches(s: &Student, needle: &str, _: &()) -> bool {
        let email = s.email.as_deref().unwrap_or_default();
        any_field_contains([s.first_name.as_str(), s.last_name.as_str(), email], needle)
    }

    fn compare(a: &Student, b: &Student, key: StudentSort, _: &()) -> Ordering {
        match key {
            StudentSort::FirstNameAsc => compare_text(&a.first_name, &b.first_name),
            StudentSort::FirstNameDesc => compare_text(&b.first_name, &a.first_name),
        }
    }
}

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

pub struct Courses;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CourseSort {
    #[default]
    Name,
    /// Most recently created first.
    Newest,
}

impl Resource for Courses {
    type Entity = Course;
    type Input = CreateCourse;
    type SortKey = CourseSort;
    type Context = ();

    const PATH: &'static str = "courses";
    const NAME: &'static str = "course";
    const PAGE_SIZE: usize = 6;

    fn id(entity: &Course) -> DbId {
        entity.id
    }

    fn matches(c: &Course, needle: &str, _: &()) -> bool {
        any_field_contains([c.course_name.as_str(), c.description.as_str()], needle)
    }

    fn compare(a: &Course, b: &Course, key: CourseSort, _: &()) -> Ordering {
        match key {
            CourseSort::Name => compare_text(&a.course_name, &b.course_name),
            CourseSort::Newest => b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)),
        }
    }
}

// ---------------------------------------------------------------------------
// Enrollments
// ---------------------------------------------------------------------------

pub struct Enrollments;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EnrollmentSort {
    /// Most recent enrollment date first.
    #[default]
    DateDesc,
    DateAsc,
}

impl Resource for Enrollments {
    type Entity = Enrollment;
    type Input = CreateEnrollment;
    type SortKey = EnrollmentSort;
    type Context = EnrollmentDirectory;

    const PATH: &'static str = "enrollments";
    const NAME: &'static str = "enrollment";
    const PAGE_SIZE: usize = 5;

    fn id(entity: &Enrollment) -> DbId {
        entity.id
    }

    fn matches(e: &Enrollment, needle: &str, directory: &EnrollmentDirectory) -> bool {
        any_field_contains(
            [
                directory.student_name(e.student_id),
                directory.course_name(e.course_id),
            ],
            needle,
        )
    }

    fn compare(
        a: &Enrollment,
        b: &Enrollment,
        key: EnrollmentSort,
        _: &EnrollmentDirectory,
    ) -> Ordering {
        let by_date = a
            .enrollment_date
            .cmp(&b.enrollment_date)
            .then(a.id.cmp(&b.id));
        match key {
            EnrollmentSort::DateAsc => by_date,
            EnrollmentSort::DateDesc => by_date.reverse(),
        }
    }
}
