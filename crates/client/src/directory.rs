//! Id → display name lookup for enrollment listings.

use std::collections::HashMap;

use portal_core::types::DbId;
use portal_db::models::course::Course;
use portal_db::models::student::Student;

pub const UNKNOWN_STUDENT: &str = "Unknown Student";
pub const UNKNOWN_COURSE: &str = "Unknown Course";

/// Resolves the student and course ids of an enrollment to names.
#[derive(Debug, Clone, Default)]
pub struct EnrollmentDirectory {
    students: HashMap<DbId, String>,
    courses: HashMap<DbId, String>,
}

impl EnrollmentDirectory {
    pub fn new(students: &[Student], courses: &[Course]) -> Self {
        Self {
            students: students.iter().map(|s| (s.id, s.full_name())).collect(),
            courses: courses
                .iter()
                .map(|c| (c.id, c.course_name.clone()))
                .collect(),
        }
    }

    /// `"First Last"`, or [`UNKNOWN_STUDENT`] when the id does not resolve.
    pub fn student_name(&self, id: DbId) -> &str {
        self.students.get(&id).map_or(UNKNOWN_STUDENT, String::as_str)
    }

    /// The course name, or [`UNKNOWN_COURSE`] when the id does not resolve.
    pub fn course_name(&self, id: DbId) -> &str {
        self.courses.get(&id).map_or(UNKNOWN_COURSE, String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;

    #[test]
    fn resolves_known_and_unknown_ids() {
        let now = Utc::now();
        let students = vec![Student {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: None,
            date_of_birth: NaiveDate::from_ymd_opt(1815, 12, 10).unwrap(),
            created_at: now,
            updated_at: now,
        }];
        let courses = vec![Course {
            id: 7,
            course_name: "Math".into(),
            description: String::new(),
            created_at: now,
            updated_at: now,
        }];

        let directory = EnrollmentDirectory::new(&students, &courses);
        assert_eq!(directory.student_name(1), "Ada Lovelace");
        assert_eq!(directory.course_name(7), "Math");
        assert_eq!(directory.student_name(2), UNKNOWN_STUDENT);
        assert_eq!(directory.course_name(1), UNKNOWN_COURSE);
    }
}
