//! Record counts and goal progress for the dashboard.

use crate::api::PortalApi;
use crate::error::ClientError;
use crate::resource::{Courses, Enrollments, Students};

pub const STUDENT_GOAL: usize = 100;
pub const COURSE_GOAL: usize = 50;
pub const ENROLLMENT_GOAL: usize = 500;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub students: usize,
    pub courses: usize,
    pub enrollments: usize,
}

/// Progress of one count towards its goal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    pub title: &'static str,
    pub count: usize,
    pub goal: usize,
    /// Not capped; exceeds 100 once the goal is passed.
    pub percent: f64,
}

impl DashboardStats {
    /// Fetch all three lists concurrently and count them.
    pub async fn fetch(api: &PortalApi) -> Result<Self, ClientError> {
        let (students, courses, enrollments) = tokio::try_join!(
            api.list::<Students>(),
            api.list::<Courses>(),
            api.list::<Enrollments>()
        )
        .inspect_err(|err| tracing::warn!(error = %err, "Failed to fetch dashboard stats"))?;

        Ok(Self {
            students: students.len(),
            courses: courses.len(),
            enrollments: enrollments.len(),
        })
    }

    pub fn progress(&self) -> [GoalProgress; 3] {
        [
            GoalProgress::new("Student Enrollment", self.students, STUDENT_GOAL),
            GoalProgress::new("Course Completion", self.courses, COURSE_GOAL),
            GoalProgress::new("Enrollment Target", self.enrollments, ENROLLMENT_GOAL),
        ]
    }
}

impl GoalProgress {
    fn new(title: &'static str, count: usize, goal: usize) -> Self {
        Self {
            title,
            count,
            goal,
            percent: count as f64 / goal as f64 * 100.0,
        }
    }

    /// Percentage rounded to the nearest whole number.
    pub fn rounded_percent(&self) -> u64 {
        self.percent.round() as u64
    }
}
