use crate::domain::model::{CourseRecord, InsertOutcome};
use crate::domain::ports::CourseSink;
use crate::utils::error::Result;

/// Sink that only logs what would have been inserted.
#[derive(Debug, Clone, Default)]
pub struct DryRunSink;

impl CourseSink for DryRunSink {
    async fn insert(&self, table: &str, courses: &[CourseRecord]) -> Result<InsertOutcome> {
        for course in courses {
            tracing::debug!(
                "[dry run] {} <- {} | {} | {}",
                table,
                course.code,
                course.title,
                course.credits
            );
        }
        Ok(InsertOutcome::Skipped {
            count: courses.len(),
        })
    }
}
