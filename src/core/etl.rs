use crate::core::{Department, DepartmentReport, DepartmentStatus, InsertOutcome, Pipeline};
use crate::domain::model::RunSummary;
use crate::utils::error::Result;

/// Drives a pipeline department by department, strictly in sequence.
pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Discovery failures abort the run. Per-department failures are logged and skipped.
    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("Starting catalog ETL");

        let departments = self.pipeline.discover().await?;
        tracing::info!("Found {} departments", departments.len());

        let mut summary = RunSummary::new(departments.len());
        let delay = self.pipeline.courtesy_delay();

        for department in &departments {
            tracing::info!("Scraping {}...", department.name);
            let report = self.process(department).await;
            summary.record(&report);

            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }

        tracing::info!(
            "Scraping complete: {} departments, {} courses parsed, {} inserted, {} failed",
            summary.departments_processed,
            summary.courses_parsed,
            summary.courses_inserted,
            summary.failed_departments.len()
        );
        Ok(summary)
    }

    async fn process(&self, department: &Department) -> DepartmentReport {
        let report = |parsed, status| DepartmentReport {
            abbrev: department.abbrev.clone(),
            name: department.name.clone(),
            parsed,
            status,
        };

        let html = match self.pipeline.extract(department).await {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("Failed to fetch {}: {}", department.name, e);
                return report(0, DepartmentStatus::FetchFailed(e.to_string()));
            }
        };

        let courses = self.pipeline.transform(department, &html);
        let parsed = courses.len();
        if courses.is_empty() {
            tracing::info!("No courses found for {}", department.name);
            return report(0, DepartmentStatus::NoCourses);
        }

        match self.pipeline.load(department, courses).await {
            Ok(outcome) => {
                match &outcome {
                    InsertOutcome::Inserted { count } => {
                        tracing::info!("Inserted {} courses for {}", count, department.name)
                    }
                    InsertOutcome::Rejected { status, message } => tracing::error!(
                        "Error inserting courses for {}: HTTP {} {}",
                        department.name,
                        status,
                        message
                    ),
                    InsertOutcome::Skipped { count } => {
                        tracing::info!("[dry run] {} courses for {}", count, department.name)
                    }
                }
                report(parsed, DepartmentStatus::Loaded(outcome))
            }
            Err(e) => {
                tracing::error!("Error inserting courses for {}: {}", department.name, e);
                report(parsed, DepartmentStatus::InsertFailed(e.to_string()))
            }
        }
    }
}
