use serde::{Deserialize, Serialize};

/// One parsed course header, as stored in the course table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub code: String,
    pub title: String,
    pub credits: String,
}

/// A department subpage discovered on the catalog index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Department {
    /// File stem of the page, e.g. `anth` for `anth.html`.
    pub abbrev: String,
    /// Link text, e.g. `Anthropology (ANTH)`.
    pub name: String,
    pub url: url::Url,
}

/// What the table store did with one batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted { count: usize },
    Rejected { status: u16, message: String },
    /// Dry run; the batch was never sent.
    Skipped { count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartmentStatus {
    Loaded(InsertOutcome),
    NoCourses,
    FetchFailed(String),
    InsertFailed(String),
}

impl DepartmentStatus {
    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            DepartmentStatus::FetchFailed(_)
                | DepartmentStatus::InsertFailed(_)
                | DepartmentStatus::Loaded(InsertOutcome::Rejected { .. })
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentReport {
    pub abbrev: String,
    pub name: String,
    pub parsed: usize,
    pub status: DepartmentStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub departments_found: usize,
    pub departments_processed: usize,
    pub courses_parsed: usize,
    pub courses_inserted: usize,
    pub failed_departments: Vec<String>,
}

impl RunSummary {
    pub fn new(departments_found: usize) -> Self {
        Self {
            departments_found,
            ..Self::default()
        }
    }

    pub fn record(&mut self, report: &DepartmentReport) {
        self.departments_processed += 1;
        self.courses_parsed += report.parsed;
        if let DepartmentStatus::Loaded(InsertOutcome::Inserted { count }) = report.status {
            self.courses_inserted += count;
        }
        if report.status.is_failure() {
            self.failed_departments.push(report.abbrev.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(abbrev: &str, parsed: usize, status: DepartmentStatus) -> DepartmentReport {
        DepartmentReport {
            abbrev: abbrev.to_string(),
            name: abbrev.to_uppercase(),
            parsed,
            status,
        }
    }

    #[test]
    fn test_course_record_serializes_three_columns() {
        let record = CourseRecord {
            code: "ANTH100".to_string(),
            title: "Introduction to Anthropology".to_string(),
            credits: "5".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({
                "code": "ANTH100",
                "title": "Introduction to Anthropology",
                "credits": "5"
            })
        );
    }

    #[test]
    fn test_run_summary_counts() {
        let mut summary = RunSummary::new(4);
        summary.record(&report(
            "anth",
            12,
            DepartmentStatus::Loaded(InsertOutcome::Inserted { count: 12 }),
        ));
        summary.record(&report(
            "larch",
            3,
            DepartmentStatus::Loaded(InsertOutcome::Rejected {
                status: 409,
                message: "duplicate key".to_string(),
            }),
        ));
        summary.record(&report("be", 0, DepartmentStatus::NoCourses));
        summary.record(&report(
            "math",
            0,
            DepartmentStatus::FetchFailed("HTTP 500".to_string()),
        ));

        assert_eq!(summary.departments_found, 4);
        assert_eq!(summary.departments_processed, 4);
        assert_eq!(summary.courses_parsed, 15);
        assert_eq!(summary.courses_inserted, 12);
        assert_eq!(summary.failed_departments, vec!["larch", "math"]);
    }
}
