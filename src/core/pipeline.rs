use crate::core::extract::{
    directory_url, discover_departments, extract_course_headers, filter_departments,
};
use crate::core::header::parse_header;
use crate::core::{ConfigProvider, CourseRecord, CourseSink, Department, InsertOutcome};
use crate::core::{PageFetcher, Pipeline};
use crate::utils::error::Result;
use std::time::Duration;

pub struct CatalogPipeline<F: PageFetcher, S: CourseSink, C: ConfigProvider> {
    fetcher: F,
    sink: S,
    config: C,
}

impl<F: PageFetcher, S: CourseSink, C: ConfigProvider> CatalogPipeline<F, S, C> {
    pub fn new(fetcher: F, sink: S, config: C) -> Self {
        Self {
            fetcher,
            sink,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<F: PageFetcher, S: CourseSink, C: ConfigProvider> Pipeline for CatalogPipeline<F, S, C> {
    async fn discover(&self) -> Result<Vec<Department>> {
        let base = directory_url(self.config.base_url())?;
        tracing::debug!("Fetching catalog index {}", base);
        let index_html = self.fetcher.fetch(&base).await?;

        let departments = discover_departments(&index_html, &base);
        Ok(filter_departments(departments, self.config.departments()))
    }

    async fn extract(&self, department: &Department) -> Result<String> {
        self.fetcher.fetch(&department.url).await
    }

    fn transform(&self, department: &Department, html: &str) -> Vec<CourseRecord> {
        let headers = extract_course_headers(html);
        let courses: Vec<CourseRecord> = headers.iter().filter_map(|h| parse_header(h)).collect();
        tracing::debug!(
            "{}: {} course entries, {} parsed",
            department.abbrev,
            headers.len(),
            courses.len()
        );
        courses
    }

    async fn load(
        &self,
        _department: &Department,
        courses: Vec<CourseRecord>,
    ) -> Result<InsertOutcome> {
        self.sink.insert(self.config.table(), &courses).await
    }

    fn courtesy_delay(&self) -> Duration {
        self.config.courtesy_delay()
    }
}
