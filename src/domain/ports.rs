use crate::domain::model::{CourseRecord, Department, InsertOutcome};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;
use url::Url;

pub trait PageFetcher: Send + Sync {
    fn fetch(&self, url: &Url) -> impl std::future::Future<Output = Result<String>> + Send;
}

pub trait CourseSink: Send + Sync {
    fn insert(
        &self,
        table: &str,
        courses: &[CourseRecord],
    ) -> impl std::future::Future<Output = Result<InsertOutcome>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn table(&self) -> &str;
    fn courtesy_delay(&self) -> Duration;
    fn timeout(&self) -> Duration;
    /// Department abbreviations to restrict the run to; empty means all.
    fn departments(&self) -> &[String];
    fn store_url(&self) -> Option<&str>;
    fn store_key(&self) -> Option<&str>;
    fn dry_run(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn discover(&self) -> Result<Vec<Department>>;
    async fn extract(&self, department: &Department) -> Result<String>;
    fn transform(&self, department: &Department, html: &str) -> Vec<CourseRecord>;
    async fn load(
        &self,
        department: &Department,
        courses: Vec<CourseRecord>,
    ) -> Result<InsertOutcome>;
    fn courtesy_delay(&self) -> Duration;
}
