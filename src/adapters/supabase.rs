//! Batch inserts through the PostgREST interface of a Supabase project.

use crate::domain::model::{CourseRecord, InsertOutcome};
use crate::domain::ports::CourseSink;
use crate::utils::error::Result;
use reqwest::Client;
use serde::Deserialize;

/// Error body PostgREST sends with non-2xx answers.
#[derive(Debug, Default, Deserialize)]
struct PostgrestError {
    message: Option<String>,
    code: Option<String>,
    details: Option<String>,
}

impl PostgrestError {
    fn describe(self, raw: &str) -> String {
        match (self.message, self.code, self.details) {
            (Some(message), Some(code), Some(details)) => {
                format!("{} ({}): {}", message, code, details)
            }
            (Some(message), Some(code), None) => format!("{} ({})", message, code),
            (Some(message), None, _) => message,
            _ => raw.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SupabaseSink {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseSink {
    pub fn new(client: Client, base_url: &str, api_key: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

impl CourseSink for SupabaseSink {
    async fn insert(&self, table: &str, courses: &[CourseRecord]) -> Result<InsertOutcome> {
        let url = self.table_url(table);
        tracing::debug!("POST {} ({} rows)", url, courses.len());

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(courses)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(InsertOutcome::Inserted {
                count: courses.len(),
            });
        }

        let body = response.text().await?;
        let message = serde_json::from_str::<PostgrestError>(&body)
            .unwrap_or_default()
            .describe(&body);

        Ok(InsertOutcome::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}
