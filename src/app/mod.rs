use crate::adapters::dry_run::DryRunSink;
use crate::adapters::http::{build_client, HttpFetcher};
use crate::adapters::supabase::SupabaseSink;
use crate::core::{etl::EtlEngine, pipeline::CatalogPipeline, ConfigProvider};
use crate::domain::model::RunSummary;
use crate::utils::error::{EtlError, ErrorSeverity, Result};
use crate::utils::validation::{validate_required_field, Validate};

/// Validate the configuration, wire the fetcher and sink, and run every department.
pub async fn run_catalog<C: ConfigProvider + Validate>(config: C) -> Result<RunSummary> {
    config.validate()?;

    let client = build_client(config.timeout())?;
    let fetcher = HttpFetcher::new(client.clone());

    if config.dry_run() {
        tracing::info!("Dry run: courses are parsed but not inserted");
        let pipeline = CatalogPipeline::new(fetcher, DryRunSink, config);
        return EtlEngine::new(pipeline).run().await;
    }

    let store_url = config.store_url();
    let store_key = config.store_key();
    let sink = SupabaseSink::new(
        client,
        validate_required_field("SUPABASE_URL", &store_url)?,
        validate_required_field("SUPABASE_KEY", &store_key)?,
    );
    tracing::debug!("Inserting into table {}", config.table());

    let pipeline = CatalogPipeline::new(fetcher, sink, config);
    EtlEngine::new(pipeline).run().await
}

/// Log a fatal error and pick the process exit code from its severity.
pub fn report_failure(e: &EtlError) -> i32 {
    tracing::error!(
        "❌ Catalog ETL failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

pub fn log_summary(summary: &RunSummary) {
    tracing::info!(
        "✅ {} of {} departments processed, {} courses parsed, {} inserted",
        summary.departments_processed,
        summary.departments_found,
        summary.courses_parsed,
        summary.courses_inserted
    );
    if !summary.failed_departments.is_empty() {
        tracing::warn!(
            "Departments with errors: {}",
            summary.failed_departments.join(", ")
        );
    }
}
