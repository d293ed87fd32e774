use anyhow::Context;
use catalog_etl::app::{log_summary, report_failure};
use catalog_etl::core::ConfigProvider;
use catalog_etl::utils::logger;
use catalog_etl::{run_catalog, TomlConfig};
use clap::Parser;

#[derive(Parser)]
#[command(name = "toml-etl")]
#[command(about = "Catalog ETL driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "catalog-etl.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the dry-run setting from the config
    #[arg(long)]
    dry_run: Option<bool>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    dotenvy::dotenv().ok();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let mut config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("failed to load config file '{}'", args.config))?;

    // 應用命令列覆蓋設定
    if let Some(dry_run) = args.dry_run {
        config.run.dry_run = dry_run;
        tracing::info!("🔧 Dry run overridden to: {}", dry_run);
    }

    tracing::info!(
        "Source: {} | table: {} | delay: {:?} | departments: {}",
        config.base_url(),
        config.table(),
        config.courtesy_delay(),
        if config.departments().is_empty() {
            "all".to_string()
        } else {
            config.departments().join(",")
        }
    );

    match run_catalog(config).await {
        Ok(summary) => log_summary(&summary),
        Err(e) => {
            let exit_code = report_failure(&e);
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
