use catalog_etl::app::{log_summary, report_failure};
use catalog_etl::utils::logger;
use catalog_etl::{run_catalog, CliConfig};
use clap::Parser;

#[tokio::main]
async fn main() {
    // .env 先載入，clap 才讀得到 SUPABASE_URL / SUPABASE_KEY
    dotenvy::dotenv().ok();
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting catalog-etl against {}", config.base_url);

    match run_catalog(config).await {
        Ok(summary) => log_summary(&summary),
        Err(e) => {
            let exit_code = report_failure(&e);
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}
