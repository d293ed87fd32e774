pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_required_field, validate_table_name,
    validate_url,
};
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://www.washington.edu/students/crscat/";
pub const DEFAULT_TABLE: &str = "uw_courses";
pub const DEFAULT_DELAY_MS: u64 = 100;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Checks shared by every configuration source.
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_url("base_url", config.base_url())?;
    validate_table_name("table", config.table())?;
    validate_range(
        "delay_ms",
        config.courtesy_delay().as_millis() as u64,
        0,
        60_000,
    )?;
    validate_range("timeout_secs", config.timeout().as_secs(), 1, 600)?;

    if !config.dry_run() {
        let store_url = config.store_url();
        validate_url("SUPABASE_URL", validate_required_field("SUPABASE_URL", &store_url)?)?;
        let store_key = config.store_key();
        validate_non_empty_string("SUPABASE_KEY", validate_required_field("SUPABASE_KEY", &store_key)?)?;
    }

    Ok(())
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "catalog-etl")]
#[command(about = "Scrape a course catalog into a remote course table")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, env = "SUPABASE_URL", hide_env_values = true)]
    pub supabase_url: Option<String>,

    #[arg(long, env = "SUPABASE_KEY", hide_env_values = true)]
    pub supabase_key: Option<String>,

    #[arg(long, default_value = DEFAULT_TABLE)]
    pub table: String,

    /// Pause after each department, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Only scrape these departments (file stems such as `anth`)
    #[arg(long, value_delimiter = ',')]
    pub departments: Vec<String>,

    /// Parse everything but skip the inserts
    #[arg(long)]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn table(&self) -> &str {
        &self.table
    }

    fn courtesy_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn departments(&self) -> &[String] {
        &self.departments
    }

    fn store_url(&self) -> Option<&str> {
        self.supabase_url.as_deref()
    }

    fn store_key(&self) -> Option<&str> {
        self.supabase_key.as_deref()
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::error::EtlError;

    fn parse(args: &[&str]) -> CliConfig {
        let mut argv = vec!["catalog-etl"];
        argv.extend_from_slice(args);
        CliConfig::parse_from(argv)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["--supabase-url", "https://db.test", "--supabase-key", "k"]);
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.table(), "uw_courses");
        assert_eq!(config.courtesy_delay(), Duration::from_millis(100));
        assert!(config.departments().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_department_list() {
        let config = parse(&["--dry-run", "--departments", "anth,larch"]);
        assert_eq!(config.departments(), &["anth".to_string(), "larch".to_string()]);
    }

    #[test]
    fn test_missing_credentials_fail_unless_dry_run() {
        let mut config = parse(&["--dry-run"]);
        config.supabase_url = None;
        config.supabase_key = None;
        assert!(config.validate().is_ok());

        config.dry_run = false;
        assert!(matches!(
            config.validate(),
            Err(EtlError::MissingConfigError { field }) if field == "SUPABASE_URL"
        ));

        config.supabase_url = Some("https://db.test".to_string());
        assert!(matches!(
            config.validate(),
            Err(EtlError::MissingConfigError { field }) if field == "SUPABASE_KEY"
        ));
    }

    #[test]
    fn test_rejects_bad_table_name() {
        let config = parse(&["--dry-run", "--table", "courses;drop"]);
        assert!(config.validate().is_err());
    }
}
