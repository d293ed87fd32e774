use crate::config::{
    validate_provider, DEFAULT_BASE_URL, DEFAULT_DELAY_MS, DEFAULT_TABLE, DEFAULT_TIMEOUT_SECS,
};
use crate::core::ConfigProvider;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::Validate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

static ENV_VAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub source: SourceConfig,
    pub sink: SinkConfig,
    pub run: RunConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SinkConfig {
    pub url: Option<String>,
    pub key: Option<String>,
    pub table: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub delay_ms: Option<u64>,
    pub dry_run: bool,
    pub departments: Vec<String>,
}

/// A value still carrying a `${VAR}` placeholder counts as unset.
fn resolved(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .filter(|v| !ENV_VAR_PATTERN.is_match(v) && !v.trim().is_empty())
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| EtlError::ConfigError {
                message: format!("cannot read {}: {}", path.as_ref().display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SUPABASE_KEY})；未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }
}

impl ConfigProvider for TomlConfig {
    fn base_url(&self) -> &str {
        self.source.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    fn table(&self) -> &str {
        self.sink.table.as_deref().unwrap_or(DEFAULT_TABLE)
    }

    fn courtesy_delay(&self) -> Duration {
        Duration::from_millis(self.run.delay_ms.unwrap_or(DEFAULT_DELAY_MS))
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    fn departments(&self) -> &[String] {
        &self.run.departments
    }

    fn store_url(&self) -> Option<&str> {
        resolved(&self.sink.url)
    }

    fn store_key(&self) -> Option<&str> {
        resolved(&self.sink.key)
    }

    fn dry_run(&self) -> bool {
        self.run.dry_run
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[source]
base_url = "https://catalog.example.edu/crscat/"
timeout_seconds = 10

[sink]
url = "https://project.supabase.co"
key = "service-key"
table = "courses"

[run]
delay_ms = 250
departments = ["anth", "larch"]
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.base_url(), "https://catalog.example.edu/crscat/");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.table(), "courses");
        assert_eq!(config.courtesy_delay(), Duration::from_millis(250));
        assert_eq!(config.departments().len(), 2);
        assert_eq!(config.store_key(), Some("service-key"));
        assert!(!config.dry_run());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.table(), DEFAULT_TABLE);
        assert_eq!(config.courtesy_delay(), Duration::from_millis(100));
        assert!(config.departments().is_empty());
        // no store credentials
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CATALOG_ETL_TEST_STORE_URL", "https://substituted.supabase.co");

        let toml_content = r#"
[sink]
url = "${CATALOG_ETL_TEST_STORE_URL}"
key = "${CATALOG_ETL_TEST_UNSET_KEY}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.store_url(), Some("https://substituted.supabase.co"));
        assert_eq!(config.store_key(), None);
        assert!(matches!(
            config.validate(),
            Err(EtlError::MissingConfigError { field }) if field == "SUPABASE_KEY"
        ));

        std::env::remove_var("CATALOG_ETL_TEST_STORE_URL");
    }

    #[test]
    fn test_dry_run_needs_no_credentials() {
        let config = TomlConfig::from_toml_str("[run]\ndry_run = true\n").unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[run\ndelay_ms = 1").unwrap_err();
        assert!(matches!(err, EtlError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_unreadable_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");

        let err = TomlConfig::from_file(&missing).unwrap_err();

        match err {
            EtlError::ConfigError { message } => assert!(message.contains("missing.toml")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[source]\nbase_url = \"http://localhost:9000/crscat\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.base_url(), "http://localhost:9000/crscat");
    }
}
