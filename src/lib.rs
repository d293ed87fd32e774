pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;

pub use app::run_catalog;
pub use crate::core::{etl::EtlEngine, header::parse_header, pipeline::CatalogPipeline};
pub use domain::model::{CourseRecord, Department, InsertOutcome, RunSummary};
pub use utils::error::{EtlError, Result};
