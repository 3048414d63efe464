pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, LogFormat};

pub use app::pipelines::{ApiPipeline, ComponentPipeline, PagePipeline};
pub use config::cli::LocalStorage;
pub use config::scan_config::ScanConfig;
pub use core::engine::ContextEngine;
pub use domain::model::{Domain, ScanSummary};
pub use utils::error::{ContextError, Result};
