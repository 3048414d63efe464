pub mod cli;
pub mod scan_config;
pub mod settings;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "update-context")]
#[command(about = "Regenerate the AI context listings (APIs, components, pages) for a project")]
pub struct CliConfig {
    /// Project root; discovered from the current directory when omitted
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Path to the TOML configuration file (default: <root>/ai-context.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output directory, relative to the project root
    #[arg(long)]
    pub output_dir: Option<String>,

    #[arg(long, help = "Leave the generation timestamp out of the reports")]
    pub no_timestamp: bool,

    #[arg(long, help = "Print the reports instead of writing them")]
    pub dry_run: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_need_no_flags() {
        let config = CliConfig::try_parse_from(["update-context"]).unwrap();
        assert!(config.root.is_none());
        assert!(config.config.is_none());
        assert!(!config.no_timestamp);
        assert!(!config.dry_run);
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::try_parse_from([
            "update-context",
            "--root",
            "/work/admin",
            "--output-dir",
            "docs/context",
            "--no-timestamp",
            "--log-format",
            "json",
            "-v",
        ])
        .unwrap();

        assert_eq!(config.root, Some(PathBuf::from("/work/admin")));
        assert_eq!(config.output_dir.as_deref(), Some("docs/context"));
        assert!(config.no_timestamp);
        assert!(config.verbose);
        assert_eq!(config.log_format, LogFormat::Json);
    }
}
