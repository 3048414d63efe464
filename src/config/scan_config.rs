use crate::config::settings::{ApiSettings, ComponentSettings, PageSettings, WalkSettings};
use crate::config::toml_config::TomlConfig;
use crate::core::walker::compile_pattern;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_distinct, validate_extension_list, validate_file_extensions,
    validate_non_empty_string, validate_path, validate_range, Validate,
};
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
use crate::config::CliConfig;

pub const CONFIG_FILE_NAME: &str = "ai-context.toml";

/// Files that mark a directory as the project root.
const ROOT_MARKERS: [&str; 2] = [CONFIG_FILE_NAME, "package.json"];

/// Fully resolved settings for one run, built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    pub project_root: PathBuf,
    pub source_dir: String,
    pub output_dir: String,
    pub timestamp: bool,
    pub api: ApiSettings,
    pub components: ComponentSettings,
    pub pages: PageSettings,
    pub walk: WalkSettings,
}

impl ScanConfig {
    pub fn from_toml(project_root: impl Into<PathBuf>, toml: TomlConfig) -> Self {
        Self {
            project_root: project_root.into(),
            source_dir: toml.project.source_dir,
            output_dir: toml.project.output_dir,
            timestamp: toml.project.timestamp,
            api: toml.api,
            components: toml.components,
            pages: toml.pages,
            walk: toml.walk,
        }
    }

    pub fn with_defaults(project_root: impl Into<PathBuf>) -> Self {
        Self::from_toml(project_root, TomlConfig::default())
    }

    /// Directory the three reports are written to.
    pub fn output_path(&self) -> PathBuf {
        self.project_root.join(&self.output_dir)
    }

    /// Builds the run configuration from command-line arguments: root
    /// discovery, optional config file, then flag overrides.
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let project_root = match &cli.root {
            Some(root) => root.clone(),
            None => discover_project_root(&std::env::current_dir()?),
        };

        let config_path = cli.config.clone().or_else(|| {
            let candidate = project_root.join(CONFIG_FILE_NAME);
            candidate.is_file().then_some(candidate)
        });

        let toml = match &config_path {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let mut config = Self::from_toml(project_root, toml);
        if let Some(output_dir) = &cli.output_dir {
            config.output_dir = output_dir.clone();
        }
        if cli.no_timestamp {
            config.timestamp = false;
        }

        config.validate()?;
        Ok(config)
    }
}

/// Walks up from `start` to the first directory holding a root marker,
/// falling back to `start` itself.
pub fn discover_project_root(start: &Path) -> PathBuf {
    start
        .ancestors()
        .find(|dir| ROOT_MARKERS.iter().any(|marker| dir.join(marker).is_file()))
        .unwrap_or(start)
        .to_path_buf()
}

impl ConfigProvider for ScanConfig {
    fn project_root(&self) -> &Path {
        &self.project_root
    }

    fn source_root(&self) -> PathBuf {
        self.project_root.join(&self.source_dir)
    }

    fn api(&self) -> &ApiSettings {
        &self.api
    }

    fn components(&self) -> &ComponentSettings {
        &self.components
    }

    fn pages(&self) -> &PageSettings {
        &self.pages
    }

    fn walk(&self) -> &WalkSettings {
        &self.walk
    }
}

impl Validate for ScanConfig {
    fn validate(&self) -> Result<()> {
        validate_path("project.source_dir", &self.source_dir)?;
        validate_path("project.output_dir", &self.output_dir)?;
        validate_path("api.root", &self.api.root)?;
        validate_path("components.root", &self.components.root)?;
        validate_path("pages.router_file", &self.pages.router_file)?;

        validate_non_empty_string("api.pattern", &self.api.pattern)?;
        compile_pattern(&self.api.pattern)?;

        validate_extension_list("components.extensions", &self.components.extensions)?;
        validate_non_empty_string("pages.not_found_name", &self.pages.not_found_name)?;

        let output_files = [
            self.api.output_file.as_str(),
            self.components.output_file.as_str(),
            self.pages.output_file.as_str(),
        ];
        validate_file_extensions("output_file", &output_files, &["md", "markdown"])?;
        validate_distinct("output_file", &output_files)?;

        validate_range("walk.max_depth", self.walk.max_depth, 1, 64)?;

        Ok(())
    }
}
