use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_SOURCE_DIR: &str = "src";
pub const DEFAULT_OUTPUT_DIR: &str = ".ai/context";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSettings {
    pub source_dir: String,
    pub output_dir: String,
    pub timestamp: bool,
}

impl Default for ProjectSettings {
    fn default() -> Self {
        Self {
            source_dir: DEFAULT_SOURCE_DIR.to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            timestamp: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiSettings {
    /// API root, relative to the source directory.
    pub root: String,
    /// Glob matched against paths relative to `root`.
    pub pattern: String,
    pub exclude_dirs: Vec<String>,
    pub output_file: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            root: "api".to_string(),
            pattern: "*/index.{ts,js}".to_string(),
            exclude_dirs: vec!["types".to_string()],
            output_file: "existing-apis.md".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentSettings {
    pub root: String,
    /// Recognized UI-source extensions, without the dot.
    pub extensions: Vec<String>,
    pub output_file: String,
}

impl Default for ComponentSettings {
    fn default() -> Self {
        Self {
            root: "components".to_string(),
            extensions: vec!["tsx".to_string()],
            output_file: "existing-components.md".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSettings {
    pub router_file: String,
    pub output_file: String,
    pub not_found_name: String,
    /// Extra display names; merged over the built-in table.
    pub known_routes: HashMap<String, String>,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            router_file: "router/index.tsx".to_string(),
            output_file: "existing-pages.md".to_string(),
            not_found_name: "404 Not Found".to_string(),
            known_routes: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkSettings {
    pub max_depth: usize,
    pub follow_links: bool,
}

impl Default for WalkSettings {
    fn default() -> Self {
        Self {
            max_depth: 8,
            follow_links: false,
        }
    }
}
