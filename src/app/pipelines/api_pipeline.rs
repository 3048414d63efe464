use crate::core::api_extractor::extract_api_methods;
use crate::core::render::render_api_report;
use crate::core::walker::{to_slash, DirectoryWalker, EntryKind, WalkOptions};
use crate::domain::model::{ApiModuleRecord, Domain, Report};
use crate::domain::ports::{ConfigProvider, Pipeline};
use crate::utils::error::{ContextError, Result};
use std::collections::HashSet;
use std::path::Path;

pub struct ApiPipeline<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> ApiPipeline<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for ApiPipeline<C> {
    type Record = ApiModuleRecord;

    fn domain(&self) -> Domain {
        Domain::Apis
    }

    async fn extract(&self) -> Result<Vec<ApiModuleRecord>> {
        let settings = self.config.api();
        let api_root = self.config.source_root().join(&settings.root);

        if !api_root.is_dir() {
            return Err(ContextError::SourceRootMissing {
                domain: Domain::Apis,
                path: api_root,
            });
        }

        let options = WalkOptions::default()
            .with_max_depth(self.config.walk().max_depth)
            .with_follow_links(self.config.walk().follow_links)
            .with_pattern(&settings.pattern)?
            .with_excluded_dirs(&settings.exclude_dirs);
        let walker = DirectoryWalker::new(&api_root, options);
        let api_prefix = to_slash(Path::new(&settings.root));

        let mut modules = Vec::new();
        let mut seen = HashSet::new();
        for entry in walker.entries().filter(|e| e.kind == EntryKind::File) {
            // 模組名稱取自 index 檔所在的目錄
            let Some(module_dir) = entry.relative.parent().filter(|p| !p.as_os_str().is_empty())
            else {
                tracing::debug!("Skipping {} outside a module directory", entry.relative_slash());
                continue;
            };
            let Some(name) = module_dir.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            // 同一目錄只取排序後的第一個 index 檔
            if !seen.insert(module_dir.to_path_buf()) {
                tracing::debug!(
                    "API module '{}' already taken, skipping {}",
                    name,
                    entry.relative_slash()
                );
                continue;
            }

            let content = match std::fs::read_to_string(&entry.path) {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!("⚠️ Failed to read {}: {}", entry.path.display(), e);
                    continue;
                }
            };

            let methods = extract_api_methods(&content);
            if methods.is_empty() {
                tracing::debug!("API module '{}' exports no methods, leaving it out", name);
                continue;
            }

            tracing::debug!("API module '{}': {} methods", name, methods.len());
            modules.push(ApiModuleRecord {
                name: name.to_string(),
                relative_path: format!("{}/{}/", api_prefix, to_slash(module_dir)),
                methods,
            });
        }

        Ok(modules)
    }

    fn transform(&self, records: &[ApiModuleRecord], generated_at: Option<&str>) -> Report {
        Report {
            domain: Domain::Apis,
            file_name: self.config.api().output_file.clone(),
            content: render_api_report(records, generated_at),
            record_count: records.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::scan_config::ScanConfig;
    use std::fs;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &[u8]) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[tokio::test]
    async fn test_unreadable_module_is_skipped() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "src/api/broken/index.ts", &[0xff, 0xfe, 0x00]);
        write(
            dir.path(),
            "src/api/orders/index.ts",
            b"export const ordersApi = { create: (d) => request.post('/orders', d) };",
        );

        let pipeline = ApiPipeline::new(ScanConfig::with_defaults(dir.path()));
        let modules = pipeline.extract().await.unwrap();

        assert_eq!(modules.len(), 1);
        assert_eq!(modules[0].name, "orders");
        assert_eq!(modules[0].relative_path, "api/orders/");
        assert_eq!(modules[0].methods, vec!["create"]);
    }

    #[tokio::test]
    async fn test_missing_api_root_is_domain_error() {
        let dir = TempDir::new().unwrap();
        let pipeline = ApiPipeline::new(ScanConfig::with_defaults(dir.path()));

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(
            err,
            ContextError::SourceRootMissing {
                domain: Domain::Apis,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_module_with_two_index_files_listed_once() {
        let dir = TempDir::new().unwrap();
        write(
            dir.path(),
            "src/api/users/index.js",
            b"export const usersApi = { list: () => 1 };",
        );
        write(
            dir.path(),
            "src/api/users/index.ts",
            b"export const usersApi = { list: () => 1, detail: (id) => id };",
        );

        let pipeline = ApiPipeline::new(ScanConfig::with_defaults(dir.path()));
        let modules = pipeline.extract().await.unwrap();

        let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["users"]);
        assert_eq!(modules[0].methods, vec!["list"]);

        let report = pipeline.transform(&modules, None);
        assert_eq!(report.content.matches("(api/users/)").count(), 1);
    }

    #[tokio::test]
    async fn test_index_at_api_root_is_not_a_module() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "src/api/index.ts", b"export default { list: () => 1 }");

        let mut config = ScanConfig::with_defaults(dir.path());
        config.api.pattern = "**/index.ts".to_string();
        let pipeline = ApiPipeline::new(config);

        assert!(pipeline.extract().await.unwrap().is_empty());
    }
}
