use crate::core::render::render_page_report;
use crate::core::route_extractor::{extract_routes, RouteNames};
use crate::domain::model::{Domain, PageRecord, Report};
use crate::domain::ports::{ConfigProvider, Pipeline};
use crate::utils::error::{ContextError, Result};

pub struct PagePipeline<C: ConfigProvider> {
    config: C,
    names: RouteNames,
}

impl<C: ConfigProvider> PagePipeline<C> {
    pub fn new(config: C) -> Self {
        let pages = config.pages();
        let names = RouteNames::new(&pages.known_routes, &pages.not_found_name);
        Self { config, names }
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for PagePipeline<C> {
    type Record = PageRecord;

    fn domain(&self) -> Domain {
        Domain::Pages
    }

    async fn extract(&self) -> Result<Vec<PageRecord>> {
        let router_path = self
            .config
            .source_root()
            .join(&self.config.pages().router_file);

        if !router_path.is_file() {
            return Err(ContextError::SourceRootMissing {
                domain: Domain::Pages,
                path: router_path,
            });
        }

        let content = std::fs::read_to_string(&router_path)?;
        let pages = extract_routes(&content, &self.names);
        tracing::debug!(
            "Found {} routes in {}",
            pages.len() - 1,
            router_path.display()
        );

        Ok(pages)
    }

    fn transform(&self, records: &[PageRecord], generated_at: Option<&str>) -> Report {
        Report {
            domain: Domain::Pages,
            file_name: self.config.pages().output_file.clone(),
            content: render_page_report(records, generated_at),
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

    #[tokio::test]
    async fn test_wildcard_first_still_ends_last() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/router")).unwrap();
        fs::write(
            dir.path().join("src/router/index.tsx"),
            "[{ path: '*' }, { path: '/' }, { path: '/login' }]",
        )
        .unwrap();

        let pipeline = PagePipeline::new(ScanConfig::with_defaults(dir.path()));
        let pages = pipeline.extract().await.unwrap();

        let paths: Vec<&str> = pages.iter().map(|p| p.route_path.as_str()).collect();
        assert_eq!(paths, vec!["/", "/login", "*"]);
        assert_eq!(pages[2].display_name, "404 Not Found");
    }

    #[tokio::test]
    async fn test_missing_router_is_domain_error() {
        let dir = TempDir::new().unwrap();
        let pipeline = PagePipeline::new(ScanConfig::with_defaults(dir.path()));

        assert!(pipeline.extract().await.is_err());
        let report = pipeline.transform(&[], None);
        assert_eq!(report.record_count, 0);
        assert_eq!(report.file_name, "existing-pages.md");
    }
}
