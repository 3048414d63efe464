use crate::core::component_classifier::classify_entry;
use crate::core::render::render_component_report;
use crate::core::walker::{to_slash, DirectoryWalker, WalkOptions};
use crate::domain::model::{ComponentCategory, ComponentRecord, Domain, Report};
use crate::domain::ports::{ConfigProvider, Pipeline};
use crate::utils::error::{ContextError, Result};
use std::collections::HashSet;
use std::path::Path;

pub struct ComponentPipeline<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> ComponentPipeline<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    fn components_prefix(&self) -> String {
        to_slash(Path::new(&self.config.components().root))
    }
}

#[async_trait::async_trait]
impl<C: ConfigProvider> Pipeline for ComponentPipeline<C> {
    type Record = ComponentRecord;

    fn domain(&self) -> Domain {
        Domain::Components
    }

    async fn extract(&self) -> Result<Vec<ComponentRecord>> {
        let settings = self.config.components();
        let components_root = self.config.source_root().join(&settings.root);

        if !components_root.is_dir() {
            return Err(ContextError::SourceRootMissing {
                domain: Domain::Components,
                path: components_root,
            });
        }

        let prefix = self.components_prefix();
        let mut components = Vec::new();

        for category in ComponentCategory::ALL {
            let category_dir = components_root.join(category.dir_name());
            if !category_dir.is_dir() {
                tracing::debug!("No {} directory, skipping", category_dir.display());
                continue;
            }

            let walker = DirectoryWalker::new(
                &category_dir,
                WalkOptions::children().with_follow_links(self.config.walk().follow_links),
            );
            let category_prefix = format!("{}/{}", prefix, category.dir_name());
            let mut seen = HashSet::new();

            for entry in walker.entries() {
                match classify_entry(
                    category,
                    &category_dir,
                    &category_prefix,
                    &entry,
                    &settings.extensions,
                ) {
                    // 目錄與同名檔案只列一次
                    Some(record) if seen.insert(record.name.clone()) => components.push(record),
                    Some(record) => {
                        tracing::debug!("Component '{}' already listed", record.name)
                    }
                    None => tracing::debug!("Not a component: {}", entry.path.display()),
                }
            }
        }

        Ok(components)
    }

    fn transform(&self, records: &[ComponentRecord], generated_at: Option<&str>) -> Report {
        Report {
            domain: Domain::Components,
            file_name: self.config.components().output_file.clone(),
            content: render_component_report(records, &self.components_prefix(), generated_at),
            record_count: records.len(),
        }
    }
}
