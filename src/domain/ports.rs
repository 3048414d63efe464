use crate::config::settings::{ApiSettings, ComponentSettings, PageSettings, WalkSettings};
use crate::domain::model::{Domain, Report};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Destination for rendered reports.
pub trait Storage: Send + Sync {
    /// Creates the output location if needed. Must be idempotent.
    fn ensure_root(&self) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Replaces `name` with `data`, returning the final path.
    fn write_file(
        &self,
        name: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<PathBuf>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn project_root(&self) -> &Path;
    fn source_root(&self) -> PathBuf;
    fn api(&self) -> &ApiSettings;
    fn components(&self) -> &ComponentSettings;
    fn pages(&self) -> &PageSettings;
    fn walk(&self) -> &WalkSettings;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    type Record: Send + Sync;

    fn domain(&self) -> Domain;

    async fn extract(&self) -> Result<Vec<Self::Record>>;

    /// Pure rendering; `generated_at` is the only input besides the records.
    fn transform(&self, records: &[Self::Record], generated_at: Option<&str>) -> Report;
}

impl<T: ConfigProvider + ?Sized> ConfigProvider for std::sync::Arc<T> {
    fn project_root(&self) -> &Path {
        (**self).project_root()
    }

    fn source_root(&self) -> PathBuf {
        (**self).source_root()
    }

    fn api(&self) -> &ApiSettings {
        (**self).api()
    }

    fn components(&self) -> &ComponentSettings {
        (**self).components()
    }

    fn pages(&self) -> &PageSettings {
        (**self).pages()
    }

    fn walk(&self) -> &WalkSettings {
        (**self).walk()
    }
}
