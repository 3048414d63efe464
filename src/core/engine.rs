use crate::core::Pipeline;
use crate::domain::model::{DomainOutcome, Report, ScanSummary};
use crate::domain::ports::Storage;
use crate::utils::error::Result;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct ContextEngine<S: Storage> {
    storage: S,
    timestamp: bool,
    dry_run: bool,
}

/// A scanned and rendered domain, before it is written.
struct Rendered {
    report: Report,
    degraded: bool,
}

impl<S: Storage> ContextEngine<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            timestamp: true,
            dry_run: false,
        }
    }

    pub fn with_timestamp(mut self, timestamp: bool) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Render everything but leave the file system untouched.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub async fn run<A, C, P>(&self, apis: &A, components: &C, pages: &P) -> Result<ScanSummary>
    where
        A: Pipeline,
        C: Pipeline,
        P: Pipeline,
    {
        tracing::info!("🔄 Updating project context...");

        // 輸出目錄建立失敗屬於致命錯誤
        if !self.dry_run {
            self.storage.ensure_root().await?;
        }

        let generated_at = self
            .timestamp
            .then(|| chrono::Local::now().format(TIMESTAMP_FORMAT).to_string());
        let generated_at = generated_at.as_deref();

        // 三個領域互不依賴，可同時掃描
        let (api_report, component_report, page_report) = tokio::join!(
            Self::scan(apis, generated_at),
            Self::scan(components, generated_at),
            Self::scan(pages, generated_at),
        );

        let mut summary = ScanSummary::default();
        for rendered in [api_report, component_report, page_report] {
            summary.outcomes.push(self.load(rendered).await?);
        }

        Ok(summary)
    }

    async fn scan<P: Pipeline>(pipeline: &P, generated_at: Option<&str>) -> Rendered {
        let domain = pipeline.domain();
        tracing::info!("🔍 Scanning {} sources...", domain);

        let (records, degraded) = match pipeline.extract().await {
            Ok(records) => (records, false),
            Err(e) => {
                tracing::warn!(
                    "⚠️ {} scan failed, writing an empty report: {} ({:?})",
                    domain,
                    e,
                    e.category()
                );
                (Vec::new(), true)
            }
        };

        let report = pipeline.transform(&records, generated_at);
        tracing::info!("✅ {} listing ready: {} entries", domain, report.record_count);

        Rendered { report, degraded }
    }

    async fn load(&self, rendered: Rendered) -> Result<DomainOutcome> {
        let Rendered { report, degraded } = rendered;

        if self.dry_run {
            tracing::info!("📝 Dry run, not writing {}", report.file_name);
            return Ok(DomainOutcome {
                report,
                degraded,
                written_to: None,
            });
        }

        let path = self
            .storage
            .write_file(&report.file_name, report.content.as_bytes())
            .await?;
        tracing::debug!("Wrote {}", path.display());

        Ok(DomainOutcome {
            report,
            degraded,
            written_to: Some(path),
        })
    }
}
