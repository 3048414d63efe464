use ai_context::utils::logger;
use ai_context::{
    ApiPipeline, CliConfig, ComponentPipeline, ContextEngine, ContextError, Domain, LocalStorage,
    LogFormat, PagePipeline, ScanConfig, ScanSummary,
};
use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    match cli.log_format {
        LogFormat::Compact => logger::init_cli_logger(cli.verbose),
        LogFormat::Json => logger::init_json_logger(cli.verbose),
    }

    tracing::info!("🤖 Starting AI context update");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match ScanConfig::resolve(&cli) {
        Ok(config) => Arc::new(config),
        Err(e) => exit_with(&e),
    };
    tracing::info!("📂 Project root: {}", config.project_root.display());

    let storage = LocalStorage::new(config.output_path());
    let engine = ContextEngine::new(storage)
        .with_timestamp(config.timestamp)
        .with_dry_run(cli.dry_run);

    let apis = ApiPipeline::new(Arc::clone(&config));
    let components = ComponentPipeline::new(Arc::clone(&config));
    let pages = PagePipeline::new(Arc::clone(&config));

    let summary = match engine.run(&apis, &components, &pages).await {
        Ok(summary) => summary,
        Err(e) => exit_with(&e),
    };

    if cli.dry_run {
        print_reports(&summary).context("failed to print reports")?;
    }
    print_summary(&summary, &config);

    Ok(())
}

fn exit_with(e: &ContextError) -> ! {
    tracing::error!(
        "❌ Context update failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code().max(1));
}

fn print_reports(summary: &ScanSummary) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    for outcome in &summary.outcomes {
        writeln!(stdout, "===== {} =====", outcome.report.file_name)?;
        stdout.write_all(outcome.report.content.as_bytes())?;
        writeln!(stdout)?;
    }
    stdout.flush()
}

fn print_summary(summary: &ScanSummary, config: &ScanConfig) {
    println!("✅ Context update finished");
    println!("   - API modules: {}", summary.count(Domain::Apis));
    println!("   - Components: {}", summary.count(Domain::Components));
    println!("   - Pages: {}", summary.count(Domain::Pages));

    for domain in summary.degraded_domains() {
        println!("⚠️ {} listing is empty because its sources could not be scanned", domain);
    }

    let written = summary.written_paths();
    if !written.is_empty() {
        println!("📁 Files saved to: {}", config.output_path().display());
        for path in written {
            println!("   - {}", path.display());
        }
    }
}
