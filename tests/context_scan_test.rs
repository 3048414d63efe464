use ai_context::{
    ApiPipeline, ComponentPipeline, ContextEngine, Domain, LocalStorage, PagePipeline, ScanConfig,
    ScanSummary,
};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn sample_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    write(root, "package.json", "{}");
    write(
        root,
        "src/api/users/index.ts",
        r#"import request from '@/plugins/request';

export const usersApi = {
  get: request.get,
  post: request.post,
  list: (params: ListParams) => request.get('/users', { params }),
  export: (id: number) => request.get(`/users/${id}/export`),
};
"#,
    );
    write(
        root,
        "src/api/types/index.ts",
        "export const typesApi = { shouldNotAppear: () => 1 };",
    );
    write(
        root,
        "src/api/health/index.ts",
        "export const healthApi = { get: request.get };",
    );
    write(root, "src/components/common/Button/index.tsx", "");
    write(root, "src/components/common/Badge.tsx", "");
    write(root, "src/components/layout/MainLayout/index.tsx", "");
    write(root, "src/components/common/styles.css", "");
    write(
        root,
        "src/router/index.tsx",
        r#"export const routes = [
  { path: '/', element: <Home /> },
  { path: '/login', element: <Login /> },
  { path: '/settings', element: <Settings /> },
  { path: '*', element: <NotFound /> },
];
"#,
    );

    dir
}

async fn scan(config: ScanConfig, timestamp: bool) -> ai_context::Result<ScanSummary> {
    let config = Arc::new(config);
    let engine =
        ContextEngine::new(LocalStorage::new(config.output_path())).with_timestamp(timestamp);

    let apis = ApiPipeline::new(Arc::clone(&config));
    let components = ComponentPipeline::new(Arc::clone(&config));
    let pages = PagePipeline::new(Arc::clone(&config));

    engine.run(&apis, &components, &pages).await
}

fn read_output(root: &Path, name: &str) -> String {
    fs::read_to_string(root.join(".ai/context").join(name)).unwrap()
}

#[tokio::test]
async fn test_full_scan_writes_three_reports() {
    let project = sample_project();
    let root = project.path();

    let summary = scan(ScanConfig::with_defaults(root), false).await.unwrap();

    assert_eq!(summary.count(Domain::Apis), 1);
    assert_eq!(summary.count(Domain::Components), 3);
    assert_eq!(summary.count(Domain::Pages), 4);
    assert!(summary.degraded_domains().is_empty());
    assert_eq!(summary.written_paths().len(), 3);

    let apis = read_output(root, "existing-apis.md");
    assert_eq!(
        apis,
        "# Existing APIs\n\n## Users module (api/users/)\n- list\n- export\n\n"
    );

    let components = read_output(root, "existing-components.md");
    assert_eq!(
        components,
        "# Existing Components\n\n\
         ## Layout components (components/layout/)\n\
         - MainLayout - components/layout/MainLayout/\n\n\
         ## Common components (components/common/)\n\
         - Badge - components/common/Badge.tsx\n\
         - Button - components/common/Button/\n\n\
         ## Business components (components/business/)\n\
         _None_\n\n"
    );

    let pages = read_output(root, "existing-pages.md");
    assert_eq!(
        pages,
        "# Existing Pages\n\n\
         - / - Home\n\
         - /login - Login\n\
         - /settings - settings\n\
         - * - 404 Not Found\n"
    );
}

#[tokio::test]
async fn test_empty_source_tree_renders_placeholders() {
    let project = TempDir::new().unwrap();
    fs::create_dir(project.path().join("src")).unwrap();

    let summary = scan(ScanConfig::with_defaults(project.path()), false)
        .await
        .unwrap();

    assert_eq!(summary.degraded_domains(), Domain::ALL.to_vec());
    for outcome in &summary.outcomes {
        let text = &outcome.report.content;
        assert_eq!(text.lines().filter(|l| l.starts_with("- ")).count(), 0);
        assert!(text.contains("_None_"));
    }

    let components = read_output(project.path(), "existing-components.md");
    assert_eq!(components.matches("_None_").count(), 3);
}

#[tokio::test]
async fn test_missing_router_does_not_block_other_reports() {
    let project = sample_project();
    fs::remove_file(project.path().join("src/router/index.tsx")).unwrap();

    let summary = scan(ScanConfig::with_defaults(project.path()), false)
        .await
        .unwrap();

    assert_eq!(summary.degraded_domains(), vec![Domain::Pages]);
    assert_eq!(summary.count(Domain::Apis), 1);
    assert_eq!(summary.count(Domain::Components), 3);
    assert_eq!(
        read_output(project.path(), "existing-pages.md"),
        "# Existing Pages\n\n_None_\n"
    );
}

#[tokio::test]
async fn test_rerun_is_byte_identical() {
    let project = sample_project();
    let root = project.path();

    scan(ScanConfig::with_defaults(root), false).await.unwrap();
    let first: Vec<String> = ["existing-apis.md", "existing-components.md", "existing-pages.md"]
        .iter()
        .map(|name| read_output(root, name))
        .collect();

    scan(ScanConfig::with_defaults(root), false).await.unwrap();
    let second: Vec<String> = ["existing-apis.md", "existing-components.md", "existing-pages.md"]
        .iter()
        .map(|name| read_output(root, name))
        .collect();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_timestamp_is_the_only_difference() {
    let project = sample_project();
    let root = project.path();

    scan(ScanConfig::with_defaults(root), true).await.unwrap();
    let stamped = read_output(root, "existing-pages.md");
    scan(ScanConfig::with_defaults(root), false).await.unwrap();
    let plain = read_output(root, "existing-pages.md");

    let without_stamp: String = stamped
        .split_inclusive('\n')
        .filter(|line| !line.starts_with("> Generated at "))
        .collect::<String>()
        .replacen("\n\n\n", "\n\n", 1);
    assert_eq!(without_stamp, plain);
}

#[tokio::test]
async fn test_previous_reports_are_replaced() {
    let project = sample_project();
    let root = project.path();
    write(root, ".ai/context/existing-apis.md", "stale listing that must disappear\n");

    scan(ScanConfig::with_defaults(root), false).await.unwrap();

    let apis = read_output(root, "existing-apis.md");
    assert!(!apis.contains("stale"));
    assert!(apis.starts_with("# Existing APIs"));
}

#[tokio::test]
async fn test_unwritable_output_is_fatal() {
    let project = sample_project();
    write(project.path(), "blocked", "");

    let mut config = ScanConfig::with_defaults(project.path());
    config.output_dir = "blocked/context".to_string();

    let err = scan(config, false).await.unwrap_err();
    assert!(err.is_fatal());
    assert_eq!(err.exit_code(), 1);
}

#[tokio::test]
async fn test_custom_layout_from_config() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    write(
        root,
        "app/services/billing/index.js",
        "export default { invoices: () => fetch('/invoices') }",
    );
    write(root, "app/ui/business/Chart.vue", "");
    write(
        root,
        "app/routes.ts",
        "[{ path: '/reports' }, { path: '/audit' }]",
    );

    let toml = ai_context::config::toml_config::TomlConfig::from_toml_str(
        r#"
[project]
source_dir = "app"
output_dir = "docs"

[api]
root = "services"

[components]
root = "ui"
extensions = ["vue"]

[pages]
router_file = "routes.ts"
not_found_name = "Not found"

[pages.known_routes]
"/reports" = "Reports"
"#,
    )
    .unwrap();
    let config = ScanConfig::from_toml(root, toml);

    let summary = scan(config, false).await.unwrap();
    assert!(summary.degraded_domains().is_empty());

    let apis = fs::read_to_string(root.join("docs/existing-apis.md")).unwrap();
    assert!(apis.contains("## Billing module (services/billing/)\n- invoices\n"));

    let components = fs::read_to_string(root.join("docs/existing-components.md")).unwrap();
    assert!(components.contains("## Business components (ui/business/)\n- Chart - ui/business/Chart.vue\n"));

    let pages = fs::read_to_string(root.join("docs/existing-pages.md")).unwrap();
    assert!(pages.ends_with("- /reports - Reports\n- /audit - audit\n- * - Not found\n"));
}
