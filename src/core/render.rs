//! Markdown rendering for the three context listings.
//!
//! Every function here is pure: the same records and timestamp always give
//! the same bytes.

use crate::domain::model::{ApiModuleRecord, ComponentCategory, ComponentRecord, PageRecord};
use std::fmt::Write;

pub const NONE_PLACEHOLDER: &str = "_None_";

fn header(title: &str, generated_at: Option<&str>) -> String {
    let mut out = format!("# {}\n\n", title);
    if let Some(ts) = generated_at {
        let _ = writeln!(out, "> Generated at {}\n", ts);
    }
    out
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn render_api_report(modules: &[ApiModuleRecord], generated_at: Option<&str>) -> String {
    let mut out = header("Existing APIs", generated_at);

    let listed: Vec<&ApiModuleRecord> = modules.iter().filter(|m| !m.methods.is_empty()).collect();
    if listed.is_empty() {
        let _ = writeln!(out, "{}", NONE_PLACEHOLDER);
        return out;
    }

    for module in listed {
        let _ = writeln!(
            out,
            "## {} module ({})",
            capitalize(&module.name),
            module.relative_path
        );
        for method in &module.methods {
            let _ = writeln!(out, "- {}", method);
        }
        out.push('\n');
    }

    out
}

/// `components_dir` is the components root relative to the source directory,
/// used in section headings so empty categories still show where they live.
pub fn render_component_report(
    components: &[ComponentRecord],
    components_dir: &str,
    generated_at: Option<&str>,
) -> String {
    let mut out = header("Existing Components", generated_at);

    // 依首次出現順序分組，未出現的分類以固定順序補在後面
    let mut groups: Vec<(ComponentCategory, Vec<&ComponentRecord>)> = Vec::new();
    for component in components {
        match groups.iter_mut().find(|(c, _)| *c == component.category) {
            Some((_, items)) => items.push(component),
            None => groups.push((component.category, vec![component])),
        }
    }
    for category in ComponentCategory::ALL {
        if !groups.iter().any(|(c, _)| *c == category) {
            groups.push((category, Vec::new()));
        }
    }

    for (category, items) in groups {
        let _ = writeln!(
            out,
            "## {} components ({}/{}/)",
            category.title(),
            components_dir,
            category.dir_name()
        );
        if items.is_empty() {
            let _ = writeln!(out, "{}", NONE_PLACEHOLDER);
        }
        for item in items {
            let _ = writeln!(out, "- {} - {}", item.name, item.relative_path);
        }
        out.push('\n');
    }

    out
}

pub fn render_page_report(pages: &[PageRecord], generated_at: Option<&str>) -> String {
    let mut out = header("Existing Pages", generated_at);

    if pages.is_empty() {
        let _ = writeln!(out, "{}", NONE_PLACEHOLDER);
        return out;
    }

    for page in pages {
        let _ = writeln!(out, "- {} - {}", page.route_path, page.display_name);
    }

    out
}
