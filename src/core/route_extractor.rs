use crate::domain::model::PageRecord;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

pub const CATCH_ALL: &str = "*";

static PATH_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\bpath\s*:\s*(?:"([^"]+)"|'([^']+)'|`([^`]+)`)"#).expect("path pattern is valid")
});

/// Display names for route paths.
#[derive(Debug, Clone)]
pub struct RouteNames {
    known: HashMap<String, String>,
    not_found: String,
}

impl Default for RouteNames {
    fn default() -> Self {
        let known = [("/", "Home"), ("/login", "Login"), ("/dashboard", "Dashboard")]
            .into_iter()
            .map(|(path, name)| (path.to_string(), name.to_string()))
            .collect();

        Self {
            known,
            not_found: "404 Not Found".to_string(),
        }
    }
}

impl RouteNames {
    /// Built-in table with `extra` entries layered on top.
    pub fn new(extra: &HashMap<String, String>, not_found: &str) -> Self {
        let mut names = Self::default();
        names
            .known
            .extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        names.not_found = not_found.to_string();
        names
    }

    pub fn display_name(&self, route_path: &str) -> String {
        match self.known.get(route_path) {
            Some(name) => name.clone(),
            None => route_path
                .strip_prefix('/')
                .unwrap_or(route_path)
                .to_string(),
        }
    }

    pub fn not_found(&self) -> &str {
        &self.not_found
    }
}

/// Every `path` literal in declaration order (wildcard excluded), then the
/// catch-all record last.
pub fn extract_routes(source: &str, names: &RouteNames) -> Vec<PageRecord> {
    let mut pages: Vec<PageRecord> = PATH_LITERAL
        .captures_iter(source)
        .filter_map(|caps| caps.get(1).or(caps.get(2)).or(caps.get(3)))
        .map(|m| m.as_str())
        .filter(|route| *route != CATCH_ALL)
        .map(|route| PageRecord {
            route_path: route.to_string(),
            display_name: names.display_name(route),
        })
        .collect();

    pages.push(PageRecord {
        route_path: CATCH_ALL.to_string(),
        display_name: names.not_found().to_string(),
    });
    pages
}
