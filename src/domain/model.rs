use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// One of the three scan targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Apis,
    Components,
    Pages,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Apis, Domain::Components, Domain::Pages];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Apis => "apis",
            Domain::Components => "components",
            Domain::Pages => "pages",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Domain::Apis => "API",
            Domain::Components => "Component",
            Domain::Pages => "Page",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiModuleRecord {
    pub name: String,
    pub relative_path: String,
    pub methods: Vec<String>,
}

/// Fixed component category roots, in canonical report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentCategory {
    Layout,
    Business,
    Common,
}

impl ComponentCategory {
    pub const ALL: [ComponentCategory; 3] = [
        ComponentCategory::Layout,
        ComponentCategory::Business,
        ComponentCategory::Common,
    ];

    /// Directory name under the components root.
    pub fn dir_name(&self) -> &'static str {
        match self {
            ComponentCategory::Layout => "layout",
            ComponentCategory::Business => "business",
            ComponentCategory::Common => "common",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ComponentCategory::Layout => "Layout",
            ComponentCategory::Business => "Business",
            ComponentCategory::Common => "Common",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRecord {
    pub name: String,
    pub relative_path: String,
    pub category: ComponentCategory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub route_path: String,
    pub display_name: String,
}

/// A rendered Markdown listing for one domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub domain: Domain,
    pub file_name: String,
    pub content: String,
    pub record_count: usize,
}

#[derive(Debug, Clone)]
pub struct DomainOutcome {
    pub report: Report,
    /// The domain's extraction failed and the report was rendered from zero records.
    pub degraded: bool,
    pub written_to: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct ScanSummary {
    pub outcomes: Vec<DomainOutcome>,
}

impl ScanSummary {
    pub fn outcome(&self, domain: Domain) -> Option<&DomainOutcome> {
        self.outcomes.iter().find(|o| o.report.domain == domain)
    }

    pub fn count(&self, domain: Domain) -> usize {
        self.outcome(domain)
            .map(|o| o.report.record_count)
            .unwrap_or(0)
    }

    pub fn degraded_domains(&self) -> Vec<Domain> {
        self.outcomes
            .iter()
            .filter(|o| o.degraded)
            .map(|o| o.report.domain)
            .collect()
    }

    pub fn written_paths(&self) -> Vec<&PathBuf> {
        self.outcomes
            .iter()
            .filter_map(|o| o.written_to.as_ref())
            .collect()
    }
}
