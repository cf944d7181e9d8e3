use serde::Serialize;

/// Row of the reference `stations` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Site {
    pub siteid: String,
    pub description: String,
    pub projectid: String,
}

impl Site {
    /// Dropdown label shown in the grid: `"<description> (<siteid>)"`.
    pub fn label(&self) -> String {
        format!("{} ({})", self.description, self.siteid)
    }
}

/// Sorted site catalogue for one project.
#[derive(Debug, Clone, Default)]
pub struct SiteCatalog {
    sites: Vec<Site>,
}

impl SiteCatalog {
    pub fn new(mut sites: Vec<Site>) -> Self {
        sites.sort_by_key(|s| s.label());
        Self { sites }
    }

    pub fn labels(&self) -> Vec<String> {
        self.sites.iter().map(Site::label).collect()
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Label → site id. Unknown values (already bare ids, free text) pass through.
    pub fn id_for(&self, value: &str) -> String {
        self.sites
            .iter()
            .find(|s| s.label() == value)
            .map(|s| s.siteid.clone())
            .unwrap_or_else(|| value.to_string())
    }

    /// Site id → label. Unknown ids pass through.
    pub fn label_for(&self, siteid: &str) -> String {
        let trimmed = siteid.trim();
        if trimmed.is_empty() {
            return siteid.to_string();
        }
        self.sites
            .iter()
            .find(|s| s.siteid == trimmed)
            .map(Site::label)
            .unwrap_or_else(|| siteid.to_string())
    }
}
