//! Core domain types for a docs configuration set.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// Common view over anything that can appear in the generated index.
pub trait DocsItem {
    /// Display name, also used as the reference-link label.
    fn name(&self) -> &str;
    /// Link fragment relative to [`DocsItem::target_root`], if any.
    fn link(&self) -> Option<&str>;
    /// Directory the item's own docs were written to.
    fn target_root(&self) -> &Path;
}

/// The root application being documented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppEntry {
    /// Application name.
    pub name: String,
    /// Short description rendered below the name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Link fragment (may include a `#anchor`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Directory the app docs were generated into.
    pub target_root: PathBuf,
}

/// A plugin, preset, module, structure, command, lifecycle, or transform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsEntry {
    /// Entry name, unique within its category.
    pub name: String,
    /// Short description for the table row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Link fragment (may include a `#anchor`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Display version, only shown for versioned categories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Directory the entry's docs were generated into.
    pub target_root: PathBuf,
}

impl DocsEntry {
    /// Convenience constructor for an unlinked entry.
    pub fn new(name: impl Into<String>, target_root: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            description: None,
            link: None,
            version: None,
            target_root: target_root.into(),
        }
    }
}

/// Treat `Some("")` the same as `None`.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl DocsItem for AppEntry {
    fn name(&self) -> &str {
        &self.name
    }
    fn link(&self) -> Option<&str> {
        non_empty(&self.link)
    }
    fn target_root(&self) -> &Path {
        &self.target_root
    }
}

impl DocsItem for DocsEntry {
    fn name(&self) -> &str {
        &self.name
    }
    fn link(&self) -> Option<&str> {
        non_empty(&self.link)
    }
    fn target_root(&self) -> &Path {
        &self.target_root
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// A renderable entry category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Plugins,
    Presets,
    Modules,
    Commands,
    Lifecycles,
    Structures,
}

/// Static rendering metadata for a [`Category`].
#[derive(Debug, Clone, Copy)]
pub struct CategoryDescriptor {
    pub category: Category,
    /// Field name in the serialized config set.
    pub field: &'static str,
    /// Section heading text.
    pub title: &'static str,
    /// Whether the section table carries a Version column.
    pub versioned: bool,
}

/// Renderable categories in output order. `transforms` is deliberately absent.
pub const CATEGORIES: [CategoryDescriptor; 6] = [
    CategoryDescriptor {
        category: Category::Plugins,
        field: "plugins",
        title: "Plugins",
        versioned: true,
    },
    CategoryDescriptor {
        category: Category::Presets,
        field: "presets",
        title: "Presets",
        versioned: true,
    },
    CategoryDescriptor {
        category: Category::Modules,
        field: "modules",
        title: "Modules",
        versioned: true,
    },
    CategoryDescriptor {
        category: Category::Commands,
        field: "commands",
        title: "Commands",
        versioned: false,
    },
    CategoryDescriptor {
        category: Category::Lifecycles,
        field: "lifecycles",
        title: "Lifecycles",
        versioned: false,
    },
    CategoryDescriptor {
        category: Category::Structures,
        field: "structures",
        title: "Structures",
        versioned: false,
    },
];

// ---------------------------------------------------------------------------
// DocsConfigSet
// ---------------------------------------------------------------------------

/// Everything discovered about an app, as handed to the index generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocsConfigSet {
    pub app: AppEntry,
    pub plugins: Vec<DocsEntry>,
    pub presets: Vec<DocsEntry>,
    pub modules: Vec<DocsEntry>,
    pub structures: Vec<DocsEntry>,
    pub commands: Vec<DocsEntry>,
    pub lifecycles: Vec<DocsEntry>,
    /// Accepted for callers that use it elsewhere; never rendered.
    #[serde(default)]
    pub transforms: Vec<DocsEntry>,
    /// Root of the documented application.
    #[serde(default)]
    pub root: PathBuf,
    /// Output directory; every emitted link is relative to it.
    pub docs_root: PathBuf,
}

impl DocsConfigSet {
    /// A config set with the given app and no entries in any category.
    pub fn new(app: AppEntry, root: impl Into<PathBuf>, docs_root: impl Into<PathBuf>) -> Self {
        Self {
            app,
            plugins: Vec::new(),
            presets: Vec::new(),
            modules: Vec::new(),
            structures: Vec::new(),
            commands: Vec::new(),
            lifecycles: Vec::new(),
            transforms: Vec::new(),
            root: root.into(),
            docs_root: docs_root.into(),
        }
    }

    /// Entries for a renderable category, in input order.
    pub fn entries(&self, category: Category) -> &[DocsEntry] {
        match category {
            Category::Plugins => &self.plugins,
            Category::Presets => &self.presets,
            Category::Modules => &self.modules,
            Category::Commands => &self.commands,
            Category::Lifecycles => &self.lifecycles,
            Category::Structures => &self.structures,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_in_output_order() {
        let titles: Vec<_> = CATEGORIES.iter().map(|c| c.title).collect();
        assert_eq!(
            titles,
            ["Plugins", "Presets", "Modules", "Commands", "Lifecycles", "Structures"]
        );
        let versioned: Vec<_> = CATEGORIES
            .iter()
            .filter(|c| c.versioned)
            .map(|c| c.field)
            .collect();
        assert_eq!(versioned, ["plugins", "presets", "modules"]);
    }

    #[test]
    fn entries_maps_each_category() {
        let app = AppEntry {
            name: "app".into(),
            description: None,
            link: None,
            target_root: "/a".into(),
        };
        let mut set = DocsConfigSet::new(app, "/a", "/a/.docs");
        set.structures.push(DocsEntry::new("s", "/a"));
        set.commands.push(DocsEntry::new("c", "/a"));

        assert_eq!(set.entries(Category::Structures)[0].name, "s");
        assert_eq!(set.entries(Category::Commands)[0].name, "c");
        assert!(set.entries(Category::Plugins).is_empty());
    }

    #[test]
    fn empty_link_is_treated_as_absent() {
        let mut entry = DocsEntry::new("x", "/a");
        entry.link = Some(String::new());
        assert_eq!(DocsItem::link(&entry), None);

        entry.link = Some("README.md".into());
        assert_eq!(DocsItem::link(&entry), Some("README.md"));
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "app": { "name": "test-app", "targetRoot": "/p/.docs/test-app" },
            "plugins": [{ "name": "p", "version": "1.0.0", "targetRoot": "/p/.docs/p" }],
            "presets": [], "modules": [], "structures": [],
            "commands": [], "lifecycles": [],
            "root": "/p",
            "docsRoot": "/p/.docs"
        }"#;
        let set: DocsConfigSet = serde_json::from_str(json).expect("deserialize");
        assert_eq!(set.docs_root, PathBuf::from("/p/.docs"));
        assert_eq!(set.plugins[0].version.as_deref(), Some("1.0.0"));
        assert!(set.transforms.is_empty());
    }
}
