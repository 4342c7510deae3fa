//! Markdown content for the docs index.
//!
//! The document is laid out as:
//! ```text
//! <!-- generated by `gasket docs` -->
//!
//! # App
//! [app-name]
//! description
//!
//! ## Plugins            (one section per non-empty category)
//! | Name | Description | Version |
//! ...
//!
//! <!-- LINKS -->        (only when something is linked)
//! [app-name]: relative/path#anchor
//! ```

use std::path::Path;

use tracing::{debug, instrument};

use gasket_docs_markdown::{RefLink, Table, ref_label, resolve_link};
use gasket_docs_shared::{CATEGORIES, CategoryDescriptor, DocsConfigSet, DocsEntry, DocsItem};

/// First line of every generated index.
pub const GENERATED_MARKER: &str = "<!-- generated by `gasket docs` -->";

/// Marks the start of the reference-link block.
pub const LINKS_MARKER: &str = "<!-- LINKS -->";

/// Build the index markdown for a config set.
///
/// Output is fully determined by `config`: sections follow the fixed
/// category order and rows and reference links follow input order.
#[instrument(skip_all, fields(app = %config.app.name, docs_root = %config.docs_root.display()))]
pub fn generate_content(config: &DocsConfigSet) -> String {
    let mut links: Vec<RefLink> = Vec::new();

    let mut sections = vec![
        GENERATED_MARKER.to_string(),
        app_section(config, &mut links),
    ];

    for descriptor in &CATEGORIES {
        let entries = config.entries(descriptor.category);
        if entries.is_empty() {
            continue;
        }
        debug!(section = descriptor.title, rows = entries.len(), "emitting section");
        sections.push(category_section(
            descriptor,
            entries,
            &config.docs_root,
            &mut links,
        ));
    }

    debug!(links = links.len(), "collected reference links");

    if !links.is_empty() {
        sections.push(links_section(&links));
    }

    let mut content = sections.join("\n\n");
    content.push('\n');
    content
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

fn app_section(config: &DocsConfigSet, links: &mut Vec<RefLink>) -> String {
    let app = &config.app;
    let mut section = format!("# App\n\n{}", display_name(app, &config.docs_root, links));

    if let Some(description) = app.description.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
        section.push_str("\n\n");
        section.push_str(description);
    }

    section
}

fn category_section(
    descriptor: &CategoryDescriptor,
    entries: &[DocsEntry],
    docs_root: &Path,
    links: &mut Vec<RefLink>,
) -> String {
    let mut headers = vec!["Name", "Description"];
    if descriptor.versioned {
        headers.push("Version");
    }
    let mut table = Table::new(headers);

    for entry in entries {
        let name = display_name(entry, docs_root, links);
        let description = entry.description.as_deref().unwrap_or_default();
        if descriptor.versioned {
            let version = entry.version.as_deref().unwrap_or_default();
            table.push_row([name.as_str(), description, version]);
        } else {
            table.push_row([name.as_str(), description]);
        }
    }

    format!("## {}\n\n{}", descriptor.title, table.render().trim_end())
}

fn links_section(links: &[RefLink]) -> String {
    let mut section = String::from(LINKS_MARKER);
    for link in links {
        section.push('\n');
        section.push_str(&link.to_string());
    }
    section
}

/// `[name]` for linked items (recording the reference), bare `name` otherwise.
fn display_name(item: &impl DocsItem, docs_root: &Path, links: &mut Vec<RefLink>) -> String {
    match item.link() {
        Some(link) => {
            let target = resolve_link(item.target_root(), link, docs_root);
            links.push(RefLink::new(item.name(), target));
            ref_label(item.name())
        }
        None => item.name().to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
