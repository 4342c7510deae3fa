//! Reference-style link definitions and lexical path relativization.
//!
//! Nothing here touches the filesystem. Paths are compared component by
//! component after resolving `.` and `..`, so the output depends only on the
//! inputs.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use tracing::trace;
use url::Url;

/// A single `[label]: target` reference definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefLink {
    pub label: String,
    pub target: String,
}

impl RefLink {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

impl fmt::Display for RefLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]: {}", escape_label(&self.label), self.target)
    }
}

/// Make a name usable as a single-line reference label.
///
/// Brackets and backslashes are backslash-escaped and any whitespace run
/// (line breaks included) becomes one space.
pub fn escape_label(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace('\\', "\\\\")
        .replace('[', "\\[")
        .replace(']', "\\]")
}

/// Whether `link` is a web or mail URL (`https://host/...`, `mailto:...`).
///
/// Anything else, including fragments like `api:v2.md` that happen to parse
/// with a scheme, is a path relative to the entry's target root.
pub fn is_external(link: &str) -> bool {
    Url::parse(link).is_ok_and(|url| match url.scheme() {
        "http" | "https" => url.has_host(),
        "mailto" => true,
        _ => false,
    })
}

/// Resolve `link` (relative to `target_root`) into a path relative to
/// `docs_root`, keeping any `#anchor` suffix as-is.
///
/// A leading root on the link's path is stripped so the link always lands
/// under `target_root`. External URLs are returned unchanged.
pub fn resolve_link(target_root: &Path, link: &str, docs_root: &Path) -> String {
    if is_external(link) {
        trace!(link, "external link kept verbatim");
        return link.to_string();
    }

    let (path_part, anchor) = match link.find('#') {
        Some(idx) => link.split_at(idx),
        None => (link, ""),
    };

    let fragment: PathBuf = Path::new(path_part)
        .components()
        .filter(|c| !matches!(c, Component::Prefix(_) | Component::RootDir))
        .collect();

    let target = target_root.join(fragment);
    let relative = relative_path(docs_root, &target);

    match (relative.as_str(), anchor) {
        (".", a) if !a.is_empty() => a.to_string(),
        (rel, a) => format!("{rel}{a}"),
    }
}

/// Lexically normalize a path: drop `.` and fold `..` into its parent.
///
/// `..` at the root of an absolute path is discarded; leading `..` on a
/// relative path is kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    parts.iter().collect()
}

/// Path from `from` to `to`, joined with `/`.
///
/// Returns `.` when both normalize to the same path. When only one side is
/// absolute there is no common base, so the normalized `to` is returned.
pub fn relative_path(from: &Path, to: &Path) -> String {
    let from = normalize_path(from);
    let to = normalize_path(to);

    if from.has_root() != to.has_root() {
        return join_slash(to.components());
    }

    let from_parts: Vec<Component<'_>> = from.components().collect();
    let to_parts: Vec<Component<'_>> = to.components().collect();

    let common = from_parts
        .iter()
        .zip(&to_parts)
        .take_while(|(a, b)| a == b)
        .count();

    let ups = std::iter::repeat_n("..".to_string(), from_parts.len() - common);
    let downs = to_parts[common..]
        .iter()
        .map(|c| c.as_os_str().to_string_lossy().into_owned());

    let segments: Vec<String> = ups.chain(downs).collect();
    if segments.is_empty() {
        ".".to_string()
    } else {
        segments.join("/")
    }
}

fn join_slash<'a>(components: impl Iterator<Item = Component<'a>>) -> String {
    let mut out = String::new();
    for component in components {
        match component {
            Component::RootDir => out.push('/'),
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    if out.is_empty() { ".".to_string() } else { out }
}
