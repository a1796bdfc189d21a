use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexMap;

use crate::git::StatusEntry;
use crate::paths;
use crate::store::{ActiveStore, StashedStore};
use crate::ui::style;

/// Porcelain codes keyed by path, in the order git printed them. Both sides
/// of a rename resolve to the entry's code.
#[derive(Debug, Default)]
pub struct WorkingTree {
    codes: IndexMap<String, String>,
}

impl WorkingTree {
    pub fn new(entries: Vec<StatusEntry>) -> Self {
        let mut codes = IndexMap::new();
        for entry in entries {
            if let Some(orig) = &entry.orig_path {
                codes.insert(orig.clone(), entry.code.clone());
            }
            codes.insert(entry.path, entry.code);
        }
        Self { codes }
    }

    /// Two-character porcelain code, or `None` for a path git has nothing to
    /// say about (clean, or unknown to the repository).
    pub fn code(&self, path: &str) -> Option<&str> {
        self.codes.get(path).map(|c| c.as_str())
    }

    pub fn is_untracked(&self, path: &str) -> bool {
        self.code(path) == Some("??")
    }

    /// Paths with changes that no active changelist claims, in git's order.
    pub fn unclaimed(&self, claimed: &HashSet<&str>) -> Vec<(&str, &str)> {
        self.codes
            .iter()
            .filter(|(path, _)| !claimed.contains(path.as_str()))
            .map(|(path, code)| (path.as_str(), code.as_str()))
            .collect()
    }
}

/// Render the grouped status report. `filter` narrows the output to the
/// named changelists (already validated to exist); `include_no_cl` re-adds
/// the unclaimed section a filter would otherwise drop.
pub fn render(
    active: &ActiveStore,
    stashed: &StashedStore,
    tree: &WorkingTree,
    root: &Path,
    cwd: &Path,
    filter: &[String],
    include_no_cl: bool,
) -> String {
    let mut out = String::new();
    let mut line = |s: String| {
        out.push_str(&s);
        out.push('\n');
    };

    for (name, owned) in active {
        if !filter.is_empty() && !filter.contains(name) {
            continue;
        }
        line(format!("{}", style::header(format!("{name}:"))));
        for path in owned {
            let code = tree.code(path).unwrap_or("  ");
            line(format!(
                "  {} {}",
                style::dim(format!("[{code}]")),
                paths::display(root, cwd, path)
            ));
        }
    }

    if filter.is_empty() || include_no_cl {
        let claimed: HashSet<&str> = active
            .values()
            .flat_map(|owned| owned.iter().map(|p| p.as_str()))
            .collect();
        let unclaimed = tree.unclaimed(&claimed);
        if !unclaimed.is_empty() {
            line(format!("{}", style::header("No Changelist:")));
            for (path, code) in unclaimed {
                line(format!(
                    "  {} {}",
                    style::dim(format!("[{code}]")),
                    paths::display(root, cwd, path)
                ));
            }
        }
    }

    if !stashed.is_empty() {
        line(format!("{}", style::header("Stashed Changelists:")));
        for (name, entry) in stashed {
            line(format!(
                "  {}  {} file(s), {}",
                style::bold(name),
                entry.file_count,
                entry.created_at
            ));
        }
    }

    out
}
