use std::path::{Component, Path, PathBuf};

use itertools::Itertools;

use crate::Result;
use crate::error::Error;

/// Turn a user-supplied path into the repo-root-relative POSIX string the
/// stores use. `input` may be absolute or relative to `cwd` and may contain
/// `.`/`..` segments; resolution is lexical, symlinks are not followed. A
/// path that does not exist on disk is fine here; escaping the repository is
/// not.
pub fn normalize(root: &Path, cwd: &Path, input: &str) -> Result<String> {
    let invalid = || Error::InvalidPath(input.to_string());
    if input.is_empty() {
        return Err(invalid().into());
    }
    let raw = Path::new(input);
    let absolute = if raw.is_absolute() {
        raw.to_path_buf()
    } else {
        cwd.join(raw)
    };
    let canonical = lexical_normalize(&absolute).ok_or_else(invalid)?;
    let rel = canonical.strip_prefix(root).map_err(|_| invalid())?;
    if rel.as_os_str().is_empty() {
        return Err(invalid().into());
    }
    Ok(to_posix(rel))
}

/// Render a stored repo-relative path for a user sitting in `cwd`: the
/// shortest relative path, with `../` prefixes where needed.
pub fn display(root: &Path, cwd: &Path, rel: &str) -> String {
    let target: Vec<String> = Path::new(rel)
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    let from: Vec<String> = cwd
        .strip_prefix(root)
        .map(|p| {
            p.components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();
    let common = target
        .iter()
        .zip(from.iter())
        .take_while(|(a, b)| a == b)
        .count();
    let ups = std::iter::repeat_n("..".to_string(), from.len() - common);
    ups.chain(target[common..].iter().cloned()).join("/")
}

/// Resolve `.` and `..` components without touching the filesystem. Returns
/// `None` when `..` would climb past the filesystem root.
fn lexical_normalize(path: &Path) -> Option<PathBuf> {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(out.components().next_back(), Some(Component::Normal(_))) {
                    return None;
                }
                out.pop();
            }
            c => out.push(c),
        }
    }
    Some(out)
}

fn to_posix(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .join("/")
}
