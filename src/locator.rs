//! Domain discovery over the working root.
//!
//! A repository built from the template carries exactly one folder that holds
//! the domain's components. Nothing names it explicitly, so the locator picks
//! the first immediate subdirectory that contains a marker component folder.
//! The scan is redone on every call; there is no process-wide cache.

use crate::component::ComponentType;
use crate::fs::DomainFs;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Directories that can sit next to the domain but never are one.
pub const RESERVED_DIRS: &[&str] = &["node_modules", "dist"];

const HIDDEN_PREFIX: char = '.';

/// Whether a root-level directory name may be considered at all.
pub fn is_candidate_name(name: &str) -> bool {
    !name.starts_with(HIDDEN_PREFIX) && !RESERVED_DIRS.contains(&name)
}

/// Whether `dir` holds at least one of the marker component folders.
pub fn has_marker_component(fs: &dyn DomainFs, dir: &Path) -> bool {
    ComponentType::MARKERS
        .iter()
        .any(|kind| fs.is_dir(&dir.join(kind.dir_name())))
}

/// Return the name of the active domain directory under `root`, if any.
///
/// Candidates are visited in lexical order. An unreadable `root` is an error:
/// it means the execution environment is broken, not that no domain exists.
pub fn locate_domain(fs: &dyn DomainFs, root: &Path) -> Result<Option<String>> {
    let candidates = fs
        .list_directories(root)
        .with_context(|| format!("scanning {} for a domain directory", root.display()))?;

    let found = candidates
        .into_iter()
        .filter(|name| is_candidate_name(name))
        .find(|name| has_marker_component(fs, &root.join(name)));

    match &found {
        Some(name) => debug!(root = %root.display(), domain = %name, "located domain"),
        None => debug!(root = %root.display(), "no domain directory found"),
    }
    Ok(found)
}
