//! Domain discovery and component loading for vNext domain packages.
//!
//! A package repository holds one domain folder (for example `core/`) whose
//! `Schemas/`, `Workflows/`, `Tasks/`, `Views/`, `Functions/` and
//! `Extensions/` subfolders contain one JSON document per component. This
//! crate finds that folder and exposes each category as a name-keyed mapping.
//!
//! Nothing is cached. Each accessor rescans the working root and re-reads the
//! component files, so callers always observe the current state on disk and
//! concurrent callers never share mutable state.
//!
//! The free functions below are bound to the process working directory. Use
//! [`DomainPackage`] to work against an explicit root.

use anyhow::{Context, Result};
use serde_json::Value;
use std::env;
use std::path::{Path, PathBuf};

pub mod component;
pub mod config;
pub mod fs;
pub mod loader;
pub mod locator;
pub mod logging;
pub mod package;

pub use component::{ComponentType, available_types};
pub use config::{DOMAIN_CONFIG_FILE, load_domain_config};
pub use fs::{DomainFs, LocalFs};
pub use loader::{ComponentMapping, load_components};
pub use locator::{RESERVED_DIRS, locate_domain};
pub use package::{DomainPackage, DomainSnapshot};

/// Environment variable that overrides the working root for the CLI.
pub const ROOT_ENV: &str = "VNEXT_DOMAIN_ROOT";

/// The process working directory, which is the default working root.
///
/// Failure here means the execution environment is unusable, so it is
/// returned as an error rather than treated as "no domain".
pub fn working_root() -> Result<PathBuf> {
    env::current_dir().context("reading the current working directory")
}

/// Pick the working root: explicit path, then `VNEXT_DOMAIN_ROOT`, then cwd.
///
/// An empty environment value is ignored.
pub fn resolve_root(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(hint) = env::var_os(ROOT_ENV) {
        if !hint.is_empty() {
            return Ok(PathBuf::from(hint));
        }
    }
    working_root()
}

fn cwd_package() -> Result<DomainPackage> {
    Ok(DomainPackage::at(working_root()?))
}

/// Parsed `vnext.config.json` from the working directory, if present and valid.
pub fn get_domain_config() -> Option<Value> {
    let root = working_root().ok()?;
    DomainPackage::at(root).domain_config()
}

pub fn get_schemas() -> Result<ComponentMapping> {
    cwd_package()?.schemas()
}

pub fn get_workflows() -> Result<ComponentMapping> {
    cwd_package()?.workflows()
}

pub fn get_tasks() -> Result<ComponentMapping> {
    cwd_package()?.tasks()
}

pub fn get_views() -> Result<ComponentMapping> {
    cwd_package()?.views()
}

pub fn get_functions() -> Result<ComponentMapping> {
    cwd_package()?.functions()
}

pub fn get_extensions() -> Result<ComponentMapping> {
    cwd_package()?.extensions()
}

/// The six component type names, in fixed order.
pub fn get_available_types() -> Vec<&'static str> {
    available_types()
}

/// Name of the domain folder under the working directory, if one exists.
pub fn get_domain_name() -> Result<Option<String>> {
    cwd_package()?.domain_name()
}
