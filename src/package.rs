//! Accessor surface over a working root.
//!
//! [`DomainPackage`] only remembers where the root is. Every accessor reruns
//! domain discovery and re-reads the component folder, so results always
//! reflect the files on disk at the time of the call.

use crate::component::{ComponentType, available_types};
use crate::config::load_domain_config;
use crate::fs::{DomainFs, LocalFs};
use crate::loader::{ComponentMapping, load_components};
use crate::locator::locate_domain;
use anyhow::Result;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Domain name plus every component mapping, read in one pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DomainSnapshot {
    pub domain: Option<String>,
    pub components: BTreeMap<ComponentType, ComponentMapping>,
}

impl DomainSnapshot {
    pub fn get(&self, kind: ComponentType) -> Option<&ComponentMapping> {
        self.components.get(&kind)
    }

    /// Number of loaded documents per category, in advertised order.
    pub fn counts(&self) -> Vec<(ComponentType, usize)> {
        ComponentType::ALL
            .into_iter()
            .map(|kind| (kind, self.get(kind).map_or(0, BTreeMap::len)))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub struct DomainPackage<F = LocalFs> {
    root: PathBuf,
    fs: F,
}

impl DomainPackage<LocalFs> {
    /// Package rooted at `root` on the local disk.
    pub fn at(root: impl Into<PathBuf>) -> Self {
        Self::with_fs(root, LocalFs)
    }
}

impl<F: DomainFs> DomainPackage<F> {
    pub fn with_fs(root: impl Into<PathBuf>, fs: F) -> Self {
        Self {
            root: root.into(),
            fs,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Name of the active domain directory, rediscovered on each call.
    pub fn domain_name(&self) -> Result<Option<String>> {
        locate_domain(&self.fs, &self.root)
    }

    /// Path of the active domain directory.
    pub fn domain_dir(&self) -> Result<Option<PathBuf>> {
        Ok(self.domain_name()?.map(|name| self.root.join(name)))
    }

    /// Load one component category of the active domain.
    ///
    /// Returns an empty mapping when no domain exists or the domain lacks the
    /// category folder.
    pub fn components(&self, kind: ComponentType) -> Result<ComponentMapping> {
        match self.domain_dir()? {
            Some(dir) => load_components(&self.fs, &dir.join(kind.dir_name())),
            None => Ok(ComponentMapping::new()),
        }
    }

    pub fn schemas(&self) -> Result<ComponentMapping> {
        self.components(ComponentType::Schemas)
    }

    pub fn workflows(&self) -> Result<ComponentMapping> {
        self.components(ComponentType::Workflows)
    }

    pub fn tasks(&self) -> Result<ComponentMapping> {
        self.components(ComponentType::Tasks)
    }

    pub fn views(&self) -> Result<ComponentMapping> {
        self.components(ComponentType::Views)
    }

    pub fn functions(&self) -> Result<ComponentMapping> {
        self.components(ComponentType::Functions)
    }

    pub fn extensions(&self) -> Result<ComponentMapping> {
        self.components(ComponentType::Extensions)
    }

    pub fn available_types(&self) -> Vec<&'static str> {
        available_types()
    }

    /// Parsed `vnext.config.json`, or `None` when absent or malformed.
    pub fn domain_config(&self) -> Option<Value> {
        load_domain_config(&self.fs, &self.root)
    }

    /// Locate the domain once and load all six categories from it.
    pub fn snapshot(&self) -> Result<DomainSnapshot> {
        let domain = self.domain_name()?;
        let mut components = BTreeMap::new();
        for kind in ComponentType::ALL {
            let mapping = match &domain {
                Some(name) => {
                    load_components(&self.fs, &self.root.join(name).join(kind.dir_name()))?
                }
                None => ComponentMapping::new(),
            };
            components.insert(kind, mapping);
        }
        Ok(DomainSnapshot { domain, components })
    }
}
