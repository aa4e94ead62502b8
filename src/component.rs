//! The six component categories a domain can carry.
//!
//! Each category has two spellings: the lower-case type name used by callers
//! (`schemas`) and the capitalized directory name used on disk (`Schemas`).

use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum ComponentType {
    Schemas,
    Workflows,
    Tasks,
    Views,
    Functions,
    Extensions,
}

impl ComponentType {
    /// Every category in the fixed, advertised order.
    pub const ALL: [ComponentType; 6] = [
        ComponentType::Schemas,
        ComponentType::Workflows,
        ComponentType::Tasks,
        ComponentType::Views,
        ComponentType::Functions,
        ComponentType::Extensions,
    ];

    /// Categories whose directory marks a sibling folder as the domain.
    pub const MARKERS: [ComponentType; 3] = [
        ComponentType::Schemas,
        ComponentType::Workflows,
        ComponentType::Tasks,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ComponentType::Schemas => "schemas",
            ComponentType::Workflows => "workflows",
            ComponentType::Tasks => "tasks",
            ComponentType::Views => "views",
            ComponentType::Functions => "functions",
            ComponentType::Extensions => "extensions",
        }
    }

    /// Directory name under the domain folder.
    pub fn dir_name(self) -> &'static str {
        match self {
            ComponentType::Schemas => "Schemas",
            ComponentType::Workflows => "Workflows",
            ComponentType::Tasks => "Tasks",
            ComponentType::Views => "Views",
            ComponentType::Functions => "Functions",
            ComponentType::Extensions => "Extensions",
        }
    }

    /// Parse a type name. Accepts the directory spelling too, since CLI users
    /// tend to type whatever they see on disk.
    pub fn parse(raw: &str) -> Result<Self> {
        let lowered = raw.trim().to_ascii_lowercase();
        match ComponentType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lowered)
        {
            Some(kind) => Ok(kind),
            None => bail!(
                "unknown component type '{raw}' (expected one of {})",
                available_types().join("|")
            ),
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ComponentType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ComponentType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        ComponentType::parse(&value).map_err(serde::de::Error::custom)
    }
}

/// The advertised type names. Fixed; never derived from the filesystem.
pub fn available_types() -> Vec<&'static str> {
    ComponentType::ALL.iter().map(|kind| kind.as_str()).collect()
}
