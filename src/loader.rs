//! Flat JSON-per-item component loading.
//!
//! A component folder holds one JSON document per item, named after the item.
//! Loading is partial-failure tolerant: a file that cannot be read or parsed
//! is reported and skipped, and the rest of the folder still loads.

use crate::fs::DomainFs;
use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Component name (file stem) to parsed document.
pub type ComponentMapping = BTreeMap<String, Value>;

const JSON_SUFFIX: &str = ".json";

/// Load every `*.json` file directly inside `dir`.
///
/// A missing `dir` yields an empty mapping. Subdirectories are ignored, even
/// ones whose names end in `.json`. Only a failure to enumerate an existing
/// `dir` is returned as an error.
pub fn load_components(fs: &dyn DomainFs, dir: &Path) -> Result<ComponentMapping> {
    let mut components = ComponentMapping::new();
    if !fs.is_dir(dir) {
        return Ok(components);
    }

    let files = fs
        .list_files(dir)
        .with_context(|| format!("listing components in {}", dir.display()))?;

    for file_name in files {
        let Some(stem) = file_name.strip_suffix(JSON_SUFFIX) else {
            continue;
        };
        let path = dir.join(&file_name);
        match read_document(fs, &path) {
            Ok(value) => {
                components.insert(stem.to_string(), value);
            }
            Err(err) => {
                let error = format!("{err:#}");
                warn!(file = %path.display(), %error, "skipping component file");
            }
        }
    }

    debug!(dir = %dir.display(), count = components.len(), "loaded components");
    Ok(components)
}

fn read_document(fs: &dyn DomainFs, path: &Path) -> Result<Value> {
    let data = fs.read_to_string(path)?;
    serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::memory::MemoryFs;
    use serde_json::json;

    #[test]
    fn malformed_file_is_skipped_and_others_load() {
        let fs = MemoryFs::new()
            .file("/d/Schemas/a.json", r#"{"x":1}"#)
            .file("/d/Schemas/b.json", "{");
        let loaded = load_components(&fs, Path::new("/d/Schemas")).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded.get("a"), Some(&json!({"x": 1})));
        assert!(!loaded.contains_key("b"));
    }

    #[test]
    fn missing_directory_is_empty() {
        let fs = MemoryFs::new();
        let loaded = load_components(&fs, Path::new("/d/Views")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn only_json_suffix_is_loaded() {
        let fs = MemoryFs::new()
            .file("/d/Tasks/notes.md", "# hi")
            .file("/d/Tasks/task.json.bak", "{}")
            .file("/d/Tasks/send-mail.json", r#"{"key":"send-mail"}"#);
        let loaded = load_components(&fs, Path::new("/d/Tasks")).unwrap();
        assert_eq!(loaded.keys().collect::<Vec<_>>(), vec!["send-mail"]);
    }

    #[test]
    fn nested_directories_are_ignored() {
        let fs = MemoryFs::new()
            .dir("/d/Views/archive.json")
            .file("/d/Views/archive.json/old.json", "{}")
            .file("/d/Views/main.json", "[]");
        let loaded = load_components(&fs, Path::new("/d/Views")).unwrap();
        assert_eq!(loaded.keys().collect::<Vec<_>>(), vec!["main"]);
        assert_eq!(loaded["main"], json!([]));
    }

    #[test]
    fn documents_of_any_json_shape_are_kept() {
        let fs = MemoryFs::new()
            .file("/d/Functions/flag.json", "true")
            .file("/d/Functions/list.json", "[1,2]")
            .file("/d/Functions/empty.json", "");
        let loaded = load_components(&fs, Path::new("/d/Functions")).unwrap();
        assert_eq!(loaded.get("flag"), Some(&json!(true)));
        assert_eq!(loaded.get("list"), Some(&json!([1, 2])));
        assert!(!loaded.contains_key("empty"));
    }
}
