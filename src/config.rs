//! Domain-wide configuration stored next to the domain folder.

use crate::fs::DomainFs;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Well-known file name of the domain configuration at the working root.
pub const DOMAIN_CONFIG_FILE: &str = "vnext.config.json";

pub fn domain_config_path(root: &Path) -> PathBuf {
    root.join(DOMAIN_CONFIG_FILE)
}

/// Read and parse `vnext.config.json` under `root`.
///
/// Configuration is optional, so every failure collapses to `None`. A file
/// that exists but does not parse is still worth a warning.
pub fn load_domain_config(fs: &dyn DomainFs, root: &Path) -> Option<Value> {
    let path = domain_config_path(root);
    let data = fs.read_to_string(&path).ok()?;
    match serde_json::from_str(&data) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(file = %path.display(), error = %err, "ignoring malformed domain config");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::memory::MemoryFs;
    use serde_json::json;

    #[test]
    fn absent_config_is_none() {
        let fs = MemoryFs::new().dir("/repo");
        assert_eq!(load_domain_config(&fs, Path::new("/repo")), None);
    }

    #[test]
    fn valid_config_is_parsed() {
        let fs = MemoryFs::new().file(
            "/repo/vnext.config.json",
            r#"{"domain":"core","version":"1.0.0"}"#,
        );
        assert_eq!(
            load_domain_config(&fs, Path::new("/repo")),
            Some(json!({"domain": "core", "version": "1.0.0"}))
        );
    }

    #[test]
    fn malformed_config_is_none() {
        let fs = MemoryFs::new().file("/repo/vnext.config.json", "{ nope");
        assert_eq!(load_domain_config(&fs, Path::new("/repo")), None);
    }
}
