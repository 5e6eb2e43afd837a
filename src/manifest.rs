//! Manifest fragment for the generated icon set.
//!
//! Browser extensions declare their icons in `manifest.json` as an `icons`
//! object mapping pixel sizes to file paths. This module mirrors that
//! fragment so the generated set can be merged straight into an extension
//! manifest.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// The `icons` object of a WebExtension manifest.
///
/// Keys are pixel sizes rendered as strings (`"16"`, `"48"`, `"128"`),
/// values are icon paths relative to the extension root. A `BTreeMap` keeps
/// the serialized order stable across runs.
#[derive(Serialize, Debug, Clone, Default)]
pub struct IconManifest {
    pub icons: BTreeMap<String, String>,
}

impl IconManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a generated icon under its pixel size.
    pub fn add_icon(&mut self, size: u32, path: String) {
        self.icons.insert(size.to_string(), path);
    }
}

/// Write `icons.json` next to the generated icons.
///
/// Icon paths are prefixed with the output directory's name, matching how an
/// extension manifest addresses files when the directory sits at the
/// extension root.
pub fn write_manifest(out_dir: &Path, entries: &[(u32, String)]) -> Result<()> {
    let dir_name = out_dir
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("icons");

    let mut contents = IconManifest::new();
    for (size, filename) in entries {
        contents.add_icon(*size, format!("{dir_name}/{filename}"));
    }

    let manifest_path = out_dir.join("icons.json");
    let manifest_json =
        serde_json::to_string_pretty(&contents).context("Failed to serialize icons.json")?;

    std::fs::write(&manifest_path, manifest_json).context("Failed to write icons.json")?;

    println!("Criado: {}", manifest_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_shape() {
        let mut contents = IconManifest::new();
        contents.add_icon(16, "icons/icon16.png".to_string());
        contents.add_icon(48, "icons/icon48.png".to_string());
        contents.add_icon(128, "icons/icon128.png".to_string());

        let json = serde_json::to_string_pretty(&contents).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(parsed["icons"].is_object());
        assert_eq!(parsed["icons"]["16"], "icons/icon16.png");
        assert_eq!(parsed["icons"]["48"], "icons/icon48.png");
        assert_eq!(parsed["icons"]["128"], "icons/icon128.png");
    }

    #[test]
    fn test_manifest_serialization_is_stable() {
        let mut first = IconManifest::new();
        let mut second = IconManifest::new();

        // Insertion order must not leak into the output
        first.add_icon(16, "icons/icon16.png".to_string());
        first.add_icon(128, "icons/icon128.png".to_string());
        second.add_icon(128, "icons/icon128.png".to_string());
        second.add_icon(16, "icons/icon16.png".to_string());

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
