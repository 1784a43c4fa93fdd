use super::files::{atomic_write, read_file};
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

/// Load a JSON document, `None` when the file is missing or blank
pub fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<Option<T>> {
    let path = path.as_ref();
    let content = read_file(path)?;
    if content.trim().is_empty() {
        return Ok(None);
    }
    let value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;
    Ok(Some(value))
}

/// Pretty-print a value to a JSON file atomically
pub fn save_json<T: Serialize, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    atomic_write(path, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::tempdir;

    #[test]
    fn test_load_missing_is_none() {
        let temp_dir = tempdir().unwrap();
        let loaded: Option<BTreeSet<String>> = load_json(temp_dir.path().join("x.json")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("names.json");
        let names: BTreeSet<String> = ["Gym".to_string()].into_iter().collect();

        save_json(&path, &names).unwrap();
        let loaded: Option<BTreeSet<String>> = load_json(&path).unwrap();
        assert_eq!(loaded, Some(names));
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        let loaded: Result<Option<BTreeSet<String>>> = load_json(&path);
        assert!(loaded.is_err());
    }
}
