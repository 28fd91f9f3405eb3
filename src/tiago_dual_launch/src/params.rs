//! Parameter file loading and merging

use crate::error::{LaunchError, Result};
use serde_yaml::Value;
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

/// Load a YAML parameter file
pub fn load_yaml(path: &Path) -> Result<Value> {
    if !path.is_file() {
        return Err(LaunchError::FileNotFound(path.display().to_string()));
    }

    let content = fs::read_to_string(path)?;
    let value: Value = serde_yaml::from_str(&content).map_err(|source| LaunchError::Yaml {
        path: path.display().to_string(),
        source,
    })?;

    // An empty document contributes nothing to a merge
    Ok(match value {
        Value::Null => Value::Mapping(Default::default()),
        other => other,
    })
}

/// Recursively merge `overlay` into `base`.
///
/// Mappings are merged key by key. Any other overlay value replaces the base
/// value, including sequences.
pub fn merge_yaml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(base_value) => merge_yaml(base_value, overlay_value),
                    None => {
                        base_map.insert(key, overlay_value);
                    }
                }
            }
        }
        (base, overlay) => *base = overlay,
    }
}

/// Load and merge parameter files left to right; later files win
pub fn merge_param_files<P: AsRef<Path>>(paths: &[P]) -> Result<Value> {
    let mut merged = Value::Mapping(Default::default());
    for path in paths {
        let path = path.as_ref();
        log::debug!("Merging parameter file: {}", path.display());
        merge_yaml(&mut merged, load_yaml(path)?);
    }
    Ok(merged)
}

/// Write a merged document to a uniquely named file in `dir`.
///
/// The file outlives the process; it is consumed by the launched subsystem.
pub fn write_merged(value: &Value, dir: &Path, prefix: &str) -> Result<(PathBuf, String)> {
    let content = serde_yaml::to_string(value).map_err(|source| LaunchError::Yaml {
        path: dir.display().to_string(),
        source,
    })?;

    fs::create_dir_all(dir)?;
    let mut file = tempfile::Builder::new()
        .prefix(prefix)
        .suffix(".yaml")
        .tempfile_in(dir)?;
    file.write_all(content.as_bytes())?;
    file.flush()?;
    let (_, path) = file.keep().map_err(|e| LaunchError::Io(e.error))?;

    log::debug!("Wrote merged parameter file: {}", path.display());
    Ok((path, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    fn yaml_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_overlay_wins_and_base_kept() {
        let mut base = yaml(
            r#"
play_motion2:
  ros__parameters:
    motions:
      home:
        joints: [a, b]
        positions: [0.0, 0.0]
      wave:
        joints: [a]
"#,
        );
        let overlay = yaml(
            r#"
play_motion2:
  ros__parameters:
    motions:
      home:
        positions: [1.0, 2.0]
      open:
        joints: [gripper]
"#,
        );

        merge_yaml(&mut base, overlay);

        let motions = &base["play_motion2"]["ros__parameters"]["motions"];
        assert_eq!(motions["home"]["positions"], yaml("[1.0, 2.0]"));
        assert_eq!(motions["home"]["joints"], yaml("[a, b]"));
        assert_eq!(motions["wave"]["joints"], yaml("[a]"));
        assert_eq!(motions["open"]["joints"], yaml("[gripper]"));
    }

    #[test]
    fn test_sequence_is_replaced() {
        let mut base = yaml("list: [1, 2, 3]");
        merge_yaml(&mut base, yaml("list: [4]"));
        assert_eq!(base["list"], yaml("[4]"));
    }

    #[test]
    fn test_scalar_replaces_mapping() {
        let mut base = yaml("key: {nested: 1}");
        merge_yaml(&mut base, yaml("key: flat"));
        assert_eq!(base["key"], yaml("flat"));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let base = yaml("a: {x: 1, y: 2}\nb: 3");
        let overlay = yaml("a: {y: 20, z: 30}\nc: 4");

        let mut once = base.clone();
        merge_yaml(&mut once, overlay.clone());
        let mut twice = once.clone();
        merge_yaml(&mut twice, overlay);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_merge_param_files() {
        let base = yaml_file("node:\n  ros__parameters:\n    a: 1\n    b: 2\n");
        let overlay = yaml_file("node:\n  ros__parameters:\n    b: 3\n");

        let merged = merge_param_files(&[base.path(), overlay.path()]).unwrap();
        assert_eq!(merged["node"]["ros__parameters"]["a"], yaml("1"));
        assert_eq!(merged["node"]["ros__parameters"]["b"], yaml("3"));
    }

    #[test]
    fn test_empty_file_merges_as_nothing() {
        let base = yaml_file("a: 1\n");
        let empty = yaml_file("");

        let merged = merge_param_files(&[base.path(), empty.path()]).unwrap();
        assert_eq!(merged, yaml("a: 1"));
    }

    #[test]
    fn test_missing_file() {
        let result = merge_param_files(&[Path::new("/nonexistent/motions.yaml")]);
        assert!(matches!(result, Err(LaunchError::FileNotFound(ref p)) if p.contains("motions.yaml")));
    }

    #[test]
    fn test_invalid_yaml() {
        let broken = yaml_file("a: [1, 2\n");
        let result = load_yaml(broken.path());
        assert!(matches!(result, Err(LaunchError::Yaml { .. })));
    }

    #[test]
    fn test_write_merged() {
        let dir = tempfile::tempdir().unwrap();
        let value = yaml("a: {b: 1}");

        let (path, content) = write_merged(&value, dir.path(), "test_").unwrap();
        assert!(path.starts_with(dir.path()));
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), content);
        assert_eq!(load_yaml(&path).unwrap(), value);
    }
}
