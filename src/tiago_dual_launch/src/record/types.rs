//! record.json data structures

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root structure for record.json
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub description: String,
    pub arguments: Vec<(String, String)>,
    pub include: Vec<IncludeRecord>,
    pub node: Vec<NodeRecord>,
    pub derived: Vec<(String, String)>,
    pub file_data: HashMap<String, String>,
}

impl LaunchRecord {
    pub fn new(description: String) -> Self {
        Self {
            description,
            arguments: Vec::new(),
            include: Vec::new(),
            node: Vec::new(),
            derived: Vec::new(),
            file_data: HashMap::new(),
        }
    }

    /// Append everything recorded by a scoped include
    pub fn extend(&mut self, other: LaunchRecord) {
        self.include.extend(other.include);
        self.node.extend(other.node);
        self.derived.extend(other.derived);
        self.file_data.extend(other.file_data);
    }

    pub fn derived_value(&self, name: &str) -> Option<&str> {
        self.derived
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// External sub-launch with its forwarded arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncludeRecord {
    pub package: String,
    pub file: String,
    /// Resolved launch file path, if the package is installed
    pub path: Option<String>,
    /// Description that issued the include
    pub scope: String,
    pub args: Vec<(String, String)>,
}

impl IncludeRecord {
    pub fn arg(&self, name: &str) -> Option<&str> {
        self.args
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Node record structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeRecord {
    pub package: String,
    pub executable: String,
    pub name: Option<String>,
    pub output: Option<String>,
    pub args: Vec<String>,
    pub params: Vec<(String, String)>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record() {
        let record = LaunchRecord::new("pkg/launch/file.launch.py".to_string());
        assert!(record.include.is_empty());
        assert!(record.node.is_empty());
        assert!(record.derived.is_empty());
        assert!(record.file_data.is_empty());
    }

    #[test]
    fn test_serialize_empty() {
        let record = LaunchRecord::new("pkg/launch/file.launch.py".to_string());
        let json = record.to_json().unwrap();
        assert!(json.contains("\"description\""));
        assert!(json.contains("\"arguments\""));
        assert!(json.contains("\"include\""));
        assert!(json.contains("\"node\""));
        assert!(json.contains("\"derived\""));
        assert!(json.contains("\"file_data\""));
    }

    #[test]
    fn test_tuple_serialization() {
        let include = IncludeRecord {
            package: "twist_mux".to_string(),
            file: "twist_mux.launch.py".to_string(),
            path: None,
            scope: "pkg/launch/file.launch.py".to_string(),
            args: vec![("use_sim_time".to_string(), "False".to_string())],
        };

        let json = serde_json::to_string(&include).unwrap();
        // Tuples should serialize as arrays
        assert!(json.contains("[\"use_sim_time\",\"False\"]"));
        assert!(json.contains("\"path\":null"));
        assert_eq!(include.arg("use_sim_time"), Some("False"));
        assert_eq!(include.arg("namespace"), None);
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut parent = LaunchRecord::new("parent".to_string());
        parent.derived.push(("a".to_string(), "1".to_string()));

        let mut child = LaunchRecord::new("child".to_string());
        child.derived.push(("b".to_string(), "2".to_string()));
        child.file_data.insert("/tmp/x.yaml".to_string(), "x: 1".to_string());

        parent.extend(child);
        assert_eq!(parent.derived_value("a"), Some("1"));
        assert_eq!(parent.derived_value("b"), Some("2"));
        assert_eq!(parent.derived[1].0, "b");
        assert_eq!(parent.file_data.len(), 1);
        assert_eq!(parent.description, "parent");
    }
}
