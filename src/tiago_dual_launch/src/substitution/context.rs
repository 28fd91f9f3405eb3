//! Launch context for managing configurations

use crate::package::PackageLocator;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Launch context holding configurations and composition state
#[derive(Debug, Clone)]
pub struct LaunchContext {
    configurations: HashMap<String, String>,
    current_description: Option<String>,
    locator: PackageLocator,
    output_dir: PathBuf,
}

impl LaunchContext {
    pub fn new(locator: PackageLocator, output_dir: PathBuf) -> Self {
        Self {
            configurations: HashMap::new(),
            current_description: None,
            locator,
            output_dir,
        }
    }

    pub fn set_current_description(&mut self, description: String) {
        self.current_description = Some(description);
    }

    pub fn current_description(&self) -> Option<&str> {
        self.current_description.as_deref()
    }

    pub fn set_configuration(&mut self, name: String, value: String) {
        self.configurations.insert(name, value);
    }

    pub fn get_configuration(&self, name: &str) -> Option<String> {
        self.configurations.get(name).cloned()
    }

    pub fn configurations(&self) -> &HashMap<String, String> {
        &self.configurations
    }

    pub fn locator(&self) -> &PackageLocator {
        &self.locator
    }

    /// Directory where generated files (merged parameter files) are written
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl Default for LaunchContext {
    fn default() -> Self {
        Self::new(PackageLocator::default(), std::env::temp_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context() {
        let context = LaunchContext::default();
        assert!(context.get_configuration("any").is_none());
        assert!(context.current_description().is_none());
    }

    #[test]
    fn test_set_and_get() {
        let mut context = LaunchContext::default();
        context.set_configuration("key".to_string(), "value".to_string());
        assert_eq!(context.get_configuration("key"), Some("value".to_string()));
    }

    #[test]
    fn test_override_configuration() {
        let mut context = LaunchContext::default();
        context.set_configuration("key".to_string(), "value1".to_string());
        context.set_configuration("key".to_string(), "value2".to_string());
        assert_eq!(context.get_configuration("key"), Some("value2".to_string()));
    }

    #[test]
    fn test_clone_is_scoped() {
        let mut parent = LaunchContext::default();
        parent.set_configuration("shared".to_string(), "parent".to_string());

        let mut child = parent.clone();
        child.set_configuration("shared".to_string(), "child".to_string());
        child.set_configuration("local".to_string(), "x".to_string());

        assert_eq!(parent.get_configuration("shared"), Some("parent".to_string()));
        assert!(parent.get_configuration("local").is_none());
    }
}
