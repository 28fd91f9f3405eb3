//! Include action implementation

use crate::{
    error::Result,
    substitution::{resolve_substitutions, LaunchContext, Substitution},
};

/// Scoped include of another launch description
#[derive(Debug, Clone, PartialEq)]
pub struct IncludeAction {
    pub package: String,
    /// Launch file name under the package's `launch/` directory
    pub file: String,
    /// Args as Vec to preserve order
    pub args: Vec<(String, Vec<Substitution>)>,
}

impl IncludeAction {
    pub fn new(package: &str, file: &str) -> Self {
        Self {
            package: package.to_string(),
            file: file.to_string(),
            args: Vec::new(),
        }
    }

    /// Forward launch configurations under their own names
    pub fn forward(mut self, names: &[&str]) -> Self {
        self.args.extend(
            names
                .iter()
                .map(|name| (name.to_string(), vec![Substitution::var(name)])),
        );
        self
    }

    pub fn arg(mut self, name: &str, value: Vec<Substitution>) -> Self {
        self.args.push((name.to_string(), value));
        self
    }

    /// `<package>/launch/<file>`
    pub fn target(&self) -> String {
        format!("{}/launch/{}", self.package, self.file)
    }

    pub fn resolve_args(&self, context: &LaunchContext) -> Result<Vec<(String, String)>> {
        self.args
            .iter()
            .map(|(name, value)| Ok((name.clone(), resolve_substitutions(value, context)?)))
            .collect()
    }
}
