//! Substitution types

use crate::error::{LaunchError, Result};
use crate::substitution::context::LaunchContext;
use std::path::PathBuf;

/// Substitution enum representing deferred launch values
#[derive(Debug, Clone, PartialEq)]
pub enum Substitution {
    /// Plain text (no substitution)
    Text(String),
    /// Launch configuration variable
    LaunchConfiguration(String),
    /// Share directory of a ROS 2 package
    FindPackageShare(String),
    /// Path built from resolved parts
    PathJoin(Vec<Substitution>),
}

impl Substitution {
    pub fn text(s: &str) -> Self {
        Substitution::Text(s.to_string())
    }

    pub fn var(name: &str) -> Self {
        Substitution::LaunchConfiguration(name.to_string())
    }

    /// Resolve substitution to string value
    pub fn resolve(&self, context: &LaunchContext) -> Result<String> {
        match self {
            Substitution::Text(s) => Ok(s.clone()),
            Substitution::LaunchConfiguration(name) => context
                .get_configuration(name)
                .ok_or_else(|| LaunchError::UndefinedConfiguration(name.clone())),
            Substitution::FindPackageShare(package) => context
                .locator()
                .require_share(package)
                .map(|path| path.display().to_string()),
            Substitution::PathJoin(parts) => {
                let mut path = PathBuf::new();
                for part in parts {
                    path.push(part.resolve(context)?);
                }
                Ok(path.display().to_string())
            }
        }
    }
}

/// Resolve list of substitutions to single string
pub fn resolve_substitutions(subs: &[Substitution], context: &LaunchContext) -> Result<String> {
    let mut result = String::new();
    for sub in subs {
        result.push_str(&sub.resolve(context)?);
    }
    Ok(result)
}
