//! ROS 2 package share directory lookup

use crate::error::{LaunchError, Result};
use std::path::{Path, PathBuf};

const FALLBACK_DISTROS: &[&str] = &["jazzy", "iron", "humble"];

/// Resolves `<prefix>/share/<package>` over an ordered list of install prefixes
#[derive(Debug, Clone, Default)]
pub struct PackageLocator {
    prefixes: Vec<PathBuf>,
}

impl PackageLocator {
    pub fn new(prefixes: Vec<PathBuf>) -> Self {
        Self { prefixes }
    }

    /// Build a locator from the sourced ROS environment.
    ///
    /// Order: `extra` prefixes, `AMENT_PREFIX_PATH`, `/opt/ros/$ROS_DISTRO`,
    /// then the common distributions.
    pub fn from_env(extra: Vec<PathBuf>) -> Self {
        let mut prefixes = extra;

        if let Ok(prefix_path) = std::env::var("AMENT_PREFIX_PATH") {
            prefixes.extend(
                prefix_path
                    .split(':')
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from),
            );
        }

        if let Ok(distro) = std::env::var("ROS_DISTRO") {
            prefixes.push(Path::new("/opt/ros").join(distro));
        }

        for distro in FALLBACK_DISTROS {
            let prefix = Path::new("/opt/ros").join(distro);
            if !prefixes.contains(&prefix) {
                prefixes.push(prefix);
            }
        }

        log::debug!("Package prefixes: {:?}", prefixes);
        Self { prefixes }
    }

    pub fn prefixes(&self) -> &[PathBuf] {
        &self.prefixes
    }

    /// Find the share directory of a package, if installed
    pub fn find_share(&self, package: &str) -> Option<PathBuf> {
        self.prefixes
            .iter()
            .map(|prefix| prefix.join("share").join(package))
            .find(|share| share.is_dir())
    }

    pub fn require_share(&self, package: &str) -> Result<PathBuf> {
        self.find_share(package)
            .ok_or_else(|| LaunchError::PackageNotFound(package.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_share_first_prefix_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(first.path().join("share/pkg_a")).unwrap();
        std::fs::create_dir_all(second.path().join("share/pkg_a")).unwrap();
        std::fs::create_dir_all(second.path().join("share/pkg_b")).unwrap();

        let locator =
            PackageLocator::new(vec![first.path().to_path_buf(), second.path().to_path_buf()]);

        assert_eq!(
            locator.find_share("pkg_a"),
            Some(first.path().join("share/pkg_a"))
        );
        assert_eq!(
            locator.find_share("pkg_b"),
            Some(second.path().join("share/pkg_b"))
        );
    }

    #[test]
    fn test_missing_package() {
        let locator = PackageLocator::new(vec![]);
        assert!(locator.find_share("nonexistent").is_none());
        assert!(matches!(
            locator.require_share("nonexistent"),
            Err(LaunchError::PackageNotFound(ref name)) if name == "nonexistent"
        ));
    }

    #[test]
    fn test_from_env_keeps_extra_first() {
        let extra = PathBuf::from("/my/workspace/install");
        let locator = PackageLocator::from_env(vec![extra.clone()]);
        assert_eq!(locator.prefixes()[0], extra);
        assert!(locator
            .prefixes()
            .contains(&PathBuf::from("/opt/ros/humble")));
    }
}
