//! Action deriving the merged play_motion2 configuration

use crate::{
    config::LaunchConfiguration,
    error::Result,
    motion::{MergedMotions, MotionFiles, MOTIONS_PACKAGE},
    substitution::LaunchContext,
};

/// Derives the motion file for the configured hardware and stores its path
/// in the launch configuration named `target`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotionConfigAction {
    pub target: String,
}

impl MotionConfigAction {
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
        }
    }

    pub fn apply(&self, context: &mut LaunchContext) -> Result<MergedMotions> {
        let config = LaunchConfiguration::from_args(context.configurations())?;
        let motions_dir = context
            .locator()
            .require_share(MOTIONS_PACKAGE)?
            .join("config")
            .join("motions");

        let files = MotionFiles::select(&config, &motions_dir);
        log::debug!("Hardware suffix: {}", files.hw_suffix);

        let merged = files.merge(context.output_dir())?;
        context.set_configuration(self.target.clone(), merged.path.display().to_string());
        Ok(merged)
    }
}
